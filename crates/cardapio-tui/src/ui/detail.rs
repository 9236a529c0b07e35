//! Menu-item detail view.
//!
//! Fetches the record named by the route on mount and shows its fields
//! read-only. Fetch failures are not surfaced here: the fields stay blank.

use cardapio_common::types::{ItemCardapio, ItemCardapioId};
use cardapio_store::dispatch::Dispatch;
use cardapio_store::state::ItemCardapioState;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::element::{
    Button, DETAIL_BACK_BUTTON, DETAIL_EDIT_BUTTON, FIELD_CARDAPIO, FIELD_CATEGORIA,
    FIELD_DESCRICAO, FIELD_ID, FIELD_NOME, FIELD_VALOR, FieldRow,
};
use crate::route::{Navigator, Route};
use crate::screen::{MountGuard, Screen};

/// Heading text of the detail view.
pub const HEADING: &str = "ItemCardapio";

/// Returns to the list.
pub const BACK: Button = Button {
    id: DETAIL_BACK_BUTTON,
    key: 'b',
    label: "Back",
};

/// Opens the edit screen for the shown record.
pub const EDIT: Button = Button {
    id: DETAIL_EDIT_BUTTON,
    key: 'e',
    label: "Edit",
};

const LABEL_WIDTH: usize = 11;

/// Read-only view of one menu item.
#[derive(Debug)]
pub struct DetailView {
    id: ItemCardapioId,
    guard: MountGuard,
}

impl DetailView {
    /// Creates the view for the route parameter `id`.
    #[must_use]
    pub fn new(id: ItemCardapioId) -> Self {
        Self {
            id,
            guard: MountGuard::default(),
        }
    }

    /// Route parameter this view was opened with.
    #[must_use]
    pub const fn route_id(&self) -> &ItemCardapioId {
        &self.id
    }

    /// The rows shown for `entity`, in display order.
    #[must_use]
    pub fn fields(entity: &ItemCardapio) -> Vec<FieldRow> {
        let text = |value: Option<&String>| value.cloned().unwrap_or_default();
        vec![
            FieldRow {
                id: FIELD_ID,
                label: "ID",
                value: entity.id_text(),
            },
            FieldRow {
                id: FIELD_CATEGORIA,
                label: "Categoria",
                value: text(entity.categoria.as_ref()),
            },
            FieldRow {
                id: FIELD_NOME,
                label: "Nome",
                value: text(entity.nome.as_ref()),
            },
            FieldRow {
                id: FIELD_DESCRICAO,
                label: "Descricao",
                value: text(entity.descricao.as_ref()),
            },
            FieldRow {
                id: FIELD_VALOR,
                label: "Valor",
                value: entity.valor_text(),
            },
            FieldRow {
                id: FIELD_CARDAPIO,
                label: "Cardapio",
                value: entity.cardapio_id_text(),
            },
        ]
    }

    /// The rows this view shows: the route's record once it has loaded,
    /// blank otherwise.
    #[must_use]
    pub fn rows(&self, state: &ItemCardapioState) -> Vec<FieldRow> {
        state
            .loaded(&self.id)
            .map_or_else(|| Self::fields(&ItemCardapio::default()), Self::fields)
    }

    /// Navigates back to the list.
    pub fn back(&self, nav: &mut dyn Navigator) {
        nav.replace(Route::List);
    }

    /// Navigates to the edit screen of the route's record.
    pub fn edit(&self, nav: &mut dyn Navigator) {
        nav.replace(Route::Edit(self.id.clone()));
    }
}

impl Screen for DetailView {
    fn on_mount(&mut self, dispatch: &mut dyn Dispatch) {
        self.guard.mount();
        dispatch.get_entity(&self.id);
    }

    fn on_unmount(&mut self) {
        self.guard.unmount();
    }

    fn handle_key(
        &mut self,
        key: KeyEvent,
        _state: &ItemCardapioState,
        _dispatch: &mut dyn Dispatch,
        nav: &mut dyn Navigator,
    ) -> bool {
        match key.code {
            KeyCode::Esc => self.back(nav),
            KeyCode::Char(c) if c == BACK.key => self.back(nav),
            KeyCode::Char(c) if c == EDIT.key => self.edit(nav),
            _ => return false,
        }
        true
    }

    fn render(&self, frame: &mut Frame<'_>, area: Rect, state: &ItemCardapioState) {
        let mut lines: Vec<Line<'_>> = self
            .rows(state)
            .into_iter()
            .map(|row| {
                Line::from(vec![
                    Span::styled(format!("{:<LABEL_WIDTH$}", row.label), Style::new().bold()),
                    Span::raw(row.value),
                ])
            })
            .collect();
        lines.push(Line::default());
        lines.push(Line::from(super::footer(&[BACK, EDIT])).dim());

        let block = Block::bordered().title(HEADING.bold());
        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
            area,
        );
    }
}
