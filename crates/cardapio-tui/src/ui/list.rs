//! Menu-item list screen, the landing point of "back" and "cancel".

use cardapio_common::types::ItemCardapioId;
use cardapio_store::dispatch::Dispatch;
use cardapio_store::state::ItemCardapioState;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Style, Stylize};
use ratatui::text::Line;
use ratatui::widgets::{Block, Cell, Paragraph, Row, Table, TableState};

use crate::route::{Navigator, Route};
use crate::screen::{MountGuard, Screen};

/// Heading text of the list.
pub const HEADING: &str = "Item Cardapios";

const HINTS: &str = "[enter] View  [d] Delete  [r] Refresh  [q] Quit";

/// Table of every menu item.
#[derive(Debug, Default)]
pub struct ListScreen {
    selected: usize,
    guard: MountGuard,
}

impl ListScreen {
    /// Creates the list screen.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the highlighted row, clamped to the loaded list.
    #[must_use]
    pub const fn selected(&self, state: &ItemCardapioState) -> usize {
        let len = state.entities.len();
        if self.selected >= len {
            len.saturating_sub(1)
        } else {
            self.selected
        }
    }

    fn selected_id(&self, state: &ItemCardapioState) -> Option<ItemCardapioId> {
        state
            .entities
            .get(self.selected(state))
            .and_then(|e| e.id.clone())
    }

    fn move_by(&mut self, state: &ItemCardapioState, delta: isize) {
        let len = state.entities.len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        self.selected = self
            .selected(state)
            .saturating_add_signed(delta)
            .min(len - 1);
    }
}

impl Screen for ListScreen {
    fn on_mount(&mut self, dispatch: &mut dyn Dispatch) {
        self.guard.mount();
        dispatch.get_entities();
    }

    fn on_unmount(&mut self) {
        self.guard.unmount();
    }

    fn handle_key(
        &mut self,
        key: KeyEvent,
        state: &ItemCardapioState,
        dispatch: &mut dyn Dispatch,
        nav: &mut dyn Navigator,
    ) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_by(state, -1),
            KeyCode::Down | KeyCode::Char('j') => self.move_by(state, 1),
            KeyCode::Char('r') => dispatch.get_entities(),
            KeyCode::Enter => {
                if let Some(id) = self.selected_id(state) {
                    nav.push(Route::Detail(id));
                }
            }
            KeyCode::Char('d') => {
                if let Some(id) = self.selected_id(state) {
                    nav.push(Route::Delete(id));
                }
            }
            _ => return false,
        }
        true
    }

    fn render(&self, frame: &mut Frame<'_>, area: Rect, state: &ItemCardapioState) {
        let [table_area, hint_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);
        let block = Block::bordered().title(HEADING.bold());

        if state.entities.is_empty() {
            let message = if state.loading {
                "Loading..."
            } else {
                "No Item Cardapios found"
            };
            frame.render_widget(Paragraph::new(message).block(block), table_area);
        } else {
            let header = Row::new(["ID", "Nome", "Categoria", "Valor"]).bold();
            let rows = state.entities.iter().map(|e| {
                Row::new([
                    Cell::from(e.id_text()),
                    Cell::from(e.nome.clone().unwrap_or_default()),
                    Cell::from(e.categoria.clone().unwrap_or_default()),
                    Cell::from(e.valor_text()),
                ])
            });
            let widths = [
                Constraint::Length(8),
                Constraint::Fill(2),
                Constraint::Fill(1),
                Constraint::Length(10),
            ];
            let table = Table::new(rows, widths)
                .header(header)
                .block(block)
                .row_highlight_style(Style::new().reversed())
                .highlight_symbol("> ");
            let mut table_state = TableState::default().with_selected(Some(self.selected(state)));
            frame.render_stateful_widget(table, table_area, &mut table_state);
        }

        frame.render_widget(Line::from(HINTS).dim(), hint_area);
    }
}
