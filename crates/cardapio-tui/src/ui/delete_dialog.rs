//! Delete-confirmation dialog.
//!
//! Fetches the record on mount so the question can name it, deletes the
//! loaded record's id on confirm, and leaves for the list once the store
//! reports `update_success`. A failed delete is silent: the flag stays false
//! and the dialog stays open.

use cardapio_common::types::{ItemCardapio, ItemCardapioId};
use cardapio_store::dispatch::Dispatch;
use cardapio_store::state::ItemCardapioState;
use cardapio_store::store::StateChange;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};

use crate::element::{Button, CANCEL_BUTTON, CONFIRM_DELETE_BUTTON};
use crate::route::{Navigator, Route};
use crate::screen::{MountGuard, Screen};

/// Title of the dialog.
pub const HEADING: &str = "Confirm delete operation";

/// Closes the dialog without deleting.
pub const CANCEL: Button = Button {
    id: CANCEL_BUTTON,
    key: 'n',
    label: "Cancel",
};

/// Deletes the loaded record.
pub const CONFIRM: Button = Button {
    id: CONFIRM_DELETE_BUTTON,
    key: 'y',
    label: "Delete",
};

const WIDTH: u16 = 64;
const HEIGHT: u16 = 7;

/// Where the dialog is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogPhase {
    /// Open, waiting for the user.
    AwaitingConfirmation,
    /// Open, delete issued, waiting for `update_success`.
    DeleteRequested,
    /// Navigated away.
    Closed,
}

/// Confirmation modal for removing one menu item.
#[derive(Debug)]
pub struct DeleteDialog {
    id: ItemCardapioId,
    phase: DialogPhase,
    guard: MountGuard,
}

impl DeleteDialog {
    /// Creates the dialog for the route parameter `id`.
    #[must_use]
    pub fn new(id: ItemCardapioId) -> Self {
        Self {
            id,
            phase: DialogPhase::AwaitingConfirmation,
            guard: MountGuard::default(),
        }
    }

    /// Current lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> DialogPhase {
        self.phase
    }

    /// The modal is open for as long as it is mounted and has not closed.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.guard.is_mounted() && self.phase != DialogPhase::Closed
    }

    /// Confirmation question naming the route's record once it has loaded.
    #[must_use]
    pub fn question(&self, state: &ItemCardapioState) -> String {
        let id = state
            .loaded(&self.id)
            .map(ItemCardapio::id_text)
            .unwrap_or_default();
        format!("Are you sure you want to delete ItemCardapio {id}?")
    }

    /// Closes the dialog by returning to the list. Never touches the backend.
    pub fn cancel(&mut self, nav: &mut dyn Navigator) {
        if self.phase == DialogPhase::Closed {
            return;
        }
        self.phase = DialogPhase::Closed;
        nav.push(Route::List);
    }

    /// Issues a delete for the loaded record's id.
    ///
    /// Does nothing until the route's record is loaded, and only the first
    /// confirmation is sent. Returns whether a delete was issued.
    pub fn confirm(&mut self, state: &ItemCardapioState, dispatch: &mut dyn Dispatch) -> bool {
        if self.phase != DialogPhase::AwaitingConfirmation {
            return false;
        }
        if state.loaded(&self.id).is_none() {
            tracing::debug!(route_id = %self.id, "confirm ignored: record not loaded");
            return false;
        }
        dispatch.delete_entity(&self.id);
        self.phase = DialogPhase::DeleteRequested;
        true
    }
}

impl Screen for DeleteDialog {
    fn on_mount(&mut self, dispatch: &mut dyn Dispatch) {
        self.guard.mount();
        self.phase = DialogPhase::AwaitingConfirmation;
        dispatch.get_entity(&self.id);
    }

    fn on_state_change(&mut self, change: &StateChange, nav: &mut dyn Navigator) {
        if !self.is_open() || !change.update_succeeded() {
            return;
        }
        self.phase = DialogPhase::Closed;
        nav.push(Route::List);
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
            KeyCode::Enter => {
                let _ = self.confirm(state, dispatch);
            }
            KeyCode::Char(c) if c == CONFIRM.key => {
                let _ = self.confirm(state, dispatch);
            }
            KeyCode::Esc | KeyCode::Char('c') => self.cancel(nav),
            KeyCode::Char(c) if c == CANCEL.key => self.cancel(nav),
            _ => return false,
        }
        true
    }

    fn render(&self, frame: &mut Frame<'_>, area: Rect, state: &ItemCardapioState) {
        let popup = super::centered(area, WIDTH, HEIGHT);
        frame.render_widget(Clear, popup);

        let lines = vec![
            Line::from(self.question(state)),
            Line::default(),
            Line::from(super::footer(&[CANCEL, CONFIRM])).dim(),
        ];
        let block = Block::bordered().title(HEADING.bold()).red();
        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
            popup,
        );
    }
}
