//! Screen lifecycle.
//!
//! The app drives every screen through the same hooks: `on_mount` once when
//! the screen becomes visible, `on_state_change` after each action applied to
//! the store, and `on_unmount` when navigation leaves it. Input and drawing
//! read the slice snapshot the app hands in.

use cardapio_store::dispatch::Dispatch;
use cardapio_store::state::ItemCardapioState;
use cardapio_store::store::StateChange;
use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::route::Navigator;

/// Tracks whether a screen is still mounted.
///
/// Requests finish asynchronously and their outcomes still reach the shared
/// store after the screen that issued them is gone. Hooks consult the guard
/// so a late completion never drives navigation from an unmounted screen.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MountGuard {
    mounted: bool,
}

impl MountGuard {
    /// Marks the screen mounted.
    pub const fn mount(&mut self) {
        self.mounted = true;
    }

    /// Marks the screen unmounted.
    pub const fn unmount(&mut self) {
        self.mounted = false;
    }

    /// Whether the screen is currently mounted.
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }
}

/// A menu-item screen.
pub trait Screen {
    /// Called once when the screen becomes visible.
    fn on_mount(&mut self, dispatch: &mut dyn Dispatch);

    /// Called after each action applied to the store while mounted.
    fn on_state_change(&mut self, _change: &StateChange, _nav: &mut dyn Navigator) {}

    /// Called when navigation leaves the screen.
    fn on_unmount(&mut self);

    /// Handles a key press. Returns whether the screen consumed it.
    fn handle_key(
        &mut self,
        key: KeyEvent,
        state: &ItemCardapioState,
        dispatch: &mut dyn Dispatch,
        nav: &mut dyn Navigator,
    ) -> bool;

    /// Draws the screen into `area`.
    fn render(&self, frame: &mut Frame<'_>, area: Rect, state: &ItemCardapioState);
}
