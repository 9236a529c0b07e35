//! Store that owns the menu-item slice on the UI thread.

use crate::action::{Action, reduce};
use crate::state::ItemCardapioState;

/// Snapshots of the slice before and after one applied action.
#[derive(Debug, Clone, PartialEq)]
pub struct StateChange {
    /// Slice before the action.
    pub prev: ItemCardapioState,
    /// Slice after the action.
    pub next: ItemCardapioState,
}

impl StateChange {
    /// Whether `update_success` went from false to true in this change.
    #[must_use]
    pub const fn update_succeeded(&self) -> bool {
        !self.prev.update_success && self.next.update_success
    }
}

/// Holder of the current slice.
#[derive(Debug, Default)]
pub struct Store {
    state: ItemCardapioState,
}

impl Store {
    /// Creates a store holding the initial slice.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the current slice.
    #[must_use]
    pub const fn state(&self) -> &ItemCardapioState {
        &self.state
    }

    /// Applies an action and returns the resulting change.
    pub fn apply(&mut self, action: Action) -> StateChange {
        tracing::trace!(action = action.name(), "applying action");
        let next = reduce(&self.state, action);
        let prev = std::mem::replace(&mut self.state, next.clone());
        StateChange { prev, next }
    }
}
