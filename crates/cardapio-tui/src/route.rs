//! Menu-item routes and the navigation history.

use std::fmt;
use std::str::FromStr;

use cardapio_common::constants::{DELETE_SEGMENT, EDIT_SEGMENT, LIST_PATH};
use cardapio_common::types::ItemCardapioId;

use crate::error::TuiError;

/// A location inside the menu-item screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/item-cardapio`
    List,
    /// `/item-cardapio/{id}`
    Detail(ItemCardapioId),
    /// `/item-cardapio/{id}/edit`
    Edit(ItemCardapioId),
    /// `/item-cardapio/{id}/delete`
    Delete(ItemCardapioId),
}

impl Route {
    /// Renders the route as a path.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::List => LIST_PATH.to_string(),
            Self::Detail(id) => format!("{LIST_PATH}/{id}"),
            Self::Edit(id) => format!("{LIST_PATH}/{id}/{EDIT_SEGMENT}"),
            Self::Delete(id) => format!("{LIST_PATH}/{id}/{DELETE_SEGMENT}"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = TuiError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let unknown = || TuiError::UnknownRoute {
            path: path.to_string(),
        };
        let trimmed = path.trim_end_matches('/');
        let rest = trimmed.strip_prefix(LIST_PATH).ok_or_else(unknown)?;
        if rest.is_empty() {
            return Ok(Self::List);
        }
        let rest = rest.strip_prefix('/').ok_or_else(unknown)?;
        let segments: Vec<&str> = rest.split('/').collect();
        match segments.as_slice() {
            [id] if !id.is_empty() => Ok(Self::Detail(ItemCardapioId::new(*id))),
            [id, seg] if !id.is_empty() && *seg == EDIT_SEGMENT => {
                Ok(Self::Edit(ItemCardapioId::new(*id)))
            }
            [id, seg] if !id.is_empty() && *seg == DELETE_SEGMENT => {
                Ok(Self::Delete(ItemCardapioId::new(*id)))
            }
            _ => Err(unknown()),
        }
    }
}

/// Navigation surface handed to screens.
pub trait Navigator {
    /// Adds `route` on top of the history.
    fn push(&mut self, route: Route);

    /// Replaces the current history entry with `route`.
    fn replace(&mut self, route: Route);
}

/// Linear navigation history owned by the app.
#[derive(Debug)]
pub struct History {
    entries: Vec<Route>,
    changed: bool,
}

impl History {
    /// Starts a history at `route`.
    #[must_use]
    pub fn new(route: Route) -> Self {
        Self {
            entries: vec![route],
            changed: false,
        }
    }

    /// The route currently shown.
    #[must_use]
    pub fn current(&self) -> &Route {
        // `entries` is never empty: `new` seeds it and `replace` swaps in place.
        &self.entries[self.entries.len() - 1]
    }

    /// Every entry, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[Route] {
        &self.entries
    }

    /// Returns whether a navigation happened since the last call, and clears
    /// the flag.
    pub fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }
}

impl History {
    /// Whether the entry under the current one is `route`.
    fn previous_is(&self, route: &Route) -> bool {
        self.entries
            .len()
            .checked_sub(2)
            .is_some_and(|i| self.entries[i] == *route)
    }
}

/// Navigating to the entry just below the current one returns to it instead
/// of stacking a duplicate, so the history never grows while the user goes
/// back and forth between two screens.
impl Navigator for History {
    fn push(&mut self, route: Route) {
        tracing::info!(to = %route, "navigate");
        if self.previous_is(&route) {
            let _ = self.entries.pop();
        } else {
            self.entries.push(route);
        }
        self.changed = true;
    }

    fn replace(&mut self, route: Route) {
        tracing::info!(to = %route, "navigate (replace)");
        if self.previous_is(&route) {
            let _ = self.entries.pop();
        } else if let Some(last) = self.entries.last_mut() {
            *last = route;
        }
        self.changed = true;
    }
}
