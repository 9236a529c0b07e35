//! The menu-item store slice.

use cardapio_common::types::{ItemCardapio, ItemCardapioId};

/// State shared by every menu-item screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemCardapioState {
    /// A fetch (single record or list) is in flight.
    pub loading: bool,
    /// Message of the last failed request, cleared by the next request.
    pub error_message: Option<String>,
    /// Records returned by the last list fetch.
    pub entities: Vec<ItemCardapio>,
    /// The currently loaded record, or the empty entity.
    pub entity: ItemCardapio,
    /// Id of the latest single-record fetch. Completions for any other id
    /// are stale and dropped.
    pub requested_id: Option<ItemCardapioId>,
    /// A mutating request is in flight.
    pub updating: bool,
    /// Set when the last mutating request completed successfully.
    pub update_success: bool,
}

impl ItemCardapioState {
    /// The loaded record, if it is the one named `id`.
    #[must_use]
    pub fn loaded(&self, id: &ItemCardapioId) -> Option<&ItemCardapio> {
        (self.entity.id.as_ref() == Some(id)).then_some(&self.entity)
    }
}
