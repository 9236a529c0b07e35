//! Store actions and the reducer that applies them.

use cardapio_common::types::{ItemCardapio, ItemCardapioId};

use crate::state::ItemCardapioState;

/// A transition of the menu-item store slice.
///
/// Requests produce a `*Request` action immediately and exactly one
/// `*Success` or `*Failure` action once the backend answers.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A single-record fetch was issued.
    FetchEntityRequest {
        /// Requested record.
        id: ItemCardapioId,
    },
    /// A single-record fetch returned.
    FetchEntitySuccess(ItemCardapio),
    /// A single-record fetch failed.
    FetchEntityFailure(String),
    /// A list fetch was issued.
    FetchListRequest,
    /// A list fetch returned.
    FetchListSuccess(Vec<ItemCardapio>),
    /// A list fetch failed.
    FetchListFailure(String),
    /// A delete was issued.
    DeleteRequest {
        /// Record being removed.
        id: ItemCardapioId,
    },
    /// A delete completed.
    DeleteSuccess {
        /// Record that was removed.
        id: ItemCardapioId,
    },
    /// A delete failed.
    DeleteFailure(String),
    /// Returns the slice to its initial state.
    Reset,
}

impl Action {
    /// Short name used in log fields.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::FetchEntityRequest { .. } => "fetch_entity/request",
            Self::FetchEntitySuccess(_) => "fetch_entity/success",
            Self::FetchEntityFailure(_) => "fetch_entity/failure",
            Self::FetchListRequest => "fetch_list/request",
            Self::FetchListSuccess(_) => "fetch_list/success",
            Self::FetchListFailure(_) => "fetch_list/failure",
            Self::DeleteRequest { .. } => "delete/request",
            Self::DeleteSuccess { .. } => "delete/success",
            Self::DeleteFailure(_) => "delete/failure",
            Self::Reset => "reset",
        }
    }
}

/// A fetched record is stale when a later fetch asked for a different id.
fn is_stale(state: &ItemCardapioState, entity: &ItemCardapio) -> bool {
    match (&state.requested_id, &entity.id) {
        (Some(wanted), Some(got)) => wanted != got,
        _ => false,
    }
}

/// Computes the slice that results from applying `action` to `state`.
///
/// Every request clears `error_message` and `update_success`; every failure
/// records its message and clears both in-flight flags. A single-record fetch
/// empties `entity` until its own record arrives. A successful delete drops
/// the record from the list and empties `entity`.
#[must_use]
pub fn reduce(state: &ItemCardapioState, action: Action) -> ItemCardapioState {
    match action {
        Action::FetchEntityRequest { id } => ItemCardapioState {
            error_message: None,
            update_success: false,
            loading: true,
            entity: ItemCardapio::default(),
            requested_id: Some(id),
            ..state.clone()
        },
        Action::FetchListRequest => ItemCardapioState {
            error_message: None,
            update_success: false,
            loading: true,
            ..state.clone()
        },
        Action::DeleteRequest { .. } => ItemCardapioState {
            error_message: None,
            update_success: false,
            updating: true,
            ..state.clone()
        },
        Action::FetchEntitySuccess(entity) if is_stale(state, &entity) => {
            tracing::debug!(
                got = %entity.id_text(),
                "dropping completion of a superseded fetch"
            );
            state.clone()
        }
        Action::FetchEntitySuccess(entity) => ItemCardapioState {
            loading: false,
            entity,
            ..state.clone()
        },
        Action::FetchListSuccess(entities) => ItemCardapioState {
            loading: false,
            entities,
            ..state.clone()
        },
        Action::DeleteSuccess { id } => ItemCardapioState {
            updating: false,
            update_success: true,
            entity: ItemCardapio::default(),
            entities: state
                .entities
                .iter()
                .filter(|e| e.id.as_ref() != Some(&id))
                .cloned()
                .collect(),
            ..state.clone()
        },
        Action::FetchEntityFailure(message)
        | Action::FetchListFailure(message)
        | Action::DeleteFailure(message) => ItemCardapioState {
            loading: false,
            updating: false,
            update_success: false,
            error_message: Some(message),
            ..state.clone()
        },
        Action::Reset => ItemCardapioState::default(),
    }
}
