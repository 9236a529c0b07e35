//! Request dispatch for the menu-item slice.
//!
//! Screens never call the access client directly. They issue requests through
//! [`Dispatch`]; the [`Dispatcher`] posts the `*Request` action at once, runs
//! the blocking call on the runtime's blocking pool, and posts the outcome.
//! The UI loop drains the action channel and applies each action to the
//! [`Store`](crate::store::Store) in order.

use std::sync::Arc;

use cardapio_client::api::ItemCardapioApi;
use cardapio_common::types::ItemCardapioId;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

use crate::action::Action;

/// Operations a screen may request on the menu-item slice.
pub trait Dispatch {
    /// Requests a single record by id.
    fn get_entity(&mut self, id: &ItemCardapioId);

    /// Requests the full list of records.
    fn get_entities(&mut self);

    /// Requests removal of a record by id.
    fn delete_entity(&mut self, id: &ItemCardapioId);
}

/// Receiving end of the action channel, drained by the UI loop.
pub type ActionReceiver = UnboundedReceiver<Action>;

/// Runs access-client calls off the UI thread.
#[derive(Clone)]
pub struct Dispatcher {
    api: Arc<dyn ItemCardapioApi>,
    runtime: Handle,
    tx: UnboundedSender<Action>,
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher").finish_non_exhaustive()
    }
}

impl Dispatcher {
    /// Creates a dispatcher and the receiver its actions arrive on.
    #[must_use]
    pub fn channel(api: Arc<dyn ItemCardapioApi>, runtime: Handle) -> (Self, ActionReceiver) {
        let (tx, rx) = unbounded_channel();
        (Self { api, runtime, tx }, rx)
    }

    fn post(&self, action: Action) {
        if self.tx.send(action).is_err() {
            tracing::debug!("action receiver dropped; discarding action");
        }
    }

    fn run<F>(&self, call: F)
    where
        F: FnOnce(&dyn ItemCardapioApi) -> Action + Send + 'static,
    {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        let _ = self.runtime.spawn_blocking(move || {
            let outcome = call(api.as_ref());
            if tx.send(outcome).is_err() {
                tracing::debug!("action receiver dropped before completion");
            }
        });
    }
}

impl Dispatch for Dispatcher {
    fn get_entity(&mut self, id: &ItemCardapioId) {
        tracing::debug!(%id, "dispatching get_entity");
        self.post(Action::FetchEntityRequest { id: id.clone() });
        let id = id.clone();
        self.run(move |api| match api.get_entity(&id) {
            Ok(entity) => Action::FetchEntitySuccess(entity),
            Err(e) => {
                tracing::warn!(%id, error = %e, "failed to fetch item-cardapio");
                Action::FetchEntityFailure(e.to_string())
            }
        });
    }

    fn get_entities(&mut self) {
        tracing::debug!("dispatching get_entities");
        self.post(Action::FetchListRequest);
        self.run(|api| match api.get_entities() {
            Ok(entities) => Action::FetchListSuccess(entities),
            Err(e) => {
                tracing::warn!(error = %e, "failed to fetch item-cardapio list");
                Action::FetchListFailure(e.to_string())
            }
        });
    }

    fn delete_entity(&mut self, id: &ItemCardapioId) {
        tracing::debug!(%id, "dispatching delete_entity");
        self.post(Action::DeleteRequest { id: id.clone() });
        let id = id.clone();
        self.run(move |api| match api.delete_entity(&id) {
            Ok(()) => {
                tracing::info!(%id, "item-cardapio deleted");
                Action::DeleteSuccess { id }
            }
            Err(e) => {
                tracing::warn!(%id, error = %e, "failed to delete item-cardapio");
                Action::DeleteFailure(e.to_string())
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use cardapio_common::error::{CardapioError, Result};
    use cardapio_common::types::ItemCardapio;

    use super::*;

    struct FixedApi;

    impl ItemCardapioApi for FixedApi {
        fn get_entity(&self, id: &ItemCardapioId) -> Result<ItemCardapio> {
            Ok(ItemCardapio {
                id: Some(id.clone()),
                nome: Some("Suco".into()),
                ..ItemCardapio::default()
            })
        }

        fn get_entities(&self) -> Result<Vec<ItemCardapio>> {
            Ok(Vec::new())
        }

        fn delete_entity(&self, id: &ItemCardapioId) -> Result<()> {
            Err(CardapioError::Status {
                url: format!("/api/item-cardapios/{id}"),
                status: 409,
            })
        }
    }

    fn recv(rx: &mut ActionReceiver) -> Action {
        rx.blocking_recv().expect("channel closed")
    }

    #[test]
    fn get_entity_posts_request_then_success() {
        let runtime = tokio::runtime::Runtime::new().expect("runtime");
        let (mut dispatcher, mut rx) = Dispatcher::channel(Arc::new(FixedApi), runtime.handle().clone());

        dispatcher.get_entity(&ItemCardapioId::new("42"));

        assert_eq!(
            recv(&mut rx),
            Action::FetchEntityRequest {
                id: ItemCardapioId::new("42")
            }
        );
        match recv(&mut rx) {
            Action::FetchEntitySuccess(entity) => assert_eq!(entity.id_text(), "42"),
            other => panic!("unexpected action {other:?}"),
        }
    }

    #[test]
    fn delete_failure_posts_message() {
        let runtime = tokio::runtime::Runtime::new().expect("runtime");
        let (mut dispatcher, mut rx) = Dispatcher::channel(Arc::new(FixedApi), runtime.handle().clone());

        dispatcher.delete_entity(&ItemCardapioId::new("42"));

        assert!(matches!(recv(&mut rx), Action::DeleteRequest { .. }));
        match recv(&mut rx) {
            Action::DeleteFailure(message) => assert!(message.contains("409")),
            other => panic!("unexpected action {other:?}"),
        }
    }
}
