//! Entity access abstraction for the menu-item resource.

use cardapio_common::error::Result;
use cardapio_common::types::{ItemCardapio, ItemCardapioId};

/// Operations the menu-item screens need from the backing resource.
///
/// Implementors block the calling thread; the store's dispatcher runs them
/// off the UI thread.
pub trait ItemCardapioApi: Send + Sync {
    /// Fetches a single menu item by id.
    ///
    /// # Errors
    ///
    /// Returns `CardapioError::NotFound` if no item has this id, or a
    /// transport error if the request fails.
    fn get_entity(&self, id: &ItemCardapioId) -> Result<ItemCardapio>;

    /// Fetches every menu item.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be parsed.
    fn get_entities(&self) -> Result<Vec<ItemCardapio>>;

    /// Removes a menu item by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the server refuses the deletion or the request
    /// fails.
    fn delete_entity(&self, id: &ItemCardapioId) -> Result<()>;
}
