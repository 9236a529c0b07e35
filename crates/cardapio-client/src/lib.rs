//! # cardapio-client
//!
//! Access client for the menu-item REST resource.
//!
//! - [`ItemCardapioApi`](api::ItemCardapioApi): fetch-by-id, list, and
//!   remove-by-id operations, the seam the store's dispatcher calls through.
//! - [`RestClient`](rest::RestClient): blocking HTTP implementation backed
//!   by `reqwest`.

pub mod api;
pub mod rest;
