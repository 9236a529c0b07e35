//! # cardapio-tui
//!
//! Terminal screens for the menu-item resource.
//!
//! Built with `ratatui` and `crossterm`, providing:
//! - A read-only detail view of one menu item.
//! - A delete-confirmation dialog that leaves once the deletion succeeds.
//! - A list screen, the target of every "back" navigation.
//!
//! Screens read the store slice they are handed and issue requests through
//! an injected [`Dispatch`](cardapio_store::dispatch::Dispatch); none of
//! them reaches for global state.

pub mod app;
pub mod element;
pub mod error;
pub mod event;
pub mod route;
pub mod screen;
pub mod ui;
