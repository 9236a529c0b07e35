//! # cardapio-store
//!
//! Client-side state container for the menu-item resource.
//!
//! - [`ItemCardapioState`](state::ItemCardapioState): the store slice the
//!   screens read.
//! - [`Action`](action::Action) and [`reduce`](action::reduce): every
//!   transition the slice can take.
//! - [`Store`](store::Store): owns the slice on the UI thread and reports
//!   `(prev, next)` snapshots for each applied action.
//! - [`Dispatch`](dispatch::Dispatch) and
//!   [`Dispatcher`](dispatch::Dispatcher): issue requests off the UI thread
//!   and deliver their outcomes as actions.

pub mod action;
pub mod dispatch;
pub mod state;
pub mod store;
