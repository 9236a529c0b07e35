//! # cardapio-common
//!
//! Shared types, error definitions, configuration models, and constants
//! used across the entire cardapio workspace.
//!
//! This crate is the leaf of the dependency graph. It depends on no other
//! internal crate and provides the menu-item record, its identifiers, and
//! the error type every other crate wraps.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
