//! Errors raised by the terminal front end.

use thiserror::Error;

/// Error type for the TUI crate.
#[derive(Debug, Error)]
pub enum TuiError {
    /// Terminal setup, drawing, or input failed.
    #[error("terminal I/O error: {0}")]
    Terminal(#[from] std::io::Error),

    /// A path does not name any menu-item route.
    #[error("unknown route: {path}")]
    UnknownRoute {
        /// The rejected path.
        path: String,
    },

    /// A route is valid but has no terminal screen.
    #[error("no terminal screen for {path}")]
    NoScreen {
        /// Path of the route.
        path: String,
    },
}

/// Result alias for the TUI crate.
pub type Result<T> = std::result::Result<T, TuiError>;
