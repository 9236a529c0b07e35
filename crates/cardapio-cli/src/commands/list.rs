//! `cardapio list` — Browse all menu items.

use cardapio_common::config::ClientConfig;
use cardapio_tui::route::Route;
use clap::Args;

/// Arguments for the `list` command.
#[derive(Args, Debug)]
pub struct ListArgs {}

/// Executes the `list` command.
///
/// # Errors
///
/// Returns an error if the terminal UI cannot run.
pub fn execute(_args: ListArgs, config: ClientConfig) -> anyhow::Result<()> {
    super::run_screens(Route::List, config)
}
