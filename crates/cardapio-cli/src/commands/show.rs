//! `cardapio show` — Read-only detail view of one menu item.

use cardapio_common::config::ClientConfig;
use cardapio_common::types::ItemCardapioId;
use cardapio_tui::route::Route;
use clap::Args;

/// Arguments for the `show` command.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Menu item id.
    pub id: String,
}

/// Executes the `show` command.
///
/// # Errors
///
/// Returns an error if the terminal UI cannot run.
pub fn execute(args: ShowArgs, config: ClientConfig) -> anyhow::Result<()> {
    super::run_screens(Route::Detail(ItemCardapioId::new(args.id)), config)
}
