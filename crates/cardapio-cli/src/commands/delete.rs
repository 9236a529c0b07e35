//! `cardapio delete` — Delete one menu item after confirmation.

use cardapio_common::config::ClientConfig;
use cardapio_common::types::ItemCardapioId;
use cardapio_tui::route::Route;
use clap::Args;

/// Arguments for the `delete` command.
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Menu item id.
    pub id: String,
}

/// Executes the `delete` command.
///
/// Opens the confirmation dialog; nothing is removed until the user
/// confirms.
///
/// # Errors
///
/// Returns an error if the terminal UI cannot run.
pub fn execute(args: DeleteArgs, config: ClientConfig) -> anyhow::Result<()> {
    super::run_screens(Route::Delete(ItemCardapioId::new(args.id)), config)
}
