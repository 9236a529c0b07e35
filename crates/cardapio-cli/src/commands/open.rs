//! `cardapio open` — Start at an arbitrary route path.

use cardapio_common::config::ClientConfig;
use cardapio_tui::route::Route;
use clap::Args;

/// Arguments for the `open` command.
#[derive(Args, Debug)]
pub struct OpenArgs {
    /// Route path, e.g. `/item-cardapio/42/delete`.
    pub path: String,
}

/// Executes the `open` command.
///
/// # Errors
///
/// Returns an error if the path is not a menu-item route or the terminal UI
/// cannot run.
pub fn execute(args: OpenArgs, config: ClientConfig) -> anyhow::Result<()> {
    let route: Route = args.path.parse()?;
    super::run_screens(route, config)
}
