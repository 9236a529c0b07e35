//! CLI command definitions and dispatch.

pub mod delete;
pub mod get;
pub mod list;
pub mod open;
pub mod show;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use cardapio_client::rest::RestClient;
use cardapio_common::config::ClientConfig;
use cardapio_common::constants::{API_URL_ENV, default_config_file};
use cardapio_store::dispatch::Dispatcher;
use cardapio_tui::app::{App, Exit};
use cardapio_tui::route::Route;
use clap::{Parser, Subcommand};

/// How often the screen redraws while no key is pressed.
const TICK: Duration = Duration::from_millis(100);

/// How long in-flight requests may hold up exit.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(1);

/// cardapio — browse and delete menu items from the terminal.
#[derive(Parser, Debug)]
#[command(name = "cardapio", version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Base URL of the REST API.
    #[arg(long, global = true, env = API_URL_ENV)]
    pub api_url: Option<String>,

    /// Client configuration file (JSON). Defaults to `~/.cardapio/config.json`
    /// when that file exists.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds.
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Where to write logs. Filter with `RUST_LOG`.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show one menu item.
    Show(show::ShowArgs),
    /// Confirm and delete one menu item.
    Delete(delete::DeleteArgs),
    /// Browse all menu items.
    List(list::ListArgs),
    /// Open the screen for a route path, e.g. `/item-cardapio/42`.
    Open(open::OpenArgs),
    /// Print one menu item without starting the terminal UI.
    Get(get::GetArgs),
}

/// Dispatches the parsed CLI command to its handler.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    let config = resolve_config(&cli)?;
    match cli.command {
        Command::Show(args) => show::execute(args, config),
        Command::Delete(args) => delete::execute(args, config),
        Command::List(args) => list::execute(args, config),
        Command::Open(args) => open::execute(args, config),
        Command::Get(args) => get::execute(args, config),
    }
}

/// Layers the configuration: defaults, then the config file, then flags and
/// environment.
fn resolve_config(cli: &Cli) -> anyhow::Result<ClientConfig> {
    let mut config = match &cli.config {
        Some(path) => ClientConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => {
            let path = default_config_file();
            if path.exists() {
                ClientConfig::load(&path)
                    .with_context(|| format!("loading config from {}", path.display()))?
            } else {
                ClientConfig::default()
            }
        }
    };
    if let Some(url) = &cli.api_url {
        config.base_url.clone_from(url);
    }
    if let Some(secs) = cli.timeout {
        config.timeout_secs = secs;
    }
    config.validate()?;
    tracing::debug!(base_url = %config.base_url, timeout_secs = config.timeout_secs, "resolved client config");
    Ok(config)
}

/// Runs the terminal UI starting at `route`.
///
/// Prints the target path when navigation leaves the terminal screens.
///
/// # Errors
///
/// Returns an error if the client, runtime, or terminal cannot be set up.
pub fn run_screens(route: Route, config: ClientConfig) -> anyhow::Result<()> {
    let client = RestClient::new(config)?;
    let runtime = tokio::runtime::Runtime::new().context("starting request runtime")?;
    let (dispatcher, mut actions) = Dispatcher::channel(Arc::new(client), runtime.handle().clone());
    let app = App::new(route, dispatcher)?;

    let mut terminal = ratatui::init();
    let outcome = app.run(&mut terminal, &mut actions, TICK);
    ratatui::restore();
    runtime.shutdown_timeout(SHUTDOWN_GRACE);

    match outcome? {
        Exit::Quit => tracing::info!("session ended"),
        Exit::Handoff(route) => println!("{route}"),
    }
    Ok(())
}
