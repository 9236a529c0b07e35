//! # cardapio — menu-item screens
//!
//! Terminal front end for the menu-item REST resource: detail view,
//! delete confirmation, and list.

mod commands;
mod output;

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use clap::Parser;

use crate::commands::Cli;

/// Sends logs to `path` so they never draw over the terminal screens.
fn init_logging(path: &Path) {
    let filter = tracing_subscriber::EnvFilter::from_default_env();
    let file = path
        .parent()
        .map_or(Ok(()), std::fs::create_dir_all)
        .and_then(|()| OpenOptions::new().create(true).append(true).open(path));
    match file {
        Ok(file) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init(),
        Err(_) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::sink)
            .init(),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let log_file = cli
        .log_file
        .clone()
        .unwrap_or_else(cardapio_common::constants::default_log_file);
    init_logging(&log_file);
    commands::execute(cli)
}
