//! Diary CLI - a small, local, CLI-first journal
//!
//! Interactive front end over the core library: a menu loop with add,
//! view, search and delete actions against a single SQLite file.

mod app;
mod cli;
mod commands;
mod config;
mod console;
mod constants;
mod errors;
mod logging;
mod menu;
mod ui;

use clap::Parser;
use diary_core::SqliteStore;

use crate::app::{resolve_config_path, resolve_database_path, resolve_log_dir, Session};
use crate::cli::Cli;
use crate::config::load_config;
use crate::console::TerminalConsole;
use crate::errors::{exit_with, CliError};
use crate::ui::render::error_message;
use crate::ui::UiContext;

fn main() {
    let _cli = Cli::parse();

    if let Err(err) = run() {
        exit_with(&err);
    }
}

fn run() -> anyhow::Result<()> {
    let config_path = resolve_config_path()?;
    let config = load_config(&config_path).map_err(|e| {
        CliError::config(
            format!("{:#}", e),
            format!("Fix or remove {}", config_path.display()),
        )
    })?;

    let ui = UiContext::from_config(&config.ui).map_err(|e| {
        CliError::config(
            format!("{:#}", e),
            "Use an IANA timezone name such as \"Europe/Berlin\" in [ui] timezone",
        )
    })?;

    let log_dir = resolve_log_dir()?;
    if let Err(err) = logging::init_logging(&config.log.level, &log_dir) {
        eprintln!(
            "{}",
            error_message(&ui, &format!("Logging disabled: {:#}", err), None)
        );
    }

    let db_path = resolve_database_path(&config)?;
    let mut store = SqliteStore::open(&db_path).map_err(|e| {
        CliError::storage(format!(
            "Cannot open diary at {}: {}",
            db_path.display(),
            e
        ))
    })?;

    let mut console = TerminalConsole::new(&ui);
    {
        let mut session = Session::new(&mut store, &mut console, &ui);
        menu::run(&mut session)?;
    }

    let closed_path = store.path().map(|path| path.display().to_string());
    store.close()?;
    tracing::info!(path = ?closed_path, "diary closed");
    Ok(())
}
