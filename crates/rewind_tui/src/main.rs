//! Rewind - terminal tic-tac-toe with time-travel move history

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod terminal;
mod ui;

use anyhow::{Context, Result};
use app::{App, Control};
use clap::Parser;
use cli::Cli;
use config::TuiConfig;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use rewind_tictactoe::SortOrder;
use std::fs::File;
use std::io::{self, Stdout};
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;
use terminal::TerminalGuard;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load(cli.config.as_deref())?;

    let log_file = cli.log_file.or_else(|| config.log_file().clone());
    init_tracing(config.log_filter(), log_file.as_deref())?;

    let sort_order = cli.sort.map(SortOrder::from).unwrap_or(*config.sort_order());
    info!(?sort_order, "Starting rewind");

    let mut guard = TerminalGuard::new(io::stdout());
    guard.enable_raw_mode()?;
    guard.enter_alternate_screen()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let res = run_app(&mut terminal, App::new(sort_order));
    drop(guard);

    if let Err(err) = &res {
        tracing::error!(error = %err, "Event loop failed");
    }
    res
}

/// Installs the global subscriber, writing to `log_file` or nowhere.
///
/// The terminal is in raw mode while the game runs, so logs never go to stdout.
fn init_tracing(default_filter: &str, log_file: Option<&Path>) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::sink)
                .init();
        }
    }
    Ok(())
}

#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code) == Control::Quit
        {
            info!("Quit requested");
            return Ok(());
        }
    }
}
