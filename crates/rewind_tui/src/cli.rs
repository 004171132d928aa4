//! Command-line interface for the rewind terminal game.

use clap::{Parser, ValueEnum};
use rewind_tictactoe::SortOrder;
use std::path::PathBuf;

/// Rewind - tic-tac-toe with a move history you can jump through
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with time-travel move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Initial order of the move list (overrides the config file)
    #[arg(long, value_enum)]
    pub sort: Option<SortArg>,

    /// Write logs to this file (overrides the config file)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Move list order as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    /// Oldest move first
    Ascend,
    /// Newest move first
    Descend,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Ascend => SortOrder::Ascend,
            SortArg::Descend => SortOrder::Descend,
        }
    }
}
