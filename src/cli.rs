//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Noughts - two-player tic-tac-toe with round scores
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player tic-tac-toe with round scores", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, global = true, default_value = "noughts.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Override the log file from the configuration
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Replay a scripted list of moves without a terminal UI
    Replay {
        /// Moves as board indexes (0-8) or ROW:COL pairs, separated by spaces or commas
        moves: String,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}
