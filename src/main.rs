//! Noughts - terminal tic-tac-toe.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use noughts::{Config, parse_moves, run_replay, run_tui};
use std::path::PathBuf;
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load_or_default(&cli.config).context("Failed to load configuration")?;

    match cli.command {
        None => play(config, None),
        Some(Command::Play { log_file }) => play(config, log_file),
        Some(Command::Replay { moves, json }) => replay(&config, &moves, json),
    }
}

/// Runs the terminal UI, logging to a file so the screen stays clean.
fn play(config: Config, log_file: Option<PathBuf>) -> Result<()> {
    let config = match log_file {
        Some(path) => config.with_log_file(path),
        None => config,
    };
    initialize_file_tracing(&config)?;
    run_tui(&config)
}

/// Replays a scripted game and prints the report to stdout.
fn replay(config: &Config, moves: &str, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_writer(std::io::stderr)
        .init();

    let moves = parse_moves(moves)?;
    let report = run_replay(&moves);
    info!(rounds = report.rounds_finished, "Replay finished");

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report);
    }
    Ok(())
}

fn initialize_file_tracing(config: &Config) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!(log_file = %config.log_file().display(), "Tracing initialized");
    Ok(())
}
