//! Dot Escape - terminal hex-grid escape puzzle

#![warn(missing_docs)]

mod cli;
mod route;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, PlayArgs};
use dotescape_core::GameConfig;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

/// Log file used while the terminal UI owns the screen.
const LOG_FILE: &str = "dotescape.log";

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Play(args) => run_play(args),
        Command::Route { file } => run_route(file),
    }
}

/// Run the terminal game
fn run_play(args: PlayArgs) -> Result<()> {
    initialize_file_tracing()?;
    info!("Starting dotescape");

    let config = load_config(&args)?;
    tui::run(config, !args.no_resume)
}

/// Print routing details for a saved board
fn run_route(file: std::path::PathBuf) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    route::run(&file)
}

/// Builds the session config: file first, then command-line overrides.
#[instrument(skip_all)]
fn load_config(args: &PlayArgs) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => GameConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => GameConfig::default(),
    };

    if let Some(size) = args.size {
        config = config.with_size(size);
    }
    if let Some(path) = &args.save_path {
        config = config.with_save_path(path);
    }

    config.validate()?;
    info!(
        size = config.size(),
        ratio = config.initial_blocked_ratio(),
        save_path = %config.save_path().display(),
        "Configuration ready"
    );
    Ok(config)
}

/// Log to a file so output does not interfere with the TUI.
fn initialize_file_tracing() -> Result<()> {
    let log_file = std::fs::File::create(LOG_FILE)
        .with_context(|| format!("Failed to create log file {}", LOG_FILE))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}
