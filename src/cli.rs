//! Command-line interface for dotescape.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Dot Escape - a hex-grid escape puzzle
#[derive(Parser, Debug)]
#[command(name = "dotescape")]
#[command(about = "Hex-grid escape puzzle for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run; defaults to `play`
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play(PlayArgs),

    /// Print a saved board with its escape distance and next step
    Route {
        /// Saved game file (JSON)
        file: PathBuf,
    },
}

impl Default for Command {
    fn default() -> Self {
        Self::Play(PlayArgs::default())
    }
}

/// Options for a play session. Flags override the config file.
#[derive(Args, Debug, Default)]
pub struct PlayArgs {
    /// Board width and height
    #[arg(long)]
    pub size: Option<usize>,

    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Where to save on quit and resume from on start
    #[arg(long)]
    pub save_path: Option<PathBuf>,

    /// Start a fresh game even if a save exists
    #[arg(long)]
    pub no_resume: bool,
}
