//! `route` subcommand: inspect a saved board.

use std::path::Path;

use anyhow::{Context, Result};
use dotescape_core::{AnyGame, Escape, IdentityShuffler, JsonFileStore, escape_distance, find_direction};
use tracing::{info, instrument};

/// Prints the board, its phase, the escape distance and the next step.
///
/// The save file is read but left in place.
#[instrument(skip_all, fields(file = %file.display()))]
pub fn run(file: &Path) -> Result<()> {
    let board = JsonFileStore::new(file)
        .read()
        .with_context(|| format!("Failed to read saved game {}", file.display()))?;
    info!(size = board.size(), moves = board.move_count(), "Board loaded");

    println!("{}", board);
    println!("Moves played: {}", board.move_count());

    let distance = escape_distance(&board);
    let step = find_direction(&board, &mut IdentityShuffler);
    let game = AnyGame::from_board(board);
    println!("Phase: {}", game.phase());

    match distance {
        Some(d) => println!("Escape distance: {}", d),
        None => println!("Escape distance: none (encircled)"),
    }
    if game.phase().is_terminal() {
        return Ok(());
    }
    match step {
        Escape::Step(next) => println!("Next step: {}", next),
        Escape::Encircled => println!("Next step: none"),
    }
    Ok(())
}
