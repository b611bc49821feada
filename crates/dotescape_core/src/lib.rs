//! Dot Escape core - hex-grid escape game logic
//!
//! A marker starts in the middle of a square hex board. Each turn the
//! player blocks one free cell and the marker answers by stepping along a
//! shortest free path toward the border. The round is won when the marker
//! reaches the border, scored by the number of moves, and lost when every
//! path is blocked.
//!
//! # Architecture
//!
//! - **Board**: cells, marker and move counter ([`Board`])
//! - **Router**: breadth-first escape search ([`find_direction`])
//! - **Typestate**: one type per phase ([`GameInPlay`], [`GameWon`], [`GameLost`])
//! - **Controller**: turns, undo/redo and persistence ([`GameController`])
//!
//! # Example
//!
//! ```
//! use dotescape_core::{Coordinate, GameInPlay, IdentityShuffler, TurnOutcome};
//!
//! let game = GameInPlay::new(9);
//! let outcome = game
//!     .select(Coordinate::new(0, 0), &mut IdentityShuffler)
//!     .expect("corner is free");
//! assert!(matches!(outcome, TurnOutcome::InPlay(_)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod config;
mod contracts;
mod controller;
mod error;
mod geometry;
mod history;
mod invariants;
mod phases;
mod router;
mod store;
mod types;
mod typestate;

// Crate-level exports - Geometry
pub use geometry::{Coordinate, HexDirection};

// Crate-level exports - Board
pub use board::{Board, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub use types::CellStatus;

// Crate-level exports - Errors
pub use error::{BoardError, HistoryError, MoveError};

// Crate-level exports - Routing
pub use router::{
    Escape, IdentityShuffler, RandomShuffler, Shuffler, distance_from, escape_distance,
    find_direction,
};

// Crate-level exports - History
pub use history::{History, HistoryKind};

// Crate-level exports - Phases and typestate
pub use phases::Phase;
pub use typestate::{AnyGame, GameInPlay, GameLost, GameWon, TurnOutcome};

// Crate-level exports - Validation
pub use contracts::{CellIsFree, Contract, SelectContract};
pub use invariants::{
    BoardInvariants, GridShapeInvariant, Invariant, InvariantSet, InvariantViolation,
    MarkerInteriorInvariant, PlayInvariants, SingleMarkerInvariant, check_board,
};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Controller
pub use controller::{GameController, Presenter};

// Crate-level exports - Persistence
pub use store::{GameStore, JsonFileStore, MemoryStore, StoreError};
