//! Phase-specific typestate structs for the escape game.
//!
//! Each phase is its own type. Only [`GameInPlay`] accepts selections, so a
//! finished game cannot be played on by construction.

use tracing::{debug, info, instrument};

use crate::board::Board;
use crate::contracts::{Contract, SelectContract};
use crate::error::MoveError;
use crate::geometry::Coordinate;
use crate::invariants::{InvariantSet, PlayInvariants, describe};
use crate::phases::Phase;
use crate::router::{self, Escape, Shuffler};

// ─────────────────────────────────────────────────────────────
//  InPlay Phase
// ─────────────────────────────────────────────────────────────

/// Game awaiting the player's move.
///
/// Invariants enforced on construction:
/// - the board is well formed
/// - the marker is inside the border
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameInPlay {
    board: Board,
}

impl GameInPlay {
    /// Starts a game on the deterministic all-free board of `size`.
    #[instrument]
    pub fn new(size: usize) -> Self {
        Self {
            board: Board::new(size),
        }
    }

    /// Starts a game from an existing board.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvariantViolation`] if the board is malformed or
    /// its marker is not inside the border.
    #[instrument(skip_all)]
    pub fn from_board(board: Board) -> Result<Self, MoveError> {
        PlayInvariants::check_all(&board).map_err(|violations| {
            MoveError::InvariantViolation(describe(&violations))
        })?;
        Ok(Self { board })
    }

    /// Wraps a pre-move snapshot without re-checking it.
    pub(crate) fn from_snapshot(board: Board) -> Self {
        Self { board }
    }

    /// Resolves one turn: blocks `cell`, then lets the marker respond.
    ///
    /// The turn is computed on a copy of the board, so `self` is unchanged
    /// whether it succeeds or fails.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always (cell on board and free)
    /// - Postconditions checked in debug builds only
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::CellUnavailable`] or [`MoveError::OutOfRange`]
    /// for a bad selection.
    #[instrument(skip(self, shuffler), fields(cell = %cell, move_count = self.board.move_count()))]
    pub fn select<S: Shuffler + ?Sized>(
        &self,
        cell: Coordinate,
        shuffler: &mut S,
    ) -> Result<TurnOutcome, MoveError> {
        SelectContract::pre(&self.board, &cell)?;

        let mut board = self.board.clone();
        board.set_blocked(cell)?;
        board.record_move();

        let outcome = match router::find_direction(&board, shuffler) {
            Escape::Encircled => {
                info!(moves = board.move_count(), "Marker encircled");
                TurnOutcome::Lost(GameLost { board })
            }
            Escape::Step(next) => {
                board.move_marker_to(next);
                if board.is_on_border(next) {
                    info!(moves = board.move_count(), exit = %next, "Marker reached the border");
                    TurnOutcome::Won(GameWon { board })
                } else {
                    debug!(marker = %next, "Marker advanced");
                    TurnOutcome::InPlay(GameInPlay { board })
                }
            }
        };

        #[cfg(debug_assertions)]
        {
            SelectContract::post(&self.board, outcome.board())?;
            if let TurnOutcome::InPlay(game) = &outcome {
                PlayInvariants::check_all(&game.board).map_err(|violations| {
                    MoveError::InvariantViolation(describe(&violations))
                })?;
            }
        }

        Ok(outcome)
    }

    /// Free cells the player may select.
    pub fn valid_moves(&self) -> Vec<Coordinate> {
        self.board.free_cells().collect()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Unwraps the board.
    pub fn into_board(self) -> Board {
        self.board
    }
}

// ─────────────────────────────────────────────────────────────
//  Won Phase
// ─────────────────────────────────────────────────────────────

/// The marker reached the border.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameWon {
    board: Board,
}

impl GameWon {
    /// Moves taken to win.
    pub fn score(&self) -> u32 {
        self.board.move_count()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Starts over on a fresh board of the same size.
    #[instrument(skip(self))]
    pub fn restart(self) -> GameInPlay {
        GameInPlay::new(self.board.size())
    }
}

// ─────────────────────────────────────────────────────────────
//  Lost Phase
// ─────────────────────────────────────────────────────────────

/// The marker was encircled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameLost {
    board: Board,
}

impl GameLost {
    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Starts over on a fresh board of the same size.
    #[instrument(skip(self))]
    pub fn restart(self) -> GameInPlay {
        GameInPlay::new(self.board.size())
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Types
// ─────────────────────────────────────────────────────────────

/// Result of resolving one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Play continues.
    InPlay(GameInPlay),
    /// The marker escaped.
    Won(GameWon),
    /// The marker is trapped.
    Lost(GameLost),
}

impl TurnOutcome {
    /// Board after the turn.
    pub fn board(&self) -> &Board {
        match self {
            Self::InPlay(g) => g.board(),
            Self::Won(g) => g.board(),
            Self::Lost(g) => g.board(),
        }
    }
}

/// A game in any phase, for holders that outlive a single turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyGame {
    /// Awaiting a move.
    InPlay(GameInPlay),
    /// Finished with an escape.
    Won(GameWon),
    /// Finished with the marker trapped.
    Lost(GameLost),
}

impl AnyGame {
    /// Classifies an arbitrary board.
    ///
    /// A marker on the border or off the board has escaped; a marker with
    /// no free path to the border is trapped; anything else is in play.
    #[instrument(skip_all)]
    pub fn from_board(board: Board) -> Self {
        match board.marker() {
            None => Self::Won(GameWon { board }),
            Some(m) if board.is_on_border(m) => Self::Won(GameWon { board }),
            Some(_) if router::escape_distance(&board).is_none() => {
                Self::Lost(GameLost { board })
            }
            Some(_) => Self::InPlay(GameInPlay { board }),
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        match self {
            Self::InPlay(_) => Phase::AwaitingPlayerMove,
            Self::Won(_) => Phase::Won,
            Self::Lost(_) => Phase::Lost,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        match self {
            Self::InPlay(g) => g.board(),
            Self::Won(g) => g.board(),
            Self::Lost(g) => g.board(),
        }
    }

    /// Unwraps the board.
    pub fn into_board(self) -> Board {
        match self {
            Self::InPlay(g) => g.board,
            Self::Won(g) => g.board,
            Self::Lost(g) => g.board,
        }
    }
}

impl From<TurnOutcome> for AnyGame {
    fn from(outcome: TurnOutcome) -> Self {
        match outcome {
            TurnOutcome::InPlay(g) => Self::InPlay(g),
            TurnOutcome::Won(g) => Self::Won(g),
            TurnOutcome::Lost(g) => Self::Lost(g),
        }
    }
}

impl From<GameInPlay> for AnyGame {
    fn from(game: GameInPlay) -> Self {
        Self::InPlay(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::IdentityShuffler;

    #[test]
    fn test_select_advances_marker() {
        let game = GameInPlay::new(9);
        let outcome = game.select(Coordinate::new(0, 0), &mut IdentityShuffler).unwrap();

        let TurnOutcome::InPlay(next) = outcome else {
            panic!("one move on an open 9x9 board should not end the game");
        };
        assert_eq!(next.board().move_count(), 1);
        let marker = next.board().marker().unwrap();
        assert!(Coordinate::new(4, 4).is_adjacent(marker));
        // original untouched
        assert_eq!(game.board(), &Board::new(9));
    }

    #[test]
    fn test_select_rejects_marker_cell() {
        let game = GameInPlay::new(5);
        assert_eq!(
            game.select(Coordinate::new(2, 2), &mut IdentityShuffler),
            Err(MoveError::CellUnavailable(Coordinate::new(2, 2)))
        );
    }

    #[test]
    fn test_from_board_rejects_escaped_marker() {
        let mut board = Board::new(5);
        board.move_marker_to(Coordinate::new(0, 0));
        assert!(matches!(
            GameInPlay::from_board(board),
            Err(MoveError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_classify_boards() {
        assert_eq!(AnyGame::from_board(Board::new(5)).phase(), Phase::AwaitingPlayerMove);

        let mut escaped = Board::new(5);
        escaped.move_marker_to(Coordinate::new(4, 2));
        assert_eq!(AnyGame::from_board(escaped).phase(), Phase::Won);

        let mut trapped = Board::new(7);
        for n in Coordinate::new(3, 3).neighbors() {
            trapped.set_blocked(n).unwrap();
        }
        assert_eq!(AnyGame::from_board(trapped).phase(), Phase::Lost);
    }
}
