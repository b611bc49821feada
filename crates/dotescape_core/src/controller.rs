//! Turn orchestration: selections, undo/redo, reset and quit.
//!
//! The controller owns the live game, its history and the front end it
//! reports to. Every command finishes with a full refresh of the
//! presenter, so the front end never needs to diff state itself.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, instrument, warn};

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::MoveError;
use crate::geometry::Coordinate;
use crate::history::History;
use crate::phases::Phase;
use crate::router::Shuffler;
use crate::store::{GameStore, StoreError};
use crate::typestate::{AnyGame, GameInPlay};

/// Receives game notifications; implemented by front ends.
pub trait Presenter {
    /// The board changed.
    fn on_update(&mut self, board: &Board);

    /// Whether undo is currently possible.
    fn on_undo_available(&mut self, available: bool);

    /// Whether redo is currently possible.
    fn on_redo_available(&mut self, available: bool);

    /// The marker reached the border after `move_count` moves.
    fn on_won(&mut self, move_count: u32);

    /// The marker was encircled.
    fn on_lost(&mut self);
}

/// Drives one game session.
pub struct GameController<P, S> {
    game: AnyGame,
    history: History,
    presenter: P,
    shuffler: S,
    config: GameConfig,
    layout_rng: StdRng,
}

impl<P: Presenter, S: Shuffler> GameController<P, S> {
    /// Starts a fresh game.
    #[instrument(skip_all, fields(size = config.size()))]
    pub fn new(config: GameConfig, presenter: P, shuffler: S) -> Self {
        Self::with_layout_rng(config, presenter, shuffler, StdRng::from_os_rng())
    }

    /// Starts a fresh game whose obstacle layouts come from `layout_rng`.
    #[instrument(skip_all, fields(size = config.size()))]
    pub fn with_layout_rng(
        config: GameConfig,
        presenter: P,
        shuffler: S,
        mut layout_rng: StdRng,
    ) -> Self {
        let board = Board::generate(
            *config.size(),
            *config.initial_blocked_ratio(),
            &mut layout_rng,
        );
        let mut controller = Self {
            game: GameInPlay::from_snapshot(board).into(),
            history: Self::history_for(&config),
            presenter,
            shuffler,
            config,
            layout_rng,
        };
        info!("New game started");
        controller.notify();
        controller
    }

    /// Resumes the game in `store`, or starts fresh if there is none.
    #[instrument(skip_all)]
    pub fn resume<G: GameStore + ?Sized>(
        config: GameConfig,
        presenter: P,
        shuffler: S,
        store: &mut G,
    ) -> Self {
        let mut controller = Self::new(config, presenter, shuffler);
        if let Some(board) = store.load() {
            let game = AnyGame::from_board(board);
            info!(phase = %game.phase(), moves = game.board().move_count(), "Resuming saved game");
            controller.game = game;
            controller.notify();
            controller.announce_outcome();
        }
        controller
    }

    /// Player selects a cell to block.
    ///
    /// On success the pre-move board is pushed to the undo list and the
    /// redo list is cleared. A rejected selection changes nothing and
    /// records nothing.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] outside play, or the selection error
    /// from [`GameInPlay::select`].
    #[instrument(skip(self), fields(cell = %cell))]
    pub fn select_cell(&mut self, cell: Coordinate) -> Result<Phase, MoveError> {
        let AnyGame::InPlay(game) = &self.game else {
            debug!(phase = %self.game.phase(), "Selection ignored, game is over");
            return Err(MoveError::GameOver);
        };

        let outcome = match game.select(cell, &mut self.shuffler) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(error = %e, "Selection rejected");
                return Err(e);
            }
        };

        let snapshot = game.board().clone();
        self.history.record(snapshot);
        self.game = outcome.into();
        self.notify();
        self.announce_outcome();
        Ok(self.phase())
    }

    /// Steps back one move. Returns false if there is nothing to undo.
    ///
    /// Undo is allowed from finished games and always returns to play.
    #[instrument(skip(self))]
    pub fn request_undo(&mut self) -> bool {
        let Some(previous) = self.history.undo(self.game.board()) else {
            debug!("Nothing to undo");
            return false;
        };
        self.game = GameInPlay::from_snapshot(previous).into();
        info!(moves = self.game.board().move_count(), "Move undone");
        self.notify();
        true
    }

    /// Re-applies an undone move. Returns false if there is nothing to redo.
    #[instrument(skip(self))]
    pub fn request_redo(&mut self) -> bool {
        let Some(next) = self.history.redo(self.game.board()) else {
            debug!("Nothing to redo");
            return false;
        };
        self.game = AnyGame::from_board(next);
        info!(moves = self.game.board().move_count(), phase = %self.phase(), "Move redone");
        self.notify();
        self.announce_outcome();
        true
    }

    /// Discards history and starts a fresh board.
    #[instrument(skip(self))]
    pub fn request_reset(&mut self) {
        self.history.clear();
        let board = Board::generate(
            *self.config.size(),
            *self.config.initial_blocked_ratio(),
            &mut self.layout_rng,
        );
        self.game = GameInPlay::from_snapshot(board).into();
        info!("Game reset");
        self.notify();
    }

    /// Saves the current board to `store`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store cannot write.
    #[instrument(skip_all)]
    pub fn request_quit<G: GameStore + ?Sized>(&self, store: &mut G) -> Result<(), StoreError> {
        info!(phase = %self.phase(), "Quitting");
        store.save(self.game.board())
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.game.phase()
    }

    /// Live board.
    pub fn board(&self) -> &Board {
        self.game.board()
    }

    /// Live game.
    pub fn game(&self) -> &AnyGame {
        &self.game
    }

    /// Undo/redo history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Session configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The front end.
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// The front end, mutably.
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    fn history_for(config: &GameConfig) -> History {
        match config.history_limit() {
            Some(limit) => History::with_capacity(*limit),
            None => History::new(),
        }
    }

    fn notify(&mut self) {
        self.presenter.on_update(self.game.board());
        self.presenter.on_undo_available(self.history.can_undo());
        self.presenter.on_redo_available(self.history.can_redo());
    }

    fn announce_outcome(&mut self) {
        match &self.game {
            AnyGame::Won(game) => self.presenter.on_won(game.score()),
            AnyGame::Lost(_) => self.presenter.on_lost(),
            AnyGame::InPlay(_) => {}
        }
    }
}
