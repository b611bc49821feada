//! Scenario tests for the game controller.

use dotescape_core::{
    Board, Coordinate, GameConfig, GameController, GameStore, IdentityShuffler, MemoryStore,
    MoveError, Phase, Presenter,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Records every notification.
#[derive(Debug, Default)]
struct Recorder {
    updates: usize,
    last_board: Option<Board>,
    undo_available: bool,
    redo_available: bool,
    won: Option<u32>,
    lost: usize,
}

impl Presenter for Recorder {
    fn on_update(&mut self, board: &Board) {
        self.updates += 1;
        self.last_board = Some(board.clone());
    }

    fn on_undo_available(&mut self, available: bool) {
        self.undo_available = available;
    }

    fn on_redo_available(&mut self, available: bool) {
        self.redo_available = available;
    }

    fn on_won(&mut self, move_count: u32) {
        self.won = Some(move_count);
    }

    fn on_lost(&mut self) {
        self.lost += 1;
    }
}

type Controller = GameController<Recorder, IdentityShuffler>;

fn open_config(size: usize) -> GameConfig {
    GameConfig::default().with_size(size).with_blocked_ratio(0.0)
}

fn open_game(size: usize) -> Controller {
    GameController::with_layout_rng(
        open_config(size),
        Recorder::default(),
        IdentityShuffler,
        StdRng::seed_from_u64(0),
    )
}

/// Resumes a 7x7 game whose marker has a single free neighbor, (4, 4).
fn nearly_trapped_game() -> Controller {
    let mut board = Board::new(7);
    for cell in [(3, 2), (4, 2), (2, 3), (4, 3), (3, 4)] {
        board.set_blocked(Coordinate::from(cell)).unwrap();
    }
    let mut store = MemoryStore::with_board(board);
    GameController::resume(open_config(7), Recorder::default(), IdentityShuffler, &mut store)
}

#[test]
fn test_new_game_notifies_presenter() {
    let game = open_game(7);
    let recorder = game.presenter();
    assert_eq!(recorder.updates, 1);
    assert_eq!(recorder.last_board.as_ref(), Some(&Board::new(7)));
    assert!(!recorder.undo_available);
    assert!(!recorder.redo_available);
    assert_eq!(game.phase(), Phase::AwaitingPlayerMove);
}

#[test]
fn test_select_records_history() {
    let mut game = open_game(9);
    let start = game.board().clone();

    assert_eq!(game.select_cell(Coordinate::new(0, 0)), Ok(Phase::AwaitingPlayerMove));
    assert_eq!(game.board().move_count(), 1);
    assert_eq!(game.history().undo_len(), 1);
    assert!(game.presenter().undo_available);
    assert_ne!(game.board(), &start);
}

#[test]
fn test_undo_then_redo_is_identity() {
    let mut game = open_game(9);
    game.select_cell(Coordinate::new(0, 0)).unwrap();
    let after_one = game.board().clone();
    game.select_cell(Coordinate::new(8, 8)).unwrap();
    let after_two = game.board().clone();

    assert!(game.request_undo());
    assert_eq!(game.board(), &after_one);
    assert_eq!(game.presenter().last_board.as_ref(), Some(&after_one));
    assert!(game.presenter().redo_available);

    assert!(game.request_redo());
    assert_eq!(game.board(), &after_two);
    assert!(!game.presenter().redo_available);

    assert!(game.request_undo());
    assert!(game.request_undo());
    assert_eq!(game.board(), &Board::new(9));
    assert!(!game.presenter().undo_available);
}

#[test]
fn test_undo_on_fresh_game_is_noop() {
    let mut game = open_game(7);
    let updates = game.presenter().updates;
    assert!(!game.request_undo());
    assert!(!game.request_redo());
    assert_eq!(game.presenter().updates, updates);
}

#[test]
fn test_invalid_selection_records_nothing() {
    let mut game = open_game(9);
    game.select_cell(Coordinate::new(0, 0)).unwrap();
    game.select_cell(Coordinate::new(8, 8)).unwrap();
    game.request_undo();
    let board = game.board().clone();

    assert_eq!(
        game.select_cell(Coordinate::new(0, 0)),
        Err(MoveError::CellUnavailable(Coordinate::new(0, 0)))
    );
    assert_eq!(
        game.select_cell(Coordinate::new(-1, 3)),
        Err(MoveError::OutOfRange(Coordinate::new(-1, 3)))
    );

    assert_eq!(game.board(), &board);
    assert_eq!(game.history().undo_len(), 1);
    assert!(game.history().can_redo(), "rejected selection must not clear redo");
}

#[test]
fn test_new_selection_clears_redo() {
    let mut game = open_game(9);
    game.select_cell(Coordinate::new(0, 0)).unwrap();
    game.request_undo();
    assert!(game.history().can_redo());

    game.select_cell(Coordinate::new(8, 8)).unwrap();
    assert!(!game.history().can_redo());
}

#[test]
fn test_win_reports_move_count() {
    let mut game = open_game(5);
    game.select_cell(Coordinate::new(4, 4)).unwrap();
    assert_eq!(game.select_cell(Coordinate::new(3, 4)), Ok(Phase::Won));
    assert_eq!(game.presenter().won, Some(2));

    assert_eq!(game.select_cell(Coordinate::new(0, 4)), Err(MoveError::GameOver));
}

#[test]
fn test_undo_from_won_returns_to_play() {
    let mut game = open_game(5);
    game.select_cell(Coordinate::new(4, 4)).unwrap();
    game.select_cell(Coordinate::new(3, 4)).unwrap();
    assert_eq!(game.phase(), Phase::Won);

    assert!(game.request_undo());
    assert_eq!(game.phase(), Phase::AwaitingPlayerMove);
    assert_eq!(game.board().move_count(), 1);

    assert!(game.request_redo());
    assert_eq!(game.phase(), Phase::Won);
}

#[test]
fn test_lose_then_reset() {
    let mut game = nearly_trapped_game();
    assert_eq!(game.phase(), Phase::AwaitingPlayerMove);

    assert_eq!(game.select_cell(Coordinate::new(4, 4)), Ok(Phase::Lost));
    assert_eq!(game.presenter().lost, 1);
    assert_eq!(game.board().marker(), Some(Coordinate::new(3, 3)));

    game.request_reset();
    assert_eq!(game.phase(), Phase::AwaitingPlayerMove);
    assert_eq!(game.board(), &Board::new(7));
    assert!(!game.history().can_undo());
    assert!(!game.presenter().undo_available);
}

#[test]
fn test_resume_finished_game_announces_outcome() {
    let mut trapped = Board::new(7);
    for n in Coordinate::new(3, 3).neighbors() {
        trapped.set_blocked(n).unwrap();
    }
    let mut store = MemoryStore::with_board(trapped.clone());
    let game: Controller =
        GameController::resume(open_config(7), Recorder::default(), IdentityShuffler, &mut store);

    assert_eq!(game.phase(), Phase::Lost);
    assert_eq!(game.board(), &trapped);
    assert_eq!(game.presenter().lost, 1);
    assert!(store.peek().is_none());
}

#[test]
fn test_quit_saves_current_board() {
    let mut game = open_game(9);
    game.select_cell(Coordinate::new(0, 0)).unwrap();

    let mut store = MemoryStore::new();
    game.request_quit(&mut store).unwrap();
    assert_eq!(store.peek(), Some(game.board()));

    let resumed: Controller =
        GameController::resume(open_config(9), Recorder::default(), IdentityShuffler, &mut store);
    assert_eq!(resumed.board(), game.board());
    assert!(!resumed.history().can_undo());
}

#[test]
fn test_history_limit_drops_oldest() {
    let config = open_config(11).with_history_limit(Some(2));
    let mut game = GameController::with_layout_rng(
        config,
        Recorder::default(),
        IdentityShuffler,
        StdRng::seed_from_u64(0),
    );
    for cell in [(0, 0), (10, 10), (0, 10)] {
        game.select_cell(Coordinate::from(cell)).unwrap();
    }

    assert_eq!(game.history().undo_len(), 2);
    assert!(game.request_undo());
    assert!(game.request_undo());
    assert!(!game.request_undo());
    assert_eq!(game.board().move_count(), 1);
}

#[test]
fn test_memory_store_load_consumes() {
    let mut store = MemoryStore::with_board(Board::new(5));
    assert!(store.load().is_some());
    assert!(store.load().is_none());
}
