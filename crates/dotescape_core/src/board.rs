//! Mutable board state: the cell grid, the marker and the move counter.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::error::BoardError;
use crate::geometry::Coordinate;
use crate::types::CellStatus;

/// Smallest board on which the game is meaningful.
pub const MIN_BOARD_SIZE: usize = 5;

/// Largest supported board.
pub const MAX_BOARD_SIZE: usize = 99;

/// Square board of hex-connected cells.
///
/// Cells are stored row-major in a flat vector, so cloning a board copies
/// the whole grid and a clone never aliases the original. Undo/redo
/// snapshots are plain clones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<CellStatus>,
    marker: Option<Coordinate>,
    move_count: u32,
}

impl Board {
    /// Creates a board with every cell free and the marker at the center.
    ///
    /// Sizes outside [`MIN_BOARD_SIZE`]..=[`MAX_BOARD_SIZE`] are clamped.
    #[instrument]
    pub fn new(size: usize) -> Self {
        let size = if size < MIN_BOARD_SIZE {
            warn!(size, min = MIN_BOARD_SIZE, "Board size too small, using minimum");
            MIN_BOARD_SIZE
        } else if size > MAX_BOARD_SIZE {
            warn!(size, max = MAX_BOARD_SIZE, "Board size too large, using maximum");
            MAX_BOARD_SIZE
        } else {
            size
        };

        let mut board = Self {
            size,
            cells: vec![CellStatus::Free; size * size],
            marker: None,
            move_count: 0,
        };
        board.move_marker_to(Self::start_for(size));
        board
    }

    /// Creates a board with a random obstacle pattern.
    ///
    /// Every interior cell except the marker's start is blocked independently
    /// with probability `blocked_ratio`. The border ring always starts free.
    #[instrument(skip(rng))]
    pub fn generate<R: Rng + ?Sized>(size: usize, blocked_ratio: f64, rng: &mut R) -> Self {
        let mut board = Self::new(size);
        let ratio = if blocked_ratio.is_nan() {
            0.0
        } else {
            blocked_ratio.clamp(0.0, 1.0)
        };
        let start = Self::start_for(board.size);

        let interior: Vec<Coordinate> = board
            .coordinates()
            .filter(|c| !c.is_on_border(board.size) && *c != start)
            .collect();

        let mut blocked = 0usize;
        for coord in interior {
            if rng.random_bool(ratio)
                && let Some(idx) = board.index(coord)
            {
                board.cells[idx] = CellStatus::Blocked;
                blocked += 1;
            }
        }

        debug!(size = board.size, blocked, "Generated obstacle pattern");
        board
    }

    /// Restores the deterministic starting configuration for `size`.
    #[instrument(skip(self))]
    pub fn reset(&mut self, size: usize) {
        *self = Self::new(size);
    }

    /// Restores a randomized starting configuration for `size`.
    #[instrument(skip(self, rng))]
    pub fn reset_with<R: Rng + ?Sized>(&mut self, size: usize, blocked_ratio: f64, rng: &mut R) {
        *self = Self::generate(size, blocked_ratio, rng);
    }

    /// Marker start cell for a board of `size`.
    pub fn start_for(size: usize) -> Coordinate {
        let mid = (size / 2) as i32;
        Coordinate::new(mid, mid)
    }

    /// Board width and height.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Marker position, or `None` once it has left the board.
    pub fn marker(&self) -> Option<Coordinate> {
        self.marker
    }

    /// Number of completed player turns.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Whether `coord` lies on this board.
    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.is_within(self.size)
    }

    /// Whether `coord` is on this board's outer ring.
    pub fn is_on_border(&self, coord: Coordinate) -> bool {
        coord.is_on_border(self.size)
    }

    /// Flat index of `coord`, or `None` when off the board.
    pub(crate) fn index(&self, coord: Coordinate) -> Option<usize> {
        self.contains(coord)
            .then(|| coord.row as usize * self.size + coord.col as usize)
    }

    /// Status of the cell at `coord`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfRange`] if `coord` is not on the board.
    pub fn status(&self, coord: Coordinate) -> Result<CellStatus, BoardError> {
        self.index(coord)
            .and_then(|idx| self.cells.get(idx).copied())
            .ok_or(BoardError::OutOfRange(coord))
    }

    /// Whether the cell at `coord` is on the board and free.
    pub fn is_free(&self, coord: Coordinate) -> bool {
        matches!(self.status(coord), Ok(CellStatus::Free))
    }

    /// Blocks a free cell.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidMove`] if the cell is blocked, holds the
    /// marker, or lies outside the board. The board is unchanged on error.
    #[instrument(skip(self), fields(coord = %coord))]
    pub fn set_blocked(&mut self, coord: Coordinate) -> Result<(), BoardError> {
        match self.index(coord).and_then(|idx| self.cells.get_mut(idx)) {
            Some(cell) if *cell == CellStatus::Free => {
                *cell = CellStatus::Blocked;
                debug!("Cell blocked");
                Ok(())
            }
            _ => Err(BoardError::InvalidMove(coord)),
        }
    }

    /// Moves the marker to `coord`.
    ///
    /// The previous marker cell becomes free. An off-board `coord` records
    /// the marker as having left the board. No adjacency check is made.
    #[instrument(skip(self), fields(coord = %coord))]
    pub fn move_marker_to(&mut self, coord: Coordinate) {
        if let Some(cell) = self
            .marker
            .and_then(|m| self.index(m))
            .and_then(|idx| self.cells.get_mut(idx))
        {
            *cell = CellStatus::Free;
        }

        self.marker = match self.index(coord).and_then(|idx| self.cells.get_mut(idx)) {
            Some(cell) => {
                *cell = CellStatus::Occupied;
                Some(coord)
            }
            None => {
                debug!("Marker left the board");
                None
            }
        };
    }

    /// Counts one completed player turn.
    pub(crate) fn record_move(&mut self) {
        self.move_count += 1;
    }

    /// All on-board coordinates, row-major.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + use<> {
        let size = self.size as i32;
        (0..size).flat_map(move |row| (0..size).map(move |col| Coordinate::new(col, row)))
    }

    /// All cells with their coordinates, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Coordinate, CellStatus)> + '_ {
        self.coordinates().zip(self.cells.iter().copied())
    }

    /// Raw grid length; equals `size * size` for a well-formed board.
    pub(crate) fn grid_len(&self) -> usize {
        self.cells.len()
    }

    /// Free cells the player may block.
    pub fn free_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells()
            .filter(|(_, status)| *status == CellStatus::Free)
            .map(|(coord, _)| coord)
    }

    /// On-board neighbors of `coord` that are free.
    pub fn free_neighbors(&self, coord: Coordinate) -> impl Iterator<Item = Coordinate> + '_ {
        coord.neighbors().into_iter().filter(|n| self.is_free(*n))
    }

    /// Parses a layout written as rows of `.`, `#` and `@` characters.
    ///
    /// Whitespace is ignored, so the offset output of [`Board`]'s `Display`
    /// parses back. The board must be square and hold at most one marker.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Malformed`] on ragged rows, unknown symbols or
    /// more than one marker.
    #[instrument(skip(layout))]
    pub fn from_ascii(layout: &str) -> Result<Self, BoardError> {
        let rows: Vec<Vec<char>> = layout
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();

        let size = rows.len();
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(BoardError::Malformed(format!(
                "{} rows, need between {} and {}",
                size, MIN_BOARD_SIZE, MAX_BOARD_SIZE
            )));
        }

        let mut cells = Vec::with_capacity(size * size);
        let mut marker = None;
        for (row, line) in rows.iter().enumerate() {
            if line.len() != size {
                return Err(BoardError::Malformed(format!(
                    "row {} has {} cells, expected {}",
                    row,
                    line.len(),
                    size
                )));
            }
            for (col, c) in line.iter().enumerate() {
                let status = CellStatus::from_symbol(*c)
                    .ok_or_else(|| BoardError::Malformed(format!("unknown symbol '{}'", c)))?;
                if status == CellStatus::Occupied {
                    if marker.is_some() {
                        return Err(BoardError::Malformed("more than one marker".to_string()));
                    }
                    marker = Some(Coordinate::new(col as i32, row as i32));
                }
                cells.push(status);
            }
        }

        Ok(Self {
            size,
            cells,
            marker,
            move_count: 0,
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(MIN_BOARD_SIZE)
    }
}

/// Renders one row per line, odd rows shifted half a cell right.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, line) in self.cells.chunks(self.size.max(1)).enumerate() {
            if row % 2 == 1 {
                write!(f, " ")?;
            }
            let symbols: Vec<String> = line.iter().map(|s| s.symbol().to_string()).collect();
            writeln!(f, "{}", symbols.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_new_board_has_centered_marker() {
        let board = Board::new(7);
        assert_eq!(board.marker(), Some(Coordinate::new(3, 3)));
        assert_eq!(board.status(Coordinate::new(3, 3)), Ok(CellStatus::Occupied));
        assert_eq!(board.move_count(), 0);
        assert_eq!(board.free_cells().count(), 48);
    }

    #[test]
    fn test_status_out_of_range() {
        let board = Board::new(5);
        assert_eq!(
            board.status(Coordinate::new(5, 0)),
            Err(BoardError::OutOfRange(Coordinate::new(5, 0)))
        );
    }

    #[test]
    fn test_set_blocked_rejects_non_free() {
        let mut board = Board::new(5);
        let target = Coordinate::new(1, 1);
        assert!(board.set_blocked(target).is_ok());
        assert_eq!(board.set_blocked(target), Err(BoardError::InvalidMove(target)));

        let center = Coordinate::new(2, 2);
        assert_eq!(board.set_blocked(center), Err(BoardError::InvalidMove(center)));

        let outside = Coordinate::new(-1, 2);
        assert_eq!(board.set_blocked(outside), Err(BoardError::InvalidMove(outside)));
    }

    #[test]
    fn test_move_marker_frees_previous_cell() {
        let mut board = Board::new(5);
        board.move_marker_to(Coordinate::new(1, 1));
        assert_eq!(board.status(Coordinate::new(2, 2)), Ok(CellStatus::Free));
        assert_eq!(board.status(Coordinate::new(1, 1)), Ok(CellStatus::Occupied));
        assert_eq!(board.marker(), Some(Coordinate::new(1, 1)));
    }

    #[test]
    fn test_move_marker_off_board() {
        let mut board = Board::new(5);
        board.move_marker_to(Coordinate::new(-1, -1));
        assert_eq!(board.marker(), None);
        assert!(board.cells().all(|(_, s)| s != CellStatus::Occupied));
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Board::new(6);
        let mut copy = original.clone();
        assert_eq!(copy, original);

        copy.set_blocked(Coordinate::new(1, 1)).unwrap();
        copy.move_marker_to(Coordinate::new(2, 2));
        copy.record_move();

        assert_ne!(copy, original);
        assert_eq!(original.status(Coordinate::new(1, 1)), Ok(CellStatus::Free));
        assert_eq!(original.marker(), Some(Coordinate::new(3, 3)));
        assert_eq!(original.move_count(), 0);
    }

    #[test]
    fn test_generate_keeps_border_and_start_free() {
        let mut rng = StdRng::seed_from_u64(7);
        let board = Board::generate(11, 0.5, &mut rng);
        for (coord, status) in board.cells() {
            if board.is_on_border(coord) {
                assert_eq!(status, CellStatus::Free, "border cell {coord} blocked");
            }
        }
        assert_eq!(board.marker(), Some(Coordinate::new(5, 5)));
        assert!(board.cells().any(|(_, s)| s == CellStatus::Blocked));
    }

    #[test]
    fn test_new_clamps_size_to_supported_range() {
        assert_eq!(Board::new(2).size(), MIN_BOARD_SIZE);
        let board = Board::new(100_000);
        assert_eq!(board.size(), MAX_BOARD_SIZE);
        assert_eq!(board.cells().count(), MAX_BOARD_SIZE * MAX_BOARD_SIZE);
    }

    #[test]
    fn test_reset_restores_start() {
        let mut board = Board::new(5);
        board.set_blocked(Coordinate::new(1, 1)).unwrap();
        board.move_marker_to(Coordinate::new(3, 3));
        board.record_move();

        board.reset(5);
        assert_eq!(board, Board::new(5));
    }

    #[test]
    fn test_display_parses_back() {
        let mut board = Board::new(5);
        board.set_blocked(Coordinate::new(0, 1)).unwrap();
        board.set_blocked(Coordinate::new(3, 4)).unwrap();

        let parsed = Board::from_ascii(&board.to_string()).unwrap();
        assert_eq!(parsed, board);
    }

    #[test]
    fn test_from_ascii_rejects_ragged_rows() {
        let layout = ". . . . .\n. . . .\n. . @ . .\n. . . . .\n. . . . .";
        assert!(matches!(Board::from_ascii(layout), Err(BoardError::Malformed(_))));
    }
}
