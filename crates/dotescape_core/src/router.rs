//! Escape routing: where the marker steps next.
//!
//! The router runs a breadth-first search from the marker toward the border
//! through free cells. Each branch carries its *anchor*, the first step out
//! of the marker's cell, so the first branch to touch the border yields the
//! opening move of a shortest escape. The marker's own neighbors are
//! explored in shuffled order, which makes equally short escapes vary from
//! game to game without ever making the chosen escape longer.

use std::collections::VecDeque;

use derive_new::new;
use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::board::Board;
use crate::geometry::Coordinate;

/// Orders candidate cells before they are explored.
pub trait Shuffler {
    /// Reorders `cells` in place.
    fn shuffle(&mut self, cells: &mut [Coordinate]);
}

/// Uniform random shuffle backed by any [`Rng`].
#[derive(Debug, Clone, new)]
pub struct RandomShuffler<R> {
    rng: R,
}

impl RandomShuffler<ThreadRng> {
    /// Shuffler drawing from the thread-local generator.
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng> Shuffler for RandomShuffler<R> {
    fn shuffle(&mut self, cells: &mut [Coordinate]) {
        cells.shuffle(&mut self.rng);
    }
}

/// Leaves cells in [`HexDirection`](crate::HexDirection) order.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityShuffler;

impl Shuffler for IdentityShuffler {
    fn shuffle(&mut self, _cells: &mut [Coordinate]) {}
}

/// Result of an escape search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Escape {
    /// The marker's next step, always one of its direct neighbors.
    Step(Coordinate),
    /// No free path reaches the border.
    Encircled,
}

impl Escape {
    /// The step, if any.
    pub fn step(self) -> Option<Coordinate> {
        match self {
            Self::Step(c) => Some(c),
            Self::Encircled => None,
        }
    }
}

/// Visited set: a cell is obstructed once it is blocked, holds the marker,
/// or has already been queued.
struct Obstructions {
    size: usize,
    cells: Vec<bool>,
}

impl Obstructions {
    fn from_board(board: &Board) -> Self {
        Self {
            size: board.size(),
            cells: board.cells().map(|(_, status)| !status.is_free()).collect(),
        }
    }

    fn idx(&self, c: Coordinate) -> Option<usize> {
        c.is_within(self.size)
            .then(|| c.row as usize * self.size + c.col as usize)
    }

    fn is_open(&self, c: Coordinate) -> bool {
        self.idx(c)
            .and_then(|i| self.cells.get(i))
            .is_some_and(|obstructed| !*obstructed)
    }

    fn close(&mut self, c: Coordinate) {
        if let Some(cell) = self.idx(c).and_then(|i| self.cells.get_mut(i)) {
            *cell = true;
        }
    }

    /// Open neighbors of `c`, shuffled.
    fn open_neighbors<S: Shuffler + ?Sized>(&self, c: Coordinate, shuffler: &mut S) -> Vec<Coordinate> {
        let mut out: Vec<Coordinate> = c
            .neighbors()
            .into_iter()
            .filter(|n| self.is_open(*n))
            .collect();
        shuffler.shuffle(&mut out);
        out
    }
}

/// Finds the marker's first step along a shortest escape to the border.
///
/// The marker is expected to be on an interior cell; callers treat a marker
/// already on the border as escaped. A board whose marker has left returns
/// [`Escape::Encircled`].
#[instrument(skip_all, fields(marker = ?board.marker()))]
pub fn find_direction<S: Shuffler + ?Sized>(board: &Board, shuffler: &mut S) -> Escape {
    let Some(marker) = board.marker() else {
        warn!("Escape requested with no marker on the board");
        return Escape::Encircled;
    };

    let size = board.size();
    let mut blocked = Obstructions::from_board(board);
    let mut queue: VecDeque<(Coordinate, Coordinate)> = VecDeque::new();

    for first in blocked.open_neighbors(marker, shuffler) {
        if first.is_on_border(size) {
            debug!(step = %first, "Border one step away");
            return Escape::Step(first);
        }
        queue.push_back((first, first));
        blocked.close(first);
    }

    while let Some((frontier, anchor)) = queue.pop_front() {
        for next in blocked.open_neighbors(frontier, shuffler) {
            if next.is_on_border(size) {
                debug!(step = %anchor, exit = %next, "Escape found");
                return Escape::Step(anchor);
            }
            queue.push_back((next, anchor));
            blocked.close(next);
        }
    }

    debug!("Marker is encircled");
    Escape::Encircled
}

/// Hop count of a shortest free path from the marker to the border.
///
/// Returns `Some(0)` when the marker is on the border and `None` when it is
/// encircled or off the board. Deterministic; independent of
/// [`find_direction`].
#[instrument(skip_all)]
pub fn escape_distance(board: &Board) -> Option<usize> {
    let start = board.marker()?;
    distance_from(board, start)
}

/// Shortest free-path hop count from `start` to the border, treating
/// `start` itself as passable.
pub fn distance_from(board: &Board, start: Coordinate) -> Option<usize> {
    if !board.contains(start) {
        return None;
    }
    if board.is_on_border(start) {
        return Some(0);
    }

    let size = board.size();
    let mut seen = vec![false; size * size];
    let mark = |seen: &mut Vec<bool>, c: Coordinate| seen[c.row as usize * size + c.col as usize] = true;
    mark(&mut seen, start);

    let mut queue = VecDeque::from([(start, 0usize)]);
    while let Some((cell, dist)) = queue.pop_front() {
        for n in board.free_neighbors(cell) {
            let idx = n.row as usize * size + n.col as usize;
            if seen[idx] {
                continue;
            }
            if board.is_on_border(n) {
                return Some(dist + 1);
            }
            seen[idx] = true;
            queue.push_back((n, dist + 1));
        }
    }
    None
}
