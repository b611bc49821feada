//! Property tests for escape routing on generated boards.

use dotescape_core::{
    Board, Coordinate, Escape, IdentityShuffler, RandomShuffler, distance_from, escape_distance,
    find_direction,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn boards(count: u64, size: usize, ratio: f64) -> impl Iterator<Item = Board> {
    (0..count).map(move |seed| Board::generate(size, ratio, &mut StdRng::seed_from_u64(seed)))
}

#[test]
fn test_step_is_free_neighbor_on_shortest_path() {
    let mut shuffler = RandomShuffler::new(StdRng::seed_from_u64(99));
    for board in boards(200, 11, 0.35) {
        let marker = board.marker().expect("generated boards hold a marker");
        let best = escape_distance(&board);

        match find_direction(&board, &mut shuffler) {
            Escape::Step(step) => {
                assert!(marker.is_adjacent(step), "{step} is not next to {marker}");
                assert!(board.is_free(step));
                let best = best.expect("a step implies an escape exists");
                assert_eq!(distance_from(&board, step), Some(best - 1));
            }
            Escape::Encircled => assert_eq!(best, None),
        }
    }
}

#[test]
fn test_identity_shuffler_is_deterministic() {
    for board in boards(30, 9, 0.3) {
        let first = find_direction(&board, &mut IdentityShuffler);
        let second = find_direction(&board, &mut IdentityShuffler);
        assert_eq!(first, second);
    }
}

#[test]
fn test_shuffler_varies_among_equal_escapes() {
    // From the center of an open board every neighbor starts a shortest escape.
    let board = Board::new(11);
    let marker = board.marker().unwrap();
    let mut seen = std::collections::HashSet::new();
    for seed in 0..64 {
        let mut shuffler = RandomShuffler::new(StdRng::seed_from_u64(seed));
        if let Escape::Step(step) = find_direction(&board, &mut shuffler) {
            seen.insert(step);
        }
    }
    assert!(seen.len() > 1, "expected several distinct opening steps");
    assert!(seen.iter().all(|s| marker.is_adjacent(*s)));
}

#[test]
fn test_router_leaves_board_untouched() {
    let board = Board::generate(9, 0.2, &mut StdRng::seed_from_u64(3));
    let before = board.clone();
    let _ = find_direction(&board, &mut RandomShuffler::new(StdRng::seed_from_u64(4)));
    assert_eq!(board, before);
}

#[test]
fn test_neighbors_are_symmetric_across_board() {
    let size = 8;
    let board = Board::new(size);
    for cell in board.coordinates() {
        for n in cell.neighbors() {
            assert!(n.neighbors().contains(&cell), "{cell} -> {n} is one-way");
        }
    }
}

#[test]
fn test_encircled_by_ring_of_blocks() {
    let mut board = Board::new(9);
    let center = Coordinate::new(4, 4);
    let mut ring: Vec<Coordinate> = center
        .neighbors()
        .into_iter()
        .flat_map(|n| n.neighbors())
        .filter(|c| *c != center && !center.neighbors().contains(c))
        .collect();
    ring.sort();
    ring.dedup();
    for cell in ring {
        board.set_blocked(cell).unwrap();
    }

    assert_eq!(find_direction(&board, &mut IdentityShuffler), Escape::Encircled);
    assert_eq!(escape_distance(&board), None);
}
