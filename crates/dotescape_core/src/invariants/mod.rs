//! First-class invariants for the escape board.
//!
//! Invariants are logical properties that must hold throughout play.
//! They are checked after every turn in debug builds and whenever a board
//! is loaded from storage.

mod grid_shape;
mod marker_interior;
mod single_marker;

pub use grid_shape::GridShapeInvariant;
pub use marker_interior::MarkerInteriorInvariant;
pub use single_marker::SingleMarkerInvariant;

use crate::board::Board;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Implements [`InvariantSet`] for a tuple of invariants, collecting every
/// violation rather than stopping at the first.
macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let violations: Vec<InvariantViolation> = [
                    $(($inv::holds(state), $inv::description()),)+
                ]
                .into_iter()
                .filter(|(holds, _)| !holds)
                .map(|(_, description)| InvariantViolation::new(description))
                .collect();

                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(A, B);
impl_invariant_set!(A, B, C);

/// Invariants every well-formed board satisfies, in play or not.
pub type BoardInvariants = (GridShapeInvariant, SingleMarkerInvariant);

/// Invariants of a board awaiting the player's move.
pub type PlayInvariants = (
    GridShapeInvariant,
    SingleMarkerInvariant,
    MarkerInteriorInvariant,
);

/// Joins violation descriptions into one message.
pub(crate) fn describe(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(|v| v.description.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Checks [`BoardInvariants`] on `board`.
pub fn check_board(board: &Board) -> Result<(), Vec<InvariantViolation>> {
    BoardInvariants::check_all(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Coordinate;

    #[test]
    fn test_fresh_board_satisfies_play_invariants() {
        let board = Board::new(9);
        assert!(PlayInvariants::check_all(&board).is_ok());
    }

    #[test]
    fn test_escaped_marker_breaks_only_interior_invariant() {
        let mut board = Board::new(5);
        board.move_marker_to(Coordinate::new(0, 2));

        assert!(check_board(&board).is_ok());
        let violations = PlayInvariants::check_all(&board).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].description,
            MarkerInteriorInvariant::description()
        );
    }

    #[test]
    fn test_every_violation_is_reported_in_order() {
        let mut value = serde_json::to_value(Board::new(5)).unwrap();
        value["cells"] = serde_json::json!([]);
        let board: Board = serde_json::from_value(value).unwrap();

        let violations = PlayInvariants::check_all(&board).unwrap_err();
        let descriptions: Vec<&str> = violations.iter().map(|v| v.description.as_str()).collect();
        assert_eq!(
            descriptions,
            [
                GridShapeInvariant::description(),
                SingleMarkerInvariant::description(),
            ]
        );
    }

    #[test]
    fn test_describe_joins_messages() {
        let v = vec![InvariantViolation::new("a"), InvariantViolation::new("b")];
        assert_eq!(describe(&v), "a; b");
    }
}
