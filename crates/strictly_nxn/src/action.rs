//! Moves and the errors raised while applying or searching them.

use serde::{Deserialize, Serialize};

/// A cell coordinate, used both as a move and as a board key.
///
/// Coordinates are zero-based. Construction does not check them against
/// any board; bounds are the caller's responsibility. Ordering is row-major.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_new::new,
)]
pub struct Move {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Error that can occur when applying a move or searching a position.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The cell is already occupied.
    #[display("Cell {} is already occupied", _0)]
    IllegalMove(Move),

    /// The cell lies outside the board.
    #[display("Cell {} is off a {}×{} board", mv, size, size)]
    OffBoard {
        /// The rejected move.
        mv: Move,
        /// Board dimension.
        size: usize,
    },

    /// A best move was requested for a finished game.
    #[display("No move available: the game is already over")]
    NoMoveAvailable,

    /// A heuristic was requested for an undecided game.
    #[display("Heuristic is undefined while the game is undecided")]
    UndefinedHeuristic,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for GameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_order_row_major() {
        let mut moves = vec![Move::new(1, 0), Move::new(0, 2), Move::new(0, 1)];
        moves.sort();
        assert_eq!(moves, vec![Move::new(0, 1), Move::new(0, 2), Move::new(1, 0)]);
    }

    #[test]
    fn test_error_messages() {
        let err = GameError::IllegalMove(Move::new(2, 1));
        assert_eq!(err.to_string(), "Cell (2, 1) is already occupied");
        let err = GameError::OffBoard {
            mv: Move::new(3, 0),
            size: 3,
        };
        assert_eq!(err.to_string(), "Cell (3, 0) is off a 3×3 board");
        assert!(GameError::NoMoveAvailable.to_string().contains("over"));
    }
}
