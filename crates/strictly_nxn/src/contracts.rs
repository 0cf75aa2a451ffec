//! Contract-based validation of state transitions.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{GameError, Move};
use super::invariants::{BoardInvariants, InvariantSet};
use super::types::GameState;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), GameError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), GameError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the target cell must lie on the board.
pub struct CellOnBoard;

impl CellOnBoard {
    /// Fails with [`GameError::OffBoard`] if `mv` is outside the board.
    #[instrument(level = "trace", skip(game))]
    pub fn check(mv: &Move, game: &GameState) -> Result<(), GameError> {
        let size = game.size();
        if mv.row < size && mv.col < size {
            Ok(())
        } else {
            warn!(%mv, size, "Move off the board");
            Err(GameError::OffBoard { mv: *mv, size })
        }
    }
}

/// Precondition: the target cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with [`GameError::IllegalMove`] if `mv` is occupied.
    #[instrument(level = "trace", skip(game))]
    pub fn check(mv: &Move, game: &GameState) -> Result<(), GameError> {
        if game.piece_at(*mv).is_some() {
            Err(GameError::IllegalMove(*mv))
        } else {
            Ok(())
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Apply Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placing a mark.
///
/// Preconditions:
/// - Cell must lie on the board
/// - Cell must be empty
///
/// Postconditions:
/// - Every earlier mark is still in place and exactly one was added
/// - The turn passed to the opponent
/// - Board invariants hold
pub struct ApplyMoveContract;

impl Contract<GameState, Move> for ApplyMoveContract {
    fn pre(game: &GameState, action: &Move) -> Result<(), GameError> {
        CellOnBoard::check(action, game)?;
        CellIsEmpty::check(action, game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), GameError> {
        let kept = before
            .board()
            .iter()
            .all(|(cell, player)| after.board().get(cell) == Some(player));
        if !kept || after.board().len() != before.board().len() + 1 {
            warn!(
                before = before.board().len(),
                after = after.board().len(),
                "Board not monotonic"
            );
            return Err(GameError::InvariantViolation(
                "Postcondition failed: board must grow by exactly one mark".to_string(),
            ));
        }

        if after.turn() != before.turn().opponent() {
            return Err(GameError::InvariantViolation(
                "Postcondition failed: turn must pass to the opponent".to_string(),
            ));
        }

        BoardInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            GameError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;
    use std::collections::BTreeMap;

    #[test]
    fn test_precondition_empty_cell() {
        let game = GameState::new(Player::Cross, 3);
        assert!(ApplyMoveContract::pre(&game, &Move::new(1, 1)).is_ok());
    }

    #[test]
    fn test_precondition_occupied_cell() {
        let game = GameState::new(Player::Cross, 3)
            .apply(Move::new(1, 1))
            .unwrap();
        assert!(matches!(
            ApplyMoveContract::pre(&game, &Move::new(1, 1)),
            Err(GameError::IllegalMove(_))
        ));
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let game = GameState::new(Player::Cross, 3);
        let after = game.apply(Move::new(0, 0)).unwrap();
        assert!(ApplyMoveContract::post(&game, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_removed_mark() {
        let game = GameState::new(Player::Cross, 3)
            .apply(Move::new(0, 0))
            .unwrap();
        let mut board = BTreeMap::new();
        board.insert(Move::new(2, 2), Player::Nought);
        let corrupted = GameState::from_parts(3, Player::Cross, board);

        assert!(ApplyMoveContract::post(&game, &corrupted).is_err());
    }

    #[test]
    fn test_postcondition_detects_stuck_turn() {
        let game = GameState::new(Player::Cross, 3);
        let mut board = BTreeMap::new();
        board.insert(Move::new(0, 0), Player::Cross);
        let corrupted = GameState::from_parts(3, Player::Cross, board);

        assert!(ApplyMoveContract::post(&game, &corrupted).is_err());
    }

    #[test]
    fn test_off_board_move_rejected() {
        let game = GameState::new(Player::Cross, 3);
        assert_eq!(
            game.apply(Move::new(5, 5)),
            Err(GameError::OffBoard {
                mv: Move::new(5, 5),
                size: 3,
            })
        );
        assert!(matches!(
            game.apply(Move::new(0, 3)),
            Err(GameError::OffBoard { .. })
        ));
    }

    #[test]
    fn test_off_board_move_leaves_legal_moves_intact() {
        let game = GameState::new(Player::Cross, 3);
        assert!(game.apply(Move::new(3, 0)).is_err());
        assert_eq!(crate::move_generator(&game).len(), 9);
        assert_eq!(game.turn(), Player::Cross);
    }
}
