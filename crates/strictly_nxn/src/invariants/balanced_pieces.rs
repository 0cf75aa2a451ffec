//! Balanced pieces invariant: mark counts differ by at most one.

use super::super::{GameState, Player};
use super::Invariant;
use tracing::warn;

/// Invariant: the two players' mark counts differ by at most one.
///
/// Strict alternation from either first player keeps the first mover at
/// most one mark ahead.
pub struct BalancedPieces;

impl Invariant<GameState> for BalancedPieces {
    fn holds(game: &GameState) -> bool {
        let crosses = game.count(Player::Cross);
        let noughts = game.count(Player::Nought);

        let valid = crosses.abs_diff(noughts) <= 1;
        if !valid {
            warn!(crosses, noughts, "Piece balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "Mark counts differ by at most one"
    }
}
