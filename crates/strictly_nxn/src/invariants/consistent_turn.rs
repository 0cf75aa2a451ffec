//! Consistent turn invariant: the player behind on marks moves next.

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: if one player has more marks, the other player is to move.
///
/// With equal counts either player may be to move, depending on who
/// opened the game.
pub struct ConsistentTurn;

impl Invariant<GameState> for ConsistentTurn {
    fn holds(game: &GameState) -> bool {
        let crosses = game.count(Player::Cross);
        let noughts = game.count(Player::Nought);

        match crosses.cmp(&noughts) {
            std::cmp::Ordering::Greater => game.turn() == Player::Nought,
            std::cmp::Ordering::Less => game.turn() == Player::Cross,
            std::cmp::Ordering::Equal => true,
        }
    }

    fn description() -> &'static str {
        "The player with fewer marks is to move"
    }
}
