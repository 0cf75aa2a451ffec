//! Bounded board invariant: every mark lies on the board.

use super::super::GameState;
use super::Invariant;

/// Invariant: every occupied cell satisfies `row < size` and `col < size`.
pub struct BoundedBoard;

impl Invariant<GameState> for BoundedBoard {
    fn holds(game: &GameState) -> bool {
        let size = game.size();
        game.board()
            .keys()
            .all(|cell| cell.row < size && cell.col < size)
    }

    fn description() -> &'static str {
        "Every mark lies within the board"
    }
}
