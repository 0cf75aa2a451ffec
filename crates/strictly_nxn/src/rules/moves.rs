//! Legal move generation.

use super::super::{GameState, Move};
use tracing::instrument;

/// Returns every empty cell of the board in row-major order.
#[instrument(level = "trace", skip(state), fields(size = state.size()))]
pub fn move_generator(state: &GameState) -> Vec<Move> {
    let size = state.size();
    let mut moves = Vec::with_capacity(size * size);
    for row in 0..size {
        for col in 0..size {
            let cell = Move::new(row, col);
            if state.piece_at(cell).is_none() {
                moves.push(cell);
            }
        }
    }
    moves
}
