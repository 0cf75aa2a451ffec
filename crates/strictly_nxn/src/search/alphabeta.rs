//! Minimax with an alpha-beta window.
//!
//! Fail-soft: a node that cannot affect its parent returns a bound rather
//! than its exact value. At the root the window is open, so the first move
//! reaching the best score and that score are exact, matching plain minimax.

use super::super::rules::move_generator;
use super::super::{GameError, GameState, Move};
use super::{Searcher, improves};

impl Searcher<'_> {
    /// Scores `state` within the `(alpha, beta)` window.
    pub(crate) fn alphabeta(
        &mut self,
        state: &GameState,
        mut alpha: i32,
        mut beta: i32,
    ) -> Result<(Option<Move>, i32), GameError> {
        if let Some(score) = self.leaf_score(state)? {
            return Ok((None, score));
        }

        let maximizing = state.turn() == self.perspective;
        let mut best = None;
        for mv in move_generator(state) {
            let child = state.apply(mv)?;
            let (_, score) = self.alphabeta(&child, alpha, beta)?;
            if improves(best, score, maximizing) {
                best = Some((mv, score));
            }

            if maximizing {
                alpha = alpha.max(score);
            } else {
                beta = beta.min(score);
            }
            if alpha >= beta {
                break;
            }
        }

        let (mv, score) = best.ok_or(GameError::NoMoveAvailable)?;
        Ok((Some(mv), score))
    }
}
