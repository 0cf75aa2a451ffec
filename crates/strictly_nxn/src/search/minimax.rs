//! Plain minimax over the full game tree.

use super::super::rules::move_generator;
use super::super::{GameError, GameState, Move};
use super::{Searcher, improves};

impl Searcher<'_> {
    /// Scores `state` by visiting every terminal state below it.
    pub(crate) fn minimax(&mut self, state: &GameState) -> Result<(Option<Move>, i32), GameError> {
        if let Some(score) = self.leaf_score(state)? {
            return Ok((None, score));
        }

        let maximizing = state.turn() == self.perspective;
        let mut best = None;
        for mv in move_generator(state) {
            let child = state.apply(mv)?;
            let (_, score) = self.minimax(&child)?;
            if improves(best, score, maximizing) {
                best = Some((mv, score));
            }
        }

        // An undecided line always has an empty cell.
        let (mv, score) = best.ok_or(GameError::NoMoveAvailable)?;
        Ok((Some(mv), score))
    }
}
