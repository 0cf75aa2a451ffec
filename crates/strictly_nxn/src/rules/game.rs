//! Whole-game outcome detection.

use super::super::{GameError, GameState, Line, Outcome, Player, lines};
use super::line::check_line;
use tracing::instrument;

/// Determines the outcome of the game.
///
/// The first won line in enumeration order decides the game. Without a win,
/// the game is drawn once every line is dead, which can happen before the
/// board is full. Otherwise play continues.
#[instrument(level = "debug", skip(state), fields(size = state.size()))]
pub fn game_outcome(state: &GameState) -> Outcome {
    outcome_over(state, &lines(state.size()))
}

/// Same as [`game_outcome`] with the lines supplied by the caller.
pub(crate) fn outcome_over(state: &GameState, lines: &[Line]) -> Outcome {
    let mut all_dead = true;
    for line in lines {
        match check_line(state, line) {
            win @ Outcome::Win { .. } => return win,
            Outcome::Draw => {}
            Outcome::Undecided => all_dead = false,
        }
    }

    if all_dead {
        Outcome::Draw
    } else {
        Outcome::Undecided
    }
}

/// Returns true once the game is won or drawn.
#[instrument(level = "debug", skip(state))]
pub fn game_over(state: &GameState) -> bool {
    !game_outcome(state).is_undecided()
}

/// Scores a finished game from `player`'s point of view.
///
/// +1 if `player` won, -1 if the opponent won, 0 for a draw.
///
/// # Errors
///
/// Returns [`GameError::UndefinedHeuristic`] if the game is undecided.
#[instrument(level = "debug", skip(state))]
pub fn heuristic(state: &GameState, player: Player) -> Result<i32, GameError> {
    game_outcome(state).score_for(player)
}
