//! Outcome of a line or of a whole game.

use super::action::GameError;
use super::lines::Line;
use super::types::Player;
use serde::{Deserialize, Serialize};

/// Classification of a line or of a game.
///
/// For a single line, `Draw` means the line holds both players' marks and
/// can no longer be completed. For a game, it means no line can.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Play continues.
    Undecided,
    /// Nobody can win.
    Draw,
    /// A player filled a line.
    Win {
        /// The winning player.
        winner: Player,
        /// The completed line.
        line: Line,
    },
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { winner, .. } => Some(*winner),
            Outcome::Undecided | Outcome::Draw => None,
        }
    }

    /// Returns the completed line if there is one.
    pub fn line(&self) -> Option<&Line> {
        match self {
            Outcome::Win { line, .. } => Some(line),
            Outcome::Undecided | Outcome::Draw => None,
        }
    }

    /// Returns true if play continues.
    pub fn is_undecided(&self) -> bool {
        matches!(self, Outcome::Undecided)
    }

    /// Scores a decided outcome from `perspective`: +1 win, -1 loss, 0 draw.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::UndefinedHeuristic`] for [`Outcome::Undecided`].
    pub fn score_for(&self, perspective: Player) -> Result<i32, GameError> {
        match self {
            Outcome::Win { winner, .. } if *winner == perspective => Ok(1),
            Outcome::Win { .. } => Ok(-1),
            Outcome::Draw => Ok(0),
            Outcome::Undecided => Err(GameError::UndefinedHeuristic),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Undecided => write!(f, "Undecided"),
            Outcome::Draw => write!(f, "Draw"),
            Outcome::Win { winner, line } => write!(f, "Player {} wins along {}", winner, line),
        }
    }
}
