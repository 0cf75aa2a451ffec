//! Classification of a single line.

use super::super::{GameState, Line, Outcome, Player};
use tracing::instrument;

/// Classifies one line of the board.
///
/// A line is won only when every cell holds the same player's mark. A line
/// holding both players' marks is dead and reported as [`Outcome::Draw`].
/// Anything else, including a line with one player's marks and a gap, is
/// [`Outcome::Undecided`]. A line with no cells can never be filled and
/// is dead.
#[instrument(level = "trace", skip(state))]
pub fn check_line(state: &GameState, line: &Line) -> Outcome {
    if line.is_empty() {
        return Outcome::Draw;
    }

    let mut crosses = 0;
    let mut noughts = 0;
    for cell in line.cells() {
        match state.piece_at(*cell) {
            Some(Player::Cross) => crosses += 1,
            Some(Player::Nought) => noughts += 1,
            None => {}
        }
    }

    let full = crosses + noughts == line.len();
    if full && noughts == 0 {
        Outcome::Win {
            winner: Player::Cross,
            line: line.clone(),
        }
    } else if full && crosses == 0 {
        Outcome::Win {
            winner: Player::Nought,
            line: line.clone(),
        }
    } else if crosses > 0 && noughts > 0 {
        Outcome::Draw
    } else {
        Outcome::Undecided
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, lines};

    fn top_row() -> Line {
        lines(3).remove(0)
    }

    fn play(first: Player, moves: &[(usize, usize)]) -> GameState {
        let moves: Vec<_> = moves.iter().map(|&(r, c)| Move::new(r, c)).collect();
        GameState::replay(first, 3, &moves).unwrap()
    }

    #[test]
    fn test_empty_line_undecided() {
        let game = GameState::new(Player::Cross, 3);
        assert_eq!(check_line(&game, &top_row()), Outcome::Undecided);
    }

    #[test]
    fn test_partial_single_player_line_is_not_a_win() {
        // X . X on the top row
        let game = play(Player::Cross, &[(0, 0), (1, 1), (0, 2)]);
        assert_eq!(check_line(&game, &top_row()), Outcome::Undecided);
    }

    #[test]
    fn test_full_line_wins() {
        let game = play(Player::Nought, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(
            check_line(&game, &top_row()),
            Outcome::Win {
                winner: Player::Nought,
                line: top_row(),
            }
        );
    }

    #[test]
    fn test_mixed_line_is_dead() {
        let game = play(Player::Cross, &[(0, 0), (0, 1)]);
        assert_eq!(check_line(&game, &top_row()), Outcome::Draw);
    }
}
