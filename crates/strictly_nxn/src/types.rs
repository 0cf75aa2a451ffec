//! Core domain types for N×N tic-tac-toe.

use super::action::{GameError, Move};
use super::contracts::{ApplyMoveContract, Contract};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Crosses, shown as `X`.
    #[strum(to_string = "X", serialize = "cross")]
    Cross,
    /// Noughts, shown as `O`.
    #[strum(to_string = "O", serialize = "nought")]
    Nought,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Cross => Player::Nought,
            Player::Nought => Player::Cross,
        }
    }

    /// Returns the display symbol for this player's mark.
    pub fn symbol(self) -> &'static str {
        match self {
            Player::Cross => "X",
            Player::Nought => "O",
        }
    }
}

/// Complete game state.
///
/// States are values: applying a move builds a new state and leaves the
/// original untouched, so search branches never share a board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    /// Board dimension N.
    size: usize,
    /// Player to move next.
    turn: Player,
    /// Occupied cells. Absent keys are empty.
    board: BTreeMap<Move, Player>,
}

impl GameState {
    /// Creates a game with an empty board and `first` to move.
    ///
    /// The size is not validated; callers supply a dimension of at least 1.
    #[instrument]
    pub fn new(first: Player, size: usize) -> Self {
        Self {
            size,
            turn: first,
            board: BTreeMap::new(),
        }
    }

    /// Builds a state from raw parts without checking any invariant.
    #[cfg(test)]
    pub(crate) fn from_parts(size: usize, turn: Player, board: BTreeMap<Move, Player>) -> Self {
        Self { size, turn, board }
    }

    /// Returns the board dimension.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the player to move.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the occupied cells.
    pub fn board(&self) -> &BTreeMap<Move, Player> {
        &self.board
    }

    /// Returns the occupant of a cell, if any.
    pub fn piece_at(&self, cell: Move) -> Option<Player> {
        self.board.get(&cell).copied()
    }

    /// Returns `"X"`, `"O"` or `""` for the cell at `row`, `col`.
    pub fn piece(&self, row: usize, col: usize) -> &'static str {
        self.piece_at(Move::new(row, col))
            .map(Player::symbol)
            .unwrap_or("")
    }

    /// Counts the marks placed by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.board.values().filter(|p| **p == player).count()
    }

    /// Places the current player's mark, returning the successor state.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OffBoard`] if the cell lies outside the board and
    /// [`GameError::IllegalMove`] if it is already occupied.
    /// In debug builds the board invariants are rechecked afterwards and a
    /// failure is reported as [`GameError::InvariantViolation`].
    #[instrument(level = "trace", skip(self), fields(player = %self.turn))]
    pub fn apply(&self, mv: Move) -> Result<GameState, GameError> {
        ApplyMoveContract::pre(self, &mv)?;

        let mut board = self.board.clone();
        board.insert(mv, self.turn);
        let next = Self {
            size: self.size,
            turn: self.turn.opponent(),
            board,
        };

        #[cfg(debug_assertions)]
        ApplyMoveContract::post(self, &next)?;

        Ok(next)
    }

    /// Replays moves from an empty board.
    ///
    /// Moves are applied even after the game has been decided; the caller
    /// checks the outcome.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(first: Player, size: usize, moves: &[Move]) -> Result<GameState, GameError> {
        moves
            .iter()
            .try_fold(Self::new(first, size), |game, mv| game.apply(*mv))
    }

    /// Formats the board as a grid, `.` marking empty cells.
    pub fn render(&self) -> String {
        let mut result = String::new();
        for row in 0..self.size {
            for col in 0..self.size {
                let symbol = match self.piece(row, col) {
                    "" => ".",
                    mark => mark,
                };
                result.push_str(symbol);
                if col + 1 < self.size {
                    result.push(' ');
                }
            }
            if row + 1 < self.size {
                result.push('\n');
            }
        }
        result
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}
