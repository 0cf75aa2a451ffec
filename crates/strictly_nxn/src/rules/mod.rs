//! Game rules for N×N tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state.
//! Rules are separated from state storage so the search can reuse a
//! precomputed set of lines across the whole tree.

pub mod game;
pub mod line;
pub mod moves;

pub use game::{game_outcome, game_over, heuristic};
pub(crate) use game::outcome_over;
pub use line::check_line;
pub use moves::move_generator;
