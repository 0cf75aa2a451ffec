//! Strictly NxN - rules and exhaustive search for N×N tic-tac-toe
//!
//! A game is won by filling a full row, column, or one of the two main
//! diagonals with a single player's marks.
//!
//! # Architecture
//!
//! - **Types**: players, moves and the immutable game state
//! - **Rules**: line enumeration, outcome classification, move generation
//! - **Contracts**: preconditions and postconditions of applying a move
//! - **Search**: minimax with optional alpha-beta pruning and root fan-out
//! - **Model**: the full operation set behind one trait
//!
//! # Example
//!
//! ```
//! use strictly_nxn::{Engine, Model, Player};
//!
//! # fn example() -> Result<(), strictly_nxn::GameError> {
//! let engine = Engine::default();
//! let game = engine.game_start(Player::Cross, 3);
//! let game = engine.apply_move(&game, engine.create_move(1, 1))?;
//! let reply = engine.find_best_move(&game)?;
//! assert!(game.piece_at(reply).is_none());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod contracts;
mod invariants;
mod lines;
mod model;
mod outcome;
mod rules;
mod search;
mod types;

// Crate-level exports - Core types
pub use action::{GameError, Move};
pub use lines::{Line, lines};
pub use outcome::Outcome;
pub use types::{GameState, Player};

// Crate-level exports - Rules
pub use rules::{check_line, game_outcome, game_over, heuristic, move_generator};

// Crate-level exports - Contracts and invariants
pub use contracts::{ApplyMoveContract, CellIsEmpty, CellOnBoard, Contract};
pub use invariants::{
    BalancedPieces, BoardInvariants, BoundedBoard, ConsistentTurn, Invariant, InvariantSet,
    InvariantViolation,
};

// Crate-level exports - Search
pub use search::{ConfigError, SearchConfig, SearchReport, find_best_move, minimax, search};

// Crate-level exports - Model
pub use model::{Engine, Model};
