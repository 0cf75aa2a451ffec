//! Command-line interface for strictly_nxn.

use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use strictly_nxn::{Move, Player};

/// Strictly NxN - exhaustive minimax for N×N tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "strictly_nxn")]
#[command(about = "Rules engine and minimax oracle for N×N tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replay moves and print the engine's best reply
    Best {
        #[command(flatten)]
        game: GameArgs,

        /// Move played so far as ROW,COL (repeatable, in order)
        #[arg(short = 'm', long = "move", value_parser = parse_move)]
        moves: Vec<Move>,

        #[command(flatten)]
        engine: EngineArgs,

        /// Print the search report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Let the engine play both sides to the end
    Play {
        #[command(flatten)]
        game: GameArgs,

        #[command(flatten)]
        engine: EngineArgs,
    },

    /// Print every line of a board
    Lines {
        /// Board dimension
        #[arg(short, long, default_value = "3")]
        size: usize,
    },
}

/// Board options shared by the game commands
#[derive(Args, Debug)]
pub struct GameArgs {
    /// Board dimension
    #[arg(short, long, default_value = "3")]
    pub size: usize,

    /// Player who opens (X or O)
    #[arg(short, long, default_value = "X")]
    pub first: Player,
}

impl GameArgs {
    /// Rejects moves that fall outside the board.
    pub fn check_moves(&self, moves: &[Move]) -> Result<()> {
        let size = self.size;
        match moves.iter().find(|mv| mv.row >= size || mv.col >= size) {
            Some(mv) => bail!("move {} is off the {}×{} board", mv, size, size),
            None => Ok(()),
        }
    }
}

/// Search options; flags override the config file
#[derive(Args, Debug)]
pub struct EngineArgs {
    /// Path to a TOML search config
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable alpha-beta pruning
    #[arg(long)]
    pub pruning: bool,

    /// Search root moves in parallel
    #[arg(long)]
    pub parallel: bool,
}

/// Parses `ROW,COL`.
fn parse_move(s: &str) -> std::result::Result<Move, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got '{}'", s))?;
    let row = row
        .trim()
        .parse()
        .map_err(|e| format!("invalid row '{}': {}", row, e))?;
    let col = col
        .trim()
        .parse()
        .map_err(|e| format!("invalid column '{}': {}", col, e))?;
    Ok(Move::new(row, col))
}
