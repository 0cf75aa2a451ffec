//! Exhaustive game-tree search.
//!
//! Every reachable terminal state below the root is scored +1, -1 or 0 from
//! a fixed perspective. Nodes where the perspective is to move take the
//! maximum child score, the others the minimum. Ties go to the first move in
//! row-major order, so results are reproducible.
//!
//! Alpha-beta pruning and parallel root fan-out are switched on through
//! [`SearchConfig`]. Neither changes the chosen move or its score.

mod alphabeta;
mod config;
mod minimax;

pub use config::{ConfigError, SearchConfig};

use super::rules::{game_over, move_generator, outcome_over};
use super::{GameError, GameState, Line, Move, Player, lines};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Result of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    /// Best move found, or `None` if the root is terminal.
    pub best_move: Option<Move>,
    /// Score of the best move from the searching perspective.
    pub score: i32,
    /// Total nodes visited, root included.
    pub nodes: u64,
}

/// Walks one tree from a fixed perspective, counting visited nodes.
pub(crate) struct Searcher<'a> {
    lines: &'a [Line],
    perspective: Player,
    nodes: u64,
}

impl<'a> Searcher<'a> {
    pub(crate) fn new(lines: &'a [Line], perspective: Player) -> Self {
        Self {
            lines,
            perspective,
            nodes: 0,
        }
    }

    /// Scores a terminal node, or returns `None` if play continues.
    fn leaf_score(&mut self, state: &GameState) -> Result<Option<i32>, GameError> {
        self.nodes += 1;
        let outcome = outcome_over(state, self.lines);
        if outcome.is_undecided() {
            Ok(None)
        } else {
            outcome.score_for(self.perspective).map(Some)
        }
    }

    fn run(&mut self, state: &GameState, pruning: bool) -> Result<(Option<Move>, i32), GameError> {
        if pruning {
            self.alphabeta(state, i32::MIN, i32::MAX)
        } else {
            self.minimax(state)
        }
    }
}

/// Keeps the first move reaching the extremum for the node's mover.
fn improves(best: Option<(Move, i32)>, score: i32, maximizing: bool) -> bool {
    match best {
        None => true,
        Some((_, b)) if maximizing => score > b,
        Some((_, b)) => score < b,
    }
}

/// Plain minimax from `perspective`, exploring every terminal state.
///
/// Returns `(None, score)` for a terminal state and `(Some(move), score)`
/// otherwise.
#[instrument(skip(state), fields(size = state.size(), placed = state.board().len()))]
pub fn minimax(state: &GameState, perspective: Player) -> Result<(Option<Move>, i32), GameError> {
    let lines = lines(state.size());
    Searcher::new(&lines, perspective).minimax(state)
}

/// Searches `state` from `perspective` as selected by `config`.
#[instrument(skip(state), fields(size = state.size(), placed = state.board().len()))]
pub fn search(
    state: &GameState,
    perspective: Player,
    config: &SearchConfig,
) -> Result<SearchReport, GameError> {
    let lines = lines(state.size());
    let pruning = *config.pruning();

    let report = if *config.parallel() {
        search_parallel(state, perspective, pruning, &lines)?
    } else {
        let mut searcher = Searcher::new(&lines, perspective);
        let (best_move, score) = searcher.run(state, pruning)?;
        SearchReport {
            best_move,
            score,
            nodes: searcher.nodes,
        }
    };

    debug!(
        best_move = ?report.best_move,
        score = report.score,
        nodes = report.nodes,
        "Search complete"
    );
    Ok(report)
}

/// Searches each root child on its own thread with a full window.
///
/// Children are combined in generation order with the same tie-break as
/// the sequential search.
fn search_parallel(
    state: &GameState,
    perspective: Player,
    pruning: bool,
    lines: &[Line],
) -> Result<SearchReport, GameError> {
    let mut root = Searcher::new(lines, perspective);
    if let Some(score) = root.leaf_score(state)? {
        return Ok(SearchReport {
            best_move: None,
            score,
            nodes: root.nodes,
        });
    }

    let children = move_generator(state)
        .into_par_iter()
        .map(|mv| -> Result<(Move, i32, u64), GameError> {
            let child = state.apply(mv)?;
            let mut searcher = Searcher::new(lines, perspective);
            let (_, score) = searcher.run(&child, pruning)?;
            Ok((mv, score, searcher.nodes))
        })
        .collect::<Result<Vec<_>, GameError>>()?;

    let maximizing = state.turn() == perspective;
    let mut best = None;
    let mut nodes = root.nodes;
    for (mv, score, visited) in children {
        nodes += visited;
        if improves(best, score, maximizing) {
            best = Some((mv, score));
        }
    }

    let (mv, score) = best.ok_or(GameError::NoMoveAvailable)?;
    Ok(SearchReport {
        best_move: Some(mv),
        score,
        nodes,
    })
}

/// Returns the best move for the player to move, using plain minimax.
///
/// # Errors
///
/// Returns [`GameError::NoMoveAvailable`] if the game is already over.
#[instrument(skip(state), fields(turn = %state.turn()))]
pub fn find_best_move(state: &GameState) -> Result<Move, GameError> {
    best_move_with(state, &SearchConfig::default()).map(|(mv, _)| mv)
}

/// Searches for the player to move and requires a move to exist.
pub(crate) fn best_move_with(
    state: &GameState,
    config: &SearchConfig,
) -> Result<(Move, SearchReport), GameError> {
    if game_over(state) {
        return Err(GameError::NoMoveAvailable);
    }

    let report = search(state, state.turn(), config)?;
    let mv = report.best_move.ok_or(GameError::NoMoveAvailable)?;
    info!(%mv, score = report.score, nodes = report.nodes, "Best move found");
    Ok((mv, report))
}
