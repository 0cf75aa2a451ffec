//! Winning lines of an N×N board.

use super::action::Move;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A row, column, or full-length diagonal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::From)]
#[serde(transparent)]
pub struct Line(Vec<Move>);

impl Line {
    /// Returns the cells of the line in order.
    pub fn cells(&self) -> &[Move] {
        &self.0
    }

    /// Returns the number of cells.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the line has no cells.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if `cell` lies on the line.
    pub fn contains(&self, cell: Move) -> bool {
        self.0.contains(&cell)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cells = self
            .0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "[{}]", cells)
    }
}

/// Enumerates every line of a `size`×`size` board.
///
/// Row `i` is followed immediately by column `i`; the anti-diagonal
/// and then the main diagonal come last. Yields `2 * size + 2` lines.
#[instrument(level = "trace")]
pub fn lines(size: usize) -> Vec<Line> {
    let mut result = Vec::with_capacity(2 * size + 2);

    for i in 0..size {
        result.push(Line((0..size).map(|col| Move::new(i, col)).collect()));
        result.push(Line((0..size).map(|row| Move::new(row, i)).collect()));
    }

    result.push(Line(
        (0..size).map(|row| Move::new(row, size - 1 - row)).collect(),
    ));
    result.push(Line((0..size).map(|row| Move::new(row, row)).collect()));

    result
}
