//! Per-line summaries and the "closest to win" candidate set.

use crate::core::{BoardAccessor, Cell, Symbol};
use crate::error::Result;
use crate::lines::Line;
use crate::tracker::SymbolTally;

/// Snapshot of one live line: its dominant symbol, how many of that symbol
/// it holds, and the values it was computed from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineSummary<'a> {
    pub symbol: Symbol,
    pub count: usize,
    pub line: &'a Line,
    pub values: Vec<Cell>,
}

impl<'a> LineSummary<'a> {
    /// Read `line` from the board and summarize it.
    pub fn of<B: BoardAccessor + ?Sized>(line: &'a Line, board: &B) -> Result<Self> {
        let values = line.values(board)?;
        let (symbol, count) = SymbolTally::of(&values).dominant();
        Ok(Self {
            symbol,
            count,
            line,
            values,
        })
    }

    /// Positions (into the line) of empty cells, in line order.
    pub fn empty_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(pos, _)| pos)
    }

    /// The two endpoints as `(position, board index)`, first then last.
    #[must_use]
    pub fn endpoints(&self) -> [(usize, usize); 2] {
        [(0, self.line.first()), (self.line.len() - 1, self.line.last())]
    }

    /// Board indices of empty interior cells, in line order.
    #[must_use]
    pub fn empty_interior(&self) -> Vec<usize> {
        self.line
            .interior()
            .iter()
            .zip(&self.values[1..])
            .filter(|(_, cell)| cell.is_empty())
            .map(|(&index, _)| index)
            .collect()
    }
}

/// Live lines whose dominant count is maximal, ties kept, in live order.
///
/// Returns an empty vector when there are no live lines.
pub fn closest_to_win<'a, B: BoardAccessor + ?Sized>(
    live: &'a [Line],
    board: &B,
) -> Result<Vec<LineSummary<'a>>> {
    let summaries = live
        .iter()
        .map(|line| LineSummary::of(line, board))
        .collect::<Result<Vec<_>>>()?;

    let best = summaries.iter().map(|s| s.count).max().unwrap_or(0);
    Ok(summaries.into_iter().filter(|s| s.count == best).collect())
}
