//! Pure predicates over the values of a single line.
//!
//! These never look at the board directly; callers pass the line's cell
//! values in line order.

use crate::core::{Cell, Symbol};
use crate::error::{BotError, Result};

/// Length of a winning run. Longer runs do not count.
pub const WIN_RUN: usize = 5;

/// Per-symbol occupancy of a line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SymbolTally {
    pub circles: usize,
    pub crosses: usize,
}

impl SymbolTally {
    /// Count the symbols among decoded values, skipping empties.
    #[must_use]
    pub fn of(values: &[Cell]) -> Self {
        values.iter().fold(Self::default(), |mut tally, cell| {
            match cell {
                Cell::Circle => tally.circles += 1,
                Cell::Cross => tally.crosses += 1,
                Cell::Empty => {}
            }
            tally
        })
    }

    /// Count the symbols among raw board codes.
    ///
    /// Fails with `InvalidCellValue` on any code other than 0, 1 or 2;
    /// the reported index is the position within `codes`.
    pub fn from_codes(codes: &[u8]) -> Result<Self> {
        let values = codes
            .iter()
            .enumerate()
            .map(|(i, &code)| Cell::from_code(i, code))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::of(&values))
    }

    #[must_use]
    pub fn count(&self, symbol: Symbol) -> usize {
        match symbol {
            Symbol::Circle => self.circles,
            Symbol::Cross => self.crosses,
        }
    }

    /// True when both symbols are present.
    #[must_use]
    pub fn is_mixed(&self) -> bool {
        self.circles > 0 && self.crosses > 0
    }

    /// The more frequent symbol and its count. Ties go to circle.
    #[must_use]
    pub fn dominant(&self) -> (Symbol, usize) {
        if self.circles >= self.crosses {
            (Symbol::Circle, self.circles)
        } else {
            (Symbol::Cross, self.crosses)
        }
    }
}

/// Split values into maximal runs of equal cells, empty runs included.
pub fn split_runs(values: &[Cell]) -> Result<Vec<&[Cell]>> {
    if values.is_empty() {
        return Err(BotError::EmptyLine);
    }
    Ok(values.chunk_by(|a, b| a == b).collect())
}

/// A line is won when it holds a non-empty run of exactly five.
///
/// Six identical symbols on a full-length line do not count, and an empty
/// slice is never won.
#[must_use]
pub fn check_line_win(values: &[Cell]) -> bool {
    split_runs(values)
        .is_ok_and(|runs| runs.iter().any(|run| run.len() == WIN_RUN && !run[0].is_empty()))
}

/// Whether the line can still, in principle, produce a winning run.
///
/// A six-cell line is dead once its two endpoints hold the same symbol
/// (any five-run would have to touch one of them and extend to six) or once
/// its four interior cells hold both symbols. A five-cell line is dead once
/// it holds both symbols anywhere.
#[must_use]
pub fn check_line_winnability(values: &[Cell]) -> bool {
    if values.len() == 6 {
        let (first, last) = (values[0], values[5]);
        if !first.is_empty() && first == last {
            return false;
        }
        !SymbolTally::of(&values[1..5]).is_mixed()
    } else {
        !SymbolTally::of(values).is_mixed()
    }
}

/// Whether placing `symbol` at `position` (an index into `values`) would
/// leave the line winnable.
#[must_use]
pub fn winnable_after(values: &[Cell], position: usize, symbol: Symbol) -> bool {
    let mut hypothetical = values.to_vec();
    hypothetical[position] = symbol.into();
    check_line_winnability(&hypothetical)
}

/// Whether placing `symbol` at `position` would complete a winning run.
#[must_use]
pub fn wins_after(values: &[Cell], position: usize, symbol: Symbol) -> bool {
    let mut hypothetical = values.to_vec();
    hypothetical[position] = symbol.into();
    check_line_win(&hypothetical)
}
