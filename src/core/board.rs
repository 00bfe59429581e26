//! Read access to the game board.
//!
//! The board is owned by the surrounding application. The bot only ever
//! reads it through [`BoardAccessor`], one call at a time; the caller applies
//! the chosen move and keeps write ownership in between.
//!
//! [`Grid`] is a plain 36-cell store implementing the accessor, used by the
//! self-play driver and by tests.

use serde::{Deserialize, Serialize};

use super::cell::{Cell, Symbol, BOARD_CELLS};
use crate::error::{BotError, Result};

/// Read-only view over a flat sequence of raw cell codes.
pub trait BoardAccessor {
    /// Number of cells in the view.
    fn len(&self) -> usize;

    /// Raw code stored at `index`, or `None` past the end.
    fn raw_cell(&self, index: usize) -> Option<u8>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Decoded cell value at `index`.
    fn cell(&self, index: usize) -> Result<Cell> {
        let value = self.raw_cell(index).ok_or(BotError::IndexOutOfRange {
            index,
            len: self.len(),
        })?;
        Cell::from_code(index, value)
    }

    /// Decoded values for the given indices, in order.
    fn cells_at(&self, indices: &[usize]) -> Result<Vec<Cell>> {
        indices.iter().map(|&i| self.cell(i)).collect()
    }

    /// All empty cell indices in ascending order.
    fn empty_indices(&self) -> Result<Vec<usize>> {
        let mut empties = Vec::new();
        for index in 0..self.len() {
            if self.cell(index)?.is_empty() {
                empties.push(index);
            }
        }
        Ok(empties)
    }
}

impl BoardAccessor for [u8] {
    fn len(&self) -> usize {
        <[u8]>::len(self)
    }

    fn raw_cell(&self, index: usize) -> Option<u8> {
        self.get(index).copied()
    }
}

impl<const N: usize> BoardAccessor for [u8; N] {
    fn len(&self) -> usize {
        N
    }

    fn raw_cell(&self, index: usize) -> Option<u8> {
        self.get(index).copied()
    }
}

impl BoardAccessor for Vec<u8> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn raw_cell(&self, index: usize) -> Option<u8> {
        self.get(index).copied()
    }
}

impl BoardAccessor for [Cell] {
    fn len(&self) -> usize {
        <[Cell]>::len(self)
    }

    fn raw_cell(&self, index: usize) -> Option<u8> {
        self.get(index).map(|c| c.code())
    }
}

impl BoardAccessor for Vec<Cell> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn raw_cell(&self, index: usize) -> Option<u8> {
        self.get(index).map(|c| c.code())
    }
}

/// Fixed 6×6 cell store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    cells: Vec<Cell>,
}

/// Unchecked wire form of a [`Grid`].
#[derive(Deserialize)]
struct RawGrid {
    cells: Vec<Cell>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = BotError;

    fn try_from(raw: RawGrid) -> Result<Self> {
        Self::from_cells(raw.cells)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Create an empty grid.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: vec![Cell::Empty; BOARD_CELLS],
        }
    }

    /// Build a grid from decoded cells. There must be exactly 36.
    pub fn from_cells(cells: Vec<Cell>) -> Result<Self> {
        if cells.len() != BOARD_CELLS {
            return Err(BotError::InvalidBoardSize {
                expected: BOARD_CELLS,
                actual: cells.len(),
            });
        }
        Ok(Self { cells })
    }

    /// Build a grid from raw codes.
    pub fn from_codes(codes: &[u8]) -> Result<Self> {
        let cells = codes
            .iter()
            .enumerate()
            .map(|(i, &code)| Cell::from_code(i, code))
            .collect::<Result<Vec<_>>>()?;
        Self::from_cells(cells)
    }

    /// Place `symbol` at `index`.
    ///
    /// Returns false (and leaves the grid alone) if the index is off the
    /// board or the cell is already taken.
    pub fn place(&mut self, index: usize, symbol: Symbol) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) if cell.is_empty() => {
                *cell = symbol.into();
                true
            }
            _ => false,
        }
    }

    /// Empty the cell at `index`. Returns false for an off-board index.
    pub fn clear(&mut self, index: usize) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) => {
                *cell = Cell::Empty;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }
}

impl BoardAccessor for Grid {
    fn len(&self) -> usize {
        self.cells.len()
    }

    fn raw_cell(&self, index: usize) -> Option<u8> {
        self.cells.get(index).map(|c| c.code())
    }
}
