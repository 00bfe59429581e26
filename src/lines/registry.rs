//! The fixed set of candidate winning lines on the 6×6 grid.
//!
//! ## Example
//!
//! ```
//! use order_chaos_bot::lines::LineRegistry;
//!
//! let registry = LineRegistry::standard().unwrap();
//! assert_eq!(registry.len(), 18);
//! assert_eq!(registry.lines()[12].indices(), &[0, 7, 14, 21, 28, 35]);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{BoardAccessor, Cell, BOARD_CELLS, BOARD_SIDE};
use crate::error::{BotError, Result};

/// Shortest line that can hold an exact run of five.
pub const MIN_LINE_LEN: usize = 5;

/// Longest line on the grid.
pub const MAX_LINE_LEN: usize = BOARD_SIDE;

/// Diagonals as `(start, step, length)`, in registry order.
///
/// Step 7 walks down-right, step 5 walks down-left.
const DIAGONALS: [(usize, usize, usize); 6] = [
    (0, 7, 6),
    (1, 7, 5),
    (6, 7, 5),
    (4, 5, 5),
    (5, 5, 6),
    (11, 5, 5),
];

/// An ordered run of 5 or 6 board indices.
///
/// Deserialized lines go through [`Line::new`] and are rejected with the
/// same errors.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawLine")]
pub struct Line {
    indices: SmallVec<[usize; MAX_LINE_LEN]>,
}

/// Unchecked wire form of a [`Line`].
#[derive(Deserialize)]
struct RawLine {
    indices: Vec<usize>,
}

impl TryFrom<RawLine> for Line {
    type Error = BotError;

    fn try_from(raw: RawLine) -> Result<Self> {
        Self::new(&raw.indices)
    }
}

impl Line {
    /// Build a line, checking its length and that every index is on the board.
    pub fn new(indices: &[usize]) -> Result<Self> {
        let len = indices.len();
        if !(MIN_LINE_LEN..=MAX_LINE_LEN).contains(&len) || indices.iter().any(|&i| i >= BOARD_CELLS) {
            return Err(BotError::MalformedLine { len });
        }
        Ok(Self {
            indices: SmallVec::from_slice(indices),
        })
    }

    /// Line of `len` cells starting at `start`, advancing by `step`.
    pub fn stepped(start: usize, step: usize, len: usize) -> Result<Self> {
        let indices: SmallVec<[usize; MAX_LINE_LEN]> = (0..len).map(|k| start + k * step).collect();
        Self::new(&indices)
    }

    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Always false; lines hold at least five cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Board index of the first cell.
    #[must_use]
    pub fn first(&self) -> usize {
        self.indices[0]
    }

    /// Board index of the last cell.
    #[must_use]
    pub fn last(&self) -> usize {
        self.indices[self.indices.len() - 1]
    }

    /// Board indices strictly between the two endpoints.
    #[must_use]
    pub fn interior(&self) -> &[usize] {
        &self.indices[1..self.indices.len() - 1]
    }

    /// Current cell values along the line.
    pub fn values<B: BoardAccessor + ?Sized>(&self, board: &B) -> Result<Vec<Cell>> {
        board.cells_at(&self.indices)
    }
}

/// The 18 candidate lines in generation order: six rows, six columns, then
/// the diagonals listed in `DIAGONALS`.
///
/// Heuristic tie-breaks walk lines in this order, so it must not change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineRegistry {
    lines: Vec<Line>,
}

impl LineRegistry {
    /// Generate the registry for the standard grid.
    pub fn standard() -> Result<Self> {
        let mut lines = Vec::with_capacity(2 * BOARD_SIDE + DIAGONALS.len());

        for row in 0..BOARD_SIDE {
            lines.push(Line::stepped(row * BOARD_SIDE, 1, BOARD_SIDE)?);
        }
        for col in 0..BOARD_SIDE {
            lines.push(Line::stepped(col, BOARD_SIDE, BOARD_SIDE)?);
        }
        for (start, step, len) in DIAGONALS {
            lines.push(Line::stepped(start, step, len)?);
        }

        Ok(Self { lines })
    }

    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    #[must_use]
    pub fn into_lines(self) -> Vec<Line> {
        self.lines
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_registry_matches_expected_indices() {
        let registry = LineRegistry::standard().unwrap();
        let expected: Vec<Vec<usize>> = vec![
            vec![0, 1, 2, 3, 4, 5],
            vec![6, 7, 8, 9, 10, 11],
            vec![12, 13, 14, 15, 16, 17],
            vec![18, 19, 20, 21, 22, 23],
            vec![24, 25, 26, 27, 28, 29],
            vec![30, 31, 32, 33, 34, 35],
            vec![0, 6, 12, 18, 24, 30],
            vec![1, 7, 13, 19, 25, 31],
            vec![2, 8, 14, 20, 26, 32],
            vec![3, 9, 15, 21, 27, 33],
            vec![4, 10, 16, 22, 28, 34],
            vec![5, 11, 17, 23, 29, 35],
            vec![0, 7, 14, 21, 28, 35],
            vec![1, 8, 15, 22, 29],
            vec![6, 13, 20, 27, 34],
            vec![4, 9, 14, 19, 24],
            vec![5, 10, 15, 20, 25, 30],
            vec![11, 16, 21, 26, 31],
        ];

        let actual: Vec<Vec<usize>> = registry.iter().map(|l| l.indices().to_vec()).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_line_lengths() {
        let registry = LineRegistry::standard().unwrap();
        let short = registry.iter().filter(|l| l.len() == 5).count();
        let full = registry.iter().filter(|l| l.len() == 6).count();
        assert_eq!(short, 4);
        assert_eq!(full, 14);
    }

    #[test]
    fn test_malformed_lines_rejected() {
        assert_eq!(Line::new(&[0, 1, 2, 3]), Err(BotError::MalformedLine { len: 4 }));
        assert_eq!(
            Line::new(&[0, 1, 2, 3, 4, 5, 6]),
            Err(BotError::MalformedLine { len: 7 })
        );
        assert_eq!(
            Line::new(&[32, 33, 34, 35, 36]),
            Err(BotError::MalformedLine { len: 5 })
        );
    }

    #[test]
    fn test_endpoints_and_interior() {
        let line = Line::stepped(11, 5, 5).unwrap();
        assert_eq!(line.first(), 11);
        assert_eq!(line.last(), 31);
        assert_eq!(line.interior(), &[16, 21, 26]);
    }

    #[test]
    fn test_line_serde_round_trip() {
        let line = Line::stepped(5, 5, 6).unwrap();
        let json = serde_json::to_string(&line).unwrap();
        assert_eq!(json, r#"{"indices":[5,10,15,20,25,30]}"#);
        assert_eq!(serde_json::from_str::<Line>(&json).unwrap(), line);
    }

    #[test]
    fn test_deserialize_rejects_malformed_lines() {
        for json in [
            r#"{"indices":[]}"#,
            r#"{"indices":[3]}"#,
            r#"{"indices":[0,1,2,3,4,5,6]}"#,
            r#"{"indices":[31,32,33,34,35,36]}"#,
        ] {
            let err = serde_json::from_str::<Line>(json).unwrap_err();
            assert!(err.to_string().contains("malformed line"), "{json}: {err}");
        }
    }
}
