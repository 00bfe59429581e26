//! Cell values, symbols and roles.
//!
//! ## Symbol codec
//!
//! The board collaborator stores each cell as a raw code:
//!
//! | Code | Cell |
//! |------|------|
//! | 0 | `Empty` |
//! | 1 | `Circle` |
//! | 2 | `Cross` |
//!
//! `Cell::from_code` and `Cell::code` are the only conversions between the
//! two representations. Any other code is an input-contract violation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{BotError, Result};

/// Number of cells along one side of the grid.
pub const BOARD_SIDE: usize = 6;

/// Total number of cells on the grid.
pub const BOARD_CELLS: usize = BOARD_SIDE * BOARD_SIDE;

/// A placeable symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Symbol {
    Circle,
    Cross,
}

impl Symbol {
    /// Both symbols, in precedence order.
    pub const ALL: [Symbol; 2] = [Symbol::Circle, Symbol::Cross];

    /// The other symbol.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Symbol::Circle => Symbol::Cross,
            Symbol::Cross => Symbol::Circle,
        }
    }

    /// Raw board code for this symbol.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Symbol::Circle => 1,
            Symbol::Cross => 2,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Symbol::Circle => "circle",
            Symbol::Cross => "cross",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tri-state cell value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Circle,
    Cross,
}

impl Cell {
    /// Decode a raw board code.
    ///
    /// `index` is only used to report where a bad value came from.
    pub fn from_code(index: usize, value: u8) -> Result<Self> {
        match value {
            0 => Ok(Cell::Empty),
            1 => Ok(Cell::Circle),
            2 => Ok(Cell::Cross),
            _ => Err(BotError::InvalidCellValue { index, value }),
        }
    }

    /// Encode as a raw board code.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Circle => 1,
            Cell::Cross => 2,
        }
    }

    /// The symbol occupying this cell, if any.
    #[must_use]
    pub const fn symbol(self) -> Option<Symbol> {
        match self {
            Cell::Empty => None,
            Cell::Circle => Some(Symbol::Circle),
            Cell::Cross => Some(Symbol::Cross),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl From<Symbol> for Cell {
    fn from(symbol: Symbol) -> Self {
        match symbol {
            Symbol::Circle => Cell::Circle,
            Symbol::Cross => Cell::Cross,
        }
    }
}

/// The side a bot plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Tries to complete an exact run of five.
    Order,
    /// Tries to stop every run of five until the board is full.
    Chaos,
}

impl Role {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Role::Order => Role::Chaos,
            Role::Chaos => Role::Order,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Order => "order",
            Role::Chaos => "chaos",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = BotError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "order" => Ok(Role::Order),
            "chaos" => Ok(Role::Chaos),
            other => Err(BotError::InvalidRole(other.to_string())),
        }
    }
}

/// A move chosen by the bot: place `symbol` on cell `index`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Flat board index in `0..36`.
    pub index: usize,
    pub symbol: Symbol,
}

impl Move {
    #[must_use]
    pub const fn new(index: usize, symbol: Symbol) -> Self {
        Self { index, symbol }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.symbol, self.index)
    }
}
