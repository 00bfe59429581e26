//! # order-chaos-bot
//!
//! Decision engine for Order and Chaos on a 6×6 grid.
//!
//! Order tries to complete an exact run of five like symbols along a row,
//! column or diagonal; Chaos tries to prevent it until the grid is full.
//! Either side may place either symbol.
//!
//! ## Design Principles
//!
//! 1. **Read-only board**: The bot reads cells through `BoardAccessor` and
//!    returns moves as `(index, symbol)`. The caller owns the board and
//!    applies moves.
//!
//! 2. **Recompute, don't roll back**: The live-line set only shrinks during a
//!    game. Undo regenerates it from the current board.
//!
//! 3. **Injectable randomness**: Every random choice goes through
//!    `RandomSource`; the default `GameRng` is seeded from `BotConfig`.
//!
//! ## Modules
//!
//! - `core`: Cells, symbols, roles, board access, RNG
//! - `lines`: The 18-line registry
//! - `tracker`: Line predicates and the live-line state machine
//! - `strategy`: Random, Chaos and Order move selection
//! - `bot`: The `Bot` facade and its configuration
//! - `selfplay`: Bot-versus-bot driver

pub mod core;
pub mod error;
pub mod lines;
pub mod tracker;
pub mod strategy;
pub mod bot;
pub mod selfplay;

// Re-export commonly used types
pub use crate::core::{
    BoardAccessor, Cell, Grid, Move, Role, Symbol,
    GameRng, GameRngState, RandomSource,
    BOARD_CELLS, BOARD_SIDE,
};

pub use crate::error::{BotError, Result};

pub use crate::lines::{Line, LineRegistry};

pub use crate::tracker::{GameStatus, SymbolTally, WinnabilityTracker};

pub use crate::strategy::{
    ChaosStrategy, LineSummary, MoveStrategy, OrderStrategy, RandomStrategy,
};

pub use crate::bot::{Bot, BotConfig, Difficulty, Winner};

pub use crate::selfplay::{MatchRecord, PlayedMove, SelfPlayRunner};
