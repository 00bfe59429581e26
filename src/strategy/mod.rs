//! Move selection strategies.
//!
//! Each strategy implements [`MoveStrategy`]:
//! - `RandomStrategy`: uniform empty cell, uniform symbol (low tier, and
//!   Order's opening move)
//! - `ChaosStrategy`: block the line closest to a win
//! - `OrderStrategy`: extend the line closest to a win
//!
//! Every random choice goes through a [`RandomSource`], so outcomes are
//! reproducible from a seed or a scripted source.

pub mod candidates;
pub mod chaos;
pub mod order;
pub mod random;

pub use candidates::{closest_to_win, LineSummary};
pub use chaos::ChaosStrategy;
pub use order::OrderStrategy;
pub use random::RandomStrategy;

use crate::core::{BoardAccessor, Move, RandomSource};
use crate::error::Result;
use crate::lines::Line;

/// Chooses the next move from the board and the current live lines.
pub trait MoveStrategy {
    /// Pick a move. Never writes to the board.
    fn choose_move<B, R>(&self, board: &B, live: &[Line], rng: &mut R) -> Result<Move>
    where
        B: BoardAccessor + ?Sized,
        R: RandomSource + ?Sized;
}
