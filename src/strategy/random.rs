//! Uniform random play with no line awareness.

use tracing::trace;

use super::MoveStrategy;
use crate::core::{BoardAccessor, Move, RandomSource, Symbol};
use crate::error::{BotError, Result};
use crate::lines::Line;

/// Picks any empty cell and either symbol, ignoring role and lines.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomStrategy;

impl MoveStrategy for RandomStrategy {
    fn choose_move<B, R>(&self, board: &B, _live: &[Line], rng: &mut R) -> Result<Move>
    where
        B: BoardAccessor + ?Sized,
        R: RandomSource + ?Sized,
    {
        let empties = board.empty_indices()?;
        if empties.is_empty() {
            return Err(BotError::NoEmptyCell);
        }

        let index = empties[rng.pick(empties.len())];
        let symbol = if rng.coin_flip() {
            Symbol::Cross
        } else {
            Symbol::Circle
        };

        trace!(available = empties.len(), index, %symbol, "random move");
        Ok(Move::new(index, symbol))
    }
}
