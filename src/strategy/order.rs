//! Order: extend the line closest to completion.

use tracing::debug;

use super::candidates::closest_to_win;
use super::MoveStrategy;
use crate::core::{BoardAccessor, Move, RandomSource};
use crate::error::{BotError, Result};
use crate::lines::Line;

/// Extending heuristic for the Order role.
///
/// Places the dominant symbol of the first closest-to-win line on a random
/// empty interior cell. Endpoints are only used once the interior is full.
///
/// The opening move is not handled here; the bot routes it to the random
/// strategy.
#[derive(Clone, Copy, Debug, Default)]
pub struct OrderStrategy;

impl MoveStrategy for OrderStrategy {
    fn choose_move<B, R>(&self, board: &B, live: &[Line], rng: &mut R) -> Result<Move>
    where
        B: BoardAccessor + ?Sized,
        R: RandomSource + ?Sized,
    {
        let candidates = closest_to_win(live, board)?;

        for summary in &candidates {
            let interior = summary.empty_interior();
            let index = if !interior.is_empty() {
                interior[rng.pick(interior.len())]
            } else {
                let empties: Vec<usize> = summary
                    .empty_positions()
                    .map(|pos| summary.line.indices()[pos])
                    .collect();
                match (empties.first(), empties.last()) {
                    (Some(&first), Some(&last)) if first != last => {
                        if rng.coin_flip() {
                            first
                        } else {
                            last
                        }
                    }
                    (Some(&only), _) => only,
                    _ => continue,
                }
            };

            let mv = Move::new(index, summary.symbol);
            debug!(line = ?summary.line.indices(), count = summary.count, %mv, "order move");
            return Ok(mv);
        }

        Err(BotError::NoCandidateLine)
    }
}
