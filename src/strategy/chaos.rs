//! Chaos: block the line closest to completion.

use tracing::debug;

use super::candidates::{closest_to_win, LineSummary};
use super::MoveStrategy;
use crate::core::{BoardAccessor, Move, RandomSource};
use crate::error::{BotError, Result};
use crate::lines::Line;
use crate::tracker::{winnable_after, wins_after};

/// Blocking heuristic for the Chaos role.
///
/// For the first of the closest-to-win lines:
/// 1. the first empty cell where the opposite symbol kills the line;
/// 2. else the first, then the last cell if empty, with the dominant
///    symbol, flipped to the opposite if that would complete a five;
/// 3. else a random empty interior cell with the dominant symbol.
#[derive(Clone, Copy, Debug, Default)]
pub struct ChaosStrategy;

impl MoveStrategy for ChaosStrategy {
    fn choose_move<B, R>(&self, board: &B, live: &[Line], rng: &mut R) -> Result<Move>
    where
        B: BoardAccessor + ?Sized,
        R: RandomSource + ?Sized,
    {
        let candidates = closest_to_win(live, board)?;

        for summary in &candidates {
            if let Some(mv) = block_line(summary, rng) {
                debug!(line = ?summary.line.indices(), count = summary.count, %mv, "chaos move");
                return Ok(mv);
            }
        }

        Err(BotError::NoCandidateLine)
    }
}

/// Move against a single line, or `None` if the line has no empty cell.
fn block_line<R: RandomSource + ?Sized>(summary: &LineSummary<'_>, rng: &mut R) -> Option<Move> {
    let dominant = summary.symbol;
    let opposite = dominant.opposite();
    let values = &summary.values;
    let indices = summary.line.indices();

    if let Some(pos) = summary
        .empty_positions()
        .find(|&pos| !winnable_after(values, pos, opposite))
    {
        return Some(Move::new(indices[pos], opposite));
    }

    for (pos, index) in summary.endpoints() {
        if values[pos].is_empty() {
            let symbol = if wins_after(values, pos, dominant) {
                opposite
            } else {
                dominant
            };
            return Some(Move::new(index, symbol));
        }
    }

    let interior = summary.empty_interior();
    if interior.is_empty() {
        return None;
    }
    Some(Move::new(interior[rng.pick(interior.len())], dominant))
}
