//! Winnability tracking.
//!
//! - `analysis`: pure predicates on one line's values (tally, runs, win,
//!   winnability)
//! - `winnability`: the live-line set and the Playing / OrderWon / ChaosWon
//!   state machine

pub mod analysis;
pub mod winnability;

pub use analysis::{
    check_line_win, check_line_winnability, split_runs, winnable_after, wins_after, SymbolTally,
    WIN_RUN,
};
pub use winnability::{GameStatus, WinnabilityTracker};
