//! Live-line tracking and terminal-state detection.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::analysis::{check_line_win, check_line_winnability};
use crate::core::BoardAccessor;
use crate::error::Result;
use crate::lines::{Line, LineRegistry};

/// Game status as seen by the tracker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Playing,
    /// Some line holds an exact run of five.
    OrderWon,
    /// No line can ever produce a run of five.
    ChaosWon,
}

impl GameStatus {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}

/// The subset of registry lines still able to produce a win.
///
/// The set only shrinks between rebuilds. Undo does not roll it back
/// incrementally; the caller reverts the board and calls [`rebuild`]
/// followed by [`update`].
///
/// [`rebuild`]: WinnabilityTracker::rebuild
/// [`update`]: WinnabilityTracker::update
#[derive(Clone, Debug)]
pub struct WinnabilityTracker {
    live: Vec<Line>,
    status: GameStatus,
}

impl WinnabilityTracker {
    /// Tracker holding the full registry, status `Playing`.
    pub fn new() -> Result<Self> {
        Ok(Self {
            live: LineRegistry::standard()?.into_lines(),
            status: GameStatus::Playing,
        })
    }

    /// Regenerate the registry and reset the status.
    pub fn rebuild(&mut self) -> Result<()> {
        *self = Self::new()?;
        Ok(())
    }

    #[must_use]
    pub fn live_lines(&self) -> &[Line] {
        &self.live
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Re-check every live line against the board.
    ///
    /// Lines are walked in registry order. The first won line ends the scan
    /// with `OrderWon`, leaving the remaining lines in place. Dead lines are
    /// dropped; an empty set after a full pass means `ChaosWon`.
    ///
    /// Nothing is modified if reading the board fails.
    pub fn update<B: BoardAccessor + ?Sized>(&mut self, board: &B) -> Result<GameStatus> {
        let mut retained = Vec::with_capacity(self.live.len());
        let mut won = false;

        for (pos, line) in self.live.iter().enumerate() {
            let values = line.values(board)?;
            if check_line_win(&values) {
                debug!(line = ?line.indices(), "exact run of five found");
                retained.extend(self.live[pos..].iter().cloned());
                won = true;
                break;
            }
            if check_line_winnability(&values) {
                retained.push(line.clone());
            } else {
                trace!(line = ?line.indices(), "line can no longer win");
            }
        }

        self.status = if won {
            GameStatus::OrderWon
        } else if retained.is_empty() {
            GameStatus::ChaosWon
        } else {
            GameStatus::Playing
        };
        self.live = retained;

        debug!(status = ?self.status, live = self.live.len(), "tracker updated");
        Ok(self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(indices: impl IntoIterator<Item = usize>, code: u8) -> [u8; 36] {
        let mut board = [0u8; 36];
        for i in indices {
            board[i] = code;
        }
        board
    }

    #[test]
    fn test_new_tracker_holds_full_registry() {
        let tracker = WinnabilityTracker::new().unwrap();
        assert_eq!(tracker.live_lines().len(), 18);
        assert_eq!(tracker.status(), GameStatus::Playing);
    }

    #[test]
    fn test_empty_board_keeps_every_line() {
        let mut tracker = WinnabilityTracker::new().unwrap();
        assert_eq!(tracker.update(&[0u8; 36]).unwrap(), GameStatus::Playing);
        assert_eq!(tracker.live_lines().len(), 18);
    }

    #[test]
    fn test_five_in_row_wins() {
        let mut tracker = WinnabilityTracker::new().unwrap();
        let board = board_with(0..5, 2);
        assert_eq!(tracker.update(&board).unwrap(), GameStatus::OrderWon);
        assert!(tracker.status().is_terminal());
    }

    #[test]
    fn test_alternating_board_is_chaos_win() {
        let mut tracker = WinnabilityTracker::new().unwrap();
        let board: Vec<u8> = (0..36).map(|i| if i % 2 == 0 { 1 } else { 2 }).collect();
        assert_eq!(tracker.update(&board).unwrap(), GameStatus::ChaosWon);
        assert!(tracker.live_lines().is_empty());
    }

    #[test]
    fn test_dead_lines_are_pruned() {
        let mut tracker = WinnabilityTracker::new().unwrap();
        // circle at both ends of row 0 kills the row only
        let board = board_with([0, 5], 1);
        tracker.update(&board).unwrap();

        assert_eq!(tracker.live_lines().len(), 17);
        assert!(tracker.live_lines().iter().all(|l| l.indices() != [0, 1, 2, 3, 4, 5]));
    }

    #[test]
    fn test_win_stops_scan_without_pruning_later_lines() {
        let mut tracker = WinnabilityTracker::new().unwrap();
        // row 0 wins; column 0 (checked later) would otherwise be dead
        let mut board = board_with(0..5, 1);
        board[30] = 1;
        tracker.update(&board).unwrap();

        assert_eq!(tracker.status(), GameStatus::OrderWon);
        assert_eq!(tracker.live_lines().len(), 18);
    }

    #[test]
    fn test_failed_update_leaves_state_untouched() {
        let mut tracker = WinnabilityTracker::new().unwrap();
        let mut board = board_with([0, 5], 1);
        board[20] = 9;

        assert!(tracker.update(&board).is_err());
        assert_eq!(tracker.live_lines().len(), 18);
        assert_eq!(tracker.status(), GameStatus::Playing);
    }

    #[test]
    fn test_rebuild_restores_registry() {
        let mut tracker = WinnabilityTracker::new().unwrap();
        let board: Vec<u8> = (0..36).map(|i| if i % 2 == 0 { 1 } else { 2 }).collect();
        tracker.update(&board).unwrap();
        assert_eq!(tracker.status(), GameStatus::ChaosWon);

        tracker.rebuild().unwrap();
        assert_eq!(tracker.live_lines().len(), 18);
        assert_eq!(tracker.status(), GameStatus::Playing);
    }
}
