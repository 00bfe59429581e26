//! The bot: difficulty and role dispatch over the tracker and strategies.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, instrument};

use super::config::{BotConfig, Difficulty};
use crate::core::{BoardAccessor, GameRng, Move, RandomSource, Role, BOARD_CELLS};
use crate::error::{BotError, Result};
use crate::lines::Line;
use crate::strategy::{ChaosStrategy, MoveStrategy, OrderStrategy, RandomStrategy};
use crate::tracker::{GameStatus, WinnabilityTracker};

/// Outcome reported by [`Bot::check_winning`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    /// The game goes on.
    #[default]
    None,
    Order,
    Chaos,
}

impl Winner {
    /// `""`, `"order"` or `"chaos"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Winner::None => "",
            Winner::Order => "order",
            Winner::Chaos => "chaos",
        }
    }

    #[must_use]
    pub const fn role(self) -> Option<Role> {
        match self {
            Winner::None => None,
            Winner::Order => Some(Role::Order),
            Winner::Chaos => Some(Role::Chaos),
        }
    }
}

impl From<GameStatus> for Winner {
    fn from(status: GameStatus) -> Self {
        match status {
            GameStatus::Playing => Winner::None,
            GameStatus::OrderWon => Winner::Order,
            GameStatus::ChaosWon => Winner::Chaos,
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Move-selection engine for one side of an Order and Chaos game.
///
/// The board is owned by the caller and passed by reference to every call;
/// the bot never writes to it. The caller applies the returned move, then
/// calls [`check_winning`](Bot::check_winning) to advance the tracker.
///
/// ## Example
///
/// ```
/// use order_chaos_bot::{Bot, BotConfig, Role, Symbol, Winner};
///
/// let mut board = [0u8; 36];
/// board[..4].fill(1);
///
/// let mut bot = Bot::new(BotConfig::default()).unwrap();
/// bot.load_board(&board).unwrap();
/// assert_eq!(bot.check_winning(&board).unwrap(), Winner::None);
///
/// let mv = bot.make_move(&board, Role::Chaos).unwrap();
/// assert_eq!((mv.index, mv.symbol), (4, Symbol::Cross));
/// ```
#[derive(Clone, Debug)]
pub struct Bot<R: RandomSource = GameRng> {
    config: BotConfig,
    tracker: WinnabilityTracker,
    first_move: bool,
    rng: R,
}

impl Bot<GameRng> {
    /// Create a bot seeded from `config.seed`.
    pub fn new(config: BotConfig) -> Result<Self> {
        let rng = GameRng::new(config.seed);
        Self::with_source(config, rng)
    }
}

impl<R: RandomSource> Bot<R> {
    /// Create a bot drawing its random choices from `rng`.
    pub fn with_source(config: BotConfig, rng: R) -> Result<Self> {
        Ok(Self {
            config,
            tracker: WinnabilityTracker::new()?,
            first_move: true,
            rng,
        })
    }

    /// Bind to a fresh board: regenerate the line registry and re-arm the
    /// opening move.
    ///
    /// The board must have exactly 36 cells.
    #[instrument(skip_all)]
    pub fn load_board<B: BoardAccessor + ?Sized>(&mut self, board: &B) -> Result<()> {
        ensure_board_size(board)?;
        self.tracker = WinnabilityTracker::new()?;
        self.first_move = true;
        debug!("board loaded");
        Ok(())
    }

    /// Set the difficulty from its name (`low`/`easy`, `high`/`hard`).
    pub fn set_difficulty(&mut self, tier: &str) -> Result<()> {
        self.config.difficulty = tier.parse()?;
        Ok(())
    }

    pub fn set_difficulty_tier(&mut self, difficulty: Difficulty) {
        self.config.difficulty = difficulty;
    }

    /// Choose a move for `role`.
    ///
    /// Low difficulty always plays randomly. High difficulty blocks as Chaos
    /// and extends as Order, except for Order's first move on a freshly
    /// loaded board, which is random.
    #[instrument(skip(self, board), fields(difficulty = %self.config.difficulty))]
    pub fn make_move<B: BoardAccessor + ?Sized>(&mut self, board: &B, role: Role) -> Result<Move> {
        ensure_board_size(board)?;
        let live = self.tracker.live_lines();

        let mv = match (self.config.difficulty, role) {
            (Difficulty::Low, _) => RandomStrategy.choose_move(board, live, &mut self.rng)?,
            (Difficulty::High, Role::Chaos) => ChaosStrategy.choose_move(board, live, &mut self.rng)?,
            (Difficulty::High, Role::Order) if self.first_move => {
                let mv = RandomStrategy.choose_move(board, live, &mut self.rng)?;
                self.first_move = false;
                mv
            }
            (Difficulty::High, Role::Order) => OrderStrategy.choose_move(board, live, &mut self.rng)?,
        };

        debug!(%mv, "move chosen");
        Ok(mv)
    }

    /// Re-check the live lines against the board and report the winner,
    /// if any.
    #[instrument(skip_all)]
    pub fn check_winning<B: BoardAccessor + ?Sized>(&mut self, board: &B) -> Result<Winner> {
        ensure_board_size(board)?;
        let status = self.tracker.update(board)?;
        Ok(status.into())
    }

    /// Recompute the live lines from scratch after the caller reverted moves
    /// on the board.
    #[instrument(skip_all)]
    pub fn undo_moves<B: BoardAccessor + ?Sized>(&mut self, board: &B) -> Result<()> {
        ensure_board_size(board)?;
        let mut tracker = WinnabilityTracker::new()?;
        tracker.update(board)?;
        self.tracker = tracker;
        debug!(live = self.tracker.live_lines().len(), "live lines recomputed");
        Ok(())
    }

    #[must_use]
    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.config.difficulty
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.tracker.status()
    }

    #[must_use]
    pub fn live_lines(&self) -> &[Line] {
        self.tracker.live_lines()
    }

    /// Whether Order's next move will be the random opening.
    #[must_use]
    pub fn is_first_move(&self) -> bool {
        self.first_move
    }

    /// Mark the opening as already played (or re-arm it).
    pub fn set_first_move(&mut self, first_move: bool) {
        self.first_move = first_move;
    }
}

fn ensure_board_size<B: BoardAccessor + ?Sized>(board: &B) -> Result<()> {
    if board.len() != BOARD_CELLS {
        return Err(BotError::InvalidBoardSize {
            expected: BOARD_CELLS,
            actual: board.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Symbol;

    fn bot() -> Bot {
        Bot::new(BotConfig::default()).unwrap()
    }

    #[test]
    fn test_new_bot() {
        let bot = bot();
        assert!(bot.is_first_move());
        assert_eq!(bot.difficulty(), Difficulty::High);
        assert_eq!(bot.live_lines().len(), 18);
        assert_eq!(bot.status(), GameStatus::Playing);
    }

    #[test]
    fn test_load_board_rejects_wrong_size() {
        let mut bot = bot();
        assert_eq!(
            bot.load_board(&[0u8; 35]),
            Err(BotError::InvalidBoardSize { expected: 36, actual: 35 })
        );
    }

    #[test]
    fn test_set_difficulty() {
        let mut bot = bot();
        bot.set_difficulty("easy").unwrap();
        assert_eq!(bot.difficulty(), Difficulty::Low);
        bot.set_difficulty("hard").unwrap();
        assert_eq!(bot.difficulty(), Difficulty::High);
        bot.set_difficulty("low").unwrap();
        assert_eq!(bot.difficulty(), Difficulty::Low);
    }

    #[test]
    fn test_invalid_difficulty_keeps_tier() {
        let mut bot = bot();
        assert_eq!(
            bot.set_difficulty("test"),
            Err(BotError::InvalidDifficulty("test".into()))
        );
        assert_eq!(bot.difficulty(), Difficulty::High);
    }

    #[test]
    fn test_first_order_move_is_random_then_cleared() {
        let mut board = [0u8; 36];
        board[..4].fill(1);
        let mut bot = bot();
        bot.load_board(&board).unwrap();

        let opening = bot.make_move(&board, Role::Order).unwrap();
        assert!(board[opening.index] == 0);
        assert!(!bot.is_first_move());

        let second = bot.make_move(&board, Role::Order).unwrap();
        assert_eq!(second, Move::new(4, Symbol::Circle));
    }

    #[test]
    fn test_chaos_move_keeps_first_move_flag() {
        let mut board = [0u8; 36];
        board[..4].fill(1);
        let mut bot = bot();
        bot.load_board(&board).unwrap();

        bot.make_move(&board, Role::Chaos).unwrap();
        assert!(bot.is_first_move());
    }

    #[test]
    fn test_failed_opening_keeps_flag() {
        let board = [1u8; 36];
        let mut bot = bot();
        bot.load_board(&board).unwrap();

        assert_eq!(bot.make_move(&board, Role::Order), Err(BotError::NoEmptyCell));
        assert!(bot.is_first_move());
    }

    #[test]
    fn test_winner_strings() {
        assert_eq!(Winner::None.as_str(), "");
        assert_eq!(Winner::Order.to_string(), "order");
        assert_eq!(Winner::Chaos.to_string(), "chaos");
        assert_eq!(Winner::from(GameStatus::ChaosWon), Winner::Chaos);
        assert_eq!(Winner::Order.role(), Some(Role::Order));
        assert_eq!(Winner::None.role(), None);
    }
}
