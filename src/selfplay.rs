//! Bot-versus-bot play on an owned grid.
//!
//! Order moves first and the roles alternate. After every placement both
//! bots re-check the board, and the game stops at the first winner. A full
//! grid always ends the game, so a match never exceeds 36 moves.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::bot::{Bot, BotConfig, Winner};
use crate::core::{GameRng, Grid, Move, Role};
use crate::error::{BotError, Result};

/// A move together with the role that played it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedMove {
    pub role: Role,
    pub mv: Move,
}

/// Result of a finished match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub moves: Vec<PlayedMove>,
    pub winner: Winner,
    pub final_grid: Grid,
}

/// Drives one Order bot against one Chaos bot.
pub struct SelfPlayRunner {
    order: Bot,
    chaos: Bot,
    grid: Grid,
    history: Vec<PlayedMove>,
    to_move: Role,
    winner: Winner,
}

impl SelfPlayRunner {
    /// Create a runner on an empty grid.
    ///
    /// Each bot draws from its own fork of a generator seeded with `seed`,
    /// so one seed fixes the whole match.
    pub fn new(order: BotConfig, chaos: BotConfig, seed: u64) -> Result<Self> {
        let mut root = GameRng::new(seed);
        let grid = Grid::new();

        let mut order = Bot::with_source(order, root.fork())?;
        let mut chaos = Bot::with_source(chaos, root.fork())?;
        order.load_board(&grid)?;
        chaos.load_board(&grid)?;

        Ok(Self {
            order,
            chaos,
            grid,
            history: Vec::new(),
            to_move: Role::Order,
            winner: Winner::None,
        })
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn history(&self) -> &[PlayedMove] {
        &self.history
    }

    #[must_use]
    pub fn winner(&self) -> Winner {
        self.winner
    }

    #[must_use]
    pub fn to_move(&self) -> Role {
        self.to_move
    }

    /// Play one move. Returns `None` once the game is over.
    pub fn step(&mut self) -> Result<Option<PlayedMove>> {
        if self.winner != Winner::None {
            return Ok(None);
        }

        let role = self.to_move;
        let bot = match role {
            Role::Order => &mut self.order,
            Role::Chaos => &mut self.chaos,
        };
        let mv = bot.make_move(&self.grid, role)?;
        if !self.grid.place(mv.index, mv.symbol) {
            return Err(BotError::CellOccupied { index: mv.index });
        }

        let played = PlayedMove { role, mv };
        self.history.push(played);
        debug!(%role, %mv, turn = self.history.len(), "move played");

        self.winner = self.order.check_winning(&self.grid)?;
        self.chaos.check_winning(&self.grid)?;
        self.to_move = role.opposite();

        if self.winner != Winner::None {
            info!(winner = %self.winner, moves = self.history.len(), "match finished");
        }
        Ok(Some(played))
    }

    /// Play until someone wins.
    pub fn play(mut self) -> Result<MatchRecord> {
        while self.step()?.is_some() {}
        Ok(MatchRecord {
            moves: self.history,
            winner: self.winner,
            final_grid: self.grid,
        })
    }

    /// Take back the last two moves (one per side) and let both bots
    /// recompute their live lines. Returns how many moves were undone.
    pub fn undo_last_round(&mut self) -> Result<usize> {
        let mut undone = 0;
        while undone < 2 {
            let Some(last) = self.history.pop() else {
                break;
            };
            self.grid.clear(last.mv.index);
            self.to_move = last.role;
            undone += 1;
        }

        if undone > 0 {
            self.order.undo_moves(&self.grid)?;
            self.chaos.undo_moves(&self.grid)?;
            self.winner = Winner::None;
            debug!(undone, "round undone");
        }
        Ok(undone)
    }
}
