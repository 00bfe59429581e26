//! Core types: cells and symbols, board access, randomness.

pub mod board;
pub mod cell;
pub mod rng;

pub use board::{BoardAccessor, Grid};
pub use cell::{Cell, Move, Role, Symbol, BOARD_CELLS, BOARD_SIDE};
pub use rng::{GameRng, GameRngState, RandomSource};
