//! Bot facade and configuration.

pub mod config;
pub mod facade;

pub use config::{BotConfig, Difficulty};
pub use facade::{Bot, Winner};
