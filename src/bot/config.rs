//! Bot configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BotError;

/// Difficulty tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniform random moves, no line awareness.
    #[serde(alias = "easy")]
    Low,
    /// Greedy blocking/extending heuristics.
    #[default]
    #[serde(alias = "hard")]
    High,
}

impl Difficulty {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Difficulty::Low => "low",
            Difficulty::High => "high",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = BotError;

    /// Accepts `low`/`high`, and the `easy`/`hard` spellings the game menus use.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" | "easy" => Ok(Difficulty::Low),
            "high" | "hard" => Ok(Difficulty::High),
            other => Err(BotError::InvalidDifficulty(other.to_string())),
        }
    }
}

/// Bot configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Difficulty tier (default: high).
    pub difficulty: Difficulty,

    /// Random seed for tie-breaks and random play.
    /// Same seed and same boards produce the same moves.
    pub seed: u64,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::High,
            seed: 42,
        }
    }
}

impl BotConfig {
    /// Create a new config with custom difficulty.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Create a new config with custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BotConfig::default();
        assert_eq!(config.difficulty, Difficulty::High);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_builder_pattern() {
        let config = BotConfig::default()
            .with_difficulty(Difficulty::Low)
            .with_seed(123);

        assert_eq!(config.difficulty, Difficulty::Low);
        assert_eq!(config.seed, 123);
    }

    #[test]
    fn test_parse_difficulty() {
        assert_eq!("low".parse::<Difficulty>(), Ok(Difficulty::Low));
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Low));
        assert_eq!("high".parse::<Difficulty>(), Ok(Difficulty::High));
        assert_eq!("hard".parse::<Difficulty>(), Ok(Difficulty::High));
        assert_eq!(
            "test".parse::<Difficulty>(),
            Err(BotError::InvalidDifficulty("test".into()))
        );
        assert!("High".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_serialization() {
        let config = BotConfig::default().with_difficulty(Difficulty::Low).with_seed(7);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"difficulty":"low","seed":7}"#);

        let deserialized: BotConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_deserialize_aliases_and_defaults() {
        let config: BotConfig = serde_json::from_str(r#"{"difficulty":"easy"}"#).unwrap();
        assert_eq!(config.difficulty, Difficulty::Low);
        assert_eq!(config.seed, 42);
    }
}
