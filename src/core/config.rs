//! Match configuration.
//!
//! Every tunable of a match lives here and is passed into the engine at
//! construction. Loadable from TOML; absent keys fall back to defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::direction::Direction;
use crate::error::ConfigError;

/// Smallest supported table.
pub const MIN_PLAYERS: usize = 2;

/// Largest supported table.
pub const MAX_PLAYERS: usize = 8;

/// Match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Seats at the table (2-8).
    pub player_count: usize,

    /// Seats controlled by humans; the rest are computers.
    pub human_count: usize,

    /// Rounds played before the match ends.
    pub max_rounds: u32,

    /// Score every player starts with.
    pub starting_score: u32,

    /// Dice handed to every player at the start of each round.
    pub dice_per_round: usize,

    /// Dice rolled to decide who opens the match.
    pub opening_dice: usize,

    /// Direction chosen by computer-controlled first players.
    pub auto_direction: Direction,

    /// RNG seed. `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            player_count: 4,
            human_count: 1,
            max_rounds: 10,
            starting_score: 100,
            dice_per_round: 5,
            opening_dice: 2,
            auto_direction: Direction::Forward,
            seed: None,
        }
    }
}

impl MatchConfig {
    /// Create a config for `player_count` seats with `human_count` humans.
    #[must_use]
    pub fn new(player_count: usize, human_count: usize) -> Self {
        Self {
            player_count,
            human_count,
            ..Self::default()
        }
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: MatchConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!("Warning: config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(ConfigError::Validation(format!(
                "player_count must be in [{MIN_PLAYERS}, {MAX_PLAYERS}]"
            )));
        }
        if self.human_count > self.player_count {
            return Err(ConfigError::Validation(
                "human_count must be <= player_count".into(),
            ));
        }
        if self.max_rounds == 0 {
            return Err(ConfigError::Validation("max_rounds must be >= 1".into()));
        }
        if self.starting_score == 0 {
            return Err(ConfigError::Validation("starting_score must be > 0".into()));
        }
        if self.dice_per_round == 0 {
            return Err(ConfigError::Validation("dice_per_round must be >= 1".into()));
        }
        if self.opening_dice == 0 {
            return Err(ConfigError::Validation("opening_dice must be >= 1".into()));
        }
        Ok(())
    }

    #[must_use]
    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = rounds;
        self
    }

    #[must_use]
    pub fn with_starting_score(mut self, score: u32) -> Self {
        self.starting_score = score;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_auto_direction(mut self, direction: Direction) -> Self {
        self.auto_direction = direction;
        self
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&MatchConfig::default()).expect("default config serializes")
    }
}
