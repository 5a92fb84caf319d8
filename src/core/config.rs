//! Game configuration.
//!
//! A `WarConfig` is everything needed to set up a game besides the cards
//! themselves. Games are usually created through `WarGameBuilder`, which
//! fills in a config and validates it.

use serde::{Deserialize, Serialize};

use super::error::{Result, WarError};

/// Name the computer opponent plays under.
pub const DEFAULT_COMPUTER_NAME: &str = "HAL";

/// Configuration for a single game of War.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarConfig {
    /// Display name of the human player.
    pub player_name: String,

    /// Display name of the computer.
    pub computer_name: String,

    /// Shuffle seed. `None` draws one from OS entropy.
    pub seed: Option<u64>,

    /// Stop after this many rounds even if both sides can continue.
    /// `None` plays until a round aborts or the hands repeat.
    pub max_rounds: Option<u32>,
}

impl Default for WarConfig {
    fn default() -> Self {
        Self {
            player_name: "Player".to_string(),
            computer_name: DEFAULT_COMPUTER_NAME.to_string(),
            seed: None,
            max_rounds: None,
        }
    }
}

impl WarConfig {
    /// Create a config for the named player with default settings.
    pub fn new(player_name: impl Into<String>) -> Self {
        Self {
            player_name: player_name.into(),
            ..Self::default()
        }
    }

    /// Check that the config can drive a game.
    pub fn validate(&self) -> Result<()> {
        if self.player_name.trim().is_empty() {
            return Err(WarError::InvalidConfig("player name is empty".into()));
        }
        if self.computer_name.trim().is_empty() {
            return Err(WarError::InvalidConfig("computer name is empty".into()));
        }
        if self.max_rounds == Some(0) {
            return Err(WarError::InvalidConfig("max rounds must be at least 1".into()));
        }
        Ok(())
    }
}
