//! Progression tunables
//!
//! Every engine formula reads its constants from [`ProgressionConfig`]. The
//! default values are the reference rules of the game; the free functions in
//! [`crate::leveling`] use them directly.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound applied to a single XP grant before accumulation
pub const DEFAULT_MAX_XP_GAIN: u64 = 1_000_000_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("xp_per_level must be greater than zero")]
    ZeroXpPerLevel,

    #[error("max_xp_gain must be greater than zero")]
    ZeroMaxXpGain,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressionConfig {
    /// Requirement slope: level `n` needs `n * xp_per_level` XP
    pub xp_per_level: u64,
    /// Unconditional reward for each completed exercise
    pub base_exercise_xp: u64,
    /// Bonus per set above plan
    pub extra_set_bonus: u64,
    /// Bonus per rep above plan
    pub extra_rep_bonus: u64,
    /// Added to each attribute per level gained
    pub stat_gain_per_level: u32,
    /// Granted once per day when every objective is completed
    pub completion_bonus_xp: u64,
    /// Sanitization ceiling for one grant
    pub max_xp_gain: u64,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            xp_per_level: 100,
            base_exercise_xp: 10,
            extra_set_bonus: 5,
            extra_rep_bonus: 2,
            stat_gain_per_level: 2,
            completion_bonus_xp: 100,
            max_xp_gain: DEFAULT_MAX_XP_GAIN,
        }
    }
}

impl ProgressionConfig {
    /// Leveling only terminates when each level costs something
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.xp_per_level == 0 {
            return Err(ConfigError::ZeroXpPerLevel);
        }
        if self.max_xp_gain == 0 {
            return Err(ConfigError::ZeroMaxXpGain);
        }
        Ok(())
    }
}
