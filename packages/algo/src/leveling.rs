//! Leveling Engine
//!
//! Pure XP arithmetic:
//! - Level `n` requires `n * xp_per_level` XP to advance
//! - A completed exercise earns a base reward plus bonuses for beating the plan
//! - Gained XP is applied in a loop so a single grant can span several levels
//!
//! After [`ProgressionConfig::add_xp`] returns, `current_xp` is always below the
//! requirement of the returned level.

use serde::{Deserialize, Serialize};

use crate::config::ProgressionConfig;
use crate::sanitize::sanitize_xp;
use crate::types::{Performance, PlayerStats};

/// Result of applying an XP grant
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelUpResult {
    pub new_stats: PlayerStats,
    pub leveled_up: bool,
    pub levels_gained: u32,
}

impl ProgressionConfig {
    /// XP needed to advance from `level` to `level + 1`
    pub fn xp_required_for_level(&self, level: u32) -> u64 {
        u64::from(level.max(1)).saturating_mul(self.xp_per_level)
    }

    /// Reward for one completed exercise. Under-performing never costs XP.
    pub fn exercise_xp(&self, planned: Performance, actual: Performance) -> u64 {
        let extra_sets = u64::from(actual.sets.saturating_sub(planned.sets));
        let extra_reps = u64::from(actual.reps.saturating_sub(planned.reps));

        self.base_exercise_xp
            .saturating_add(extra_sets.saturating_mul(self.extra_set_bonus))
            .saturating_add(extra_reps.saturating_mul(self.extra_rep_bonus))
    }

    /// Add XP and apply every level-up it pays for.
    ///
    /// `xp_gained` is sanitized first: negative or non-finite grants count as zero.
    pub fn add_xp(&self, stats: &PlayerStats, xp_gained: f64) -> LevelUpResult {
        let gained = sanitize_xp(xp_gained, self.max_xp_gain);
        self.add_xp_points(stats, gained)
    }

    /// Integer form of [`Self::add_xp`] for callers that already hold whole points
    pub fn add_xp_points(&self, stats: &PlayerStats, xp_gained: u64) -> LevelUpResult {
        let mut new_stats = stats.clone();
        new_stats.level = new_stats.level.max(1);
        new_stats.current_xp = new_stats
            .current_xp
            .saturating_add(xp_gained.min(self.max_xp_gain));

        let mut levels_gained = 0u32;
        let gain = self.stat_gain_per_level;

        // xp_per_level > 0 is enforced by validate(); guard anyway so a bad
        // config cannot spin forever.
        while self.xp_per_level > 0
            && new_stats.current_xp >= self.xp_required_for_level(new_stats.level)
        {
            new_stats.current_xp -= self.xp_required_for_level(new_stats.level);
            new_stats.level = new_stats.level.saturating_add(1);
            levels_gained += 1;

            new_stats.strength = new_stats.strength.saturating_add(gain);
            new_stats.agility = new_stats.agility.saturating_add(gain);
            new_stats.vitality = new_stats.vitality.saturating_add(gain);
            new_stats.perception = new_stats.perception.saturating_add(gain);
            new_stats.intelligence = new_stats.intelligence.saturating_add(gain);
        }

        if levels_gained > 0 {
            tracing::debug!(
                from = stats.level,
                to = new_stats.level,
                levels_gained,
                "level up"
            );
        }

        LevelUpResult {
            new_stats,
            leveled_up: levels_gained > 0,
            levels_gained,
        }
    }

    /// Fraction of the current level already earned, in `[0, 1)`
    pub fn level_progress(&self, stats: &PlayerStats) -> f64 {
        let required = self.xp_required_for_level(stats.level);
        if required == 0 {
            return 0.0;
        }
        (stats.current_xp as f64 / required as f64).clamp(0.0, 1.0)
    }
}

pub fn xp_required_for_level(level: u32) -> u64 {
    ProgressionConfig::default().xp_required_for_level(level)
}

pub fn exercise_xp(planned: Performance, actual: Performance) -> u64 {
    ProgressionConfig::default().exercise_xp(planned, actual)
}

pub fn add_xp(stats: &PlayerStats, xp_gained: f64) -> LevelUpResult {
    ProgressionConfig::default().add_xp(stats, xp_gained)
}

pub fn level_progress(stats: &PlayerStats) -> f64 {
    ProgressionConfig::default().level_progress(stats)
}
