//! # strivex-algo - progression engine for daily fitness quests
//!
//! Pure Rust, no I/O. Callers own persistence and the clock; this crate only
//! turns state plus an event into the next state.
//!
//! ## Module layout
//!
//! - [`types`] - player stats, quest templates and per-day progress
//! - [`config`] - progression tunables and their validation
//! - [`sanitize`] - clamping of raw XP inputs
//! - [`leveling`] - XP requirements, exercise rewards, level-ups
//! - [`rank`] - level to rank tier
//! - [`tracker`] - reducer for exercise status events and the daily bonus
//! - [`rollover`] - daily reset of progress
//! - [`catalog`] - built-in exercise bank
//!
//! ## Example
//!
//! ```rust
//! use strivex_algo::{add_xp, rank_of, PlayerStats, Rank};
//!
//! let result = add_xp(&PlayerStats::initial(), 300.0);
//! assert_eq!(result.new_stats.level, 3);
//! assert_eq!(rank_of(result.new_stats.level), Rank::E);
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod catalog;
pub mod config;
pub mod leveling;
pub mod rank;
pub mod rollover;
pub mod sanitize;
pub mod tracker;
pub mod types;

// ============================================================================
// Re-exports
// ============================================================================

pub use types::*;

pub use config::{ConfigError, ProgressionConfig};

pub use leveling::{
    add_xp, exercise_xp, level_progress, xp_required_for_level, LevelUpResult,
};

pub use rank::{levels_to_next_rank, rank_of, Rank};

pub use rollover::{current_progress, needs_rollover, rollover};

pub use tracker::{
    completion_summary, is_quest_complete, reduce, CompletionSummary, Notification,
    QuestAction, QuestState, TrackerError, Transition,
};
