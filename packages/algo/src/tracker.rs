//! Quest Progress Tracker
//!
//! Every status change goes through [`reduce`], a single transition from one
//! [`QuestState`] to the next. Reading the previous status, deciding the XP
//! grant, checking the all-complete bonus and writing the new state happen in
//! one step, so duplicate events cannot double-award.
//!
//! Per exercise: `pending -> completed | skipped`. Re-toggling is allowed; XP is
//! granted only when the status changes *into* `completed`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ProgressionConfig;
use crate::types::{DailyProgress, DailyQuest, ExerciseStatus, Performance, PlayerStats};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    #[error("exercise not in today's quest: {0}")]
    UnknownExercise(String),
}

/// Everything a transition reads and writes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestState {
    pub stats: PlayerStats,
    pub progress: DailyProgress,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestAction {
    SetExerciseStatus {
        exercise_id: String,
        status: ExerciseStatus,
    },
    SetActualPerformance {
        exercise_id: String,
        performance: Performance,
    },
}

/// Celebration event for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Notification {
    #[serde(rename_all = "camelCase")]
    LevelUp { level: u32, levels_gained: u32 },
    QuestComplete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: QuestState,
    /// Total XP granted by this transition, bonus included
    pub xp_awarded: u64,
    pub completion_bonus_awarded: bool,
    /// At most one notice per transition; level-up wins over quest-complete
    pub notification: Option<Notification>,
}

impl Transition {
    fn unchanged(state: &QuestState) -> Self {
        Self {
            state: state.clone(),
            xp_awarded: 0,
            completion_bonus_awarded: false,
            notification: None,
        }
    }

    pub fn changed(&self, before: &QuestState) -> bool {
        &self.state != before
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionSummary {
    pub total: usize,
    pub completed: usize,
    pub skipped: usize,
    pub pending: usize,
}

/// True only for a non-empty quest whose every exercise is completed
pub fn is_quest_complete(quest: &DailyQuest, progress: &DailyProgress) -> bool {
    !quest.is_empty()
        && quest
            .exercises
            .iter()
            .all(|ex| progress.status_of(&ex.id) == ExerciseStatus::Completed)
}

pub fn completion_summary(quest: &DailyQuest, progress: &DailyProgress) -> CompletionSummary {
    let mut summary = CompletionSummary {
        total: quest.exercises.len(),
        ..Default::default()
    };
    for ex in &quest.exercises {
        match progress.status_of(&ex.id) {
            ExerciseStatus::Completed => summary.completed += 1,
            ExerciseStatus::Skipped => summary.skipped += 1,
            ExerciseStatus::Pending => summary.pending += 1,
        }
    }
    summary
}

/// Apply one action to the state for today's quest.
///
/// Unknown exercise ids are rejected without touching the state.
pub fn reduce(
    config: &ProgressionConfig,
    quest: &DailyQuest,
    state: &QuestState,
    action: QuestAction,
) -> Result<Transition, TrackerError> {
    match action {
        QuestAction::SetExerciseStatus {
            exercise_id,
            status,
        } => set_exercise_status(config, quest, state, &exercise_id, status),
        QuestAction::SetActualPerformance {
            exercise_id,
            performance,
        } => {
            if quest.exercise(&exercise_id).is_none() {
                return Err(TrackerError::UnknownExercise(exercise_id));
            }
            let mut next = Transition::unchanged(state);
            next.state
                .progress
                .actual_performance
                .insert(exercise_id, performance);
            Ok(next)
        }
    }
}

fn set_exercise_status(
    config: &ProgressionConfig,
    quest: &DailyQuest,
    state: &QuestState,
    exercise_id: &str,
    status: ExerciseStatus,
) -> Result<Transition, TrackerError> {
    let exercise = quest
        .exercise(exercise_id)
        .ok_or_else(|| TrackerError::UnknownExercise(exercise_id.to_string()))?;

    let previous = state.progress.status_of(exercise_id);
    if previous == status {
        return Ok(Transition::unchanged(state));
    }

    let mut next = Transition::unchanged(state);
    next.state
        .progress
        .statuses
        .insert(exercise_id.to_string(), status);

    let mut levels_gained = 0u32;

    if status == ExerciseStatus::Completed {
        let actual = next.state.progress.performance_of(exercise);
        let xp = config.exercise_xp(exercise.planned(), actual);
        let result = config.add_xp_points(&next.state.stats, xp);
        levels_gained += result.levels_gained;
        next.state.stats = result.new_stats;
        next.xp_awarded += xp;

        tracing::debug!(exercise_id, xp, "exercise completed");
    }

    if !next.state.progress.rewards_claimed && is_quest_complete(quest, &next.state.progress) {
        let bonus = config.completion_bonus_xp;
        let result = config.add_xp_points(&next.state.stats, bonus);
        levels_gained += result.levels_gained;
        next.state.stats = result.new_stats;
        next.state.stats.streak = next.state.stats.streak.saturating_add(1);
        next.state.progress.rewards_claimed = true;
        next.xp_awarded += bonus;
        next.completion_bonus_awarded = true;

        tracing::info!(
            date = %next.state.progress.date,
            streak = next.state.stats.streak,
            bonus,
            "daily quest completed"
        );
    }

    next.notification = if levels_gained > 0 {
        Some(Notification::LevelUp {
            level: next.state.stats.level,
            levels_gained,
        })
    } else if next.completion_bonus_awarded {
        Some(Notification::QuestComplete)
    } else {
        None
    };

    Ok(next)
}
