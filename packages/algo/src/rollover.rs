//! Daily rollover
//!
//! Progress is per calendar day. Whenever the stored date no longer matches the
//! caller's `today`, the record is replaced by a fresh one. Player stats are
//! never touched here.

use chrono::NaiveDate;

use crate::types::DailyProgress;

pub fn needs_rollover(progress: &DailyProgress, today: NaiveDate) -> bool {
    progress.date != today
}

/// Fresh record for `today`, or `None` when `progress` is already current
pub fn rollover(progress: &DailyProgress, today: NaiveDate) -> Option<DailyProgress> {
    if !needs_rollover(progress, today) {
        return None;
    }
    tracing::info!(from = %progress.date, to = %today, "daily progress rolled over");
    Some(DailyProgress::new(today))
}

/// Progress valid for `today`, resetting if the stored day is stale
pub fn current_progress(progress: DailyProgress, today: NaiveDate) -> DailyProgress {
    match rollover(&progress, today) {
        Some(fresh) => fresh,
        None => progress,
    }
}
