//! Quest session
//!
//! Single owner of the app state. Every read of daily progress applies the
//! rollover rule first, and every mutation runs as one serialized
//! read-reduce-write step:
//!
//! 1. load stats, today's quest and (rolled-over) progress
//! 2. run the pure reducer from `strivex-algo`
//! 3. persist stats and progress in one batch
//! 4. hand the notification, if any, to the sink

use std::sync::{Mutex, MutexGuard};

use chrono::NaiveDate;
use strivex_algo::{
    reduce, rollover, DailyProgress, DailyQuest, Day, ExerciseStatus, Performance,
    PlayerStats, ProgressionConfig, QuestAction, QuestState, Rank, TrackerError, Transition,
    WeeklyQuest,
};
use thiserror::Error;
use tokio::sync::broadcast;

use crate::clock::Clock;
use crate::notify::NotificationSink;
use crate::storage::{
    encode_record, load_record, try_load_record, RecordChange, RecordKey, RecordStore,
    StorageError,
};

#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Tracker(#[from] TrackerError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("session lock poisoned")]
    LockPoisoned,
}

pub type SessionResult<T> = Result<T, SessionError>;

pub struct QuestSession<S: RecordStore, C: Clock> {
    store: S,
    clock: C,
    sink: Box<dyn NotificationSink>,
    config: ProgressionConfig,
    update_lock: Mutex<()>,
}

impl<S: RecordStore, C: Clock> QuestSession<S, C> {
    pub fn new(
        store: S,
        clock: C,
        sink: Box<dyn NotificationSink>,
        config: ProgressionConfig,
    ) -> Self {
        Self {
            store,
            clock,
            sink,
            config,
            update_lock: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn config(&self) -> &ProgressionConfig {
        &self.config
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<RecordChange> {
        self.store.subscribe()
    }

    // ========== Reads ==========

    pub fn player_stats(&self) -> PlayerStats {
        load_record(&self.store, RecordKey::PlayerStats, PlayerStats::initial)
    }

    pub fn weekly_quest(&self) -> WeeklyQuest {
        load_record(&self.store, RecordKey::WeeklyQuest, WeeklyQuest::default)
    }

    pub fn today_quest(&self) -> DailyQuest {
        self.weekly_quest().for_day(self.clock.weekday())
    }

    pub fn rank(&self) -> Rank {
        Rank::of(self.player_stats().level)
    }

    /// Today's progress; a stale record is replaced and persisted first.
    pub fn daily_progress(&self) -> SessionResult<DailyProgress> {
        let _guard = self.lock()?;
        let today = self.clock.today();
        self.load_current_progress(today)
    }

    // ========== Mutations ==========

    pub fn set_exercise_status(
        &self,
        exercise_id: &str,
        status: ExerciseStatus,
    ) -> SessionResult<Transition> {
        self.dispatch(QuestAction::SetExerciseStatus {
            exercise_id: exercise_id.to_string(),
            status,
        })
    }

    pub fn set_actual_performance(
        &self,
        exercise_id: &str,
        performance: Performance,
    ) -> SessionResult<Transition> {
        self.dispatch(QuestAction::SetActualPerformance {
            exercise_id: exercise_id.to_string(),
            performance,
        })
    }

    /// Replace the template for one weekday
    pub fn update_daily_quest(&self, day: Day, quest: DailyQuest) -> SessionResult<WeeklyQuest> {
        let _guard = self.lock()?;
        let mut weekly =
            try_load_record(&self.store, RecordKey::WeeklyQuest, WeeklyQuest::default)?;
        weekly.set_day(day, quest);
        self.store
            .save_batch(&[encode_record(RecordKey::WeeklyQuest, &weekly)?])?;

        tracing::info!(day = %day, "daily quest template updated");
        Ok(weekly)
    }

    /// Run one action through the reducer and persist the outcome.
    ///
    /// The clock is read once so quest and progress always belong to the
    /// same day. Read errors abort before anything is written.
    pub fn dispatch(&self, action: QuestAction) -> SessionResult<Transition> {
        let _guard = self.lock()?;
        let today = self.clock.today();

        let quest = try_load_record(&self.store, RecordKey::WeeklyQuest, WeeklyQuest::default)?
            .for_day(Day::of(today));
        let state = QuestState {
            stats: try_load_record(&self.store, RecordKey::PlayerStats, PlayerStats::initial)?,
            progress: self.load_current_progress(today)?,
        };

        let transition = reduce(&self.config, &quest, &state, action)?;

        if transition.changed(&state) {
            self.store.save_batch(&[
                encode_record(RecordKey::PlayerStats, &transition.state.stats)?,
                encode_record(RecordKey::DailyProgress, &transition.state.progress)?,
            ])?;
        }

        if let Some(notification) = &transition.notification {
            self.sink.notify(notification);
        }

        Ok(transition)
    }

    // ========== Internals ==========

    fn lock(&self) -> SessionResult<MutexGuard<'_, ()>> {
        self.update_lock.lock().map_err(|_| SessionError::LockPoisoned)
    }

    /// Caller must hold the update lock
    fn load_current_progress(&self, today: NaiveDate) -> SessionResult<DailyProgress> {
        let stored: Option<DailyProgress> =
            try_load_record(&self.store, RecordKey::DailyProgress, || None)?;

        let fresh = match stored {
            Some(progress) => match rollover(&progress, today) {
                Some(fresh) => fresh,
                None => return Ok(progress),
            },
            None => DailyProgress::new(today),
        };

        self.store
            .save_batch(&[encode_record(RecordKey::DailyProgress, &fresh)?])?;
        Ok(fresh)
    }
}
