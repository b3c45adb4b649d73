use chrono::NaiveDate;
use strivex_algo::{DailyQuest, ProgressionConfig, QuestExercise};
use strivex_app::{ChannelSink, FixedClock, QuestSession, SqliteStore};

pub type TestSession = QuestSession<SqliteStore, FixedClock>;

/// 2024-01-03, a Wednesday
pub fn wednesday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 3).expect("valid date")
}

pub fn create_test_session(date: NaiveDate) -> (TestSession, ChannelSink) {
    create_session_with_store(
        SqliteStore::in_memory().expect("Failed to create in-memory store"),
        date,
    )
}

pub fn create_session_with_store(
    store: SqliteStore,
    date: NaiveDate,
) -> (TestSession, ChannelSink) {
    let sink = ChannelSink::default();
    let session = QuestSession::new(
        store,
        FixedClock::new(date),
        Box::new(sink.clone()),
        ProgressionConfig::default(),
    );
    (session, sink)
}

pub fn two_exercise_quest() -> DailyQuest {
    DailyQuest::new(
        "push",
        vec![
            QuestExercise::new("a", "Push Ups", 3, 10),
            QuestExercise::new("b", "Dips", 3, 8),
        ],
    )
}
