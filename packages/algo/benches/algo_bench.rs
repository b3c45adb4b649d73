//! Benchmark suite for strivex-algo
//!
//! Run with: cargo bench

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use strivex_algo::{
    add_xp, reduce, DailyProgress, Day, ExerciseStatus, PlayerStats, ProgressionConfig,
    QuestAction, QuestState, WeeklyQuest,
};

fn bench_add_xp_large_grant(c: &mut Criterion) {
    let stats = PlayerStats::initial();
    c.bench_function("add_xp 1M", |b| b.iter(|| add_xp(black_box(&stats), 1_000_000.0)));
}

fn bench_reduce_complete(c: &mut Criterion) {
    let config = ProgressionConfig::default();
    let quest = WeeklyQuest::default().for_day(Day::Wed);
    let state = QuestState {
        stats: PlayerStats::initial(),
        progress: DailyProgress::new(NaiveDate::from_ymd_opt(2024, 1, 3).unwrap()),
    };
    c.bench_function("reduce complete", |b| {
        b.iter(|| {
            reduce(
                &config,
                &quest,
                black_box(&state),
                QuestAction::SetExerciseStatus {
                    exercise_id: "1".to_string(),
                    status: ExerciseStatus::Completed,
                },
            )
        })
    });
}

criterion_group!(benches, bench_add_xp_large_grant, bench_reduce_complete);
criterion_main!(benches);
