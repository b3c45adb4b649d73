use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use strivex_algo::catalog::{self, CatalogExercise};
use strivex_algo::{
    completion_summary, levels_to_next_rank, DailyQuest, Day, ExerciseStatus, Notification,
    Performance, QuestExercise, Rank, Transition,
};
use strivex_app::config::Config;
use strivex_app::logging::init_tracing;
use strivex_app::{
    Clock, FixedClock, QuestSession, RecordStore, SessionResult, SqliteStore, SystemClock,
    TracingSink,
};

#[derive(Debug, Parser)]
#[command(name = "strivex", version, about = "Daily fitness quests with RPG progression")]
struct Cli {
    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long, global = true)]
    date: Option<NaiveDate>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Level, rank, attributes and today's progress
    Status,
    /// Show the quest for today or another weekday
    Quest {
        #[arg(long, value_parser = parse_day)]
        day: Option<Day>,
    },
    /// Mark an exercise completed, optionally with the actual sets and reps
    Complete {
        id: String,
        #[arg(long)]
        sets: Option<u32>,
        #[arg(long)]
        reps: Option<u32>,
    },
    /// Mark an exercise skipped
    Skip { id: String },
    /// Put an exercise back to pending
    Reset { id: String },
    /// Edit the weekly quest template
    Plan {
        #[command(subcommand)]
        action: PlanAction,
    },
    /// List the exercise bank
    Bank {
        #[arg(long, value_parser = parse_rank)]
        rank: Option<Rank>,
    },
}

#[derive(Debug, Subcommand)]
enum PlanAction {
    Add {
        #[arg(value_parser = parse_day)]
        day: Day,
        id: String,
        name: String,
        sets: u32,
        reps: u32,
    },
    Remove {
        #[arg(value_parser = parse_day)]
        day: Day,
        id: String,
    },
    Category {
        #[arg(value_parser = parse_day)]
        day: Day,
        name: String,
    },
}

fn parse_day(s: &str) -> Result<Day, String> {
    Day::parse(s).ok_or_else(|| format!("unknown weekday: {s}"))
}

fn parse_rank(s: &str) -> Result<Rank, String> {
    Rank::parse(s).ok_or_else(|| format!("unknown rank: {s}"))
}

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            return ExitCode::FAILURE;
        }
    };
    let _log_guard = init_tracing(&config);

    let store = match SqliteStore::open(&config.db_path) {
        Ok(store) => store,
        Err(err) => {
            tracing::error!(
                error = %err,
                path = %config.db_path.display(),
                "failed to open store"
            );
            return ExitCode::FAILURE;
        }
    };

    let sink = Box::new(TracingSink);
    let result = match cli.date {
        Some(date) => {
            let clock = FixedClock::new(date);
            run(QuestSession::new(store, clock, sink, config.progression), cli.command)
        }
        None => run(
            QuestSession::new(store, SystemClock, sink, config.progression),
            cli.command,
        ),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "command failed");
            ExitCode::FAILURE
        }
    }
}

fn run<S: RecordStore, C: Clock>(
    session: QuestSession<S, C>,
    command: Command,
) -> SessionResult<()> {
    match command {
        Command::Status => print_status(&session)?,
        Command::Quest { day } => {
            let day = day.unwrap_or_else(|| session.clock().weekday());
            print_quest(day, &session.weekly_quest().for_day(day));
        }
        Command::Complete { id, sets, reps } => {
            if sets.is_some() || reps.is_some() {
                let planned = session
                    .today_quest()
                    .exercise(&id)
                    .map(QuestExercise::planned)
                    .unwrap_or_default();
                let actual = Performance::new(
                    sets.unwrap_or(planned.sets),
                    reps.unwrap_or(planned.reps),
                );
                session.set_actual_performance(&id, actual)?;
            }
            let transition = session.set_exercise_status(&id, ExerciseStatus::Completed)?;
            print_transition(&transition);
        }
        Command::Skip { id } => {
            let transition = session.set_exercise_status(&id, ExerciseStatus::Skipped)?;
            print_transition(&transition);
        }
        Command::Reset { id } => {
            let transition = session.set_exercise_status(&id, ExerciseStatus::Pending)?;
            print_transition(&transition);
        }
        Command::Plan { action } => {
            let current = session.weekly_quest().for_day(plan_day(&action));
            let (day, quest) = apply_plan(&current, action);
            session.update_daily_quest(day, quest.clone())?;
            print_quest(day, &quest);
        }
        Command::Bank { rank } => {
            for ex in bank_exercises(rank) {
                println!(
                    "[{}] {:<16} {:<10} {}",
                    ex.rank,
                    ex.name,
                    format!("{:?}", ex.exercise_type),
                    ex.muscle_groups.join(", ")
                );
            }
        }
    }
    Ok(())
}

fn bank_exercises(rank: Option<Rank>) -> Vec<&'static CatalogExercise> {
    match rank {
        Some(rank) => catalog::by_rank(rank).collect(),
        None => catalog::all().iter().collect(),
    }
}

fn plan_day(action: &PlanAction) -> Day {
    match action {
        PlanAction::Add { day, .. }
        | PlanAction::Remove { day, .. }
        | PlanAction::Category { day, .. } => *day,
    }
}

fn apply_plan(current: &DailyQuest, action: PlanAction) -> (Day, DailyQuest) {
    let mut quest = current.clone();
    match action {
        PlanAction::Add {
            day,
            id,
            name,
            sets,
            reps,
        } => {
            let exercise = QuestExercise::new(id, name, sets, reps);
            match quest.exercises.iter_mut().find(|ex| ex.id == exercise.id) {
                Some(existing) => *existing = exercise,
                None => quest.exercises.push(exercise),
            }
            (day, quest)
        }
        PlanAction::Remove { day, id } => {
            quest.exercises.retain(|ex| ex.id != id);
            (day, quest)
        }
        PlanAction::Category { day, name } => {
            quest.category = name;
            (day, quest)
        }
    }
}

fn print_status<S: RecordStore, C: Clock>(session: &QuestSession<S, C>) -> SessionResult<()> {
    let stats = session.player_stats();
    let rank = Rank::of(stats.level);
    let required = session.config().xp_required_for_level(stats.level);

    println!("{} | Level {} | {}/{} XP", rank.title(), stats.level, stats.current_xp, required);
    if let Some(levels) = levels_to_next_rank(stats.level) {
        println!("{levels} level(s) to next rank");
    }
    for (name, value) in stats.attributes() {
        println!("  {name:<13} {value}");
    }
    println!("Streak: {} day(s)", stats.streak);

    let quest = session.today_quest();
    let progress = session.daily_progress()?;
    let summary = completion_summary(&quest, &progress);
    println!(
        "Today ({}, {}): {}/{} completed, {} skipped{}",
        progress.date,
        quest.category,
        summary.completed,
        summary.total,
        summary.skipped,
        if progress.rewards_claimed { ", rewards claimed" } else { "" }
    );
    Ok(())
}

fn print_quest(day: Day, quest: &DailyQuest) {
    println!("{day}: {}", quest.category);
    if quest.is_empty() {
        println!("  (no exercises)");
    }
    for ex in &quest.exercises {
        println!("  {:<6} {:<20} {}x{}", ex.id, ex.name, ex.sets, ex.reps);
    }
}

fn print_transition(transition: &Transition) {
    if transition.xp_awarded > 0 {
        println!("+{} XP", transition.xp_awarded);
    }
    match &transition.notification {
        Some(Notification::LevelUp {
            level,
            levels_gained,
        }) => println!("LEVEL UP! Now level {level} (+{levels_gained})"),
        Some(Notification::QuestComplete) => println!("Daily quest complete!"),
        None => {}
    }
}
