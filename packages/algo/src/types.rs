//! Common Types and Constants
//!
//! Shared data structures used across the progression modules. Field names
//! serialize in camelCase so records written by the browser client load
//! unchanged.

use std::collections::BTreeMap;

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

// ==================== Constants ====================

/// Level every new player starts at
pub const STARTING_LEVEL: u32 = 1;

/// Starting value of each of the five attributes
pub const STARTING_ATTRIBUTE: u32 = 10;

/// Avatar shown until the player picks one
pub const DEFAULT_AVATAR_URL: &str = "https://i.pravatar.cc/150?img=53";

// ==================== Player Types ====================

/// Persistent player progression, one per installation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    /// Current level (>= 1)
    pub level: u32,
    /// XP accumulated toward the next level
    pub current_xp: u64,
    pub strength: u32,
    pub agility: u32,
    pub vitality: u32,
    pub perception: u32,
    pub intelligence: u32,
    /// Consecutive days with every objective completed
    #[serde(default)]
    pub streak: u32,
    /// Opaque display string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl PlayerStats {
    /// Stats of a freshly installed player
    pub fn initial() -> Self {
        Self {
            level: STARTING_LEVEL,
            current_xp: 0,
            strength: STARTING_ATTRIBUTE,
            agility: STARTING_ATTRIBUTE,
            vitality: STARTING_ATTRIBUTE,
            perception: STARTING_ATTRIBUTE,
            intelligence: STARTING_ATTRIBUTE,
            streak: 0,
            avatar_url: Some(DEFAULT_AVATAR_URL.to_string()),
        }
    }

    /// The five attributes in display order
    pub fn attributes(&self) -> [(&'static str, u32); 5] {
        [
            ("strength", self.strength),
            ("agility", self.agility),
            ("vitality", self.vitality),
            ("perception", self.perception),
            ("intelligence", self.intelligence),
        ]
    }
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self::initial()
    }
}

// ==================== Quest Types ====================

/// Sets and reps, either planned or actually performed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performance {
    pub sets: u32,
    pub reps: u32,
}

impl Performance {
    pub fn new(sets: u32, reps: u32) -> Self {
        Self { sets, reps }
    }
}

/// One planned exercise inside a daily quest
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestExercise {
    pub id: String,
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gif_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_part: Option<String>,
}

impl QuestExercise {
    pub fn new(id: impl Into<String>, name: impl Into<String>, sets: u32, reps: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            sets,
            reps,
            gif_url: None,
            target: None,
            body_part: None,
        }
    }

    /// Planned sets and reps
    pub fn planned(&self) -> Performance {
        Performance::new(self.sets, self.reps)
    }
}

/// Quest template for a single weekday
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyQuest {
    pub category: String,
    #[serde(default)]
    pub exercises: Vec<QuestExercise>,
}

impl DailyQuest {
    pub fn new(category: impl Into<String>, exercises: Vec<QuestExercise>) -> Self {
        Self {
            category: category.into(),
            exercises,
        }
    }

    pub fn exercise(&self, exercise_id: &str) -> Option<&QuestExercise> {
        self.exercises.iter().find(|ex| ex.id == exercise_id)
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}

/// Weekday key of the weekly template
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Sun,
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Sun,
        Day::Mon,
        Day::Tue,
        Day::Wed,
        Day::Thu,
        Day::Fri,
        Day::Sat,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Day::Sun => "Sun",
            Day::Mon => "Mon",
            Day::Tue => "Tue",
            Day::Wed => "Wed",
            Day::Thu => "Thu",
            Day::Fri => "Fri",
            Day::Sat => "Sat",
        }
    }

    /// Accepts short ("wed") and long ("Wednesday") names, case-insensitive
    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        let prefix = lower.get(..3)?;
        Day::ALL.into_iter().find(|d| d.as_str().to_lowercase() == prefix)
    }

    pub fn of(date: NaiveDate) -> Self {
        use chrono::Datelike;
        Day::from(date.weekday())
    }
}

impl From<Weekday> for Day {
    fn from(w: Weekday) -> Self {
        match w {
            Weekday::Sun => Day::Sun,
            Weekday::Mon => Day::Mon,
            Weekday::Tue => Day::Tue,
            Weekday::Wed => Day::Wed,
            Weekday::Thu => Day::Thu,
            Weekday::Fri => Day::Fri,
            Weekday::Sat => Day::Sat,
        }
    }
}

impl std::fmt::Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One quest template per weekday, reused every week
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklyQuest(pub BTreeMap<Day, DailyQuest>);

impl WeeklyQuest {
    /// Quest for `day`; a missing entry reads as an empty quest
    pub fn for_day(&self, day: Day) -> DailyQuest {
        self.0.get(&day).cloned().unwrap_or_default()
    }

    pub fn set_day(&mut self, day: Day, quest: DailyQuest) {
        self.0.insert(day, quest);
    }

    pub fn days(&self) -> impl Iterator<Item = (&Day, &DailyQuest)> {
        self.0.iter()
    }
}

impl Default for WeeklyQuest {
    /// Seeded template for a new installation
    fn default() -> Self {
        let mut days = BTreeMap::new();
        days.insert(Day::Sun, DailyQuest::new("rest", vec![]));
        days.insert(Day::Mon, DailyQuest::new("push", vec![]));
        days.insert(Day::Tue, DailyQuest::new("pull", vec![]));
        days.insert(
            Day::Wed,
            DailyQuest::new(
                "strength",
                vec![
                    QuestExercise::new("1", "Push Ups", 3, 15),
                    QuestExercise::new("2", "Squats", 4, 12),
                    QuestExercise::new("3", "Deadlifts", 3, 10),
                ],
            ),
        );
        days.insert(Day::Thu, DailyQuest::new("cardio", vec![]));
        days.insert(Day::Fri, DailyQuest::new("yoga", vec![]));
        days.insert(Day::Sat, DailyQuest::new("test", vec![]));
        Self(days)
    }
}

// ==================== Progress Types ====================

/// Per-day status of a single objective
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseStatus {
    #[default]
    Pending,
    Completed,
    Skipped,
}

impl ExerciseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseStatus::Pending => "pending",
            ExerciseStatus::Completed => "completed",
            ExerciseStatus::Skipped => "skipped",
        }
    }
}

impl std::fmt::Display for ExerciseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transient progress for one calendar day
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyProgress {
    /// Day this record belongs to, stored as `YYYY-MM-DD`
    pub date: NaiveDate,
    #[serde(default)]
    pub statuses: BTreeMap<String, ExerciseStatus>,
    #[serde(default)]
    pub actual_performance: BTreeMap<String, Performance>,
    #[serde(default)]
    pub rewards_claimed: bool,
}

impl DailyProgress {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            statuses: BTreeMap::new(),
            actual_performance: BTreeMap::new(),
            rewards_claimed: false,
        }
    }

    /// Status of an exercise, `Pending` when never touched
    pub fn status_of(&self, exercise_id: &str) -> ExerciseStatus {
        self.statuses.get(exercise_id).copied().unwrap_or_default()
    }

    /// Reported performance, falling back to the plan
    pub fn performance_of(&self, exercise: &QuestExercise) -> Performance {
        self.actual_performance
            .get(&exercise.id)
            .copied()
            .unwrap_or_else(|| exercise.planned())
    }
}
