//! Built-in exercise bank shown when planning quests. Display data only.

use serde::Serialize;

use crate::rank::Rank;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExerciseType {
    Strength,
    Agility,
    Vitality,
    Perception,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogExercise {
    pub id: &'static str,
    pub name: &'static str,
    pub muscle_groups: &'static [&'static str],
    pub description: &'static str,
    pub rank: Rank,
    #[serde(rename = "type")]
    pub exercise_type: ExerciseType,
}

const EXERCISES: &[CatalogExercise] = &[
    CatalogExercise {
        id: "pushups",
        name: "Push Ups",
        muscle_groups: &["Chest", "Triceps", "Shoulders"],
        description: "A fundamental exercise to build upper body strength.",
        rank: Rank::E,
        exercise_type: ExerciseType::Strength,
    },
    CatalogExercise {
        id: "situps",
        name: "Sit Ups",
        muscle_groups: &["Abs", "Core"],
        description: "Strengthen your core to withstand powerful attacks.",
        rank: Rank::E,
        exercise_type: ExerciseType::Vitality,
    },
    CatalogExercise {
        id: "squats",
        name: "Squats",
        muscle_groups: &["Legs", "Glutes"],
        description: "Build the foundation of your power.",
        rank: Rank::E,
        exercise_type: ExerciseType::Strength,
    },
    CatalogExercise {
        id: "running",
        name: "Running (10km)",
        muscle_groups: &["Legs", "Cardio"],
        description: "Improve your stamina and endurance.",
        rank: Rank::D,
        exercise_type: ExerciseType::Agility,
    },
    CatalogExercise {
        id: "pullups",
        name: "Pull Ups",
        muscle_groups: &["Back", "Biceps"],
        description: "Master your own bodyweight to ascend to higher levels.",
        rank: Rank::D,
        exercise_type: ExerciseType::Strength,
    },
    CatalogExercise {
        id: "bench_press",
        name: "Bench Press",
        muscle_groups: &["Chest", "Triceps"],
        description: "Push beyond your limits to increase your striking power.",
        rank: Rank::C,
        exercise_type: ExerciseType::Strength,
    },
    CatalogExercise {
        id: "deadlift",
        name: "Deadlift",
        muscle_groups: &["Back", "Legs", "Core"],
        description: "Lift the weight of the world.",
        rank: Rank::S,
        exercise_type: ExerciseType::Strength,
    },
];

pub fn all() -> &'static [CatalogExercise] {
    EXERCISES
}

pub fn find(id: &str) -> Option<&'static CatalogExercise> {
    EXERCISES.iter().find(|ex| ex.id == id)
}

pub fn by_rank(rank: Rank) -> impl Iterator<Item = &'static CatalogExercise> {
    EXERCISES.iter().filter(move |ex| ex.rank == rank)
}
