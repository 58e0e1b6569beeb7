//! Exercise catalog and routine templates.

use crate::constants::{MAX_DURATION_SECONDS, MIN_DURATION_SECONDS};
use crate::dispatcher::Exercise;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How an exercise is measured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseKind {
    /// Counted repetitions
    Reps,
    /// Seconds held with correct form
    Duration,
}

impl fmt::Display for ExerciseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExerciseKind::Reps => f.write_str("reps"),
            ExerciseKind::Duration => f.write_str("duration"),
        }
    }
}

/// An exercise with its target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseDescriptor {
    /// Display name, used as the dispatch key
    pub name: String,
    pub kind: ExerciseKind,
    /// Repetitions or seconds
    pub target: u32,
}

impl ExerciseDescriptor {
    pub fn new(name: impl Into<String>, kind: ExerciseKind, target: u32) -> Self {
        Self {
            name: name.into(),
            kind,
            target,
        }
    }

    /// Copy with a different target
    #[must_use]
    pub fn with_target(&self, target: u32) -> Self {
        Self {
            target,
            ..self.clone()
        }
    }

    /// The evaluated exercise, if the name has an evaluator
    #[must_use]
    pub fn exercise(&self) -> Option<Exercise> {
        Exercise::from_name(&self.name)
    }
}

/// One step of a routine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineEntry {
    #[serde(flatten)]
    pub exercise: ExerciseDescriptor,
    /// Rest after this exercise, in seconds
    #[serde(default)]
    pub rest: u32,
}

/// Ordered list of exercises with rests between them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Routine {
    /// Lookup key, e.g. `lower_body`
    pub key: String,
    /// Display name
    pub name: String,
    pub entries: Vec<RoutineEntry>,
}

impl Routine {
    /// Check that the routine can be run
    pub fn validate(&self) -> Result<()> {
        if self.entries.is_empty() {
            return Err(Error::InvalidInput(format!("Routine {} has no exercises", self.key)));
        }
        for entry in &self.entries {
            let exercise = entry
                .exercise
                .exercise()
                .ok_or_else(|| Error::UnknownExercise(entry.exercise.name.clone()))?;
            let expected = exercise.kind();
            if entry.exercise.kind != expected {
                return Err(Error::InvalidInput(format!(
                    "Routine {}: {} is measured in {}",
                    self.key, entry.exercise.name, expected
                )));
            }
            if entry.exercise.target == 0 {
                return Err(Error::InvalidInput(format!(
                    "Routine {}: target for {} must be greater than 0",
                    self.key, entry.exercise.name
                )));
            }
        }
        Ok(())
    }
}

fn reps(name: &str, target: u32) -> ExerciseDescriptor {
    ExerciseDescriptor::new(name, ExerciseKind::Reps, target)
}

fn hold(name: &str, target: u32) -> ExerciseDescriptor {
    ExerciseDescriptor::new(name, ExerciseKind::Duration, target)
}

fn entry(exercise: ExerciseDescriptor, rest: u32) -> RoutineEntry {
    RoutineEntry { exercise, rest }
}

/// The built-in exercise list with default targets
#[must_use]
pub fn default_catalog() -> Vec<ExerciseDescriptor> {
    vec![
        hold("Plank", 30),
        reps("Push-up", 10),
        reps("Squat", 15),
        reps("Bridge", 15),
        hold("Bird-dog", 45),
        reps("High Knees", 30),
        reps("Lunges", 20),
        hold("Superman", 30),
        hold("Wall-sit", 30),
    ]
}

/// The built-in routine templates
#[must_use]
pub fn default_routines() -> Vec<Routine> {
    vec![
        Routine {
            key: "core_strength".to_string(),
            name: "Core Strength & Stability".to_string(),
            entries: vec![
                entry(reps("High Knees", 30), 15),
                entry(hold("Plank", 30), 15),
                entry(hold("Bird-dog", 45), 0),
            ],
        },
        Routine {
            key: "lower_body".to_string(),
            name: "Lower Body Power".to_string(),
            entries: vec![
                entry(reps("Squat", 15), 20),
                entry(reps("Lunges", 20), 20),
                entry(reps("Bridge", 20), 0),
            ],
        },
        Routine {
            key: "upper_body".to_string(),
            name: "Upper Body & Posture".to_string(),
            entries: vec![
                entry(reps("Push-up", 10), 20),
                entry(hold("Superman", 15), 15),
                entry(hold("Wall-sit", 45), 0),
            ],
        },
    ]
}

fn loose_name(name: &str) -> String {
    name.trim().to_lowercase().replace('-', " ")
}

/// Find an exercise from user or voice input.
///
/// Tries an exact match, then case-insensitive, then ignoring the
/// difference between dashes and spaces.
#[must_use]
pub fn find_exercise<'a>(catalog: &'a [ExerciseDescriptor], name: &str) -> Option<&'a ExerciseDescriptor> {
    catalog
        .iter()
        .find(|ex| ex.name == name)
        .or_else(|| catalog.iter().find(|ex| ex.name.eq_ignore_ascii_case(name.trim())))
        .or_else(|| {
            let wanted = loose_name(name);
            catalog.iter().find(|ex| loose_name(&ex.name) == wanted)
        })
}

/// Find a routine by key or display name (case-insensitive, spaces or underscores)
pub fn find_routine<'a>(routines: &'a [Routine], key_or_name: &str) -> Result<&'a Routine> {
    let wanted = key_or_name.trim().to_lowercase().replace(' ', "_");
    routines
        .iter()
        .find(|routine| routine.key == wanted || routine.name.eq_ignore_ascii_case(key_or_name.trim()))
        .ok_or_else(|| Error::UnknownRoutine(key_or_name.to_string()))
}

/// Clamp a requested hold duration to the supported range
#[must_use]
pub fn clamp_duration(seconds: u32) -> u32 {
    seconds.clamp(MIN_DURATION_SECONDS, MAX_DURATION_SECONDS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_names_all_have_evaluators() {
        for descriptor in default_catalog() {
            assert!(descriptor.exercise().is_some(), "{} has no evaluator", descriptor.name);
        }
        for routine in default_routines() {
            routine.validate().unwrap();
            for entry in &routine.entries {
                assert!(entry.exercise.exercise().is_some());
            }
        }
    }

    #[test]
    fn test_find_exercise_tolerates_case_and_dashes() {
        let catalog = default_catalog();
        assert_eq!(find_exercise(&catalog, "Push-up").unwrap().name, "Push-up");
        assert_eq!(find_exercise(&catalog, "push-up").unwrap().name, "Push-up");
        assert_eq!(find_exercise(&catalog, "wall sit").unwrap().name, "Wall-sit");
        assert_eq!(find_exercise(&catalog, "HIGH KNEES").unwrap().name, "High Knees");
        assert!(find_exercise(&catalog, "burpee").is_none());
    }

    #[test]
    fn test_find_routine() {
        let routines = default_routines();
        assert_eq!(find_routine(&routines, "lower_body").unwrap().name, "Lower Body Power");
        assert_eq!(find_routine(&routines, "lower body").unwrap().key, "lower_body");
        assert_eq!(find_routine(&routines, "Core Strength & Stability").unwrap().key, "core_strength");
        assert!(matches!(find_routine(&routines, "cardio"), Err(Error::UnknownRoutine(_))));
    }

    #[test]
    fn test_clamp_duration() {
        assert_eq!(clamp_duration(5), 10);
        assert_eq!(clamp_duration(45), 45);
        assert_eq!(clamp_duration(1000), 300);
    }
}
