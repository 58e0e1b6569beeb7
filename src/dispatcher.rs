//! Exercise registry and per-frame dispatch.
//!
//! Every [`Exercise`] maps to exactly one evaluator through an exhaustive
//! match, so adding an exercise without an evaluator does not compile.

use crate::catalog::ExerciseKind;
use crate::evaluators::{
    bird_dog::BirdDog, bridge::Bridge, high_knees::HighKnees, lunge::Lunge, plank::Plank, pushup::PushUp,
    squat::Squat, superman::Superman, wall_sit::WallSit, Evaluator,
};
use crate::feedback::{EvaluationResult, EvaluationState, Severity};
use crate::keypoints::Pose;
use std::fmt;
use std::str::FromStr;

/// Feedback for names that have no evaluator
pub const NOT_IMPLEMENTED_FEEDBACK: &str = "Evaluation not implemented for this exercise.";

static PLANK: Plank = Plank;
static PUSH_UP: PushUp = PushUp;
static SQUAT: Squat = Squat;
static BRIDGE: Bridge = Bridge;
static BIRD_DOG: BirdDog = BirdDog;
static HIGH_KNEES: HighKnees = HighKnees;
static LUNGE: Lunge = Lunge;
static SUPERMAN: Superman = Superman;
static WALL_SIT: WallSit = WallSit;

/// Exercises with a form evaluator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Exercise {
    Plank,
    PushUp,
    Squat,
    Bridge,
    BirdDog,
    HighKnees,
    Lunges,
    Superman,
    WallSit,
}

impl Exercise {
    /// All exercises in catalog order
    pub const ALL: [Exercise; 9] = [
        Exercise::Plank,
        Exercise::PushUp,
        Exercise::Squat,
        Exercise::Bridge,
        Exercise::BirdDog,
        Exercise::HighKnees,
        Exercise::Lunges,
        Exercise::Superman,
        Exercise::WallSit,
    ];

    /// Display name, also the dispatch key
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Exercise::Plank => "Plank",
            Exercise::PushUp => "Push-up",
            Exercise::Squat => "Squat",
            Exercise::Bridge => "Bridge",
            Exercise::BirdDog => "Bird-dog",
            Exercise::HighKnees => "High Knees",
            Exercise::Lunges => "Lunges",
            Exercise::Superman => "Superman",
            Exercise::WallSit => "Wall-sit",
        }
    }

    /// Exact-match lookup by display name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|exercise| exercise.name() == name)
    }

    /// The evaluator registered for this exercise
    #[must_use]
    pub fn evaluator(self) -> Evaluator {
        match self {
            Exercise::Plank => Evaluator::Hold(&PLANK),
            Exercise::PushUp => Evaluator::Repetition(&PUSH_UP),
            Exercise::Squat => Evaluator::Repetition(&SQUAT),
            Exercise::Bridge => Evaluator::Repetition(&BRIDGE),
            Exercise::BirdDog => Evaluator::Hold(&BIRD_DOG),
            Exercise::HighKnees => Evaluator::Repetition(&HIGH_KNEES),
            Exercise::Lunges => Evaluator::Repetition(&LUNGE),
            Exercise::Superman => Evaluator::Hold(&SUPERMAN),
            Exercise::WallSit => Evaluator::Hold(&WALL_SIT),
        }
    }

    /// Repetition evaluators count reps, hold evaluators gate a timer
    #[must_use]
    pub fn kind(self) -> ExerciseKind {
        if self.evaluator().is_stateful() {
            ExerciseKind::Reps
        } else {
            ExerciseKind::Duration
        }
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Exercise {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        Self::from_name(s).ok_or_else(|| crate::Error::UnknownExercise(s.to_string()))
    }
}

/// Evaluate one frame for the named exercise.
///
/// Unknown names yield an orange fallback with no state fields, so the
/// caller keeps its state as is.
#[must_use]
pub fn evaluate(exercise_name: &str, pose: &Pose, state: EvaluationState) -> EvaluationResult {
    match Exercise::from_name(exercise_name) {
        Some(exercise) => evaluate_exercise(exercise, pose, state),
        None => {
            log::trace!("No evaluator registered for {exercise_name:?}");
            EvaluationResult::message(NOT_IMPLEMENTED_FEEDBACK, Severity::Orange)
        }
    }
}

/// Evaluate one frame for a known exercise
#[must_use]
pub fn evaluate_exercise(exercise: Exercise, pose: &Pose, state: EvaluationState) -> EvaluationResult {
    exercise.evaluator().evaluate(pose, state)
}
