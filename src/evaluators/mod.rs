//! Per-exercise form evaluators.
//!
//! Two families share the visibility rules in this module:
//! - hold evaluators judge each frame on its own and report whether the
//!   current form is correct,
//! - repetition evaluators run a two-phase machine with hysteresis and count
//!   one repetition per full down-to-up cycle.

/// Plank hold
pub mod plank;

/// Wall-sit hold
pub mod wall_sit;

/// Bird-dog hold
pub mod bird_dog;

/// Superman hold
pub mod superman;

/// Push-up repetitions with back and elbow form gates
pub mod pushup;

/// Squat repetitions
pub mod squat;

/// Glute bridge repetitions
pub mod bridge;

/// Lunge repetitions
pub mod lunge;

/// High knees repetitions, counted from knee height
pub mod high_knees;

use crate::feedback::{EvaluationResult, EvaluationState, Severity, Stage};
use crate::keypoints::{Occlusion, Pose};
use std::fmt;

/// Feedback when a required joint is absent from the frame
pub const NOT_SEEN_FEEDBACK: &str = "Could not see key body points.";

/// Stateless per-frame form check
pub trait HoldEvaluator: Send + Sync {
    /// Judge the current frame
    fn check(&self, pose: &Pose) -> EvaluationResult;

    /// Exercise name
    fn name(&self) -> &str;
}

/// Repetition counter driven by a phase machine
pub trait RepEvaluator: Send + Sync {
    /// Advance the machine by one frame
    fn step(&self, pose: &Pose, state: EvaluationState) -> EvaluationResult;

    /// Exercise name
    fn name(&self) -> &str;
}

/// An evaluator of either family
#[derive(Clone, Copy)]
pub enum Evaluator {
    Hold(&'static dyn HoldEvaluator),
    Repetition(&'static dyn RepEvaluator),
}

impl Evaluator {
    /// Evaluate one frame. Hold evaluators ignore `state`.
    #[must_use]
    pub fn evaluate(&self, pose: &Pose, state: EvaluationState) -> EvaluationResult {
        match self {
            Evaluator::Hold(hold) => hold.check(pose),
            Evaluator::Repetition(rep) => rep.step(pose, state),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Evaluator::Hold(hold) => hold.name(),
            Evaluator::Repetition(rep) => rep.name(),
        }
    }

    #[must_use]
    pub fn is_stateful(&self) -> bool {
        matches!(self, Evaluator::Repetition(_))
    }
}

impl fmt::Debug for Evaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Evaluator::Hold(hold) => f.debug_tuple("Hold").field(&hold.name()).finish(),
            Evaluator::Repetition(rep) => f.debug_tuple("Repetition").field(&rep.name()).finish(),
        }
    }
}

/// Where a measurement falls relative to the two thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reading {
    /// Above the up threshold
    Extended,
    /// Below the down threshold
    Flexed,
    /// Inside the dead zone
    Between,
}

/// Up/down thresholds with a dead zone between them
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hysteresis {
    up: f64,
    down: f64,
}

impl Hysteresis {
    /// Create thresholds
    ///
    /// # Panics
    ///
    /// Panics if `up` is not strictly greater than `down`
    #[must_use]
    pub const fn new(up: f64, down: f64) -> Self {
        assert!(up > down, "Up threshold must exceed down threshold");
        Self { up, down }
    }

    #[must_use]
    pub fn read(&self, value: f64) -> Reading {
        if value > self.up {
            Reading::Extended
        } else if value < self.down {
            Reading::Flexed
        } else {
            Reading::Between
        }
    }

    #[must_use]
    pub const fn up(&self) -> f64 {
        self.up
    }

    #[must_use]
    pub const fn down(&self) -> f64 {
        self.down
    }
}

/// What a reading did to the phase machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Down to up: one repetition finished
    Completed,
    /// In (or entered) the up position without finishing a repetition
    Extended,
    /// In (or entered) the down position
    Flexed,
    /// Dead zone, stage unchanged
    Holding,
}

/// Apply a reading to the prior state.
///
/// The counter only moves on `Down -> Up`, and by exactly one.
#[must_use]
pub fn advance(reading: Reading, state: EvaluationState) -> (Transition, EvaluationState) {
    match reading {
        Reading::Extended if state.stage == Stage::Down => (
            Transition::Completed,
            EvaluationState::new(Stage::Up, state.rep_count.saturating_add(1)),
        ),
        Reading::Extended => (Transition::Extended, EvaluationState::new(Stage::Up, state.rep_count)),
        Reading::Flexed => (Transition::Flexed, EvaluationState::new(Stage::Down, state.rep_count)),
        Reading::Between => (Transition::Holding, state),
    }
}

/// Coaching copy for each transition of a repetition exercise
#[derive(Debug, Clone, Copy)]
pub(crate) struct PhaseFeedback {
    pub completed: &'static str,
    pub extended: &'static str,
    pub flexed_good: &'static str,
    pub flexed_shallow: &'static str,
    pub descending: &'static str,
    pub ascending: &'static str,
    pub starting: &'static str,
}

impl PhaseFeedback {
    /// Build the result for a transition. `good_depth` only matters when flexed.
    pub fn result(&self, transition: Transition, state: EvaluationState, good_depth: bool) -> EvaluationResult {
        let (text, severity) = match transition {
            Transition::Completed => (self.completed, Severity::Green),
            Transition::Extended => (self.extended, Severity::Green),
            Transition::Flexed if good_depth => (self.flexed_good, Severity::Green),
            Transition::Flexed => (self.flexed_shallow, Severity::Yellow),
            Transition::Holding => match state.stage {
                Stage::Up => (self.descending, Severity::Blue),
                Stage::Down => (self.ascending, Severity::Blue),
                Stage::Undetermined => (self.starting, Severity::Cyan),
            },
        };
        EvaluationResult::repetition(text, severity, state)
    }
}

/// Orange hold result for joints that cannot be judged
pub(crate) fn occluded_hold(occlusion: Occlusion, faint_feedback: &'static str) -> EvaluationResult {
    EvaluationResult::hold(occlusion_text(occlusion, faint_feedback), Severity::Orange, false)
}

/// Orange repetition result that leaves the state untouched
pub(crate) fn occluded_step(
    occlusion: Occlusion,
    faint_feedback: &'static str,
    state: EvaluationState,
) -> EvaluationResult {
    EvaluationResult::repetition(occlusion_text(occlusion, faint_feedback), Severity::Orange, state)
}

fn occlusion_text(occlusion: Occlusion, faint_feedback: &'static str) -> &'static str {
    match occlusion {
        Occlusion::Missing => NOT_SEEN_FEEDBACK,
        Occlusion::Faint => faint_feedback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_boundaries_are_dead_zone() {
        let gate = Hysteresis::new(160.0, 100.0);
        assert_eq!(gate.read(160.0), Reading::Between);
        assert_eq!(gate.read(100.0), Reading::Between);
        assert_eq!(gate.read(160.1), Reading::Extended);
        assert_eq!(gate.read(99.9), Reading::Flexed);
    }

    #[test]
    fn test_undetermined_initialises_without_counting() {
        let start = EvaluationState::default();
        assert_eq!(
            advance(Reading::Extended, start),
            (Transition::Extended, EvaluationState::new(Stage::Up, 0))
        );
        assert_eq!(
            advance(Reading::Flexed, start),
            (Transition::Flexed, EvaluationState::new(Stage::Down, 0))
        );
        assert_eq!(advance(Reading::Between, start), (Transition::Holding, start));
    }

    #[test]
    fn test_only_down_to_up_counts() {
        let down = EvaluationState::new(Stage::Down, 2);
        let up = EvaluationState::new(Stage::Up, 2);
        assert_eq!(advance(Reading::Extended, down).1.rep_count, 3);
        assert_eq!(advance(Reading::Extended, up).1.rep_count, 2);
        assert_eq!(advance(Reading::Flexed, up).1.rep_count, 2);
    }

    #[test]
    #[should_panic(expected = "Up threshold must exceed down threshold")]
    fn test_hysteresis_requires_dead_zone() {
        let _ = Hysteresis::new(90.0, 90.0);
    }
}
