//! Lunge: front knee angle drives the phase machine.

use super::{advance, occluded_step, Hysteresis, PhaseFeedback, RepEvaluator};
use crate::constants::{LUNGE_DOWN_ANGLE, LUNGE_PERFECT_DEPTH_ANGLE, LUNGE_UP_ANGLE};
use crate::feedback::{EvaluationResult, EvaluationState};
use crate::geometry::joint_angle;
use crate::keypoints::{Joint, Occlusion, Pose};

const FRAMING: &str = "Make sure your legs are fully visible.";

const GATE: Hysteresis = Hysteresis::new(LUNGE_UP_ANGLE, LUNGE_DOWN_ANGLE);

const FEEDBACK: PhaseFeedback = PhaseFeedback {
    completed: "Perfect lunge! Step into the next one.",
    extended: "Good standing position. Now step into a lunge.",
    flexed_good: "Great depth! Now step back up.",
    flexed_shallow: "Lower! Get that front thigh parallel to the ground.",
    descending: "Keep stepping forward and down...",
    ascending: "Push back up to standing...",
    starting: "Step forward into a lunge position.",
};

/// Lunge repetition evaluator
#[derive(Debug, Clone, Copy, Default)]
pub struct Lunge;

impl RepEvaluator for Lunge {
    fn step(&self, pose: &Pose, state: EvaluationState) -> EvaluationResult {
        let [hip, knee, ankle] = match pose.require([Joint::LeftHip, Joint::LeftKnee, Joint::LeftAnkle]) {
            Ok(points) => points,
            Err(occlusion) => return occluded_step(occlusion, FRAMING, state),
        };

        let Some(knee_angle) = joint_angle(&hip.position(), &knee.position(), &ankle.position()) else {
            return occluded_step(Occlusion::Faint, FRAMING, state);
        };
        let (transition, next) = advance(GATE.read(knee_angle), state);

        FEEDBACK.result(transition, next, knee_angle < LUNGE_PERFECT_DEPTH_ANGLE)
    }

    fn name(&self) -> &str {
        "Lunges"
    }
}
