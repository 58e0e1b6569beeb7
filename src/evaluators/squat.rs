//! Squat: knee angle drives the phase machine.

use super::{advance, occluded_step, Hysteresis, PhaseFeedback, RepEvaluator};
use crate::constants::{SQUAT_DOWN_ANGLE, SQUAT_PERFECT_DEPTH_ANGLE, SQUAT_UP_ANGLE};
use crate::feedback::{EvaluationResult, EvaluationState};
use crate::geometry::joint_angle;
use crate::keypoints::{Joint, Occlusion, Pose};

const FRAMING: &str = "Make sure your legs are fully visible.";

const GATE: Hysteresis = Hysteresis::new(SQUAT_UP_ANGLE, SQUAT_DOWN_ANGLE);

const FEEDBACK: PhaseFeedback = PhaseFeedback {
    completed: "Good rep!",
    extended: "Good! Stand tall, then squat down.",
    flexed_good: "Great depth! Now stand up.",
    flexed_shallow: "Go lower! Get your hips below knee level.",
    descending: "Keep going down...",
    ascending: "Push up through your heels...",
    starting: "Stand up straight to begin, then squat down.",
};

/// Squat repetition evaluator
#[derive(Debug, Clone, Copy, Default)]
pub struct Squat;

impl RepEvaluator for Squat {
    fn step(&self, pose: &Pose, state: EvaluationState) -> EvaluationResult {
        let [hip, knee, ankle] = match pose.require([Joint::LeftHip, Joint::LeftKnee, Joint::LeftAnkle]) {
            Ok(points) => points,
            Err(occlusion) => return occluded_step(occlusion, FRAMING, state),
        };

        let Some(knee_angle) = joint_angle(&hip.position(), &knee.position(), &ankle.position()) else {
            return occluded_step(Occlusion::Faint, FRAMING, state);
        };
        let (transition, next) = advance(GATE.read(knee_angle), state);

        // Hip at or below the knee counts as full depth regardless of angle
        let good_depth = knee_angle < SQUAT_PERFECT_DEPTH_ANGLE || hip.y >= knee.y;
        FEEDBACK.result(transition, next, good_depth)
    }

    fn name(&self) -> &str {
        "Squat"
    }
}
