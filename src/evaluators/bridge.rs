//! Glute bridge: hip angle (shoulder-hip-knee) drives the phase machine.
//!
//! "Up" is the lifted bridge, "down" is lying with the hips on the floor.

use super::{advance, occluded_step, Hysteresis, PhaseFeedback, RepEvaluator};
use crate::constants::{BRIDGE_DOWN_ANGLE, BRIDGE_FLAT_ANGLE, BRIDGE_UP_ANGLE};
use crate::feedback::{EvaluationResult, EvaluationState};
use crate::geometry::joint_angle;
use crate::keypoints::{Joint, Occlusion, Pose};

const FRAMING: &str = "Make sure your side profile is visible.";

const GATE: Hysteresis = Hysteresis::new(BRIDGE_UP_ANGLE, BRIDGE_DOWN_ANGLE);

const FEEDBACK: PhaseFeedback = PhaseFeedback {
    completed: "Perfect bridge! Now lower down.",
    extended: "Great bridge position! Hold briefly, then lower.",
    flexed_good: "Good starting position. Now lift your hips up!",
    flexed_shallow: "Lower your hips all the way down.",
    descending: "Keep lowering...",
    ascending: "Keep lifting your hips up...",
    starting: "Lie flat, then lift your hips to form a bridge.",
};

/// Bridge repetition evaluator
#[derive(Debug, Clone, Copy, Default)]
pub struct Bridge;

impl RepEvaluator for Bridge {
    fn step(&self, pose: &Pose, state: EvaluationState) -> EvaluationResult {
        let [shoulder, hip, knee] = match pose.require([Joint::LeftShoulder, Joint::LeftHip, Joint::LeftKnee]) {
            Ok(points) => points,
            Err(occlusion) => return occluded_step(occlusion, FRAMING, state),
        };

        let Some(hip_angle) = joint_angle(&shoulder.position(), &hip.position(), &knee.position()) else {
            return occluded_step(Occlusion::Faint, FRAMING, state);
        };
        let (transition, next) = advance(GATE.read(hip_angle), state);

        FEEDBACK.result(transition, next, hip_angle < BRIDGE_FLAT_ANGLE)
    }

    fn name(&self) -> &str {
        "Bridge"
    }
}
