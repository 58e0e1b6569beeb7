//! Superman: arms, chest and legs lifted off the floor together.

use super::{occluded_hold, HoldEvaluator};
use crate::constants::SUPERMAN_MIN_LIFT;
use crate::feedback::{EvaluationResult, Severity};
use crate::keypoints::{Joint, Pose};

/// Superman hold evaluator
#[derive(Debug, Clone, Copy, Default)]
pub struct Superman;

impl HoldEvaluator for Superman {
    fn check(&self, pose: &Pose) -> EvaluationResult {
        let joints = [Joint::LeftShoulder, Joint::LeftHip, Joint::LeftAnkle, Joint::LeftWrist];
        let [shoulder, hip, ankle, wrist] = match pose.require(joints) {
            Ok(points) => points,
            Err(occlusion) => return occluded_hold(occlusion, "Make sure you are fully visible from the side."),
        };

        let arms_lifted = wrist.y < shoulder.y - SUPERMAN_MIN_LIFT;
        let legs_lifted = ankle.y < hip.y - SUPERMAN_MIN_LIFT;

        match (arms_lifted, legs_lifted) {
            (true, true) => EvaluationResult::hold("Perfect form! Hold it.", Severity::Green, true),
            (true, false) => EvaluationResult::hold("Good! Now lift your legs too.", Severity::Red, false),
            (false, true) => EvaluationResult::hold("Good! Now lift your arms and chest too.", Severity::Red, false),
            (false, false) => EvaluationResult::hold(
                "Lift your arms, chest, and legs together!",
                Severity::Red,
                false,
            ),
        }
    }

    fn name(&self) -> &str {
        "Superman"
    }
}
