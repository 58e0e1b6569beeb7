//! Bird-dog: shoulders and hips kept level while limbs extend.

use super::{occluded_hold, HoldEvaluator};
use crate::constants::BIRD_DOG_MAX_LEVEL_DELTA;
use crate::feedback::{EvaluationResult, Severity};
use crate::keypoints::{Joint, Pose};

/// Bird-dog hold evaluator
#[derive(Debug, Clone, Copy, Default)]
pub struct BirdDog;

impl HoldEvaluator for BirdDog {
    fn check(&self, pose: &Pose) -> EvaluationResult {
        let joints = [Joint::LeftShoulder, Joint::RightShoulder, Joint::LeftHip, Joint::RightHip];
        let [left_shoulder, right_shoulder, left_hip, right_hip] = match pose.require(joints) {
            Ok(points) => points,
            Err(occlusion) => return occluded_hold(occlusion, "Make sure you are fully visible."),
        };

        let shoulder_delta = (left_shoulder.y - right_shoulder.y).abs();
        let hip_delta = (left_hip.y - right_hip.y).abs();

        if shoulder_delta.max(hip_delta) > BIRD_DOG_MAX_LEVEL_DELTA {
            EvaluationResult::hold("Keep your hips and shoulders level!", Severity::Red, false)
        } else {
            EvaluationResult::hold("Great stability! Hold it.", Severity::Green, true)
        }
    }

    fn name(&self) -> &str {
        "Bird-dog"
    }
}
