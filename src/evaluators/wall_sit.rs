//! Wall-sit: thighs roughly parallel to the floor.

use super::{occluded_hold, HoldEvaluator};
use crate::constants::{WALL_SIT_MAX_KNEE_ANGLE, WALL_SIT_MIN_KNEE_ANGLE};
use crate::feedback::{EvaluationResult, Severity};
use crate::geometry::joint_angle;
use crate::keypoints::{Joint, Occlusion, Pose};

const FRAMING: &str = "Make sure your side profile is visible.";

/// Wall-sit hold evaluator
#[derive(Debug, Clone, Copy, Default)]
pub struct WallSit;

impl HoldEvaluator for WallSit {
    fn check(&self, pose: &Pose) -> EvaluationResult {
        let [hip, knee, ankle] = match pose.require([Joint::LeftHip, Joint::LeftKnee, Joint::LeftAnkle]) {
            Ok(points) => points,
            Err(occlusion) => return occluded_hold(occlusion, FRAMING),
        };

        let Some(knee_angle) = joint_angle(&hip.position(), &knee.position(), &ankle.position()) else {
            return occluded_hold(Occlusion::Faint, FRAMING);
        };

        if knee_angle > WALL_SIT_MAX_KNEE_ANGLE {
            EvaluationResult::hold("Lower your hips!", Severity::Red, false)
        } else if knee_angle < WALL_SIT_MIN_KNEE_ANGLE {
            EvaluationResult::hold("Raise your hips slightly!", Severity::Red, false)
        } else {
            EvaluationResult::hold("Great form, keep holding!", Severity::Green, true)
        }
    }

    fn name(&self) -> &str {
        "Wall-sit"
    }
}
