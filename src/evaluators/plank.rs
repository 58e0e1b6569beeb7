//! Plank: shoulder, hip and ankle held in one line.

use super::{occluded_hold, HoldEvaluator};
use crate::constants::{PLANK_MAX_BODY_ANGLE, PLANK_MIN_BODY_ANGLE};
use crate::feedback::{EvaluationResult, Severity};
use crate::geometry::signed_body_angle;
use crate::keypoints::{Joint, Occlusion, Pose};

const FRAMING: &str = "Make sure your full body is visible.";

/// Plank hold evaluator
#[derive(Debug, Clone, Copy, Default)]
pub struct Plank;

impl HoldEvaluator for Plank {
    fn check(&self, pose: &Pose) -> EvaluationResult {
        let [shoulder, hip, ankle] = match pose.require([Joint::LeftShoulder, Joint::LeftHip, Joint::LeftAnkle]) {
            Ok(points) => points,
            Err(occlusion) => return occluded_hold(occlusion, FRAMING),
        };

        let Some(body_angle) = signed_body_angle(&shoulder.position(), &hip.position(), &ankle.position()) else {
            return occluded_hold(Occlusion::Faint, FRAMING);
        };

        if body_angle < PLANK_MIN_BODY_ANGLE {
            EvaluationResult::hold("Hips too low. Raise your hips!", Severity::Red, false)
        } else if body_angle > PLANK_MAX_BODY_ANGLE {
            EvaluationResult::hold("Hips too high. Lower your hips!", Severity::Red, false)
        } else {
            EvaluationResult::hold("Great form! Hold it.", Severity::Green, true)
        }
    }

    fn name(&self) -> &str {
        "Plank"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keypoints::Keypoint;

    fn plank_with_hip_offset(dy: f64) -> Pose {
        Pose::empty()
            .with(Joint::LeftShoulder, Keypoint::new(100.0, 200.0, 0.9))
            .with(Joint::LeftHip, Keypoint::new(250.0, 200.0 + dy, 0.9))
            .with(Joint::LeftAnkle, Keypoint::new(400.0, 200.0, 0.9))
    }

    #[test]
    fn test_straight_plank_is_correct() {
        let result = Plank.check(&plank_with_hip_offset(0.0));
        assert_eq!(result.severity, Severity::Green);
        assert_eq!(result.is_correct_form, Some(true));
    }

    #[test]
    fn test_sagging_hips() {
        let result = Plank.check(&plank_with_hip_offset(40.0));
        assert_eq!(result.feedback, "Hips too low. Raise your hips!");
        assert_eq!(result.is_correct_form, Some(false));
    }

    #[test]
    fn test_piked_hips() {
        let result = Plank.check(&plank_with_hip_offset(-40.0));
        assert_eq!(result.feedback, "Hips too high. Lower your hips!");
        assert_eq!(result.severity, Severity::Red);
    }

    #[test]
    fn test_slight_pike_is_tolerated() {
        let result = Plank.check(&plank_with_hip_offset(-10.0));
        assert_eq!(result.is_correct_form, Some(true));
    }
}
