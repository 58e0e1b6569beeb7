//! High knees: counted from knee height instead of a joint angle.
//!
//! Up means at least one knee is clearly above the mean hip height, down
//! means both knees are clearly below it. The band around the hips is the
//! dead zone.

use super::{advance, occluded_step, PhaseFeedback, Reading, RepEvaluator};
use crate::constants::HIGH_KNEES_MARGIN;
use crate::feedback::{EvaluationResult, EvaluationState};
use crate::keypoints::{Joint, Keypoint, Pose};

const FEEDBACK: PhaseFeedback = PhaseFeedback {
    completed: "Great knee lift! Keep marching!",
    extended: "Perfect! Keep bringing those knees up!",
    flexed_good: "March in place! Lift those knees high!",
    flexed_shallow: "March in place! Lift those knees high!",
    descending: "Switch legs!",
    ascending: "Higher! Bring your knees up to hip level!",
    starting: "Stand up and start marching!",
};

/// High knees repetition evaluator
#[derive(Debug, Clone, Copy, Default)]
pub struct HighKnees;

impl HighKnees {
    /// Classify knee height against the mean hip line (image y grows downward)
    fn read(left_hip: &Keypoint, right_hip: &Keypoint, left_knee: &Keypoint, right_knee: &Keypoint) -> Reading {
        let hip_y = (left_hip.y + right_hip.y) / 2.0;
        let is_high = |knee: &Keypoint| knee.y < hip_y - HIGH_KNEES_MARGIN;
        let is_low = |knee: &Keypoint| knee.y > hip_y + HIGH_KNEES_MARGIN;

        if is_high(left_knee) || is_high(right_knee) {
            Reading::Extended
        } else if is_low(left_knee) && is_low(right_knee) {
            Reading::Flexed
        } else {
            Reading::Between
        }
    }
}

impl RepEvaluator for HighKnees {
    fn step(&self, pose: &Pose, state: EvaluationState) -> EvaluationResult {
        let joints = [Joint::LeftHip, Joint::RightHip, Joint::LeftKnee, Joint::RightKnee];
        let [left_hip, right_hip, left_knee, right_knee] = match pose.require(joints) {
            Ok(points) => points,
            Err(occlusion) => return occluded_step(occlusion, "Make sure you are fully visible.", state),
        };

        let reading = Self::read(&left_hip, &right_hip, &left_knee, &right_knee);
        let (transition, next) = advance(reading, state);

        FEEDBACK.result(transition, next, true)
    }

    fn name(&self) -> &str {
        "High Knees"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hip(y: f64) -> Keypoint {
        Keypoint::new(0.0, y, 0.9)
    }

    #[test]
    fn test_one_high_knee_is_enough() {
        assert_eq!(HighKnees::read(&hip(300.0), &hip(300.0), &hip(250.0), &hip(400.0)), Reading::Extended);
    }

    #[test]
    fn test_both_knees_low() {
        assert_eq!(HighKnees::read(&hip(300.0), &hip(300.0), &hip(400.0), &hip(390.0)), Reading::Flexed);
    }

    #[test]
    fn test_knee_near_hip_is_dead_zone() {
        assert_eq!(HighKnees::read(&hip(300.0), &hip(300.0), &hip(310.0), &hip(400.0)), Reading::Between);
    }
}
