//! Push-up: elbow angle drives the phase machine; a straight back and tucked
//! elbows are checked first and block counting while violated.

use super::{advance, occluded_step, Hysteresis, PhaseFeedback, RepEvaluator};
use crate::constants::{
    PUSHUP_DOWN_ANGLE, PUSHUP_MAX_ELBOW_FLARE_RATIO, PUSHUP_MIN_BODY_ANGLE, PUSHUP_MIN_FRONTAL_SHOULDER_SPAN,
    PUSHUP_PERFECT_DEPTH_ANGLE, PUSHUP_UP_ANGLE,
};
use crate::feedback::{EvaluationResult, EvaluationState, Severity};
use crate::geometry::joint_angle;
use crate::keypoints::{Joint, Keypoint, Occlusion, Pose};
use nalgebra::distance;

const FRAMING: &str = "Make sure your arms are fully visible.";

const GATE: Hysteresis = Hysteresis::new(PUSHUP_UP_ANGLE, PUSHUP_DOWN_ANGLE);

const FEEDBACK: PhaseFeedback = PhaseFeedback {
    completed: "Great push-up!",
    extended: "Good position! Now lower down.",
    flexed_good: "Perfect depth! Now push up.",
    flexed_shallow: "Go lower! Get your chest closer to the ground.",
    descending: "Keep going down...",
    ascending: "Push up!",
    starting: "Get into starting position with arms extended.",
};

/// Push-up repetition evaluator
#[derive(Debug, Clone, Copy, Default)]
pub struct PushUp;

impl PushUp {
    /// Form violation that preempts phase tracking, if any
    fn form_violation(pose: &Pose, shoulder: &Keypoint) -> Option<&'static str> {
        if let Some([hip, knee]) = pose.all_visible([Joint::LeftHip, Joint::LeftKnee]) {
            let body_angle = joint_angle(&shoulder.position(), &hip.position(), &knee.position());
            if body_angle.is_some_and(|angle| angle < PUSHUP_MIN_BODY_ANGLE) {
                return Some("Keep your back straight!");
            }
        }

        // Only meaningful when the camera sees both shoulders apart
        let arms = [Joint::LeftShoulder, Joint::RightShoulder, Joint::LeftElbow, Joint::RightElbow];
        if let Some([left_shoulder, right_shoulder, left_elbow, right_elbow]) = pose.all_visible(arms) {
            let shoulder_span = distance(&left_shoulder.position(), &right_shoulder.position());
            let elbow_span = distance(&left_elbow.position(), &right_elbow.position());
            let frontal = shoulder_span >= PUSHUP_MIN_FRONTAL_SHOULDER_SPAN;
            if frontal && elbow_span / shoulder_span > PUSHUP_MAX_ELBOW_FLARE_RATIO {
                return Some("Tuck your elbows in!");
            }
        }

        None
    }
}

impl RepEvaluator for PushUp {
    fn step(&self, pose: &Pose, state: EvaluationState) -> EvaluationResult {
        let [shoulder, elbow, wrist] = match pose.require([Joint::LeftShoulder, Joint::LeftElbow, Joint::LeftWrist]) {
            Ok(points) => points,
            Err(occlusion) => return occluded_step(occlusion, FRAMING, state),
        };

        if let Some(correction) = Self::form_violation(pose, &shoulder) {
            return EvaluationResult::repetition(correction, Severity::Red, state);
        }

        let Some(elbow_angle) = joint_angle(&shoulder.position(), &elbow.position(), &wrist.position()) else {
            return occluded_step(Occlusion::Faint, FRAMING, state);
        };
        let (transition, next) = advance(GATE.read(elbow_angle), state);

        FEEDBACK.result(transition, next, elbow_angle < PUSHUP_PERFECT_DEPTH_ANGLE)
    }

    fn name(&self) -> &str {
        "Push-up"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::Stage;

    fn shoulders_and_elbows(elbow_half_span: f64) -> Pose {
        Pose::empty()
            .with(Joint::LeftShoulder, Keypoint::new(280.0, 200.0, 0.9))
            .with(Joint::RightShoulder, Keypoint::new(320.0, 200.0, 0.9))
            .with(Joint::LeftElbow, Keypoint::new(300.0 - elbow_half_span, 240.0, 0.9))
            .with(Joint::RightElbow, Keypoint::new(300.0 + elbow_half_span, 240.0, 0.9))
            .with(Joint::LeftWrist, Keypoint::new(300.0 - elbow_half_span, 280.0, 0.9))
    }

    #[test]
    fn test_flared_elbows_block_counting() {
        let state = EvaluationState::new(Stage::Down, 3);
        let result = PushUp.step(&shoulders_and_elbows(60.0), state);
        assert_eq!(result.feedback, "Tuck your elbows in!");
        assert_eq!(result.severity, Severity::Red);
        assert_eq!(result.next_state(state), state);
    }

    #[test]
    fn test_tucked_elbows_pass_flare_gate() {
        let pose = shoulders_and_elbows(25.0);
        let shoulder = pose.get(Joint::LeftShoulder).unwrap();
        assert_eq!(PushUp::form_violation(&pose, &shoulder), None);
    }

    #[test]
    fn test_side_view_skips_flare_gate() {
        // Shoulders nearly overlap when filmed from the side
        let pose = Pose::empty()
            .with(Joint::LeftShoulder, Keypoint::new(200.0, 200.0, 0.9))
            .with(Joint::RightShoulder, Keypoint::new(204.0, 200.0, 0.9))
            .with(Joint::LeftElbow, Keypoint::new(200.0, 260.0, 0.9))
            .with(Joint::RightElbow, Keypoint::new(208.0, 260.0, 0.9));
        let shoulder = pose.get(Joint::LeftShoulder).unwrap();
        assert_eq!(PushUp::form_violation(&pose, &shoulder), None);
    }

    #[test]
    fn test_collapsed_hip_skips_back_check() {
        let pose = Pose::empty()
            .with(Joint::LeftShoulder, Keypoint::new(100.0, 200.0, 0.9))
            .with(Joint::LeftHip, Keypoint::new(250.0, 200.0, 0.9))
            .with(Joint::LeftKnee, Keypoint::new(250.0, 200.0, 0.9));
        let shoulder = pose.get(Joint::LeftShoulder).unwrap();
        assert_eq!(PushUp::form_violation(&pose, &shoulder), None);
    }
}
