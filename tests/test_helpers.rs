//! Helper functions and utilities for tests

#![allow(dead_code)]

use form_coach::{Joint, Keypoint, Pose};

/// Confidence used for clearly detected joints
pub const SEEN: f64 = 0.9;

/// Point at `len` from `vertex`, rotated `angle_deg` from the ray towards `reference`.
///
/// The angle at `vertex` between `reference` and the result is `angle_deg`.
pub fn point_at_angle(vertex: (f64, f64), reference: (f64, f64), angle_deg: f64, len: f64) -> (f64, f64) {
    let base = (reference.1 - vertex.1).atan2(reference.0 - vertex.0);
    let theta = base + angle_deg.to_radians();
    (vertex.0 + len * theta.cos(), vertex.1 + len * theta.sin())
}

fn kp((x, y): (f64, f64)) -> Keypoint {
    Keypoint::new(x, y, SEEN)
}

/// Side view of a leg with the given knee angle, hip above the knee
pub fn leg_pose(knee_angle: f64) -> Pose {
    let hip = (100.0, 200.0);
    let knee = (100.0, 300.0);
    let ankle = point_at_angle(knee, hip, knee_angle, 100.0);
    Pose::empty()
        .with(Joint::LeftHip, kp(hip))
        .with(Joint::LeftKnee, kp(knee))
        .with(Joint::LeftAnkle, kp(ankle))
}

/// Push-up from the side with the given elbow angle and a straight body
pub fn pushup_pose(elbow_angle: f64) -> Pose {
    let shoulder = (100.0, 200.0);
    let elbow = (100.0, 260.0);
    let wrist = point_at_angle(elbow, shoulder, elbow_angle, 60.0);
    Pose::empty()
        .with(Joint::LeftShoulder, kp(shoulder))
        .with(Joint::LeftElbow, kp(elbow))
        .with(Joint::LeftWrist, kp(wrist))
        .with(Joint::LeftHip, kp((250.0, 200.0)))
        .with(Joint::LeftKnee, kp((350.0, 200.0)))
}

/// Push-up with the hips bent to `body_angle` at shoulder-hip-knee
pub fn pushup_pose_with_body_angle(elbow_angle: f64, body_angle: f64) -> Pose {
    let mut pose = pushup_pose(elbow_angle);
    let hip = (250.0, 200.0);
    pose.set(Joint::LeftKnee, kp(point_at_angle(hip, (100.0, 200.0), body_angle, 100.0)));
    pose
}

/// Bridge from the side with the given shoulder-hip-knee angle
pub fn bridge_pose(hip_angle: f64) -> Pose {
    let shoulder = (100.0, 300.0);
    let hip = (220.0, 300.0);
    let knee = point_at_angle(hip, shoulder, hip_angle, 100.0);
    Pose::empty()
        .with(Joint::LeftShoulder, kp(shoulder))
        .with(Joint::LeftHip, kp(hip))
        .with(Joint::LeftKnee, kp(knee))
}

/// Plank from the side, hips displaced by `hip_dy` pixels (positive sags)
pub fn plank_pose(hip_dy: f64) -> Pose {
    Pose::empty()
        .with(Joint::LeftShoulder, kp((100.0, 200.0)))
        .with(Joint::LeftHip, kp((250.0, 200.0 + hip_dy)))
        .with(Joint::LeftAnkle, kp((400.0, 200.0)))
}

/// Standing pose with each knee at the given height (hips at y = 300)
pub fn knees_pose(left_knee_y: f64, right_knee_y: f64) -> Pose {
    Pose::empty()
        .with(Joint::LeftHip, kp((280.0, 300.0)))
        .with(Joint::RightHip, kp((320.0, 300.0)))
        .with(Joint::LeftKnee, kp((280.0, left_knee_y)))
        .with(Joint::RightKnee, kp((320.0, right_knee_y)))
}

/// Prone pose for the superman hold
pub fn superman_pose(arms_lifted: bool, legs_lifted: bool) -> Pose {
    let shoulder = (150.0, 300.0);
    let hip = (300.0, 300.0);
    let wrist_y = if arms_lifted { 260.0 } else { 305.0 };
    let ankle_y = if legs_lifted { 270.0 } else { 305.0 };
    Pose::empty()
        .with(Joint::LeftShoulder, kp(shoulder))
        .with(Joint::LeftHip, kp(hip))
        .with(Joint::LeftWrist, kp((50.0, wrist_y)))
        .with(Joint::LeftAnkle, kp((450.0, ankle_y)))
}

/// Hands and knees, right hip raised by `hip_tilt` pixels
pub fn all_fours_pose(hip_tilt: f64) -> Pose {
    Pose::empty()
        .with(Joint::LeftShoulder, kp((100.0, 200.0)))
        .with(Joint::RightShoulder, kp((120.0, 204.0)))
        .with(Joint::LeftHip, kp((300.0, 210.0)))
        .with(Joint::RightHip, kp((320.0, 210.0 - hip_tilt)))
}

/// Copy of `pose` with every joint at the given score
pub fn with_score(pose: &Pose, score: f64) -> Pose {
    let mut faded = pose.clone();
    for joint in Joint::ALL {
        if let Some(k) = pose.get(joint) {
            faded.set(joint, Keypoint::new(k.x, k.y, score));
        }
    }
    faded
}
