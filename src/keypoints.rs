//! Typed body keypoints.
//!
//! The pose source hands over a list of named, scored landmarks for one
//! person. [`Pose`] turns that list into a fixed record indexed by [`Joint`],
//! so evaluators ask for joints by identity instead of searching by name.

use crate::constants::{NUM_BODY_JOINTS, VISIBILITY_THRESHOLD};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// COCO body landmark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Joint {
    Nose,
    LeftEye,
    RightEye,
    LeftEar,
    RightEar,
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftWrist,
    RightWrist,
    LeftHip,
    RightHip,
    LeftKnee,
    RightKnee,
    LeftAnkle,
    RightAnkle,
}

impl Joint {
    /// All joints in COCO index order
    pub const ALL: [Joint; NUM_BODY_JOINTS] = [
        Joint::Nose,
        Joint::LeftEye,
        Joint::RightEye,
        Joint::LeftEar,
        Joint::RightEar,
        Joint::LeftShoulder,
        Joint::RightShoulder,
        Joint::LeftElbow,
        Joint::RightElbow,
        Joint::LeftWrist,
        Joint::RightWrist,
        Joint::LeftHip,
        Joint::RightHip,
        Joint::LeftKnee,
        Joint::RightKnee,
        Joint::LeftAnkle,
        Joint::RightAnkle,
    ];

    /// Landmark name as emitted by the pose model
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Joint::Nose => "nose",
            Joint::LeftEye => "left_eye",
            Joint::RightEye => "right_eye",
            Joint::LeftEar => "left_ear",
            Joint::RightEar => "right_ear",
            Joint::LeftShoulder => "left_shoulder",
            Joint::RightShoulder => "right_shoulder",
            Joint::LeftElbow => "left_elbow",
            Joint::RightElbow => "right_elbow",
            Joint::LeftWrist => "left_wrist",
            Joint::RightWrist => "right_wrist",
            Joint::LeftHip => "left_hip",
            Joint::RightHip => "right_hip",
            Joint::LeftKnee => "left_knee",
            Joint::RightKnee => "right_knee",
            Joint::LeftAnkle => "left_ankle",
            Joint::RightAnkle => "right_ankle",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Joint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Joint {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        Joint::ALL
            .iter()
            .copied()
            .find(|joint| joint.name() == s)
            .ok_or_else(|| crate::Error::InvalidInput(format!("Unknown joint name: {s}")))
    }
}

/// A scored 2D landmark in image space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keypoint {
    /// Horizontal pixel coordinate
    pub x: f64,
    /// Vertical pixel coordinate
    pub y: f64,
    /// Detection confidence in [0, 1]
    pub score: f64,
}

impl Keypoint {
    #[must_use]
    pub const fn new(x: f64, y: f64, score: f64) -> Self {
        Self { x, y, score }
    }

    /// Position as a point for geometric calculations
    #[must_use]
    pub fn position(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }

    /// Whether the score clears the visibility threshold
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.score > VISIBILITY_THRESHOLD
    }
}

/// Keypoint record as delivered by the pose source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedKeypoint {
    /// Landmark name, e.g. `left_knee`
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub score: f64,
}

impl NamedKeypoint {
    pub fn new(name: impl Into<String>, x: f64, y: f64, score: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            score,
        }
    }
}

/// Why a set of required joints could not be used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occlusion {
    /// At least one joint was not reported at all
    Missing,
    /// All joints were reported but at least one scored too low
    Faint,
}

/// Keypoints of a single detected person for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pose {
    joints: [Option<Keypoint>; NUM_BODY_JOINTS],
}

impl Pose {
    /// Create a pose with no joints
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a pose from named keypoints.
    ///
    /// Unknown names and non-finite values are skipped. If a name repeats,
    /// the last occurrence wins.
    #[must_use]
    pub fn from_named(keypoints: &[NamedKeypoint]) -> Self {
        let mut pose = Self::empty();
        for kp in keypoints {
            if !(kp.x.is_finite() && kp.y.is_finite() && kp.score.is_finite()) {
                continue;
            }
            if let Ok(joint) = kp.name.parse::<Joint>() {
                pose.set(joint, Keypoint::new(kp.x, kp.y, kp.score));
            }
        }
        pose
    }

    /// Builder-style insertion
    #[must_use]
    pub fn with(mut self, joint: Joint, keypoint: Keypoint) -> Self {
        self.set(joint, keypoint);
        self
    }

    pub fn set(&mut self, joint: Joint, keypoint: Keypoint) {
        self.joints[joint.index()] = Some(keypoint);
    }

    pub fn remove(&mut self, joint: Joint) {
        self.joints[joint.index()] = None;
    }

    #[must_use]
    pub fn get(&self, joint: Joint) -> Option<Keypoint> {
        self.joints[joint.index()]
    }

    /// The keypoint, only if it clears the visibility threshold
    #[must_use]
    pub fn visible(&self, joint: Joint) -> Option<Keypoint> {
        self.get(joint).filter(Keypoint::is_visible)
    }

    /// Fetch every requested joint, or report why they cannot be used.
    ///
    /// A missing joint takes precedence over a faint one.
    pub fn require<const N: usize>(&self, joints: [Joint; N]) -> Result<[Keypoint; N], Occlusion> {
        let mut found = [Keypoint::new(0.0, 0.0, 0.0); N];
        let mut faint = false;
        for (slot, joint) in found.iter_mut().zip(joints) {
            let kp = self.get(joint).ok_or(Occlusion::Missing)?;
            faint |= !kp.is_visible();
            *slot = kp;
        }
        if faint {
            Err(Occlusion::Faint)
        } else {
            Ok(found)
        }
    }

    /// Fetch every requested joint only if all of them are visible
    #[must_use]
    pub fn all_visible<const N: usize>(&self, joints: [Joint; N]) -> Option<[Keypoint; N]> {
        self.require(joints).ok()
    }

    /// Number of joints present in the record
    #[must_use]
    pub fn len(&self) -> usize {
        self.joints.iter().filter(|kp| kp.is_some()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<&[NamedKeypoint]> for Pose {
    fn from(keypoints: &[NamedKeypoint]) -> Self {
        Self::from_named(keypoints)
    }
}
