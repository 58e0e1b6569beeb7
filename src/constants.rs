//! Constants used throughout the library

/// Minimum keypoint score (exclusive) for a joint to count as visible
pub const VISIBILITY_THRESHOLD: f64 = 0.5;

/// Number of body landmarks in the COCO skeleton
pub const NUM_BODY_JOINTS: usize = 17;

/// Plank: straightness band at the hip (signed, see `geometry::signed_body_angle`)
pub const PLANK_MIN_BODY_ANGLE: f64 = 160.0;
pub const PLANK_MAX_BODY_ANGLE: f64 = 195.0;

/// Wall-sit: knee angle band
pub const WALL_SIT_MIN_KNEE_ANGLE: f64 = 70.0;
pub const WALL_SIT_MAX_KNEE_ANGLE: f64 = 110.0;

/// Bird-dog: maximum vertical offset between paired shoulders or hips, in pixels
pub const BIRD_DOG_MAX_LEVEL_DELTA: f64 = 30.0;

/// Superman: minimum lift of wrist over shoulder and ankle over hip, in pixels
pub const SUPERMAN_MIN_LIFT: f64 = 10.0;

/// Push-up elbow angle thresholds
pub const PUSHUP_UP_ANGLE: f64 = 160.0;
pub const PUSHUP_DOWN_ANGLE: f64 = 90.0;
pub const PUSHUP_PERFECT_DEPTH_ANGLE: f64 = 70.0;

/// Push-up form gates
pub const PUSHUP_MIN_BODY_ANGLE: f64 = 160.0;
pub const PUSHUP_MAX_ELBOW_FLARE_RATIO: f64 = 1.6;
/// Shoulder span (px) below which the camera is treated as side-on and the
/// elbow flare check is skipped
pub const PUSHUP_MIN_FRONTAL_SHOULDER_SPAN: f64 = 30.0;

/// Squat knee angle thresholds
pub const SQUAT_UP_ANGLE: f64 = 160.0;
pub const SQUAT_DOWN_ANGLE: f64 = 100.0;
pub const SQUAT_PERFECT_DEPTH_ANGLE: f64 = 90.0;

/// Bridge hip angle thresholds
pub const BRIDGE_UP_ANGLE: f64 = 160.0;
pub const BRIDGE_DOWN_ANGLE: f64 = 120.0;
pub const BRIDGE_FLAT_ANGLE: f64 = 110.0;

/// Lunge front-knee angle thresholds
pub const LUNGE_UP_ANGLE: f64 = 160.0;
pub const LUNGE_DOWN_ANGLE: f64 = 100.0;
pub const LUNGE_PERFECT_DEPTH_ANGLE: f64 = 90.0;

/// High knees: pixel margin around the mean hip height
pub const HIGH_KNEES_MARGIN: f64 = 20.0;

/// Seconds added by an "add rest" action
pub const DEFAULT_EXTRA_REST_SECONDS: u32 = 15;

/// Custom duration bounds for hold exercises, in seconds
pub const MIN_DURATION_SECONDS: u32 = 10;
pub const MAX_DURATION_SECONDS: u32 = 300;

/// Minimum completed values for a session log entry to be worth keeping
pub const DEFAULT_MIN_LOGGED_SECONDS: u32 = 10;
pub const DEFAULT_MIN_LOGGED_REPS: u32 = 3;

/// Nominal pose estimation cadence
pub const DEFAULT_FRAME_RATE: f64 = 10.0;

/// Numeric precision epsilon
pub const EPSILON: f64 = 1e-10;
