//! Exercise form coaching from 2D body keypoints.
//!
//! This library turns a stream of pose-detector keypoints into coaching
//! feedback and workout progress:
//! - Per-exercise form evaluators, either stateless holds or repetition
//!   counters driven by a two-threshold phase machine
//! - A dispatcher that routes frames to the evaluator for an exercise name
//! - A session controller with correctness-gated hold timers, routines with
//!   rests, and voice command handling
//!
//! Pose detection, speech and rendering are left to the host.
//!
//! # Examples
//!
//! ## Evaluating a frame
//!
//! ```
//! use form_coach::{evaluate, EvaluationState, Joint, Keypoint, Pose, Severity};
//!
//! let pose = Pose::empty()
//!     .with(Joint::LeftHip, Keypoint::new(100.0, 200.0, 0.9))
//!     .with(Joint::LeftKnee, Keypoint::new(100.0, 300.0, 0.9))
//!     .with(Joint::LeftAnkle, Keypoint::new(100.0, 400.0, 0.9));
//!
//! let result = evaluate("Squat", &pose, EvaluationState::default());
//! assert_eq!(result.severity, Severity::Green);
//! assert_eq!(result.rep_count, Some(0));
//!
//! let unknown = evaluate("Burpee", &pose, EvaluationState::default());
//! assert_eq!(unknown.severity, Severity::Orange);
//! ```
//!
//! ## Running a session
//!
//! ```
//! use form_coach::{config::SessionConfig, Pose, Session};
//!
//! let mut session = Session::new(SessionConfig::default());
//! session.select_exercise("plank").unwrap();
//! session.start();
//!
//! // No keypoints: orange feedback, and the hold timer does not move
//! let result = session.on_frame(&Pose::empty()).unwrap();
//! session.on_tick();
//! assert_eq!(session.timer().value(), 0);
//! println!("{result}");
//! ```

/// Body keypoints and poses
pub mod keypoints;

/// Joint angle calculations
pub mod geometry;

/// Feedback results and repetition state
pub mod feedback;

/// Per-exercise form evaluators
pub mod evaluators;

/// Exercise registry and frame dispatch
pub mod dispatcher;

/// Exercise catalog and routine templates
pub mod catalog;

/// Structured voice commands
pub mod commands;

/// Workout session control
pub mod session;

/// Recorded keypoint streams
pub mod replay;

/// Error types and result handling
pub mod error;

/// Recording replay driver
pub mod app;

/// Constants used throughout the library
pub mod constants;

/// Configuration management
pub mod config;

pub use dispatcher::{evaluate, Exercise};
pub use error::{Error, Result};
pub use feedback::{EvaluationResult, EvaluationState, Severity, Stage};
pub use keypoints::{Joint, Keypoint, NamedKeypoint, Pose};
pub use session::{Session, SessionEvent, TimerMode};
