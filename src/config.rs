//! Configuration management for the form coach

use crate::catalog::Routine;
use crate::constants::{
    DEFAULT_EXTRA_REST_SECONDS, DEFAULT_FRAME_RATE, DEFAULT_MIN_LOGGED_REPS, DEFAULT_MIN_LOGGED_SECONDS,
    MAX_DURATION_SECONDS, MIN_DURATION_SECONDS,
};
use crate::session::TimerMode;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Session and timer configuration
    pub session: SessionConfig,

    /// Recording replay configuration
    pub replay: ReplayConfig,

    /// Extra routines, available alongside the built-in templates
    pub routines: Vec<Routine>,
}

/// Session and timer parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Timer direction for hold exercises
    pub timer_mode: TimerMode,

    /// Seconds added by an "add rest" action
    pub extra_rest_seconds: u32,

    /// Minimum seconds for a hold entry to make the workout worth recording
    pub min_logged_seconds: u32,

    /// Minimum repetitions for a rep entry to make the workout worth recording
    pub min_logged_reps: u32,
}

/// Recording replay parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplayConfig {
    /// Frames per second when the recording does not say
    pub frame_rate: f64,

    /// Log every frame's feedback instead of only changes
    pub log_every_frame: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            timer_mode: TimerMode::CountUp,
            extra_rest_seconds: DEFAULT_EXTRA_REST_SECONDS,
            min_logged_seconds: DEFAULT_MIN_LOGGED_SECONDS,
            min_logged_reps: DEFAULT_MIN_LOGGED_REPS,
        }
    }
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            frame_rate: DEFAULT_FRAME_RATE,
            log_every_frame: false,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {}", e)))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !(MIN_DURATION_SECONDS..=MAX_DURATION_SECONDS).contains(&self.session.extra_rest_seconds) {
            return Err(Error::ConfigError(format!(
                "Extra rest must be between {MIN_DURATION_SECONDS} and {MAX_DURATION_SECONDS} seconds"
            )));
        }

        if !(self.replay.frame_rate.is_finite() && self.replay.frame_rate > 0.0) {
            return Err(Error::ConfigError("Frame rate must be greater than 0".to_string()));
        }

        for routine in &self.routines {
            routine
                .validate()
                .map_err(|e| Error::ConfigError(format!("Invalid routine {}: {}", routine.key, e)))?;
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Form Coach Configuration

# Session behaviour
session:
  timer_mode: countup       # countup or countdown
  extra_rest_seconds: 15
  min_logged_seconds: 10
  min_logged_reps: 3

# Recording replay
replay:
  frame_rate: 10.0
  log_every_frame: false

# Extra routines
routines:
  - key: quick_legs
    name: Quick Legs
    entries:
      - name: Squat
        kind: reps
        target: 10
        rest: 10
      - name: Wall-sit
        kind: duration
        target: 30
"#;
