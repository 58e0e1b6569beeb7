//! Recorded keypoint streams.
//!
//! A recording is a YAML document with one entry per pose-detector frame,
//! optionally carrying a voice command received on that frame.

use crate::commands::VoiceCommand;
use crate::keypoints::{NamedKeypoint, Pose};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One detector frame
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    #[serde(default)]
    pub keypoints: Vec<NamedKeypoint>,

    /// Voice command applied before the frame is evaluated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<VoiceCommand>,
}

impl Frame {
    #[must_use]
    pub fn pose(&self) -> Pose {
        Pose::from_named(&self.keypoints)
    }
}

/// A sequence of frames at a fixed rate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recording {
    /// Frames per second, if the recorder knew it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_rate: Option<f64>,

    pub frames: Vec<Frame>,
}

impl Recording {
    /// Load a recording from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        Self::from_yaml(&content).map_err(|e| Error::RecordingError(format!("{}: {}", path.display(), e)))
    }

    /// Parse a recording from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let recording: Self =
            serde_yaml::from_str(content).map_err(|e| Error::RecordingError(format!("Failed to parse recording: {e}")))?;

        if let Some(rate) = recording.frame_rate {
            if !(rate.is_finite() && rate > 0.0) {
                return Err(Error::RecordingError(format!("Invalid frame rate: {rate}")));
            }
        }
        Ok(recording)
    }

    /// Save the recording as YAML
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::RecordingError(format!("Failed to serialize recording: {e}")))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
