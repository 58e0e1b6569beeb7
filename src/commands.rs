//! Structured voice commands.
//!
//! Transcription and intent classification happen in an external speech
//! service; it returns one of these records per utterance.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Intent recognized by the speech service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intent {
    StartWorkout,
    StopWorkout,
    SkipExercise,
    AddRest,
    StartRoutine,
    SwitchExercise,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Intent::StartWorkout => "START_WORKOUT",
            Intent::StopWorkout => "STOP_WORKOUT",
            Intent::SkipExercise => "SKIP_EXERCISE",
            Intent::AddRest => "ADD_REST",
            Intent::StartRoutine => "START_ROUTINE",
            Intent::SwitchExercise => "SWITCH_EXERCISE",
            Intent::Unknown => "UNKNOWN",
        };
        f.write_str(name)
    }
}

/// A classified voice command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceCommand {
    pub intent: Intent,
    /// Exercise or routine named in the utterance
    #[serde(default)]
    pub entity: Option<String>,
    /// Raw transcription, for display
    #[serde(default)]
    pub transcription: Option<String>,
}

impl VoiceCommand {
    #[must_use]
    pub fn new(intent: Intent) -> Self {
        Self {
            intent,
            entity: None,
            transcription: None,
        }
    }

    #[must_use]
    pub fn with_entity(intent: Intent, entity: impl Into<String>) -> Self {
        Self {
            intent,
            entity: Some(entity.into()),
            transcription: None,
        }
    }
}

/// What the session did with a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The command changed the session
    Applied,
    /// The command does not apply in the current state
    Ignored,
    /// The entity could not be resolved, or the intent was not understood
    NotUnderstood,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_speech_service_payload() {
        let cmd: VoiceCommand =
            serde_yaml::from_str("intent: SWITCH_EXERCISE\nentity: wall sit\ntranscription: switch to wall sit\n")
                .unwrap();
        assert_eq!(cmd.intent, Intent::SwitchExercise);
        assert_eq!(cmd.entity.as_deref(), Some("wall sit"));
    }

    #[test]
    fn test_unrecognized_intent_maps_to_unknown() {
        let cmd: VoiceCommand = serde_yaml::from_str("intent: DANCE\n").unwrap();
        assert_eq!(cmd.intent, Intent::Unknown);
        assert_eq!(cmd.entity, None);
    }
}
