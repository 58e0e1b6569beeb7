//! Configuration and error handling

use form_coach::config::{Config, EXAMPLE_CONFIG};
use form_coach::error::{AppError, Result};
use form_coach::{Exercise, Joint, TimerMode};
use tempfile::TempDir;

#[test]
fn test_config_file_round_trip() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("coach.yaml");

    let mut config = Config::from_yaml(EXAMPLE_CONFIG)?;
    config.session.timer_mode = TimerMode::Countdown;
    config.session.extra_rest_seconds = 30;
    config.to_file(&path)?;

    let loaded = Config::from_file(&path)?;
    loaded.validate()?;
    assert_eq!(loaded.session, config.session);
    assert_eq!(loaded.routines, config.routines);
    Ok(())
}

#[test]
fn test_missing_config_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let result = Config::from_file(dir.path().join("absent.yaml"));
    assert!(matches!(result, Err(AppError::Io(_))));
}

#[test]
fn test_malformed_config_is_config_error() {
    match Config::from_yaml("session: [1, 2") {
        Err(AppError::ConfigError(msg)) => assert!(msg.contains("Failed to parse config")),
        other => panic!("Expected ConfigError, got {other:?}"),
    }
}

#[test]
fn test_validate_rejects_out_of_range_rest() {
    let mut config = Config::default();
    config.session.extra_rest_seconds = 5;
    assert!(matches!(config.validate(), Err(AppError::ConfigError(_))));

    config.session.extra_rest_seconds = 301;
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_mismatched_routine_kind() {
    let yaml = r#"
routines:
  - key: odd
    name: Odd
    entries:
      - name: Plank
        kind: reps
        target: 10
"#;
    let config = Config::from_yaml(yaml).unwrap();
    match config.validate() {
        Err(AppError::ConfigError(msg)) => assert!(msg.contains("odd")),
        other => panic!("Expected ConfigError, got {other:?}"),
    }
}

#[test]
fn test_parse_errors_carry_the_input() {
    match "Burpee".parse::<Exercise>() {
        Err(AppError::UnknownExercise(name)) => assert_eq!(name, "Burpee"),
        other => panic!("Expected UnknownExercise, got {other:?}"),
    }
    let err = "left_tail".parse::<Joint>().unwrap_err();
    assert!(err.to_string().contains("left_tail"));
}
