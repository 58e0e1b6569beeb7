//! Evaluation state and per-frame feedback types.

use std::fmt;

/// Feedback color with a fixed meaning for the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Correct form or a completed repetition
    Green,
    /// Close, needs a small adjustment
    Yellow,
    /// Body not tracked well enough to judge
    Orange,
    /// Form violation
    Red,
    /// In-progress movement guidance
    Blue,
    /// Setup guidance
    Cyan,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Green => "green",
            Severity::Yellow => "yellow",
            Severity::Orange => "orange",
            Severity::Red => "red",
            Severity::Blue => "blue",
            Severity::Cyan => "cyan",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Phase of a repetition exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stage {
    /// Not yet classified
    #[default]
    Undetermined,
    /// Extended, standing or lifted position
    Up,
    /// Flexed, lowered or closed position
    Down,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Undetermined => f.write_str("undetermined"),
            Stage::Up => f.write_str("up"),
            Stage::Down => f.write_str("down"),
        }
    }
}

/// Running phase and repetition count for one exercise instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EvaluationState {
    pub stage: Stage,
    pub rep_count: u32,
}

impl EvaluationState {
    #[must_use]
    pub const fn new(stage: Stage, rep_count: u32) -> Self {
        Self { stage, rep_count }
    }
}

/// Feedback produced for a single frame
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationResult {
    /// Coaching text shown to the user
    pub feedback: &'static str,
    pub severity: Severity,
    /// Phase after this frame (repetition exercises)
    pub stage: Option<Stage>,
    /// Repetitions after this frame (repetition exercises)
    pub rep_count: Option<u32>,
    /// Instantaneous correctness (hold exercises)
    pub is_correct_form: Option<bool>,
}

impl EvaluationResult {
    /// Result that carries only text and color
    #[must_use]
    pub const fn message(feedback: &'static str, severity: Severity) -> Self {
        Self {
            feedback,
            severity,
            stage: None,
            rep_count: None,
            is_correct_form: None,
        }
    }

    /// Result of a hold check
    #[must_use]
    pub const fn hold(feedback: &'static str, severity: Severity, is_correct_form: bool) -> Self {
        Self {
            feedback,
            severity,
            stage: None,
            rep_count: None,
            is_correct_form: Some(is_correct_form),
        }
    }

    /// Result of a repetition step
    #[must_use]
    pub const fn repetition(feedback: &'static str, severity: Severity, state: EvaluationState) -> Self {
        Self {
            feedback,
            severity,
            stage: Some(state.stage),
            rep_count: Some(state.rep_count),
            is_correct_form: None,
        }
    }

    /// State to carry into the next frame, keeping `prior` for absent fields
    #[must_use]
    pub fn next_state(&self, prior: EvaluationState) -> EvaluationState {
        EvaluationState {
            stage: self.stage.unwrap_or(prior.stage),
            rep_count: self.rep_count.unwrap_or(prior.rep_count),
        }
    }
}

impl fmt::Display for EvaluationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.feedback)?;
        if let (Some(stage), Some(reps)) = (self.stage, self.rep_count) {
            write!(f, " (stage: {stage}, reps: {reps})")?;
        }
        if let Some(correct) = self.is_correct_form {
            write!(f, " (form ok: {correct})")?;
        }
        Ok(())
    }
}
