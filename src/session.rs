//! Workout session control.
//!
//! A [`Session`] owns the evaluation state of the active exercise and turns
//! per-frame results and one-second ticks into progress: repetitions toward a
//! target, a hold timer that only runs while form is correct, rests between
//! routine entries, and a log of what was completed.
//!
//! Narration is not played here. Every spoken line is pushed as a
//! [`SessionEvent::Announce`] for the host's speech synthesizer.

use crate::catalog::{
    clamp_duration, default_catalog, default_routines, find_exercise, find_routine, ExerciseDescriptor,
    ExerciseKind, Routine,
};
use crate::commands::{CommandOutcome, Intent, VoiceCommand};
use crate::config::{Config, SessionConfig};
use crate::dispatcher;
use crate::feedback::{EvaluationResult, EvaluationState};
use crate::keypoints::Pose;
use crate::{Error, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Direction of the hold timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerMode {
    /// 0 up to the target
    #[default]
    CountUp,
    /// Target down to 0
    Countdown,
}

/// Hold timer that only advances on ticks with correct form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationTimer {
    mode: TimerMode,
    target: u32,
    value: u32,
}

impl DurationTimer {
    #[must_use]
    pub fn new(mode: TimerMode, target: u32) -> Self {
        let value = match mode {
            TimerMode::CountUp => 0,
            TimerMode::Countdown => target,
        };
        Self { mode, target, value }
    }

    /// Advance one second if `form_correct`. Returns whether the timer moved.
    ///
    /// Incorrect form pauses the timer; it never goes backwards.
    pub fn tick(&mut self, form_correct: bool) -> bool {
        if !form_correct {
            return false;
        }
        match self.mode {
            TimerMode::CountUp => {
                self.value = self.value.saturating_add(1);
                true
            }
            TimerMode::Countdown if self.value > 0 => {
                self.value -= 1;
                true
            }
            TimerMode::Countdown => false,
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        match self.mode {
            TimerMode::CountUp => self.value >= self.target,
            TimerMode::Countdown => self.value == 0,
        }
    }

    /// Displayed value: elapsed seconds, or seconds left for a countdown
    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Seconds held so far, in either mode
    #[must_use]
    pub fn held_seconds(&self) -> u32 {
        match self.mode {
            TimerMode::CountUp => self.value,
            TimerMode::Countdown => self.target.saturating_sub(self.value),
        }
    }

    #[must_use]
    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    #[must_use]
    pub fn target(&self) -> u32 {
        self.target
    }
}

/// Completed work for one exercise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub name: String,
    pub kind: ExerciseKind,
    /// Repetitions or seconds
    pub completed: u32,
}

/// Log of a finished workout that had meaningful activity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    pub entries: Vec<LogEntry>,
}

/// Something the host should react to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Line to speak
    Announce(String),
    WorkoutStarted,
    /// The workout ended, by request or because the plan is done
    WorkoutEnded(Option<WorkoutRecord>),
    ExerciseStarted(ExerciseDescriptor),
    RepCounted(u32),
    ExerciseLogged(LogEntry),
    RestStarted { seconds: u32, next: Option<String> },
    RestEnded,
    RoutineCompleted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Plan {
    Single,
    Routine { routine: Routine, index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AfterRest {
    /// Move to the next routine entry
    Advance,
    /// Continue the current exercise
    Resume,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Rest {
    remaining: u32,
    then: AfterRest,
}

/// Workout session controller
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    catalog: Vec<ExerciseDescriptor>,
    routines: Vec<Routine>,
    plan: Plan,
    current: ExerciseDescriptor,
    timer_mode: TimerMode,
    active: bool,
    rest: Option<Rest>,
    state: EvaluationState,
    form_correct: bool,
    timer: DurationTimer,
    current_logged: bool,
    last_result: Option<EvaluationResult>,
    log: Vec<LogEntry>,
    events: Vec<SessionEvent>,
}

impl Session {
    /// Session over the built-in catalog and routines
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        let catalog = default_catalog();
        let current = catalog
            .iter()
            .find(|ex| ex.name == "Squat")
            .cloned()
            .unwrap_or_else(|| catalog[0].clone());
        let timer_mode = config.timer_mode;
        Self {
            config,
            catalog,
            routines: default_routines(),
            plan: Plan::Single,
            timer: DurationTimer::new(timer_mode, current.target),
            current,
            timer_mode,
            active: false,
            rest: None,
            state: EvaluationState::default(),
            form_correct: false,
            current_logged: false,
            last_result: None,
            log: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Session using the configured extra routines alongside the templates
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut session = Self::new(config.session.clone());
        for routine in &config.routines {
            routine.validate()?;
            session.routines.push(routine.clone());
        }
        Ok(session)
    }

    // --- Selection ---

    /// Select an exercise by name (tolerant match) with its catalog target
    pub fn select_exercise(&mut self, name: &str) -> Result<&ExerciseDescriptor> {
        let descriptor = find_exercise(&self.catalog, name)
            .cloned()
            .ok_or_else(|| Error::UnknownExercise(name.to_string()))?;
        let mode = self.config.timer_mode;
        self.select(descriptor, mode);
        Ok(&self.current)
    }

    /// Select a hold exercise with a custom duration and timer direction.
    ///
    /// The duration is clamped to the supported range.
    pub fn select_duration_exercise(&mut self, name: &str, seconds: u32, mode: TimerMode) -> Result<&ExerciseDescriptor> {
        let descriptor = find_exercise(&self.catalog, name)
            .cloned()
            .ok_or_else(|| Error::UnknownExercise(name.to_string()))?;
        if descriptor.kind != ExerciseKind::Duration {
            return Err(Error::InvalidInput(format!("{} is not a duration exercise", descriptor.name)));
        }
        let descriptor = descriptor.with_target(clamp_duration(seconds));
        self.select(descriptor, mode);
        Ok(&self.current)
    }

    fn select(&mut self, descriptor: ExerciseDescriptor, mode: TimerMode) {
        let announcement = match (descriptor.kind, mode) {
            (ExerciseKind::Duration, TimerMode::Countdown) => format!(
                "{} selected with countdown timer for {} seconds.",
                descriptor.name, descriptor.target
            ),
            (ExerciseKind::Duration, TimerMode::CountUp) => format!(
                "{} selected with count-up timer for {} seconds.",
                descriptor.name, descriptor.target
            ),
            _ => format!("{} selected.", descriptor.name),
        };
        self.log_current();
        self.plan = Plan::Single;
        self.rest = None;
        self.timer_mode = mode;
        self.begin_exercise(descriptor);
        self.announce(announcement);
    }

    /// Start a routine by key or name. Its first exercise becomes current.
    pub fn start_routine(&mut self, key_or_name: &str) -> Result<()> {
        let routine = find_routine(&self.routines, key_or_name)?.clone();
        routine.validate()?;

        info!("Routine selected: {}", routine.name);
        self.log_current();
        self.rest = None;
        self.timer_mode = self.config.timer_mode;
        let first = routine.entries[0].exercise.clone();
        self.announce(format!("{} routine selected. Get ready!", routine.name));
        self.plan = Plan::Routine { routine, index: 0 };
        self.begin_exercise(first);
        Ok(())
    }

    /// Reset the counters of the current exercise
    pub fn reset_exercise(&mut self) {
        let current = self.current.clone();
        self.begin_exercise(current);
        if self.active {
            self.announce("Exercise reset.");
        }
    }

    fn begin_exercise(&mut self, descriptor: ExerciseDescriptor) {
        debug!("Exercise set to {} ({} {})", descriptor.name, descriptor.target, descriptor.kind);
        self.state = EvaluationState::default();
        self.form_correct = false;
        self.timer = DurationTimer::new(self.timer_mode, descriptor.target);
        self.current_logged = false;
        self.last_result = None;
        self.events.push(SessionEvent::ExerciseStarted(descriptor.clone()));
        self.current = descriptor;
    }

    // --- Start / stop ---

    /// Start the workout. Returns false if it was already running.
    pub fn start(&mut self) -> bool {
        if self.active {
            return false;
        }
        info!("Workout started with {}", self.current.name);
        self.active = true;
        self.log.clear();
        let current = self.current.clone();
        self.begin_exercise(current);
        self.events.push(SessionEvent::WorkoutStarted);
        self.announce("Workout started! Let's go!");
        true
    }

    /// Stop the workout, returning its record if it had meaningful activity
    pub fn stop(&mut self) -> Option<WorkoutRecord> {
        if !self.active {
            return None;
        }
        self.end_workout("Workout stopped. Great effort!")
    }

    fn end_workout(&mut self, announcement: &str) -> Option<WorkoutRecord> {
        self.log_current();
        self.active = false;
        self.rest = None;
        self.form_correct = false;
        self.plan = Plan::Single;

        let record = self.is_meaningful().then(|| WorkoutRecord {
            entries: self.log.clone(),
        });
        info!(
            "Workout ended: {} log entries, recorded: {}",
            self.log.len(),
            record.is_some()
        );
        self.announce(announcement);
        self.events.push(SessionEvent::WorkoutEnded(record.clone()));
        record
    }

    fn is_meaningful(&self) -> bool {
        self.log.iter().any(|entry| match entry.kind {
            ExerciseKind::Duration => entry.completed >= self.config.min_logged_seconds,
            ExerciseKind::Reps => entry.completed >= self.config.min_logged_reps,
        })
    }

    // --- Frame and clock input ---

    /// Feed one pose frame.
    ///
    /// Returns `None` while the workout is stopped or resting.
    pub fn on_frame(&mut self, pose: &Pose) -> Option<EvaluationResult> {
        if !self.active || self.rest.is_some() {
            return None;
        }

        let result = dispatcher::evaluate(&self.current.name, pose, self.state);

        if let Some(correct) = result.is_correct_form {
            if correct != self.form_correct {
                debug!("Form correct: {correct}");
            }
            self.form_correct = correct;
        }

        let next = result.next_state(self.state);
        let counted = next.rep_count > self.state.rep_count;
        self.state = next;
        self.last_result = Some(result.clone());

        if counted && self.current.kind == ExerciseKind::Reps {
            let reps = self.state.rep_count;
            info!("{}: rep {} of {}", self.current.name, reps, self.current.target);
            self.events.push(SessionEvent::RepCounted(reps));
            self.announce(reps.to_string());
            self.check_completion();
        }

        Some(result)
    }

    /// Feed one clock second
    pub fn on_tick(&mut self) {
        if !self.active {
            return;
        }

        if let Some(rest) = self.rest.as_mut() {
            rest.remaining = rest.remaining.saturating_sub(1);
            if rest.remaining == 0 {
                self.end_rest();
            }
            return;
        }

        if self.current.kind == ExerciseKind::Duration && self.timer.tick(self.form_correct) {
            self.check_completion();
        }
    }

    fn check_completion(&mut self) {
        let complete = match self.current.kind {
            ExerciseKind::Reps => self.state.rep_count >= self.current.target,
            ExerciseKind::Duration => self.timer.is_complete(),
        };
        if !complete {
            return;
        }

        info!("{} target of {} reached", self.current.name, self.current.target);
        self.log_current();
        match self.plan {
            Plan::Single => {
                self.end_workout("Target reached! Great work!");
            }
            Plan::Routine { .. } => self.advance_routine(),
        }
    }

    // --- Routine progression ---

    fn advance_routine(&mut self) {
        let (rest_seconds, next) = match &self.plan {
            Plan::Routine { routine, index } => {
                let next = routine.entries.get(index + 1).map(|entry| entry.exercise.name.clone());
                (routine.entries[*index].rest, next)
            }
            Plan::Single => return,
        };

        if next.is_none() {
            self.events.push(SessionEvent::RoutineCompleted);
            self.end_workout("Routine complete. Amazing work!");
            return;
        }

        self.form_correct = false;
        self.start_rest(rest_seconds, AfterRest::Advance);
    }

    fn start_rest(&mut self, seconds: u32, then: AfterRest) {
        let next = match (&self.plan, then) {
            (Plan::Routine { routine, index }, AfterRest::Advance) => {
                routine.entries.get(index + 1).map(|entry| entry.exercise.name.clone())
            }
            _ => Some(self.current.name.clone()),
        };
        info!("Resting for {seconds}s");
        self.rest = Some(Rest {
            remaining: seconds,
            then,
        });
        self.events.push(SessionEvent::RestStarted {
            seconds,
            next: next.clone(),
        });
        if then == AfterRest::Advance {
            self.announce(format!(
                "Rest Time! Next up: {}",
                next.as_deref().unwrap_or("the final exercise")
            ));
        }
        if seconds == 0 {
            self.end_rest();
        }
    }

    fn end_rest(&mut self) {
        let Some(rest) = self.rest.take() else {
            return;
        };
        self.events.push(SessionEvent::RestEnded);

        match rest.then {
            AfterRest::Resume => self.announce("Let's continue!"),
            AfterRest::Advance => {
                let next = match &mut self.plan {
                    Plan::Routine { routine, index } if *index + 1 < routine.entries.len() => {
                        *index += 1;
                        routine.entries[*index].exercise.clone()
                    }
                    _ => return,
                };
                info!("Next exercise: {}", next.name);
                self.begin_exercise(next);
                self.announce("Let's begin.");
            }
        }
    }

    /// Skip the rest of the current routine exercise
    pub fn skip_exercise(&mut self) -> bool {
        if !self.active || self.rest.is_some() || !matches!(self.plan, Plan::Routine { .. }) {
            return false;
        }
        self.announce("Exercise skipped.");
        self.log_current();
        self.advance_routine();
        true
    }

    /// End the ongoing rest now
    pub fn skip_rest(&mut self) -> bool {
        if self.rest.is_none() {
            return false;
        }
        self.announce("Rest skipped. Let's continue!");
        self.end_rest();
        true
    }

    /// Extend the ongoing rest, or take a break from the current routine exercise
    pub fn add_rest(&mut self) -> bool {
        let extra = self.config.extra_rest_seconds;
        if let Some(rest) = self.rest.as_mut() {
            rest.remaining = rest.remaining.saturating_add(extra);
            self.announce(format!("{extra} seconds added to rest time."));
            return true;
        }
        if !self.active || !matches!(self.plan, Plan::Routine { .. }) {
            return false;
        }
        self.form_correct = false;
        self.announce(format!("Rest break started. Take {extra} seconds."));
        self.start_rest(extra, AfterRest::Resume);
        true
    }

    // --- Voice commands ---

    /// Apply a classified voice command
    pub fn handle_command(&mut self, command: &VoiceCommand) -> CommandOutcome {
        debug!("Voice command: {} {:?}", command.intent, command.entity);
        match command.intent {
            Intent::StartWorkout => {
                if self.active {
                    return CommandOutcome::Ignored;
                }
                self.announce("Voice command confirmed. Starting workout!");
                self.start();
                CommandOutcome::Applied
            }
            Intent::StopWorkout => {
                if !self.active {
                    return CommandOutcome::Ignored;
                }
                self.announce("Voice command confirmed. Stopping workout.");
                self.stop();
                CommandOutcome::Applied
            }
            Intent::SkipExercise => {
                self.announce("Voice command confirmed.");
                let applied = if self.rest.is_some() {
                    self.skip_rest()
                } else {
                    self.skip_exercise()
                };
                if applied {
                    CommandOutcome::Applied
                } else {
                    CommandOutcome::Ignored
                }
            }
            Intent::AddRest => {
                if self.active && matches!(self.plan, Plan::Single) {
                    self.announce("Voice command confirmed. Ending workout.");
                    self.stop();
                    return CommandOutcome::Applied;
                }
                self.announce("Voice command confirmed. Adding rest time.");
                if self.add_rest() {
                    CommandOutcome::Applied
                } else {
                    CommandOutcome::Ignored
                }
            }
            Intent::StartRoutine => {
                let Some(entity) = command.entity.as_deref() else {
                    return CommandOutcome::NotUnderstood;
                };
                if self.active {
                    return CommandOutcome::Ignored;
                }
                match self.start_routine(entity) {
                    Ok(()) => {
                        self.announce(format!("Voice command confirmed. Starting {entity} routine."));
                        CommandOutcome::Applied
                    }
                    Err(_) => {
                        self.announce("Sorry, I didn't recognize that routine.");
                        CommandOutcome::NotUnderstood
                    }
                }
            }
            Intent::SwitchExercise => {
                let Some(entity) = command.entity.as_deref() else {
                    self.announce("Sorry, I didn't recognize which exercise you want to do.");
                    return CommandOutcome::NotUnderstood;
                };
                match self.select_exercise(entity).map(|selected| selected.name.clone()) {
                    Ok(name) => {
                        self.announce(format!("Voice command confirmed. Switching to {name}."));
                        CommandOutcome::Applied
                    }
                    Err(_) => {
                        self.announce("Sorry, I didn't recognize that exercise.");
                        CommandOutcome::NotUnderstood
                    }
                }
            }
            Intent::Unknown => {
                self.announce("Sorry, I didn't understand that command.");
                CommandOutcome::NotUnderstood
            }
        }
    }

    // --- Logging ---

    fn log_current(&mut self) {
        if !self.active || self.current_logged {
            return;
        }
        let completed = self.progress();
        if completed == 0 {
            return;
        }
        let entry = LogEntry {
            name: self.current.name.clone(),
            kind: self.current.kind,
            completed,
        };
        info!("Logged {} {} of {}", entry.completed, entry.kind, entry.name);
        self.current_logged = true;
        self.log.push(entry.clone());
        self.events.push(SessionEvent::ExerciseLogged(entry));
    }

    fn announce(&mut self, text: impl Into<String>) {
        self.events.push(SessionEvent::Announce(text.into()));
    }

    // --- Accessors ---

    /// Take the events produced since the last call
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn is_resting(&self) -> bool {
        self.rest.is_some()
    }

    #[must_use]
    pub fn rest_remaining(&self) -> Option<u32> {
        self.rest.map(|rest| rest.remaining)
    }

    #[must_use]
    pub fn current_exercise(&self) -> &ExerciseDescriptor {
        &self.current
    }

    #[must_use]
    pub fn evaluation_state(&self) -> EvaluationState {
        self.state
    }

    #[must_use]
    pub fn rep_count(&self) -> u32 {
        self.state.rep_count
    }

    /// Latched correctness from the most recent hold result
    #[must_use]
    pub fn is_form_correct(&self) -> bool {
        self.form_correct
    }

    #[must_use]
    pub fn timer(&self) -> &DurationTimer {
        &self.timer
    }

    /// Repetitions or seconds held for the current exercise
    #[must_use]
    pub fn progress(&self) -> u32 {
        match self.current.kind {
            ExerciseKind::Reps => self.state.rep_count,
            ExerciseKind::Duration => self.timer.held_seconds(),
        }
    }

    #[must_use]
    pub fn last_result(&self) -> Option<&EvaluationResult> {
        self.last_result.as_ref()
    }

    /// Active routine and the index of the current entry
    #[must_use]
    pub fn routine(&self) -> Option<(&Routine, usize)> {
        match &self.plan {
            Plan::Routine { routine, index } => Some((routine, *index)),
            Plan::Single => None,
        }
    }

    #[must_use]
    pub fn session_log(&self) -> &[LogEntry] {
        &self.log
    }

    #[must_use]
    pub fn catalog(&self) -> &[ExerciseDescriptor] {
        &self.catalog
    }

    #[must_use]
    pub fn routines(&self) -> &[Routine] {
        &self.routines
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
