//! Recording replay driver.
//!
//! Feeds a recorded keypoint stream through a [`Session`] the way a live
//! client would: every frame is evaluated, voice commands are applied as
//! they arrive, and the session clock ticks once per second of recording.

use crate::{
    commands::Intent,
    config::Config,
    error::{Error, Result},
    feedback::EvaluationResult,
    replay::Recording,
    session::{Session, SessionEvent, TimerMode, WorkoutRecord},
};
use log::{debug, info, warn};
use std::path::PathBuf;
use std::time::Instant;

/// What to replay and how to set up the session
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// YAML recording to replay
    pub recording: PathBuf,
    /// Exercise to select before the first frame
    pub exercise: Option<String>,
    /// Routine to start instead of a single exercise
    pub routine: Option<String>,
    /// Custom hold duration in seconds
    pub duration: Option<u32>,
    /// Use a countdown timer for holds
    pub countdown: bool,
    /// Loaded configuration file, or defaults
    pub config: Config,
}

impl AppConfig {
    pub fn new(recording: impl Into<PathBuf>) -> Self {
        Self {
            recording: recording.into(),
            exercise: None,
            routine: None,
            duration: None,
            countdown: false,
            config: Config::default(),
        }
    }
}

/// Outcome of a replay
#[derive(Debug, Clone, Default)]
pub struct ReplaySummary {
    /// Frames evaluated by the session
    pub frames: usize,
    /// Clock seconds simulated
    pub ticks: usize,
    /// Every event the session produced
    pub events: Vec<SessionEvent>,
    /// Workout log, if the workout was worth recording
    pub record: Option<WorkoutRecord>,
}

impl ReplaySummary {
    /// Spoken lines in order
    pub fn announcements(&self) -> impl Iterator<Item = &str> {
        self.events.iter().filter_map(|event| match event {
            SessionEvent::Announce(text) => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Replays a recording through a coaching session
pub struct CoachApp {
    config: AppConfig,
    recording: Recording,
    session: Session,
    frames_per_tick: usize,
    last_feedback: Option<EvaluationResult>,
}

impl CoachApp {
    /// Load the recording and prepare the session
    pub fn new(config: AppConfig) -> Result<Self> {
        info!("Initializing form coach replay");

        if config.exercise.is_some() && config.routine.is_some() {
            return Err(Error::SessionError(
                "Choose either an exercise or a routine, not both".to_string(),
            ));
        }

        info!("Loading recording: {}", config.recording.display());
        let recording = Recording::from_file(&config.recording)?;
        Self::with_recording(config, recording)
    }

    /// Prepare the session for an already loaded recording
    pub fn with_recording(config: AppConfig, recording: Recording) -> Result<Self> {
        config.config.validate()?;
        let mut session = Session::from_config(&config.config)?;

        if let Some(routine) = &config.routine {
            session.start_routine(routine)?;
        } else if let Some(name) = &config.exercise {
            let mode = if config.countdown {
                TimerMode::Countdown
            } else {
                config.config.session.timer_mode
            };
            match config.duration {
                Some(seconds) => session.select_duration_exercise(name, seconds, mode)?,
                None => session.select_exercise(name)?,
            };
        }

        let frame_rate = recording.frame_rate.unwrap_or(config.config.replay.frame_rate);
        // Frame rates are validated positive and finite
        let frames_per_tick = (frame_rate.round() as usize).max(1);
        info!(
            "{} frames at {:.1} fps, exercise: {}",
            recording.len(),
            frame_rate,
            session.current_exercise().name
        );

        Ok(Self {
            config,
            recording,
            session,
            frames_per_tick,
            last_feedback: None,
        })
    }

    /// Replay every frame and finish the workout
    pub fn run(&mut self) -> Result<ReplaySummary> {
        info!("Starting replay");
        let start_time = Instant::now();
        let mut summary = ReplaySummary::default();

        let waits_for_voice = self.recording.frames.iter().any(|frame| {
            frame
                .command
                .as_ref()
                .is_some_and(|cmd| cmd.intent == Intent::StartWorkout)
        });
        if !waits_for_voice {
            self.session.start();
        }

        let frames = std::mem::take(&mut self.recording.frames);
        for (index, frame) in frames.iter().enumerate() {
            if let Some(command) = &frame.command {
                let outcome = self.session.handle_command(command);
                debug!("Frame {index}: {} -> {:?}", command.intent, outcome);
            }

            if let Some(result) = self.session.on_frame(&frame.pose()) {
                summary.frames += 1;
                self.report(index, result);
            }

            if (index + 1) % self.frames_per_tick == 0 {
                self.session.on_tick();
                summary.ticks += 1;
            }

            self.collect_events(&mut summary);
        }
        self.recording.frames = frames;

        if self.session.is_active() {
            info!("End of recording reached");
            self.session.stop();
            self.collect_events(&mut summary);
        }

        summary.record = summary.events.iter().rev().find_map(|event| match event {
            SessionEvent::WorkoutEnded(record) => Some(record.clone()),
            _ => None,
        }).flatten();

        info!(
            "Replay finished: {} frames, {} seconds in {:.1} ms",
            summary.frames,
            summary.ticks,
            start_time.elapsed().as_secs_f64() * 1000.0
        );
        match &summary.record {
            Some(record) => {
                for entry in &record.entries {
                    info!("  {}: {} {}", entry.name, entry.completed, entry.kind);
                }
            }
            None => warn!("Workout too short to record"),
        }

        Ok(summary)
    }

    fn report(&mut self, index: usize, result: EvaluationResult) {
        let changed = self.last_feedback.as_ref().map_or(true, |last| {
            last.feedback != result.feedback || last.severity != result.severity
        });
        if changed || self.config.config.replay.log_every_frame {
            info!("Frame {index}: {result}");
        }
        self.last_feedback = Some(result);
    }

    fn collect_events(&mut self, summary: &mut ReplaySummary) {
        for event in self.session.drain_events() {
            match &event {
                SessionEvent::Announce(text) => info!("Coach: \"{text}\""),
                SessionEvent::RestStarted { seconds, next } => {
                    info!("Rest {seconds}s before {}", next.as_deref().unwrap_or("-"));
                }
                other => debug!("Event: {other:?}"),
            }
            summary.events.push(event);
        }
    }

    /// The session being driven
    pub fn session(&self) -> &Session {
        &self.session
    }
}
