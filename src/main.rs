//! Form coach replay tool: evaluates a recorded keypoint stream offline.

use anyhow::{Context, Result};
use clap::Parser;
use form_coach::app::{AppConfig, CoachApp};
use form_coach::config::{Config, EXAMPLE_CONFIG};
use log::{info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Keypoint recording to replay (YAML)
    #[arg(short, long)]
    recording: Option<String>,

    /// Exercise to coach
    #[arg(short, long)]
    exercise: Option<String>,

    /// Routine to run (core_strength, lower_body, upper_body, or one from the config)
    #[arg(long, conflicts_with = "exercise")]
    routine: Option<String>,

    /// Hold duration in seconds for duration exercises
    #[arg(long)]
    duration: Option<u32>,

    /// Count hold time down from the target instead of up
    #[arg(long)]
    countdown: bool,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,

    /// Print an example configuration file and exit
    #[arg(long)]
    example_config: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    if args.example_config {
        print!("{EXAMPLE_CONFIG}");
        return Ok(());
    }

    info!("Form Coach");

    let config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {}", config_path);
        match Config::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("Failed to load config file: {}. Using defaults.", e);
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    let recording = args
        .recording
        .context("A recording is required (--recording <FILE>)")?;

    let app_config = AppConfig {
        recording: recording.into(),
        exercise: args.exercise,
        routine: args.routine,
        duration: args.duration,
        countdown: args.countdown,
        config,
    };

    let mut app = CoachApp::new(app_config)?;
    let summary = app.run()?;

    match summary.record {
        Some(record) => {
            println!("Workout log:");
            for entry in record.entries {
                println!("  {:<12} {:>4} {}", entry.name, entry.completed, entry.kind);
            }
        }
        None => println!("No workout recorded."),
    }

    Ok(())
}
