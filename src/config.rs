//! Configuration and CLI argument handling

use std::time::Duration;

use clap::Parser;

use crate::{error::TimerError, state::CycleSettings};

/// CLI argument parsing structure
#[derive(Parser, Debug, Clone)]
#[command(name = "pomodoro-ring")]
#[command(about = "A terminal work/rest cycle timer with a pausable progress ring")]
#[command(version = "0.1.0")]
#[command(after_help = "Press Enter (or p) to start/pause, q then Enter to quit.")]
pub struct Config {
    /// Work phase duration in seconds
    #[arg(short, long, default_value = "1500")]
    pub work: u64,

    /// Rest phase duration in seconds
    #[arg(short, long, default_value = "300")]
    pub rest: u64,

    /// Display refresh interval in milliseconds while running
    #[arg(long, default_value = "250")]
    pub refresh_ms: u64,

    /// Emit one JSON object per timer event instead of the ring display
    #[arg(long)]
    pub json: bool,

    /// Print the status line without phase colors
    #[arg(long)]
    pub no_color: bool,

    /// Start the countdown immediately without waiting for a key press
    #[arg(short, long)]
    pub autostart: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Validate the phase durations
    pub fn settings(&self) -> Result<CycleSettings, TimerError> {
        CycleSettings::new(self.work, self.rest)
    }

    /// Interval between display refreshes, never below 10ms
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_ms.max(10))
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
