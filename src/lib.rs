//! Pomodoro Ring - A terminal work/rest cycle timer with a pausable progress ring
//!
//! This library provides the work/rest countdown state machine, the
//! drift-free progress arc that follows it, and the async tasks that drive
//! both from a one-second tick and render them to a terminal.

pub mod config;
pub mod error;
pub mod state;
pub mod tasks;
pub mod display;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::TimerError;
pub use state::{CycleSettings, CycleTimer, Phase, ProgressAnimation, Session, Snapshot, TimerEvent};
pub use tasks::{cycle_driver_task, Command};
pub use utils::signals::shutdown_signal;
