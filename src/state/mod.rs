//! Cycle state module
//!
//! This module contains the work/rest countdown, the progress arc timing and
//! the owned session that drives both together.

pub mod phase;
pub mod cycle_timer;
pub mod progress;
pub mod session;

// Re-export main types
pub use phase::{CycleSettings, Phase};
pub use cycle_timer::{format_mmss, CycleTimer, TimerEvent};
pub use progress::ProgressAnimation;
pub use session::{Session, Snapshot, Toggle};
