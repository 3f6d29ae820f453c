//! Progress arc timing

use std::time::{Duration, Instant};

/// Drives the elapsed fraction of the progress arc for one phase.
///
/// Progress is kept as accumulated elapsed time plus the instant the current
/// running stretch began, so pausing and resuming never loses or invents time.
#[derive(Debug, Clone, Default)]
pub struct ProgressAnimation {
    duration: Duration,
    accumulated: Duration,
    running_since: Option<Instant>,
    begun: bool,
}

impl ProgressAnimation {
    /// Create an idle animation at fraction zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to zero and start sweeping toward one over `duration`
    pub fn begin_for_phase(&mut self, duration: Duration, now: Instant) {
        self.duration = duration;
        self.accumulated = Duration::ZERO;
        self.running_since = Some(now);
        self.begun = true;
    }

    /// Freeze the arc at its current fraction
    pub fn pause(&mut self, now: Instant) {
        if let Some(since) = self.running_since.take() {
            self.accumulated += now.saturating_duration_since(since);
        }
    }

    /// Continue sweeping from the frozen fraction
    pub fn resume(&mut self, now: Instant) {
        if self.begun && self.running_since.is_none() {
            self.running_since = Some(now);
        }
    }

    /// Total time the arc has advanced in this phase
    pub fn elapsed(&self, now: Instant) -> Duration {
        match self.running_since {
            Some(since) => self.accumulated + now.saturating_duration_since(since),
            None => self.accumulated,
        }
    }

    /// Fraction of the phase that has visually elapsed, in `[0, 1]`
    pub fn elapsed_fraction(&self, now: Instant) -> f64 {
        if !self.begun {
            return 0.0;
        }
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed(now).as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Animation time still to run: `duration * (1 - elapsed_fraction)`
    pub fn remaining_duration(&self, now: Instant) -> Duration {
        self.duration.saturating_sub(self.elapsed(now))
    }

    pub fn is_paused(&self) -> bool {
        self.running_since.is_none()
    }

    pub fn has_begun(&self) -> bool {
        self.begun
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}
