//! Owned controller state: one countdown and one progress arc driven together

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{CycleSettings, CycleTimer, Phase, ProgressAnimation, TimerEvent};

const ONE_SECOND: Duration = Duration::from_secs(1);

/// Outcome of pressing the start/pause control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// Countdown is now running; the next tick is due at `next_tick`
    Started { next_tick: Instant },
    /// Countdown and arc are frozen
    Paused,
}

/// Everything the display needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: Phase,
    pub running: bool,
    pub remaining_seconds: u64,
    pub formatted: String,
    pub elapsed_fraction: f64,
}

/// The single timer/animation pair behind the screen.
///
/// All state lives here and every operation takes the current instant, so
/// the whole cycle can be exercised without a clock or a terminal.
#[derive(Debug, Clone)]
pub struct Session {
    timer: CycleTimer,
    animation: ProgressAnimation,
    /// When the next one-second tick is due while running
    next_tick: Option<Instant>,
    /// Part of the current second already counted before a pause
    carry: Duration,
}

impl Session {
    pub fn new(settings: CycleSettings) -> Self {
        Self {
            timer: CycleTimer::new(settings),
            animation: ProgressAnimation::new(),
            next_tick: None,
            carry: Duration::ZERO,
        }
    }

    /// Alternate between running and paused
    pub fn toggle(&mut self, now: Instant) -> Toggle {
        if self.timer.is_running() {
            self.pause(now);
            Toggle::Paused
        } else {
            Toggle::Started {
                next_tick: self.start(now),
            }
        }
    }

    /// Start or resume; returns when the next tick is due.
    ///
    /// Calling this while running leaves the countdown and arc untouched.
    pub fn start(&mut self, now: Instant) -> Instant {
        if self.timer.is_running() {
            if let Some(next_tick) = self.next_tick {
                return next_tick;
            }
        }

        self.timer.start();
        if self.animation.has_begun() {
            self.animation.resume(now);
        } else {
            let duration = self.timer.settings().duration(self.timer.phase());
            self.animation.begin_for_phase(duration, now);
        }

        let next_tick = now + ONE_SECOND.saturating_sub(self.carry);
        self.next_tick = Some(next_tick);
        info!(
            "Started {} phase with {} remaining",
            self.timer.phase(),
            self.timer.formatted_remaining()
        );
        next_tick
    }

    /// Freeze countdown and arc, remembering how far into the second we were
    pub fn pause(&mut self, now: Instant) {
        if !self.timer.is_running() {
            return;
        }

        self.timer.stop();
        self.animation.pause(now);
        if let Some(next_tick) = self.next_tick.take() {
            self.carry = ONE_SECOND.saturating_sub(next_tick.saturating_duration_since(now));
        }
        debug!("Paused with {:?} of the current second carried", self.carry);
        info!(
            "Paused {} phase at {}",
            self.timer.phase(),
            self.timer.formatted_remaining()
        );
    }

    /// Apply one countdown tick that fired at `now`.
    ///
    /// Ticks earlier than the one currently due were already counted and are
    /// ignored.
    pub fn on_tick(&mut self, now: Instant) -> Vec<TimerEvent> {
        if !self.timer.is_running() {
            return Vec::new();
        }
        if self.next_tick.is_some_and(|due| now < due) {
            debug!("Ignoring stale tick");
            return Vec::new();
        }

        self.carry = Duration::ZERO;
        self.next_tick = Some(now + ONE_SECOND);

        let events = self.timer.tick();
        for event in &events {
            if let TimerEvent::PhaseStarted(phase) = event {
                let duration = self.timer.settings().duration(*phase);
                self.animation.begin_for_phase(duration, now);
                info!("Entering {} phase for {}s", phase, duration.as_secs());
            }
        }
        events
    }

    /// Count every tick that fell due at or before `now`, each at its own
    /// deadline, so a stalled caller never leaves the countdown behind the arc
    pub fn apply_due_ticks(&mut self, now: Instant) -> Vec<TimerEvent> {
        let mut events = Vec::new();
        while self.timer.is_running() {
            let due = match self.next_tick {
                Some(due) if due <= now => due,
                _ => break,
            };
            events.extend(self.on_tick(due));
        }
        events
    }

    /// Current display values
    pub fn snapshot(&self, now: Instant) -> Snapshot {
        Snapshot {
            phase: self.timer.phase(),
            running: self.timer.is_running(),
            remaining_seconds: self.timer.remaining_seconds(),
            formatted: self.timer.formatted_remaining(),
            elapsed_fraction: self.animation.elapsed_fraction(now),
        }
    }

    pub fn timer(&self) -> &CycleTimer {
        &self.timer
    }

    pub fn animation(&self) -> &ProgressAnimation {
        &self.animation
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_running()
    }

    pub fn next_tick(&self) -> Option<Instant> {
        self.next_tick
    }
}
