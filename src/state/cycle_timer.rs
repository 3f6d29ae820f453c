//! Work/rest countdown state machine

use serde::{Deserialize, Serialize};

use super::{CycleSettings, Phase};

/// Event produced by a single tick of the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum TimerEvent {
    /// Countdown advanced, carries the seconds left in the phase
    Tick(u64),
    /// The named phase ran out
    PhaseEnded(Phase),
    /// The named phase began with its full duration
    PhaseStarted(Phase),
}

/// Countdown over alternating work and rest phases.
///
/// `remaining_seconds` always stays within `1..=duration_for(phase)` between
/// ticks; it only touches zero inside [`CycleTimer::tick`], which flips the
/// phase before returning.
#[derive(Debug, Clone)]
pub struct CycleTimer {
    settings: CycleSettings,
    phase: Phase,
    remaining_seconds: u64,
    running: bool,
}

impl CycleTimer {
    /// Create a stopped timer at the start of a work phase
    pub fn new(settings: CycleSettings) -> Self {
        Self {
            settings,
            phase: Phase::Work,
            remaining_seconds: settings.work_seconds(),
            running: false,
        }
    }

    /// Begin advancing. Does nothing if already running.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Halt advancing. Does nothing if already stopped.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Advance the countdown by one second.
    ///
    /// Returns no events when stopped.
    pub fn tick(&mut self) -> Vec<TimerEvent> {
        if !self.running {
            return Vec::new();
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds >= 1 {
            return vec![TimerEvent::Tick(self.remaining_seconds)];
        }

        let ended = self.phase;
        self.phase = ended.other();
        self.remaining_seconds = self.settings.duration_for(self.phase);
        vec![
            TimerEvent::PhaseEnded(ended),
            TimerEvent::PhaseStarted(self.phase),
        ]
    }

    /// Remaining time as `MM:SS`
    pub fn formatted_remaining(&self) -> String {
        format_mmss(self.remaining_seconds)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn settings(&self) -> &CycleSettings {
        &self.settings
    }
}

/// Format seconds as two-digit minutes and seconds, both modulo 60
pub fn format_mmss(seconds: u64) -> String {
    format!("{:02}:{:02}", (seconds / 60) % 60, seconds % 60)
}
