//! Work/rest phase and the per-phase duration table

use std::{fmt, time::Duration};

use serde::{Deserialize, Serialize};

use crate::error::TimerError;

/// One of the two intervals the cycle alternates between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Work,
    Rest,
}

impl Phase {
    /// The phase that follows this one
    pub fn other(self) -> Self {
        match self {
            Phase::Work => Phase::Rest,
            Phase::Rest => Phase::Work,
        }
    }

    /// Upper-case label used by the display
    pub fn label(self) -> &'static str {
        match self {
            Phase::Work => "WORK",
            Phase::Rest => "REST",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Work => f.write_str("work"),
            Phase::Rest => f.write_str("rest"),
        }
    }
}

/// Validated phase durations, in whole seconds.
///
/// The countdown and the progress animation both read their length from
/// here, so the two can never disagree about how long a phase lasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleSettings {
    work_seconds: u64,
    rest_seconds: u64,
}

impl CycleSettings {
    /// Build settings, rejecting zero-length phases
    pub fn new(work_seconds: u64, rest_seconds: u64) -> Result<Self, TimerError> {
        if work_seconds == 0 {
            return Err(TimerError::InvalidConfiguration { phase: "work" });
        }
        if rest_seconds == 0 {
            return Err(TimerError::InvalidConfiguration { phase: "rest" });
        }
        Ok(Self {
            work_seconds,
            rest_seconds,
        })
    }

    pub fn work_seconds(&self) -> u64 {
        self.work_seconds
    }

    pub fn rest_seconds(&self) -> u64 {
        self.rest_seconds
    }

    /// Configured length of `phase` in seconds
    pub fn duration_for(&self, phase: Phase) -> u64 {
        match phase {
            Phase::Work => self.work_seconds,
            Phase::Rest => self.rest_seconds,
        }
    }

    /// Configured length of `phase` as a [`Duration`]
    pub fn duration(&self, phase: Phase) -> Duration {
        Duration::from_secs(self.duration_for(phase))
    }
}
