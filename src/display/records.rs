//! Output record structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::{Snapshot, TimerEvent};

/// One line of JSON output: a timer event plus the display state it produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    pub timestamp: DateTime<Utc>,
    pub event: TimerEvent,
    pub snapshot: Snapshot,
}

impl EventRecord {
    /// Create a record stamped with the current time
    pub fn new(event: TimerEvent, snapshot: Snapshot) -> Self {
        Self {
            timestamp: Utc::now(),
            event,
            snapshot,
        }
    }
}
