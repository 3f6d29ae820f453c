//! Error types for cycle timer construction

use thiserror::Error;

/// Errors raised while building a cycle timer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimerError {
    /// A phase duration was zero
    #[error("invalid configuration: {phase} duration must be a positive number of seconds")]
    InvalidConfiguration { phase: &'static str },
}
