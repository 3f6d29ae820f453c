//! Display module
//!
//! This module turns published snapshots and timer events into terminal output.

pub mod records;
pub mod render;

pub use records::EventRecord;
pub use render::{render_line, render_task, RenderMode};
