//! Background tasks module
//!
//! This module contains the tick-driven cycle driver and the terminal input
//! reader that feeds it.

pub mod cycle_driver;
pub mod input;

// Re-export main functions
pub use cycle_driver::{cycle_driver_task, Command};
pub use input::{parse_command, read_commands, spawn_stdin_reader};
