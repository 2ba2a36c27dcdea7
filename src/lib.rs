//! First-Come-First-Served CPU scheduling with a per-time-unit execution trace.
//!
//! [`schedule`] turns validated processes into a timed schedule and
//! [`build_trace`] expands that schedule into frames for step-through
//! display. [`simulate`] runs both and gathers Gantt segments and
//! statistics alongside.

pub mod core;
pub mod models;
pub mod utils;

pub use models::*;
pub use utils::{constants, errors, logging, stats};
pub use utils::{ExitStatus, OutputFormat, RowError, SimError, SimResult, Statistics};

pub use crate::core::{build_trace, schedule, simulate, simulate_with, Simulation};
