//! Run-level reporting helpers.
//!
//! This module provides progress logging and outcome statistics used by the
//! upload run.

pub mod logging;
pub mod statistics;

// Re-export public API
pub use logging::log_progress;
pub use statistics::{print_outcome_statistics, OutcomeStats};
