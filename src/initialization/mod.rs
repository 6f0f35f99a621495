//! Initialization of process-wide resources.
//!
//! This module provides functions to set up the logger and the HTTP client.

mod client;
mod logger;

pub use client::init_client;
pub use logger::init_logger_with;
