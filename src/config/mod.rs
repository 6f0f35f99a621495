//! Configuration module.
//!
//! This module provides configuration types, constants, and credential loading
//! for the application.

mod constants;
mod credentials;
mod types;

// Re-export all public items
pub use constants::*;
pub use credentials::resolve_token;
pub use types::*;
