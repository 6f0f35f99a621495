//! lead_uploader library: batch submission of loan leads
//!
//! Reads credit-application rows from a CSV file, turns each into a lead
//! payload, submits the leads to the Exbico lead API with a bounded pool of
//! workers and writes a result CSV that pairs every input row with the API's
//! verdict.
//!
//! # Example
//!
//! ```no_run
//! use lead_uploader::{run_upload, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     file: std::path::PathBuf::from("leads.csv"),
//!     threads: 4,
//!     ..Default::default()
//! };
//!
//! let report = run_upload(config).await?;
//! println!("Sent {} leads: {} accepted by the API",
//!          report.total_records, report.success);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

mod app;
pub mod config;
mod dispatch;
pub mod error_handling;
pub mod initialization;
mod input;
pub mod lead;
mod results;
mod run;
mod submit;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use run::{run_upload, UploadReport};
