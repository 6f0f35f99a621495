//! Upload orchestration.
//!
//! Validate, read, dispatch, then aggregate. All fatal checks run before the
//! result file is created or any request is sent.

mod finalize;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Local;
use log::info;

use crate::config::{resolve_token, Config};
use crate::dispatch::{build_work_units, distribute, run_workers, Progress, TransportPolicy};
use crate::initialization::init_client;
use crate::input::read_records;
use crate::results::ResultWriter;
use crate::submit::LeadClient;

use finalize::finalize_upload;

/// Results of an upload run.
#[derive(Debug, Clone)]
pub struct UploadReport {
    /// Number of leads read from the input file
    pub total_records: usize,
    /// Leads the API answered with `success`
    pub success: usize,
    /// Leads the API answered with `fail`
    pub fail: usize,
    /// Leads that got a server or transport error
    pub error: usize,
    /// Leads with any other status code
    pub unrecognized: usize,
    /// Data rows written to the result file
    pub rows_written: usize,
    /// Path of the result file
    pub output_path: PathBuf,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

/// Runs an upload with the provided configuration.
///
/// Reads leads from `config.file`, sends them with `config.threads` workers
/// and writes one result row per lead to the output file.
///
/// # Errors
///
/// Returns an error, before any file is written or request sent, if:
/// - the worker count or API URL is invalid
/// - the token is missing or not 32 characters
/// - the input file cannot be read
///
/// Also returns an error if the result file cannot be created, a worker
/// panics, or (with `fail_fast`) a lead cannot be sent.
///
/// # Example
///
/// ```no_run
/// use lead_uploader::{run_upload, Config};
/// use std::path::PathBuf;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config {
///     file: PathBuf::from("leads.csv"),
///     token: Some("0123456789abcdef0123456789abcdef".to_string()),
///     threads: 4,
///     ..Default::default()
/// };
/// let report = run_upload(config).await?;
/// println!("{} leads accepted", report.success);
/// # Ok(())
/// # }
/// ```
pub async fn run_upload(config: Config) -> Result<UploadReport> {
    let start_time = Instant::now();

    config.validate()?;
    let token = resolve_token(&config)?;
    let records = read_records(&config.file)?;
    info!("Total leads in file: {}", records.len());

    let http = init_client().context("Failed to initialize HTTP client")?;
    let client = Arc::new(LeadClient::new(http, &config, token));

    let units = build_work_units(records);
    let total_records = units.len();
    let chunks = distribute(units, config.threads)?;

    let output_path = config.output_path(Local::now());
    let mut writer = ResultWriter::create(&output_path)?;
    writer.write_header();

    info!("Отправка данных...");
    let progress = Progress::new(total_records, "Отправка данных");
    let policy = TransportPolicy::from_fail_fast(config.fail_fast);
    let store = run_workers(chunks, client, &progress, policy)
        .await
        .context("Lead submission stopped")?;
    progress.finish();

    Ok(finalize_upload(
        store,
        writer,
        start_time,
        progress.completed(),
        total_records,
    ))
}
