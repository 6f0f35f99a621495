//! Upload finalization.
//!
//! Turns the filled result store into result rows and the final report.

use std::time::Instant;

use log::info;

use crate::app::{log_progress, print_outcome_statistics, OutcomeStats};
use crate::dispatch::{Progress, ResultStore};
use crate::results::{aggregate, ResultWriter};
use crate::submit::SendStatus;

use super::UploadReport;

/// Writes every outcome to the result file and builds the report.
///
/// Runs only after all workers have joined.
pub fn finalize_upload(
    store: ResultStore,
    mut writer: ResultWriter,
    start_time: Instant,
    sent: usize,
    total_records: usize,
) -> UploadReport {
    log_progress(start_time, sent);

    if store.is_empty() {
        info!("No leads were sent; the result file holds only the header");
    } else if store.len() != total_records {
        log::warn!(
            "Expected {} outcomes but collected {}",
            total_records,
            store.len()
        );
    }

    info!("Сохранение результата...");
    let stats = OutcomeStats::new();
    let rows = aggregate(store, &stats);
    let progress = Progress::new(rows.len(), "Сохранение результата");
    let rows_written = writer.write_rows(rows, &progress);
    progress.finish();

    let output_path = writer.path().to_path_buf();
    writer.finish();

    print_outcome_statistics(&stats);

    UploadReport {
        total_records,
        success: stats.get_count(SendStatus::Success),
        fail: stats.get_count(SendStatus::Fail),
        error: stats.get_count(SendStatus::Error),
        unrecognized: stats.get_count(SendStatus::Unrecognized),
        rows_written,
        output_path,
        elapsed_seconds: start_time.elapsed().as_secs_f64(),
    }
}
