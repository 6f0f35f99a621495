//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `lead_uploader` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use lead_uploader::initialization::init_logger_with;
use lead_uploader::{run_upload, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    init_logger_with(config.effective_log_level(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_upload(config).await {
        Ok(report) => {
            println!(
                "✅ Отправлено лидов: {} (успех: {}, ошибка данных: {}, ошибка сервера: {}, прочее: {}) за {:.1}s",
                report.total_records,
                report.success,
                report.fail,
                report.error,
                report.unrecognized,
                report.elapsed_seconds
            );
            println!("Результат сохранён в {}", report.output_path.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("lead_uploader error: {:#}", e);
            process::exit(1);
        }
    }
}
