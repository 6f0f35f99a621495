//! Logger initialization.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::{ColoredString, Colorize};
use log::{Level, LevelFilter};

/// Level tag for plain output; only problems stand out.
fn paint_level(level: Level) -> ColoredString {
    let tag = format!("{:<5}", level);
    match level {
        Level::Error => tag.red().bold(),
        Level::Warn => tag.yellow(),
        Level::Info => tag.normal(),
        Level::Debug | Level::Trace => tag.dimmed(),
    }
}

/// Installs the global logger.
///
/// Plain output is `HH:MM:SS LEVEL target: message`; JSON output is one object
/// per line with an RFC 3339 `time`. `RUST_LOG` is read first and `level`
/// overrides it. HTTP stack internals are capped at `info` so `--debug` shows
/// request traces from this crate only.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    for noisy in ["reqwest", "hyper", "hyper_util"] {
        builder.filter_module(noisy, level.min(LevelFilter::Info));
    }

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                let line = serde_json::json!({
                    "time": chrono::Local::now().to_rfc3339(),
                    "level": record.level().as_str(),
                    "target": record.target(),
                    "message": record.args().to_string(),
                });
                writeln!(buf, "{}", line)
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{} {} {}: {}",
                    chrono::Local::now().format("%H:%M:%S").to_string().dimmed(),
                    paint_level(record.level()),
                    record.target(),
                    record.args()
                )
            });
        }
    }

    builder.try_init().map_err(InitializationError::from)
}
