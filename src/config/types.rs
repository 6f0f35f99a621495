use std::path::PathBuf;

use chrono::{DateTime, TimeZone};
use clap::{Parser, ValueEnum};
use url::Url;

use super::constants::*;
use crate::error_handling::ConfigError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace). Used with the `--log-level` CLI option.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    Plain,
    Json,
}

/// Command-line options and configuration.
///
/// Built once at startup (by `clap` or by hand through `Default`) and then only
/// ever borrowed; nothing mutates it after [`Config::validate`] succeeds.
///
/// # Examples
///
/// ```bash
/// # Defaults: leads.csv, token.txt, 2 threads
/// lead_uploader
///
/// # Five workers against a staging endpoint, with request traces
/// lead_uploader --threads 5 --api-url https://staging.example/api/lead --debug
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "lead_uploader",
    about = "Sends loan leads from a CSV file to the Exbico lead API and saves the results."
)]
pub struct Config {
    /// CSV file with leads (first line is a header)
    #[arg(long, value_parser, default_value = DEFAULT_LEADS_FILE)]
    pub file: PathBuf,

    /// URL of the Exbico lead API
    #[arg(long, default_value = EXBICO_LEAD_API_URL)]
    pub api_url: String,

    /// Number of parallel workers (1-10)
    #[arg(long, default_value_t = DEFAULT_THREADS)]
    pub threads: usize,

    /// API token (32 characters); read from --token-file when omitted
    #[arg(long)]
    pub token: Option<String>,

    /// File holding the API token on its last line
    #[arg(long, value_parser, default_value = DEFAULT_TOKEN_FILE)]
    pub token_file: PathBuf,

    /// Result CSV path (default: result_<timestamp>.csv)
    #[arg(long, value_parser)]
    pub output: Option<PathBuf>,

    /// Enable debug mode: request/response traces and skipped-row errors
    #[arg(long)]
    pub debug: bool,

    /// Abort the whole run on the first network failure instead of
    /// recording it against the lead
    #[arg(long)]
    pub fail_fast: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_LEADS_FILE),
            api_url: EXBICO_LEAD_API_URL.to_string(),
            threads: DEFAULT_THREADS,
            token: None,
            token_file: PathBuf::from(DEFAULT_TOKEN_FILE),
            output: None,
            debug: false,
            fail_fast: false,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Checks the settings that must hold before any file is touched.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` for a worker count outside `1..=MAX_THREADS` or
    /// an API URL that is not an absolute http(s) URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_threads(self.threads)?;
        let parsed = Url::parse(&self.api_url).map_err(|e| ConfigError::InvalidApiUrl {
            url: self.api_url.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidApiUrl {
                url: self.api_url.clone(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }
        Ok(())
    }

    /// Log level after applying `--debug`, which never lowers verbosity.
    pub fn effective_log_level(&self) -> log::LevelFilter {
        let level = log::LevelFilter::from(self.log_level.clone());
        if self.debug {
            level.max(log::LevelFilter::Debug)
        } else {
            level
        }
    }

    /// Output path: `--output` if given, else `result_<timestamp>.csv`.
    pub fn output_path<Tz>(&self, now: DateTime<Tz>) -> PathBuf
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        match &self.output {
            Some(path) => path.clone(),
            None => PathBuf::from(format!(
                "result_{}.csv",
                now.format(OUTPUT_FILE_TIMESTAMP_FORMAT)
            )),
        }
    }
}

/// Validates a worker count against `1..=MAX_THREADS`.
pub fn check_threads(threads: usize) -> Result<(), ConfigError> {
    if threads == 0 {
        return Err(ConfigError::NoThreads);
    }
    if threads > MAX_THREADS {
        return Err(ConfigError::TooManyThreads {
            threads,
            max: MAX_THREADS,
        });
    }
    Ok(())
}
