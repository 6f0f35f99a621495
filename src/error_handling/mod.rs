//! Error types.
//!
//! Configuration, input and initialization errors are fatal and stop the run
//! before any work starts. Transport errors are per-lead unless `--fail-fast`
//! is set. Output row errors never become errors: they are logged and skipped.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Invalid or unreadable startup configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Worker count above the allowed maximum.
    #[error("Количество потоков должно быть не больше {max} (указано: {threads}).")]
    TooManyThreads { threads: usize, max: usize },

    /// Worker count of zero.
    #[error("Количество потоков должно быть не меньше 1.")]
    NoThreads,

    /// API URL that does not parse or is not http(s).
    #[error("Некорректный адрес API {url}: {reason}")]
    InvalidApiUrl { url: String, reason: String },

    /// Token file missing or unreadable.
    #[error("Не удалось прочитать файл с токеном {path}: {source}")]
    TokenFileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Token of the wrong length.
    #[error("Токен должен содержать ровно 32 символа (получено: {length})")]
    InvalidTokenLength { length: usize },
}

/// Errors reading the input CSV file.
#[derive(Error, Debug)]
pub enum InputError {
    /// The file could not be opened.
    #[error("Не удалось открыть файл с лидами {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The file has no header line.
    #[error("Файл с лидами {path} пуст: нет строки заголовка")]
    MissingHeader { path: PathBuf },

    /// A row could not be decoded.
    #[error("Ошибка чтения CSV в файле {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A row has fewer columns than a lead needs.
    #[error("Строка {line} файла {path} содержит {found} колонок, ожидается не менее {expected}")]
    ShortRecord {
        path: PathBuf,
        line: u64,
        found: usize,
        expected: usize,
    },
}

/// Errors creating the result file.
#[derive(Error, Debug)]
pub enum OutputError {
    /// The file could not be created or opened for appending.
    #[error("Не удалось создать файл результата {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// A lead could not be exchanged with the API at all.
///
/// HTTP error statuses are not transport errors; they produce an `error`
/// outcome for the lead.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The lead could not be encoded as JSON.
    #[error("Failed to encode lead: {0}")]
    Encode(#[from] serde_json::Error),

    /// Sending the request or reading the response body failed.
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: ReqwestError,
    },
}

/// Errors from the worker pool.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// A worker hit a transport error while running with `--fail-fast`.
    #[error("Aborted after network failure: {0}")]
    Transport(#[from] TransportError),

    /// A worker task panicked or was cancelled.
    #[error("Worker task failed: {0}")]
    WorkerFailed(#[from] tokio::task::JoinError),

    /// The result store was still referenced after all workers finished.
    #[error("Result store is still shared after all workers finished")]
    StoreStillShared,
}
