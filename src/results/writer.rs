//! Result CSV writer.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use csv::Writer;

use super::aggregate::OutputRow;
use crate::config::{INPUT_HEADER, RESULT_HEADER};
use crate::dispatch::Progress;
use crate::error_handling::OutputError;

/// Appends rows to the result file.
///
/// The file is opened once and closed when the writer is dropped. Row write
/// failures are logged at debug level and skipped; they never stop the run.
pub struct ResultWriter {
    path: PathBuf,
    writer: Writer<File>,
}

impl ResultWriter {
    /// Opens `path` for appending, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns `OutputError::Open` if the file cannot be opened.
    pub fn create(path: &Path) -> Result<Self, OutputError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| OutputError::Open {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self {
            path: path.to_path_buf(),
            writer: Writer::from_writer(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the 19 column labels.
    pub fn write_header(&mut self) -> bool {
        let header = INPUT_HEADER.iter().chain(RESULT_HEADER.iter());
        self.write_record(header)
    }

    /// Writes rows, advancing `progress` once per row. Returns how many rows
    /// were written.
    pub fn write_rows(&mut self, rows: Vec<OutputRow>, progress: &Progress) -> usize {
        let mut written = 0;
        for row in rows {
            if self.write_record(&row) {
                written += 1;
            }
            progress.advance();
        }
        written
    }

    /// Flushes buffered rows to disk.
    pub fn finish(mut self) {
        if let Err(e) = self.writer.flush() {
            log::warn!("Failed to flush {}: {}", self.path.display(), e);
        }
    }

    fn write_record<I, T>(&mut self, record: I) -> bool
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        match self.writer.write_record(record) {
            Ok(()) => true,
            Err(e) => {
                log::debug!("Skipping row in {}: {}", self.path.display(), e);
                false
            }
        }
    }
}
