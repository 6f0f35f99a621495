// Shared test helpers for lead files and configs.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::io::Write;
use std::path::{Path, PathBuf};

use lead_uploader::{Config, LogFormat, LogLevel};
use tempfile::NamedTempFile;

/// A syntactically valid 32-character token.
#[allow(dead_code)]
pub const TOKEN: &str = "0123456789abcdef0123456789abcdef";

/// Header line of an input file, as users typically export it.
pub const INPUT_HEADER_LINE: &str = "Фамилия,Имя,Отчество,Дата рождения,Возраст,Телефон,E-mail,Сумма кредита,Срок кредита,Регион,Город,Серия паспорта,Номер паспорта,Дата выдачи паспорта";

/// Builds a 14-column row whose last name is unique per `index`.
pub fn lead_row(index: usize) -> String {
    format!(
        "Фамилия{index},Имя{index},Отчество,17.05.1990,34,7999000{index:04},lead{index}@example.com,150000,12,Москва,Москва,4510,{index:06},2010-06-01"
    )
}

/// Writes an input file with `count` lead rows (sync I/O).
#[allow(dead_code)]
pub fn write_leads_file(count: usize) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "{}", INPUT_HEADER_LINE).expect("Failed to write header");
    for index in 0..count {
        writeln!(file, "{}", lead_row(index)).expect("Failed to write row");
    }
    file.flush().expect("Failed to flush file");
    file
}

/// Creates a config for testing that never touches the working directory.
#[allow(dead_code)]
pub fn create_test_config(input: &Path, api_url: String, output: PathBuf, threads: usize) -> Config {
    Config {
        file: input.to_path_buf(),
        api_url,
        threads,
        token: Some(TOKEN.to_string()),
        token_file: PathBuf::from("/nonexistent/token.txt"),
        output: Some(output),
        debug: false,
        fail_fast: false,
        log_level: LogLevel::Error, // Reduce noise in tests
        log_format: LogFormat::Plain,
    }
}

/// Reads a result file back, header included.
#[allow(dead_code)]
pub fn read_result_rows(path: &Path) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .expect("Failed to open result file");
    reader
        .records()
        .map(|record| {
            record
                .expect("Invalid result row")
                .iter()
                .map(str::to_string)
                .collect()
        })
        .collect()
}
