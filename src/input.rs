//! Input CSV reading.

use std::path::Path;

use crate::config::INPUT_COLUMNS;
use crate::error_handling::InputError;

/// One input row, field text kept verbatim.
pub type InputRecord = Vec<String>;

/// Reads all lead rows from a CSV file, skipping the header line.
///
/// Rows may be wider than [`INPUT_COLUMNS`]; only the first `INPUT_COLUMNS`
/// fields are kept. Blank lines are ignored. Field bytes that are not valid
/// UTF-8 (for example a windows-1251 export) are replaced with U+FFFD and the
/// row is kept.
///
/// # Errors
///
/// Returns an `InputError` if the file cannot be opened, has no header line,
/// a row is not valid CSV, or a row is narrower than `INPUT_COLUMNS`.
pub fn read_records(path: &Path) -> Result<Vec<InputRecord>, InputError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|source| InputError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let header = reader.byte_headers().map_err(|source| InputError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    if header.is_empty() {
        return Err(InputError::MissingHeader {
            path: path.to_path_buf(),
        });
    }

    let mut records = Vec::new();
    for (index, result) in reader.byte_records().enumerate() {
        let record = result.map_err(|source| InputError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        // Header is line 1, so data rows start at line 2
        let line = record
            .position()
            .map_or(index as u64 + 2, |position| position.line());
        if record.len() < INPUT_COLUMNS {
            return Err(InputError::ShortRecord {
                path: path.to_path_buf(),
                line,
                found: record.len(),
                expected: INPUT_COLUMNS,
            });
        }
        if std::str::from_utf8(record.as_slice()).is_err() {
            log::warn!(
                "Line {} of {} is not valid UTF-8; invalid bytes replaced",
                line,
                path.display()
            );
        }
        records.push(
            record
                .iter()
                .take(INPUT_COLUMNS)
                .map(|field| String::from_utf8_lossy(field).into_owned())
                .collect(),
        );
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "Фамилия,Имя,Отчество,Дата рождения,Возраст,Телефон,E-mail,Сумма,Срок,Регион,Город,Серия,Номер,Дата выдачи";

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(contents.as_bytes())
            .expect("Failed to write CSV");
        file.flush().expect("Failed to flush file");
        file
    }

    #[test]
    fn test_header_is_skipped() {
        let file = write_csv(&format!(
            "{}\nИванов,Иван,Иванович,17.05.1990,34,7999,a@b.ru,1000,12,Москва,Москва,4510,123456,01.06.2010\n",
            HEADER
        ));
        let records = read_records(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0][0], "Иванов");
        assert_eq!(records[0][13], "01.06.2010");
    }

    #[test]
    fn test_header_only_file_has_no_records() {
        let file = write_csv(&format!("{}\n", HEADER));
        assert!(read_records(file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_quoted_fields_and_whitespace_preserved() {
        let file = write_csv(&format!(
            "{}\n\"Иванов, мл.\", Иван ,,,,,,,,,,,,\n",
            HEADER
        ));
        let records = read_records(file.path()).unwrap();
        assert_eq!(records[0][0], "Иванов, мл.");
        assert_eq!(records[0][1], " Иван ");
        assert_eq!(records[0].len(), INPUT_COLUMNS);
    }

    #[test]
    fn test_extra_columns_are_dropped() {
        let file = write_csv(&format!("{}\na,b,c,d,e,f,g,h,i,j,k,l,m,n,extra\n", HEADER));
        let records = read_records(file.path()).unwrap();
        assert_eq!(records[0].len(), INPUT_COLUMNS);
        assert_eq!(records[0][13], "n");
    }

    #[test]
    fn test_short_row_is_rejected() {
        let file = write_csv(&format!(
            "{}\na,b,c,d,e,f,g,h,i,j,k,l,m,n\na,b,c\n",
            HEADER
        ));
        match read_records(file.path()) {
            Err(InputError::ShortRecord { line, found, .. }) => {
                assert_eq!(line, 3);
                assert_eq!(found, 3);
            }
            other => panic!("expected ShortRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_non_utf8_row_is_kept() {
        // "Иванов" in windows-1251
        let mut contents = format!("{}\n", HEADER).into_bytes();
        contents.extend_from_slice(b"\xc8\xe2\xe0\xed\xee\xe2,Ivan,,,,,,,,,,,,\n");
        contents.extend_from_slice("Петров,Пётр,,,,,,,,,,,,\n".as_bytes());
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(&contents).expect("Failed to write CSV");
        file.flush().expect("Failed to flush file");

        let records = read_records(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0][0], "\u{FFFD}".repeat(6));
        assert_eq!(records[0][1], "Ivan");
        assert_eq!(records[1][1], "Пётр");
    }

    #[test]
    fn test_empty_file_is_rejected() {
        let file = write_csv("");
        assert!(matches!(
            read_records(file.path()),
            Err(InputError::MissingHeader { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = read_records(Path::new("/nonexistent/leads.csv"));
        assert!(matches!(result, Err(InputError::Open { .. })));
    }
}
