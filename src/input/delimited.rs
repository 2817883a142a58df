use super::clean_headers;
use crate::errors::{AppError, AppResult};
use csv::{ReaderBuilder, StringRecordsIntoIter};
use std::fs::File;
use std::path::Path;

/// Data records of a CSV file, read one at a time.
pub(super) struct CsvRecords(StringRecordsIntoIter<File>);

impl Iterator for CsvRecords {
    type Item = AppResult<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.0.next()?;
        Some(
            record
                .map(|r| r.iter().map(str::to_string).collect())
                .map_err(AppError::from),
        )
    }
}

/// Header line plus the unread records behind it.
pub(super) fn open(path: &Path) -> AppResult<(Vec<String>, CsvRecords)> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_path(path)?;

    let headers = clean_headers(rdr.headers()?.iter());
    if headers.iter().all(|h| h.is_empty()) {
        return Err(AppError::EmptyInput(path.display().to_string()));
    }

    Ok((headers, CsvRecords(rdr.into_records())))
}
