//! Input row sources: CSV exports and spreadsheet workbooks.
//!
//! [`open_rows`] validates the header line against [`required_columns`] and
//! then yields data rows one at a time, so callers can drop rows as they
//! arrive instead of holding the whole file.

mod delimited;
mod workbook;

use crate::core::parser::{
    COL_CITY, COL_JOB, COL_LOC, COL_MAIL_PIECE, COL_MARKET, COL_MONTH, COL_QTY, COL_RESTAURANT,
    COL_RMI, COL_RSVPS, COL_SESSIONS, COL_STATE, COL_STREET, COL_USER, COL_WEEK, COL_YEAR,
    COL_ZIP, COL_ZONE, SESSION_DAYS,
};
use crate::errors::{AppError, AppResult};
use crate::models::{MealType, Row};
use crate::utils::path::extension_of;
use std::path::Path;

/// Every column the parser reads, in canonical order.
pub fn required_columns() -> Vec<String> {
    let mut cols: Vec<String> = [
        COL_JOB,
        COL_USER,
        COL_MARKET,
        COL_LOC,
        COL_WEEK,
        COL_ZONE,
        COL_RESTAURANT,
        COL_STREET,
        COL_CITY,
        COL_STATE,
        COL_ZIP,
        COL_MAIL_PIECE,
        COL_MONTH,
        COL_YEAR,
        COL_SESSIONS,
        COL_QTY,
        COL_RSVPS,
        COL_RMI,
    ]
    .iter()
    .map(|c| c.to_string())
    .collect();

    for meal in MealType::ALL {
        for day in SESSION_DAYS {
            cols.push(meal.day_column(day));
            cols.push(meal.date_column(day));
            cols.push(meal.time_column(day));
        }
    }

    cols
}

/// Fails with every missing column listed.
pub fn validate_headers<S: AsRef<str>>(headers: &[S]) -> AppResult<()> {
    let missing: Vec<String> = required_columns()
        .into_iter()
        .filter(|c| !headers.iter().any(|h| h.as_ref().trim() == c))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::MissingColumns(missing))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Workbook,
}

impl InputFormat {
    pub fn detect(path: &Path) -> AppResult<Self> {
        match extension_of(path).as_str() {
            "csv" => Ok(InputFormat::Csv),
            "xlsx" | "xlsm" | "xls" | "xlsb" | "ods" => Ok(InputFormat::Workbook),
            other => Err(AppError::UnsupportedInput(format!(
                "{} (extension '{}')",
                path.display(),
                other
            ))),
        }
    }
}

enum Source {
    Csv(delimited::CsvRecords),
    Workbook(workbook::SheetRows),
}

/// Validated header line and a lazy stream of data rows. Fully blank lines
/// are dropped. A read error is yielded once and the caller decides whether
/// to stop.
pub struct RowReader {
    headers: Vec<String>,
    source: Source,
}

impl RowReader {
    pub fn headers(&self) -> &[String] {
        &self.headers
    }
}

impl Iterator for RowReader {
    type Item = AppResult<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let values = match &mut self.source {
                Source::Csv(records) => records.next()?,
                Source::Workbook(rows) => rows.next()?,
            };
            let values = match values {
                Ok(v) => v,
                Err(e) => return Some(Err(e)),
            };

            let row = Row::from_pairs(&self.headers, &values);
            if !row.is_blank() {
                return Some(Ok(row));
            }
        }
    }
}

/// Open an input file and validate its header line. No data row is read yet.
pub fn open_rows(path: &Path) -> AppResult<RowReader> {
    if !path.exists() {
        return Err(AppError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Input file not found: {}", path.display()),
        )));
    }

    let (headers, source) = match InputFormat::detect(path)? {
        InputFormat::Csv => {
            let (headers, records) = delimited::open(path)?;
            (headers, Source::Csv(records))
        }
        InputFormat::Workbook => {
            let (headers, rows) = workbook::open(path)?;
            (headers, Source::Workbook(rows))
        }
    };
    validate_headers(&headers)?;

    Ok(RowReader { headers, source })
}

/// Shared by both readers: trimmed header names.
fn clean_headers<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter().map(|h| h.as_ref().trim().to_string()).collect()
}
