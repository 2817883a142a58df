use super::clean_headers;
use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_iso_duration;
use crate::utils::excel_date::{serial_to_datetime, serial_to_time};
use calamine::{Data, Range, Reader, open_workbook_auto};
use std::path::Path;

/// First worksheet of the workbook; the first row is the header line.
fn first_sheet(path: &Path) -> AppResult<Range<Data>> {
    let mut workbook = open_workbook_auto(path)?;

    let name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| AppError::EmptyInput(path.display().to_string()))?;

    Ok(workbook.worksheet_range(&name)?)
}

/// Data rows of the first worksheet. The sheet itself is held in memory by
/// calamine; rows are turned into text one at a time.
pub(super) struct SheetRows {
    range: Range<Data>,
    next: usize,
}

impl Iterator for SheetRows {
    type Item = AppResult<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.range.height() {
            return None;
        }
        let r = self.next;
        self.next += 1;

        let values = (0..self.range.width())
            .map(|c| self.range.get((r, c)).map(cell_to_text).unwrap_or_default())
            .collect();
        Some(Ok(values))
    }
}

/// Header line plus the unread rows behind it.
pub(super) fn open(path: &Path) -> AppResult<(Vec<String>, SheetRows)> {
    let range = first_sheet(path)?;

    let headers = match range.rows().next() {
        Some(first) => clean_headers(first.iter().map(cell_to_text)),
        None => return Err(AppError::EmptyInput(path.display().to_string())),
    };

    Ok((headers, SheetRows { range, next: 1 }))
}

/// Normalise a cell to the text forms the parser understands.
fn cell_to_text(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(n) => n.to_string(),
        Data::Float(n) => {
            // integers without decimals
            if n.fract() == 0.0 && n.abs() < 1e15 {
                format!("{}", *n as i64)
            } else {
                format!("{}", n)
            }
        }
        Data::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        Data::DateTime(dt) => serial_to_text(dt.as_f64()),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => duration_to_text(s),
    }
}

/// OpenDocument time cells (`PT12H00M00S`) become `HH:MM:SS`.
fn duration_to_text(iso: &str) -> String {
    parse_iso_duration(iso)
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| iso.to_string())
}

/// Time-only serials (< 1 day) become `HH:MM:SS`, whole days `YYYY-MM-DD`,
/// anything else `YYYY-MM-DD HH:MM:SS`.
fn serial_to_text(serial: f64) -> String {
    if serial < 1.0 {
        return serial_to_time(serial)
            .map(|t| t.format("%H:%M:%S").to_string())
            .unwrap_or_default();
    }

    match serial_to_datetime(serial) {
        Some(dt) if serial.fract().abs() < 1e-9 => dt.format("%Y-%m-%d").to_string(),
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => String::new(),
    }
}
