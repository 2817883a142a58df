// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::model::{get_headers, row_to_object, rows_to_table};
use crate::export::notify_export_success;
use crate::models::ReportRow;
use crate::ui::messages::info;
use serde_json::Value;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed: an array of objects keyed by column header.
pub(crate) fn export_json(rows: &[ReportRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let objects = rows
        .iter()
        .map(row_to_object)
        .collect::<serde_json::Result<Vec<Value>>>()?;
    let json_data = serde_json::to_string_pretty(&objects)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV with the report header line.
pub(crate) fn export_csv(rows: &[ReportRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(get_headers())?;
    for record in rows_to_table(rows) {
        wtr.write_record(&record)?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
