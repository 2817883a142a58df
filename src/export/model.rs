// src/export/model.rs

use crate::core::columns::headers;
use crate::models::ReportRow;
use serde_json::{Map, Value};

/// Header for CSV / JSON / XLSX, shared with the row layout.
pub(crate) fn get_headers() -> Vec<&'static str> {
    headers()
}

/// Rows as plain strings (CSV and console output).
pub(crate) fn rows_to_table(rows: &[ReportRow]) -> Vec<Vec<String>> {
    rows.iter().map(ReportRow::rendered).collect()
}

/// One JSON object per row, keyed by header.
pub(crate) fn row_to_object(row: &ReportRow) -> serde_json::Result<Value> {
    let mut obj = Map::new();
    for (header, cell) in get_headers().iter().zip(&row.cells) {
        obj.insert((*header).to_string(), serde_json::to_value(cell)?);
    }
    Ok(Value::Object(obj))
}
