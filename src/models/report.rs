use crate::utils::formatting::format_percent;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// A typed output cell. Writers decide how each kind is rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Int(i64),
    Percent(f64),
    Text(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Empty,
}

impl CellValue {
    pub fn text(s: impl Into<String>) -> Self {
        CellValue::Text(s.into())
    }

    /// Plain-text rendering used by CSV and console output.
    pub fn render(&self) -> String {
        match self {
            CellValue::Int(n) => n.to_string(),
            CellValue::Percent(p) => format_percent(*p),
            CellValue::Text(s) => s.clone(),
            CellValue::Date(d) => d.format("%Y-%m-%d").to_string(),
            CellValue::DateTime(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
            CellValue::Empty => String::new(),
        }
    }
}

/// One rendered venue, cells in report column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub cells: Vec<CellValue>,
}

impl ReportRow {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn rendered(&self) -> Vec<String> {
        self.cells.iter().map(CellValue::render).collect()
    }
}
