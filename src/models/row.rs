use std::collections::HashMap;

/// One raw input row, keyed by header name.
///
/// Cells are kept as text exactly as the input layer produced them; blank
/// cells behave like missing ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    cells: HashMap<String, String>,
}

impl Row {
    /// Build a row by zipping a header line with one data line.
    /// Extra cells without a header are dropped.
    pub fn from_pairs<H, V>(headers: &[H], values: &[V]) -> Self
    where
        H: AsRef<str>,
        V: AsRef<str>,
    {
        let cells = headers
            .iter()
            .zip(values.iter())
            .map(|(h, v)| (h.as_ref().to_string(), v.as_ref().to_string()))
            .collect();
        Self { cells }
    }

    /// Trimmed cell value, `None` when the column is absent or blank.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .get(column)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// Trimmed cell value, empty string when absent.
    pub fn text(&self, column: &str) -> String {
        self.get(column).unwrap_or_default().to_string()
    }

    pub fn is_blank(&self) -> bool {
        self.cells.values().all(|v| v.trim().is_empty())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.cells.values().map(|v| v.as_str())
    }
}
