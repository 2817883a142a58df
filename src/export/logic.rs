// src/export/logic.rs

use crate::core::Report;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::{ensure_dir, ensure_writable};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use crate::utils::date::file_stamp;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// `VEN_REPORT_{MM_DD_YY}-{MM_DD_YY}`
pub fn report_dir_name(start: NaiveDate, end: NaiveDate) -> String {
    format!("VEN_REPORT_{}-{}", file_stamp(start), file_stamp(end))
}

/// `{MKT}_{MM_DD_YY}-{MM_DD_YY}.{ext}`
pub fn market_file_name(market: &str, start: NaiveDate, end: NaiveDate, format: ExportFormat) -> String {
    let safe: String = market
        .trim()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' { c } else { '_' })
        .collect();
    format!(
        "{}_{}-{}.{}",
        safe,
        file_stamp(start),
        file_stamp(end),
        format.extension()
    )
}

/// Writes one file per market into the report directory.
pub struct ReportWriter;

impl ReportWriter {
    /// Returns the written file paths, in market order.
    ///
    /// - `out_dir`: parent directory; the `VEN_REPORT_...` folder is created inside it
    /// - `force`: overwrite existing market files without asking
    pub fn write(
        report: &Report,
        out_dir: &Path,
        format: ExportFormat,
        start: NaiveDate,
        end: NaiveDate,
        force: bool,
    ) -> AppResult<Vec<PathBuf>> {
        if report.markets.is_empty() {
            warning("No eligible venues for the selected parameters. Nothing to export.");
            return Ok(Vec::new());
        }

        let dir = out_dir.join(report_dir_name(start, end));

        let targets: Vec<(&String, PathBuf)> = report
            .markets
            .keys()
            .map(|m| (m, dir.join(market_file_name(m, start, end, format))))
            .collect();

        check_distinct(&targets)?;

        let paths: Vec<PathBuf> = targets.iter().map(|(_, p)| p.clone()).collect();
        ensure_writable(&paths, force)?;
        ensure_dir(&dir)?;

        for (market, path) in &targets {
            let rows = &report.markets[*market];
            match format {
                ExportFormat::Xlsx => export_xlsx(rows, path, market)?,
                ExportFormat::Csv => export_csv(rows, path)?,
                ExportFormat::Json => export_json(rows, path)?,
            }
        }

        Ok(paths)
    }
}

/// Fails when two markets map to the same file name. Names are compared
/// case-insensitively so the check holds on case-insensitive filesystems.
fn check_distinct(targets: &[(&String, PathBuf)]) -> AppResult<()> {
    let mut seen: HashMap<String, &String> = HashMap::new();

    for (market, path) in targets {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        if let Some(first) = seen.insert(name, *market) {
            return Err(AppError::Export(format!(
                "markets '{}' and '{}' would both be written to {}",
                first,
                market,
                path.display()
            )));
        }
    }

    Ok(())
}
