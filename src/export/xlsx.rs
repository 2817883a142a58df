// src/export/xlsx.rs

use crate::errors::AppResult;
use crate::export::model::get_headers;
use crate::export::notify_export_success;
use crate::models::{CellValue, ReportRow};
use crate::ui::messages::info;
use crate::utils::excel_date::{date_to_serial, datetime_to_serial};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const DATE_FORMAT: &str = "yyyy-mm-dd";
const DATETIME_FORMAT: &str = "yyyy-mm-dd hh:mm";
const PERCENT_FORMAT: &str = "0.000";

/// Export XLSX with styling, typed cells and auto column widths.
/// `sheet_name` is usually the market code.
pub(crate) fn export_xlsx(rows: &[ReportRow], path: &Path, sheet_name: &str) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let name = sanitize_sheet_name(sheet_name);
    if !name.is_empty() {
        worksheet.set_name(&name)?;
    }

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_with_format(0, col as u16, *header, &header_format)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    // ---------------------------
    // Column widths
    // ---------------------------
    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, report_row) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, cell) in report_row.cells.iter().enumerate() {
            write_xlsx_cell(worksheet, row, col as u16, cell, band_color)?;

            if let Some(w) = col_widths.get_mut(col) {
                *w = (*w).max(UnicodeWidthStr::width(cell.render().as_str()));
            }
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet.set_column_width(c as u16, *w as f64 + 2.0)?;
    }

    workbook.save(path)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn base_format(bg: Color) -> Format {
    Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

/// Write a single typed cell: numbers right-aligned, dates as Excel serials.
fn write_xlsx_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &CellValue,
    bg: Color,
) -> AppResult<()> {
    match cell {
        CellValue::Int(n) => {
            let fmt = base_format(bg).set_align(FormatAlign::Right);
            worksheet.write_with_format(row, col, *n as f64, &fmt)?;
        }
        CellValue::Percent(p) => {
            let fmt = base_format(bg)
                .set_align(FormatAlign::Right)
                .set_num_format(PERCENT_FORMAT);
            worksheet.write_with_format(row, col, *p, &fmt)?;
        }
        CellValue::Text(s) => {
            worksheet.write_with_format(row, col, s.as_str(), &base_format(bg))?;
        }
        CellValue::Date(d) => match date_to_serial(d) {
            Some(serial) => {
                let fmt = base_format(bg).set_num_format(DATE_FORMAT);
                worksheet.write_with_format(row, col, serial, &fmt)?;
            }
            None => {
                worksheet.write_with_format(row, col, cell.render(), &base_format(bg))?;
            }
        },
        CellValue::DateTime(dt) => match datetime_to_serial(dt) {
            Some(serial) => {
                let fmt = base_format(bg).set_num_format(DATETIME_FORMAT);
                worksheet.write_with_format(row, col, serial, &fmt)?;
            }
            None => {
                worksheet.write_with_format(row, col, cell.render(), &base_format(bg))?;
            }
        },
        CellValue::Empty => {
            worksheet.write_blank(row, col, &base_format(bg))?;
        }
    }
    Ok(())
}

/// Excel sheet names: at most 31 chars, none of `[]:*?/\`.
fn sanitize_sheet_name(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            '[' | ']' | ':' | '*' | '?' | '/' | '\\' => '_',
            c => c,
        })
        .take(31)
        .collect()
}
