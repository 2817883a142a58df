//! Date utilities: user-entered dates, spreadsheet cell dates/times, month
//! labels and calendar arithmetic.

use crate::errors::{AppError, AppResult};
use chrono::{Duration, Months, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use std::sync::LazyLock;

const USER_DATE_FORMATS: [&str; 3] = ["%m/%d/%y", "%m/%d/%Y", "%Y-%m-%d"];

const CELL_DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %I:%M %p",
    "%m/%d/%y %I:%M %p",
    "%m/%d/%Y %H:%M",
];

const CELL_DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%m/%d/%y"];

const CELL_TIME_FORMATS: [&str; 5] = ["%H:%M:%S", "%H:%M", "%I:%M %p", "%I:%M:%S %p", "%I:%M%p"];

static ISO_DURATION: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+(?:\.\d+)?)S)?$").ok()
});

const MONTH_NAMES: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a date typed by the user: `MM/DD/YY`, `MM/DD/YYYY` or `YYYY-MM-DD`.
pub fn parse_user_date(s: &str) -> AppResult<NaiveDate> {
    let s = s.trim();
    USER_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// Interpret a cell as a calendar date. Date-time cells yield their date part.
pub fn parse_cell_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Some(dt) = parse_cell_datetime(s) {
        return Some(dt.date());
    }

    CELL_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// Interpret a cell as a time of day. Date-time cells yield their time part.
pub fn parse_cell_time(s: &str) -> Option<NaiveTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Some(dt) = parse_cell_datetime(s) {
        return Some(dt.time());
    }

    let upper = s.to_uppercase();
    CELL_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(&upper, fmt).ok())
        .or_else(|| parse_iso_duration(&upper))
}

/// Time of day from an ISO-8601 duration such as `PT12H30M00S`, the form
/// OpenDocument spreadsheets use for time cells. Durations of a day or more
/// are not a time of day.
pub fn parse_iso_duration(s: &str) -> Option<NaiveTime> {
    let caps = ISO_DURATION.as_ref()?.captures(s.trim())?;
    if caps.get(1).is_none() && caps.get(2).is_none() && caps.get(3).is_none() {
        return None;
    }

    let part = |i: usize| -> Option<f64> {
        caps.get(i).map_or(Some(0.0), |m| m.as_str().parse::<f64>().ok())
    };
    let total = part(1)? * 3600.0 + part(2)? * 60.0 + part(3)?;
    if total >= 86_400.0 {
        return None;
    }

    let secs = total.round() as u32;
    NaiveTime::from_num_seconds_from_midnight_opt(secs, 0)
}

fn parse_cell_datetime(s: &str) -> Option<NaiveDateTime> {
    let upper = s.to_uppercase();
    CELL_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(&upper, fmt).ok())
}

/// First day of the month named by `month` (`1`, `01`, `Jan`, `January`) in
/// `year`. Two-digit years map to 20xx below 70 and 19xx otherwise.
pub fn parse_month_year(month: &str, year: i64) -> Option<NaiveDate> {
    let month = month.trim();
    let month_num = match month.parse::<u32>() {
        Ok(m) => m,
        Err(_) => {
            let prefix: String = month.chars().take(3).collect::<String>().to_lowercase();
            MONTH_NAMES.iter().position(|m| *m == prefix)? as u32 + 1
        }
    };

    let year = match year {
        y if (0..70).contains(&y) => y + 2000,
        y if (70..100).contains(&y) => y + 1900,
        y => y,
    };

    NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month_num, 1)
}

/// Same calendar day `years` years earlier; Feb 29 clamps to Feb 28.
pub fn years_before(date: NaiveDate, years: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(years * 12))
        .unwrap_or(NaiveDate::MIN)
}

pub fn months_before(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(months))
        .unwrap_or(NaiveDate::MIN)
}

pub fn weeks_before(date: NaiveDate, weeks: u32) -> NaiveDate {
    date.checked_sub_signed(Duration::weeks(i64::from(weeks)))
        .unwrap_or(NaiveDate::MIN)
}

pub fn weeks_after(date: NaiveDate, weeks: u32) -> NaiveDate {
    date.checked_add_signed(Duration::weeks(i64::from(weeks)))
        .unwrap_or(NaiveDate::MAX)
}

/// `MM_DD_YY`, used in report directory and file names.
pub fn file_stamp(date: NaiveDate) -> String {
    date.format("%m_%d_%y").to_string()
}

pub fn display_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
