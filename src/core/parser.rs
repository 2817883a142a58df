//! Row → job parsing.
//!
//! A row either becomes a [`ParsedRow`] or a [`ParseFailure`] value; nothing
//! here panics or returns `AppError`, so the caller decides whether to skip.

use crate::models::job::JobDetails;
use crate::models::{JobRecord, MealType, Row, SessionRecord, VenueAddress};
use crate::utils::date::{parse_cell_date, parse_cell_time, parse_month_year};
use thiserror::Error;

pub const COL_JOB: &str = "Job#";
pub const COL_USER: &str = "User";
pub const COL_MARKET: &str = "MKT";
pub const COL_LOC: &str = "LOC#";
pub const COL_WEEK: &str = "Week";
pub const COL_ZONE: &str = "Zone";
pub const COL_RESTAURANT: &str = "Restaurant";
pub const COL_STREET: &str = "St Address";
pub const COL_CITY: &str = "City";
pub const COL_STATE: &str = "ST";
pub const COL_ZIP: &str = "ZIP";
pub const COL_MAIL_PIECE: &str = "Mail Piece";
pub const COL_MONTH: &str = "Month";
pub const COL_YEAR: &str = "Year";
pub const COL_SESSIONS: &str = "# Sessions";
pub const COL_QTY: &str = "Qty";
pub const COL_RSVPS: &str = "RSVPs";
pub const COL_RMI: &str = "RMI";

/// Day slots per meal type on an input row.
pub const SESSION_DAYS: [u8; 3] = [1, 2, 3];

/// Why a row could not become a job.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFailure {
    #[error("column '{column}' has malformed value '{value}'")]
    MalformedField { column: String, value: String },

    #[error("no valid sessions found in row")]
    NoValidSessions,

    #[error("cannot derive venue identity: {0}")]
    IdentityComputation(String),
}

/// Successful parse: the venue half and the job half of a row.
#[derive(Debug, Clone)]
pub struct ParsedRow {
    pub address: VenueAddress,
    pub job: JobRecord,
}

pub fn parse(row: &Row) -> Result<ParsedRow, ParseFailure> {
    // Numeric fields first: they are the usual source of bad rows.
    let id = int_field(row, COL_JOB)?;
    let week = int_field(row, COL_WEEK)?;
    let year = int_field(row, COL_YEAR)?;
    let num_sessions = int_field(row, COL_SESSIONS)?;
    let quantity = int_field(row, COL_QTY)?;
    let rsvps = int_field(row, COL_RSVPS)?;
    let rmi = int_field(row, COL_RMI)?;
    let zip = int_field(row, COL_ZIP)?;
    let loc_num = int_field(row, COL_LOC)?;

    let month = row.text(COL_MONTH);
    let month_date = parse_month_year(&month, year).ok_or_else(|| ParseFailure::MalformedField {
        column: COL_MONTH.to_string(),
        value: format!("{month}/{year}"),
    })?;

    let details = JobDetails {
        id,
        user: row.text(COL_USER),
        week,
        mail_piece: row.text(COL_MAIL_PIECE),
        month,
        year,
        month_date,
        num_sessions,
        quantity,
        rsvps,
        rmi,
    };

    let job = JobRecord::new(details, parse_sessions(row)).ok_or(ParseFailure::NoValidSessions)?;

    let address = VenueAddress {
        market: row.text(COL_MARKET),
        loc_num,
        zone: row.text(COL_ZONE),
        restaurant: row.text(COL_RESTAURANT),
        street: row.text(COL_STREET),
        city: row.text(COL_CITY),
        state: row.text(COL_STATE),
        zip,
    };

    Ok(ParsedRow { address, job })
}

/// Sessions from the 3 day slots × 2 meal types. Slots with a missing or
/// unreadable date/time are skipped; duplicates are kept once.
pub fn parse_sessions(row: &Row) -> Vec<SessionRecord> {
    let mut sessions: Vec<SessionRecord> = Vec::new();

    for day in SESSION_DAYS {
        for meal in MealType::ALL {
            let date = row.get(&meal.date_column(day)).and_then(parse_cell_date);
            let time = row.get(&meal.time_column(day)).and_then(parse_cell_time);

            let (Some(date), Some(time)) = (date, time) else {
                continue;
            };

            let session = SessionRecord::new(meal, row.text(&meal.day_column(day)), date.and_time(time));
            if !sessions.contains(&session) {
                sessions.push(session);
            }
        }
    }

    sessions
}

/// Integer cell. Accepts `12`, `12.0` and `1,200`. Whole floats outside the
/// `i64` range are malformed rather than clamped.
fn int_field(row: &Row, column: &str) -> Result<i64, ParseFailure> {
    let malformed = |value: &str| ParseFailure::MalformedField {
        column: column.to_string(),
        value: value.to_string(),
    };

    let raw = row.get(column).ok_or_else(|| malformed(""))?;
    let cleaned = raw.replace(',', "");

    if let Ok(n) = cleaned.parse::<i64>() {
        return Ok(n);
    }

    match cleaned.parse::<f64>() {
        Ok(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
            Ok(f as i64)
        }
        _ => Err(malformed(raw)),
    }
}
