//! Report column layout.
//!
//! [`REPORT_COLUMNS`] is the only place where the output columns are listed:
//! header text and cell extraction both come from the same variant, so the
//! header line and every rendered row always line up.

use crate::core::zones::ReportContext;
use crate::models::{CellValue, ReportRow, VenueRecord};
use crate::utils::formatting::format_zip;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportColumn {
    JobId,
    User,
    Market,
    LocNum,
    Week,
    Zone,
    ZoneLastUsed,
    Restaurant,
    Street,
    City,
    State,
    Zip,
    MailPiece,
    Quantity,
    VenueLastSession,
    NumSessions,
    SessionType,
    Rsvps,
    Rmi,
    Ror,
    QualifyingJobDate,
    QualifyingJobRsvps,
    QualifyingJobRor,
    ZoneUses12Months,
    AverageRorTrailingYear,
}

pub const REPORT_COLUMNS: [ReportColumn; 25] = [
    ReportColumn::JobId,
    ReportColumn::User,
    ReportColumn::Market,
    ReportColumn::LocNum,
    ReportColumn::Week,
    ReportColumn::Zone,
    ReportColumn::ZoneLastUsed,
    ReportColumn::Restaurant,
    ReportColumn::Street,
    ReportColumn::City,
    ReportColumn::State,
    ReportColumn::Zip,
    ReportColumn::MailPiece,
    ReportColumn::Quantity,
    ReportColumn::VenueLastSession,
    ReportColumn::NumSessions,
    ReportColumn::SessionType,
    ReportColumn::Rsvps,
    ReportColumn::Rmi,
    ReportColumn::Ror,
    ReportColumn::QualifyingJobDate,
    ReportColumn::QualifyingJobRsvps,
    ReportColumn::QualifyingJobRor,
    ReportColumn::ZoneUses12Months,
    ReportColumn::AverageRorTrailingYear,
];

impl ReportColumn {
    pub fn header(&self) -> &'static str {
        match self {
            ReportColumn::JobId => "Job#",
            ReportColumn::User => "User",
            ReportColumn::Market => "MKT",
            ReportColumn::LocNum => "LOC#",
            ReportColumn::Week => "Week",
            ReportColumn::Zone => "Zone",
            ReportColumn::ZoneLastUsed => "Zone/Last-used-date",
            ReportColumn::Restaurant => "Restaurant",
            ReportColumn::Street => "St Address",
            ReportColumn::City => "City",
            ReportColumn::State => "ST",
            ReportColumn::Zip => "ZIP",
            ReportColumn::MailPiece => "Mail Piece",
            ReportColumn::Quantity => "Qty",
            ReportColumn::VenueLastSession => "Venue/Last-session-date",
            ReportColumn::NumSessions => "# Sessions",
            ReportColumn::SessionType => "Session Type",
            ReportColumn::Rsvps => "RSVPs",
            ReportColumn::Rmi => "RMI",
            ReportColumn::Ror => "ROR%",
            ReportColumn::QualifyingJobDate => "Qualifying-Job-Date",
            ReportColumn::QualifyingJobRsvps => "Qualifying-Job-RSVPs",
            ReportColumn::QualifyingJobRor => "Qualifying-Job-ROR",
            ReportColumn::ZoneUses12Months => "Zone-uses-within-12-months",
            ReportColumn::AverageRorTrailingYear => "Average ROR% (trailing 52 weeks)",
        }
    }

    /// Value of this column for `venue`. Job columns describe the latest job,
    /// which is also the job admission was decided on.
    pub fn extract(&self, venue: &VenueRecord, ctx: &ReportContext) -> CellValue {
        let job = venue.latest_job();
        match self {
            ReportColumn::JobId => CellValue::Int(job.id()),
            ReportColumn::User => CellValue::text(job.user()),
            ReportColumn::Market => CellValue::text(venue.market()),
            ReportColumn::LocNum => CellValue::Int(venue.loc_num()),
            ReportColumn::Week => CellValue::Int(job.week()),
            ReportColumn::Zone => CellValue::text(venue.zone()),
            ReportColumn::ZoneLastUsed => match ctx.zone(venue.zone()).last_used {
                Some(dt) => CellValue::Date(dt.date()),
                None => CellValue::Empty,
            },
            ReportColumn::Restaurant => CellValue::text(venue.restaurant()),
            ReportColumn::Street => CellValue::text(venue.street()),
            ReportColumn::City => CellValue::text(venue.city()),
            ReportColumn::State => CellValue::text(venue.state()),
            ReportColumn::Zip => CellValue::Text(format_zip(venue.zip())),
            ReportColumn::MailPiece => CellValue::text(job.mail_piece()),
            ReportColumn::Quantity => CellValue::Int(job.quantity()),
            ReportColumn::VenueLastSession => CellValue::DateTime(venue.last_session()),
            ReportColumn::NumSessions => CellValue::Int(job.num_sessions()),
            ReportColumn::SessionType => CellValue::Text(job.session_type()),
            ReportColumn::Rsvps => CellValue::Int(job.rsvps()),
            ReportColumn::Rmi => CellValue::Int(job.rmi()),
            ReportColumn::Ror => CellValue::Percent(job.ror()),
            ReportColumn::QualifyingJobDate => CellValue::Date(job.end_date().date()),
            ReportColumn::QualifyingJobRsvps => CellValue::Int(job.rsvps()),
            ReportColumn::QualifyingJobRor => CellValue::Percent(job.ror()),
            ReportColumn::ZoneUses12Months => {
                CellValue::Int(ctx.zone(venue.zone()).uses_last_12_months as i64)
            }
            ReportColumn::AverageRorTrailingYear => {
                let (from, to) = ctx.trailing_year();
                CellValue::Percent(venue.average_ror_between(from, to))
            }
        }
    }
}

/// Header line, in column order.
pub fn headers() -> Vec<&'static str> {
    REPORT_COLUMNS.iter().map(ReportColumn::header).collect()
}

/// Render one venue across every report column.
pub fn render_row(venue: &VenueRecord, ctx: &ReportContext) -> ReportRow {
    ReportRow {
        cells: REPORT_COLUMNS.iter().map(|c| c.extract(venue, ctx)).collect(),
    }
}
