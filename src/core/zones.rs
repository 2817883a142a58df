//! Zone-wide figures shown next to each venue in the report. They are
//! computed on the full venue collection, before any filtering.

use crate::models::VenueRecord;
use crate::utils::date::{months_before, weeks_before};
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZoneActivity {
    /// End of the most recent job held anywhere in the zone.
    pub last_used: Option<NaiveDateTime>,
    /// Jobs in the zone ending in the 12 months up to the reference date.
    pub uses_last_12_months: usize,
}

/// Everything the assembler needs besides the venue itself.
#[derive(Debug, Clone, Default)]
pub struct ReportContext {
    ref_date: NaiveDate,
    zones: HashMap<String, ZoneActivity>,
}

impl ReportContext {
    pub fn build(venues: &[VenueRecord], ref_date: NaiveDate) -> Self {
        let year_ago = months_before(ref_date, 12);
        let mut zones: HashMap<String, ZoneActivity> = HashMap::new();

        for venue in venues {
            let entry = zones.entry(venue.zone().to_string()).or_default();
            for job in venue.jobs() {
                let end = job.end_date();
                if entry.last_used.is_none_or(|last| end > last) {
                    entry.last_used = Some(end);
                }
                if end.date() >= year_ago && end.date() <= ref_date {
                    entry.uses_last_12_months += 1;
                }
            }
        }

        Self { ref_date, zones }
    }

    pub fn ref_date(&self) -> NaiveDate {
        self.ref_date
    }

    pub fn zone(&self, zone: &str) -> ZoneActivity {
        self.zones.get(zone).copied().unwrap_or_default()
    }

    /// `[ref_date - 52 weeks, ref_date]`
    pub fn trailing_year(&self) -> (NaiveDate, NaiveDate) {
        (weeks_before(self.ref_date, 52), self.ref_date)
    }
}
