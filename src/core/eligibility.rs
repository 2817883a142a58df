//! Zone saturation and venue admission thresholds.

use crate::models::VenueRecord;
use crate::utils::date::weeks_before;
use chrono::NaiveDate;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq)]
pub struct EligibilityCriteria {
    pub saturation_weeks: u32,
    pub ref_date: NaiveDate,
    pub min_rsvps: i64,
    pub min_ror: f64,
}

/// Zones with a job ending in `[ref_date - weeks, ref_date]` (calendar days,
/// both bounds inclusive).
pub fn saturated_zones(venues: &[VenueRecord], weeks: u32, ref_date: NaiveDate) -> HashSet<String> {
    let from = weeks_before(ref_date, weeks);

    venues
        .iter()
        .filter(|v| {
            v.jobs().iter().any(|j| {
                let end = j.end_date().date();
                end >= from && end <= ref_date
            })
        })
        .map(|v| v.zone().to_string())
        .collect()
}

/// Venues that may be booked again, in input order.
///
/// A venue is dropped when its zone is saturated, whatever its own numbers,
/// or when its latest job misses the RSVP or ROR threshold.
pub fn filter<'a>(venues: &'a [VenueRecord], criteria: &EligibilityCriteria) -> Vec<&'a VenueRecord> {
    let saturated = saturated_zones(venues, criteria.saturation_weeks, criteria.ref_date);

    venues
        .iter()
        .filter(|v| !saturated.contains(v.zone()))
        .filter(|v| {
            let latest = v.latest_job();
            latest.rsvps() >= criteria.min_rsvps && latest.ror() >= criteria.min_ror
        })
        .collect()
}
