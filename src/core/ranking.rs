//! Output ordering of eligible venues.

use crate::models::VenueRecord;
use crate::utils::date::{weeks_after, weeks_before, years_before};
use chrono::NaiveDate;

/// The new scheduling window plus the margin applied around last year's
/// equivalent period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankWindow {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub prox_weeks: u32,
}

impl RankWindow {
    /// `[start - 1y - prox, end - 1y + prox]`
    pub fn last_year_bounds(&self) -> (NaiveDate, NaiveDate) {
        let from = weeks_before(years_before(self.start_date, 1), self.prox_weeks);
        let to = weeks_after(years_before(self.end_date, 1), self.prox_weeks);
        (from, to)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RankedVenue<'a> {
    pub venue: &'a VenueRecord,
    pub proximal: bool,
}

/// Had a session around the same period last year.
pub fn is_proximal(venue: &VenueRecord, window: &RankWindow) -> bool {
    let (from, to) = window.last_year_bounds();
    venue.has_session_between(from, to)
}

/// Proximal venues first (best latest-job ROR first), then the others,
/// longest-dormant month first with ROR deciding ties.
pub fn rank<'a>(venues: &[&'a VenueRecord], window: &RankWindow) -> Vec<RankedVenue<'a>> {
    let (mut proximal, mut others): (Vec<RankedVenue<'a>>, Vec<RankedVenue<'a>>) = venues
        .iter()
        .map(|&v| RankedVenue {
            venue: v,
            proximal: is_proximal(v, window),
        })
        .partition(|r| r.proximal);

    sort_by_ror_desc(&mut proximal);

    // ROR first, then the stable month sort keeps ROR order inside a month.
    sort_by_ror_desc(&mut others);
    others.sort_by_key(|r| r.venue.latest_job().month_date());

    proximal.extend(others);
    proximal
}

fn sort_by_ror_desc(list: &mut [RankedVenue<'_>]) {
    list.sort_by(|a, b| {
        b.venue
            .latest_job()
            .ror()
            .total_cmp(&a.venue.latest_job().ror())
    });
}
