//! Venue identity resolution.
//!
//! `VenueIndex` owns the venue collection of one report run. Rows go in one at
//! a time; each either creates a venue, merges its job into an existing one,
//! or is dropped and counted.

use crate::core::parser::{self, COL_JOB, ParseFailure};
use crate::models::{IdentityScheme, Row, VenueKey, VenueRecord};
use crate::utils::date::parse_cell_date;
use chrono::NaiveDate;
use std::collections::HashMap;

/// What happened to one ingested row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestOutcome {
    Created,
    Merged,
    /// The venue already holds an identical job.
    DuplicateJob,
    /// No `Job#`: not a real entry.
    Blank,
    Skipped(ParseFailure),
}

/// Per-run counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestStats {
    pub rows_seen: usize,
    pub outdated: usize,
    pub blank: usize,
    pub malformed: usize,
    pub no_sessions: usize,
    pub no_identity: usize,
    pub venues_created: usize,
    pub jobs_merged: usize,
    pub duplicate_jobs: usize,
}

impl IngestStats {
    pub fn skipped(&self) -> usize {
        self.outdated + self.blank + self.malformed + self.no_sessions + self.no_identity
    }

    pub fn jobs_attached(&self) -> usize {
        self.venues_created + self.jobs_merged
    }
}

#[derive(Debug, Default)]
pub struct VenueIndex {
    scheme: IdentityScheme,
    venues: Vec<VenueRecord>,
    positions: HashMap<VenueKey, usize>,
    stats: IngestStats,
}

impl VenueIndex {
    pub fn new(scheme: IdentityScheme) -> Self {
        Self {
            scheme,
            ..Default::default()
        }
    }

    pub fn scheme(&self) -> IdentityScheme {
        self.scheme
    }

    pub fn ingest(&mut self, row: &Row) -> IngestOutcome {
        self.stats.rows_seen += 1;

        if row.get(COL_JOB).is_none() {
            self.stats.blank += 1;
            return IngestOutcome::Blank;
        }

        let parsed = match parser::parse(row) {
            Ok(p) => p,
            Err(failure) => return self.skip(failure),
        };

        let key = match parsed.address.clone().trimmed().identity(self.scheme) {
            Ok(k) => k,
            Err(msg) => return self.skip(ParseFailure::IdentityComputation(msg)),
        };

        // compare-and-merge
        match self.positions.get(&key) {
            Some(&pos) => {
                if self.venues[pos].add_job(parsed.job) {
                    self.stats.jobs_merged += 1;
                    IngestOutcome::Merged
                } else {
                    self.stats.duplicate_jobs += 1;
                    IngestOutcome::DuplicateJob
                }
            }
            None => {
                self.positions.insert(key, self.venues.len());
                self.venues.push(VenueRecord::new(parsed.address, parsed.job));
                self.stats.venues_created += 1;
                IngestOutcome::Created
            }
        }
    }

    /// Count a row dropped before parsing because it predates the cutoff.
    pub fn skip_outdated(&mut self) {
        self.stats.rows_seen += 1;
        self.stats.outdated += 1;
    }

    fn skip(&mut self, failure: ParseFailure) -> IngestOutcome {
        match failure {
            ParseFailure::MalformedField { .. } => self.stats.malformed += 1,
            ParseFailure::NoValidSessions => self.stats.no_sessions += 1,
            ParseFailure::IdentityComputation(_) => self.stats.no_identity += 1,
        }
        IngestOutcome::Skipped(failure)
    }

    /// Venues in first-seen order.
    pub fn venues(&self) -> &[VenueRecord] {
        &self.venues
    }

    pub fn into_venues(self) -> Vec<VenueRecord> {
        self.venues
    }

    pub fn stats(&self) -> &IngestStats {
        &self.stats
    }

    pub fn len(&self) -> usize {
        self.venues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }
}

/// True when the row carries at least one date and every date in it is
/// strictly before `cutoff`.
pub fn row_predates(row: &Row, cutoff: NaiveDate) -> bool {
    let mut dates = row.values().filter_map(parse_cell_date).peekable();
    if dates.peek().is_none() {
        return false;
    }
    dates.all(|d| d < cutoff)
}
