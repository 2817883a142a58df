use super::job::JobRecord;
use crate::utils::formatting::round_to;
use chrono::{NaiveDate, NaiveDateTime};
use clap::ValueEnum;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static STREET_NUMBER: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"[0-9]+").ok());

/// How two rows are recognised as the same physical venue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum IdentityScheme {
    /// Every address field must match (after trimming).
    #[default]
    Full,
    /// Zone plus the first number found in the street address. Tolerates
    /// formatting drift in the other fields.
    Legacy,
}

impl IdentityScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdentityScheme::Full => "full",
            IdentityScheme::Legacy => "legacy",
        }
    }
}

/// Address half of an input row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct VenueAddress {
    pub market: String,
    pub loc_num: i64,
    pub zone: String,
    pub restaurant: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: i64,
}

impl VenueAddress {
    /// Same address with surrounding whitespace removed from text fields.
    pub fn trimmed(self) -> Self {
        Self {
            market: self.market.trim().to_string(),
            loc_num: self.loc_num,
            zone: self.zone.trim().to_string(),
            restaurant: self.restaurant.trim().to_string(),
            street: self.street.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_string(),
            zip: self.zip,
        }
    }

    pub fn identity(&self, scheme: IdentityScheme) -> Result<VenueKey, String> {
        match scheme {
            IdentityScheme::Full => Ok(VenueKey::Full(self.clone())),
            IdentityScheme::Legacy => {
                let number = first_number(&self.street).ok_or_else(|| {
                    format!(
                        "The address '{}' contains no number to use for matching.",
                        self.street
                    )
                })?;
                Ok(VenueKey::Legacy {
                    zone: self.zone.clone(),
                    street_number: number,
                })
            }
        }
    }
}

fn first_number(street: &str) -> Option<String> {
    let re = STREET_NUMBER.as_ref()?;
    re.find(street).map(|m| m.as_str().to_string())
}

/// Identity key of a venue under a given [`IdentityScheme`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VenueKey {
    Full(VenueAddress),
    Legacy { zone: String, street_number: String },
}

/// One physical location and every job booked there.
///
/// Created together with its first job, so `jobs` is never empty.
#[derive(Debug, Clone, Serialize)]
pub struct VenueRecord {
    address: VenueAddress,
    jobs: Vec<JobRecord>,
}

impl VenueRecord {
    pub fn new(address: VenueAddress, first_job: JobRecord) -> Self {
        Self {
            address: address.trimmed(),
            jobs: vec![first_job],
        }
    }

    pub fn address(&self) -> &VenueAddress {
        &self.address
    }
    pub fn market(&self) -> &str {
        &self.address.market
    }
    pub fn loc_num(&self) -> i64 {
        self.address.loc_num
    }
    pub fn zone(&self) -> &str {
        &self.address.zone
    }
    pub fn restaurant(&self) -> &str {
        &self.address.restaurant
    }
    pub fn street(&self) -> &str {
        &self.address.street
    }
    pub fn city(&self) -> &str {
        &self.address.city
    }
    pub fn state(&self) -> &str {
        &self.address.state
    }
    pub fn zip(&self) -> i64 {
        self.address.zip
    }
    pub fn jobs(&self) -> &[JobRecord] {
        &self.jobs
    }

    /// Attach a job. Returns `false` when an identical job (same
    /// [`JobKey`](super::job::JobKey)) is already attached.
    pub fn add_job(&mut self, job: JobRecord) -> bool {
        if self.jobs.contains(&job) {
            return false;
        }
        self.jobs.push(job);
        true
    }

    /// Mean RSVPs over all jobs, rounded up.
    pub fn average_rsvps(&self) -> i64 {
        if self.jobs.is_empty() {
            return 0;
        }
        let total: f64 = self.jobs.iter().map(|j| j.rsvps() as f64).sum();
        (total / self.jobs.len() as f64).ceil() as i64
    }

    /// Aggregate ROR over all jobs.
    pub fn average_ror(&self) -> f64 {
        aggregate_ror(self.jobs.iter())
    }

    /// Aggregate ROR over jobs whose end date falls in `[from, to]`.
    pub fn average_ror_between(&self, from: NaiveDate, to: NaiveDate) -> f64 {
        aggregate_ror(self.jobs.iter().filter(|j| {
            let end = j.end_date().date();
            end >= from && end <= to
        }))
    }

    /// Job with the latest end date. On ties the job attached first wins.
    pub fn latest_job(&self) -> &JobRecord {
        let mut latest = &self.jobs[0];
        for job in &self.jobs[1..] {
            if job.end_date() > latest.end_date() {
                latest = job;
            }
        }
        latest
    }

    pub fn last_session(&self) -> NaiveDateTime {
        self.latest_job().end_date()
    }

    /// True when any session of any job falls on a day in `[from, to]`.
    pub fn has_session_between(&self, from: NaiveDate, to: NaiveDate) -> bool {
        self.jobs
            .iter()
            .flat_map(JobRecord::sessions)
            .any(|s| s.date() >= from && s.date() <= to)
    }
}

// Summed in f64: counts come straight from the input and may be huge.
fn aggregate_ror<'a>(jobs: impl Iterator<Item = &'a JobRecord>) -> f64 {
    let mut responses = 0.0;
    let mut quantity = 0.0;
    for job in jobs {
        responses += job.rsvps() as f64 + job.rmi() as f64;
        quantity += job.quantity() as f64;
    }
    if quantity == 0.0 {
        return 0.0;
    }
    round_to(100.0 * responses / quantity, 3)
}
