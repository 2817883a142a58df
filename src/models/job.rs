use super::meal_type::MealType;
use super::session::SessionRecord;
use crate::utils::formatting::round_to;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::hash::{Hash, Hasher};

/// Scalar fields of a job as read from one input row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobDetails {
    pub id: i64,
    pub user: String,
    pub week: i64,
    pub mail_piece: String,
    pub month: String,
    pub year: i64,
    /// First day of `month`/`year`.
    pub month_date: NaiveDate,
    pub num_sessions: i64,
    pub quantity: i64,
    pub rsvps: i64,
    pub rmi: i64,
}

/// Identity of a job: every scalar field except the sessions, so that a row
/// reprocessed with slightly different session cells is still the same job.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobKey {
    pub id: i64,
    pub user: String,
    pub week: i64,
    pub mail_piece: String,
    pub month: String,
    pub year: i64,
    pub num_sessions: i64,
    pub quantity: i64,
    pub rsvps: i64,
    pub rmi: i64,
}

/// One booked event at a venue.
///
/// Always holds at least one session. Equality and hashing go through
/// [`JobKey`] only.
#[derive(Debug, Clone, Serialize)]
pub struct JobRecord {
    details: JobDetails,
    sessions: Vec<SessionRecord>,
}

impl JobRecord {
    /// Returns `None` when `sessions` is empty: a job without any occurrence
    /// is not a job.
    pub fn new(details: JobDetails, sessions: Vec<SessionRecord>) -> Option<Self> {
        if sessions.is_empty() {
            return None;
        }
        Some(Self { details, sessions })
    }

    pub fn key(&self) -> JobKey {
        let d = &self.details;
        JobKey {
            id: d.id,
            user: d.user.clone(),
            week: d.week,
            mail_piece: d.mail_piece.clone(),
            month: d.month.clone(),
            year: d.year,
            num_sessions: d.num_sessions,
            quantity: d.quantity,
            rsvps: d.rsvps,
            rmi: d.rmi,
        }
    }

    pub fn id(&self) -> i64 {
        self.details.id
    }
    pub fn user(&self) -> &str {
        &self.details.user
    }
    pub fn week(&self) -> i64 {
        self.details.week
    }
    pub fn mail_piece(&self) -> &str {
        &self.details.mail_piece
    }
    pub fn month(&self) -> &str {
        &self.details.month
    }
    pub fn year(&self) -> i64 {
        self.details.year
    }
    pub fn num_sessions(&self) -> i64 {
        self.details.num_sessions
    }
    pub fn quantity(&self) -> i64 {
        self.details.quantity
    }
    pub fn rsvps(&self) -> i64 {
        self.details.rsvps
    }
    pub fn rmi(&self) -> i64 {
        self.details.rmi
    }
    pub fn sessions(&self) -> &[SessionRecord] {
        &self.sessions
    }

    pub fn month_date(&self) -> NaiveDate {
        self.details.month_date
    }

    /// Timestamp of the latest session.
    pub fn end_date(&self) -> NaiveDateTime {
        self.sessions
            .iter()
            .map(SessionRecord::datetime)
            .max()
            .unwrap_or_default()
    }

    /// Tally such as `"2 Lunch 1 Dinner"`.
    pub fn session_type(&self) -> String {
        let lunches = self
            .sessions
            .iter()
            .filter(|s| s.meal_type() == MealType::Lunch)
            .count();
        let dinners = self.sessions.len() - lunches;
        format!("{lunches} Lunch {dinners} Dinner")
    }

    /// Rate of return: `100 * (RSVPs + RMI) / quantity`, 3 decimals.
    pub fn ror(&self) -> f64 {
        if self.details.quantity == 0 {
            return 0.0;
        }
        let responses = self.details.rsvps as f64 + self.details.rmi as f64;
        round_to(100.0 * responses / self.details.quantity as f64, 3)
    }
}

impl PartialEq for JobRecord {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for JobRecord {}

impl Hash for JobRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}
