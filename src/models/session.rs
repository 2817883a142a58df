use super::meal_type::MealType;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// A single scheduled meal occurrence of a job.
///
/// Immutable once built; two sessions are equal when meal, weekday label and
/// timestamp all match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SessionRecord {
    meal_type: MealType,
    day_of_week: String,
    datetime: NaiveDateTime,
}

impl SessionRecord {
    pub fn new(meal_type: MealType, day_of_week: impl Into<String>, datetime: NaiveDateTime) -> Self {
        Self {
            meal_type,
            day_of_week: day_of_week.into(),
            datetime,
        }
    }

    pub fn meal_type(&self) -> MealType {
        self.meal_type
    }

    pub fn day_of_week(&self) -> &str {
        &self.day_of_week
    }

    pub fn datetime(&self) -> NaiveDateTime {
        self.datetime
    }

    pub fn date(&self) -> NaiveDate {
        self.datetime.date()
    }

    pub fn datetime_str(&self) -> String {
        self.datetime.format("%Y-%m-%d %H:%M").to_string()
    }
}
