#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use rvenuereport::input::required_columns;
use rvenuereport::models::{MealType, Row};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn rvr() -> Command {
    cargo_bin_cmd!("rvenuereport")
}

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// One input line with every required column. Defaults describe a valid job
/// in zone G101 (Houston); session cells start blank.
#[derive(Debug, Clone)]
pub struct JobRow {
    cells: HashMap<String, String>,
}

pub fn job(id: i64) -> JobRow {
    let mut cells: HashMap<String, String> =
        required_columns().into_iter().map(|c| (c, String::new())).collect();

    for (col, val) in [
        ("Job#", id.to_string()),
        ("User", "jdoe".to_string()),
        ("MKT", "HOU".to_string()),
        ("LOC#", "1".to_string()),
        ("Week", "1".to_string()),
        ("Zone", "G101".to_string()),
        ("Restaurant", "Pappas Bros".to_string()),
        ("St Address", "100 Main St".to_string()),
        ("City", "Houston".to_string()),
        ("ST", "TX".to_string()),
        ("ZIP", "77001".to_string()),
        ("Mail Piece", "MP-A".to_string()),
        ("Month", "1".to_string()),
        ("Year", "2024".to_string()),
        ("# Sessions", "1".to_string()),
        ("Qty", "100".to_string()),
        ("RSVPs", "20".to_string()),
        ("RMI", "5".to_string()),
    ] {
        cells.insert(col.to_string(), val);
    }

    JobRow { cells }
}

impl JobRow {
    pub fn set(mut self, column: &str, value: impl ToString) -> Self {
        self.cells.insert(column.to_string(), value.to_string());
        self
    }

    pub fn market(self, m: &str) -> Self {
        self.set("MKT", m)
    }
    pub fn zone(self, z: &str) -> Self {
        self.set("Zone", z)
    }
    pub fn street(self, s: &str) -> Self {
        self.set("St Address", s)
    }
    pub fn city(self, c: &str) -> Self {
        self.set("City", c)
    }
    pub fn loc(self, n: i64) -> Self {
        self.set("LOC#", n)
    }
    pub fn rsvps(self, n: i64) -> Self {
        self.set("RSVPs", n)
    }
    pub fn qty(self, n: i64) -> Self {
        self.set("Qty", n)
    }
    pub fn rmi(self, n: i64) -> Self {
        self.set("RMI", n)
    }

    /// Fill one session slot; the weekday label is derived from the date.
    pub fn session(self, meal: MealType, day: u8, date: &str, time: &str) -> Self {
        let weekday = d(date).format("%A").to_string();
        self.set(&meal.day_column(day), weekday)
            .set(&meal.date_column(day), date)
            .set(&meal.time_column(day), time)
    }

    /// Single lunch session on `date`, with Month/Year taken from it.
    pub fn on(self, date: &str) -> Self {
        let day = d(date);
        self.session(MealType::Lunch, 1, date, "11:30")
            .set("Month", day.format("%-m"))
            .set("Year", day.format("%Y"))
    }

    pub fn values(&self) -> Vec<String> {
        required_columns()
            .iter()
            .map(|c| self.cells.get(c).cloned().unwrap_or_default())
            .collect()
    }

    pub fn to_row(&self) -> Row {
        Row::from_pairs(&required_columns(), &self.values())
    }
}

pub fn rows(jobs: &[JobRow]) -> Vec<Row> {
    jobs.iter().map(JobRow::to_row).collect()
}

/// Write `jobs` as a CSV export with the full header line.
pub fn write_csv(path: &Path, jobs: &[JobRow]) {
    let mut wtr = csv::Writer::from_path(path).unwrap();
    wtr.write_record(required_columns()).unwrap();
    for j in jobs {
        wtr.write_record(j.values()).unwrap();
    }
    wtr.flush().unwrap();
}

/// CSV with the given header line only.
pub fn write_headers(path: &Path, headers: &[String]) {
    let mut wtr = csv::Writer::from_path(path).unwrap();
    wtr.write_record(headers).unwrap();
    wtr.flush().unwrap();
}

/// Temporary workspace holding `input.csv` with `jobs`.
pub fn workspace(jobs: &[JobRow]) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.csv");
    write_csv(&input, jobs);
    (dir, input)
}

/// Three HOU venues and one PDX venue, all booked in 2024 and never again.
pub fn sample_jobs() -> Vec<JobRow> {
    vec![
        job(101).loc(1).street("100 Main St").rsvps(20).on("2024-01-10"),
        job(102).loc(2).street("200 Elm St").zone("G102").rsvps(30).on("2024-02-12"),
        job(103).loc(3).street("300 Oak St").zone("G103").rsvps(25).on("2024-06-10"),
        job(104)
            .market("PDX")
            .loc(4)
            .street("400 Pine St")
            .city("Portland")
            .set("ST", "OR")
            .set("ZIP", "2134")
            .zone("P201")
            .rsvps(40)
            .on("2024-03-05"),
    ]
}

pub fn read_file(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}
