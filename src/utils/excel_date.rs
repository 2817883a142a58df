//! Conversions between chrono values and Excel serial numbers (1900 system).

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

fn excel_epoch() -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)
}

pub fn datetime_to_serial(dt: &NaiveDateTime) -> Option<f64> {
    let duration = *dt - excel_epoch()?;

    let days = duration.num_days() as f64;
    let secs = (duration.num_seconds() - duration.num_days() * 86400) as f64;

    Some(days + secs / 86400.0)
}

pub fn date_to_serial(d: &NaiveDate) -> Option<f64> {
    datetime_to_serial(&d.and_time(NaiveTime::from_hms_opt(0, 0, 0)?))
}

/// Serial → timestamp, rounded to the nearest second.
pub fn serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }
    let total_secs = (serial * 86400.0).round() as i64;
    excel_epoch()?.checked_add_signed(Duration::seconds(total_secs))
}

/// Time-of-day part of a serial (the fraction of the day).
pub fn serial_to_time(serial: f64) -> Option<NaiveTime> {
    let secs = ((serial.fract().abs() * 86400.0).round() as u32) % 86400;
    NaiveTime::from_num_seconds_from_midnight_opt(secs, 0)
}
