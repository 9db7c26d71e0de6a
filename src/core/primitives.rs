use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{ChartError, ChartResult};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Parses one series date.
///
/// Accepts `YYYY-MM-DD` (midnight), `YYYY-MM-DDTHH:MM:SS[.fff]`,
/// `YYYY-MM-DD HH:MM:SS[.fff]` and RFC 3339 (normalized to UTC).
pub fn parse_series_date(value: &str) -> ChartResult<NaiveDateTime> {
    let trimmed = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(time) = NaiveDateTime::parse_from_str(trimmed, pattern) {
            return Ok(time);
        }
    }
    if let Ok(time) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(time.naive_utc());
    }
    Err(ChartError::InvalidDate {
        value: value.to_owned(),
    })
}

/// Whole days between two instants, rounded up.
#[must_use]
pub fn ceil_days_between(first: NaiveDateTime, last: NaiveDateTime) -> f64 {
    let millis = (last - first).num_milliseconds() as f64;
    (millis / MILLIS_PER_DAY).ceil()
}
