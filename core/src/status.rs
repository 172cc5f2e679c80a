//! Trip status classification
//!
//! Maps a trip's calendar date range and an injected "now" to a status and
//! countdown text. Calendar dates are treated as the instant at midnight that
//! starts the day, so a trip counts as completed from the first moment after
//! midnight of its end date.
//!
//! Nothing here reads a clock: callers pass `now` in.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use crate::error::InputError;
use waypoint_types::{StatusInfo, Trip, TripStatus};

const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Classify a trip date range against `now`.
///
/// - `now` before the start: upcoming, "N days to go" (rounded up)
/// - `now` after the end: completed, "N days ago" (rounded down)
/// - otherwise: ongoing, "N days left" (rounded up)
pub fn classify(start_date: NaiveDate, end_date: NaiveDate, now: NaiveDateTime) -> StatusInfo {
    let start = start_of_day(start_date);
    let end = start_of_day(end_date);

    if now < start {
        let days = ceil_days(start - now);
        StatusInfo {
            status: TripStatus::Upcoming,
            days_text: format!("{days} days to go"),
        }
    } else if now > end {
        let days = floor_days(now - end);
        StatusInfo {
            status: TripStatus::Completed,
            days_text: format!("{days} days ago"),
        }
    } else {
        let days = ceil_days(end - now);
        StatusInfo {
            status: TripStatus::Ongoing,
            days_text: format!("{days} days left"),
        }
    }
}

pub fn classify_trip(trip: &Trip, now: NaiveDateTime) -> StatusInfo {
    classify(trip.start_date, trip.end_date, now)
}

/// Number of calendar days a trip spans, counting both endpoints.
pub fn duration_days(start_date: NaiveDate, end_date: NaiveDate) -> i64 {
    (end_date - start_date).num_days() + 1
}

/// "1 day" / "6 days"
pub fn duration_text(start_date: NaiveDate, end_date: NaiveDate) -> String {
    let days = duration_days(start_date, end_date);
    let suffix = if days > 1 { "s" } else { "" };
    format!("{days} day{suffix}")
}

/// Parse a user-typed instant: a bare date means midnight.
pub fn parse_instant(value: &str) -> Result<NaiveDateTime, InputError> {
    let trimmed = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(start_of_day(date));
    }
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| InputError::InvalidInstant {
            value: value.to_string(),
        })
}

pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

fn floor_days(delta: TimeDelta) -> i64 {
    delta.num_milliseconds().div_euclid(MS_PER_DAY)
}

fn ceil_days(delta: TimeDelta) -> i64 {
    let ms = delta.num_milliseconds();
    ms.div_euclid(MS_PER_DAY) + i64::from(ms.rem_euclid(MS_PER_DAY) != 0)
}

#[cfg(test)]
mod tests;
