//! Turning the new-trip form into backend payloads.
//!
//! Destination rows without a name are skipped. Every row keeps the 1-based
//! position it had on the form as its `order_index`, so skipped rows leave gaps.

use tracing::debug;
use waypoint_types::{
    DEFAULT_PRIORITY_LEVEL, DEFAULT_TRIP_TYPE, DestinationDraft, NewDestination, NewTrip,
    TripDraft, TripId, parse_calendar_date, parse_leading_int,
};

use crate::error::InputError;

/// Budget typed into the form, read up to the first character that can't
/// continue a number ("1250.50 EUR" -> 1250.5). Blank or unreadable is no budget.
pub fn parse_budget_input(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    let end = raw
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E')))
        .unwrap_or(raw.len());
    (1..=end)
        .rev()
        .find_map(|len| raw[..len].parse::<f64>().ok())
        .filter(|budget| budget.is_finite())
}

/// At least one traveler; anything unreadable counts as one.
pub fn parse_traveler_input(raw: &str) -> u32 {
    parse_leading_int(raw)
        .and_then(|n| u32::try_from(n).ok())
        .filter(|&n| n >= 1)
        .unwrap_or(1)
}

pub fn prepare_trip(draft: &TripDraft) -> Result<NewTrip, InputError> {
    let trip = NewTrip {
        title: draft.title.trim().to_string(),
        start_date: form_date("start_date", &draft.start_date)?,
        end_date: form_date("end_date", &draft.end_date)?,
        trip_type: non_blank(&draft.trip_type).unwrap_or_else(|| DEFAULT_TRIP_TYPE.to_string()),
        budget: parse_budget_input(&draft.budget),
        traveler_count: parse_traveler_input(&draft.traveler_count),
        notes: non_blank(&draft.notes),
        country: non_blank(&draft.country),
        city: non_blank(&draft.city),
        image_url: non_blank(&draft.image_url),
    };

    debug!(title = %trip.title, start = %trip.start_date, end = %trip.end_date, "Prepared trip draft");
    Ok(trip)
}

fn form_date(field: &'static str, value: &str) -> Result<chrono::NaiveDate, InputError> {
    parse_calendar_date(value).ok_or_else(|| InputError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

/// Priority typed into the form. Missing, non-numeric and zero values mean
/// the default level.
pub fn parse_priority_input(raw: &str) -> i32 {
    match parse_leading_int(raw) {
        Some(0) | None => DEFAULT_PRIORITY_LEVEL,
        Some(level) => level,
    }
}

pub fn prepare_destinations(trip_id: TripId, drafts: &[DestinationDraft]) -> Vec<NewDestination> {
    let prepared: Vec<NewDestination> = drafts
        .iter()
        .enumerate()
        .filter(|(_, draft)| !draft.name.trim().is_empty())
        .map(|(i, draft)| NewDestination {
            trip_id,
            order_index: i as i32 + 1,
            priority_level: parse_priority_input(&draft.priority_level),
            name: draft.name.clone(),
            description: non_blank(&draft.description),
            destination_type: non_blank(&draft.destination_type),
            address: non_blank(&draft.address),
            visit_date: non_blank(&draft.visit_date),
            visit_time: non_blank(&draft.visit_time),
            price_range: non_blank(&draft.price_range),
        })
        .collect();

    debug!(
        trip_id,
        submitted = drafts.len(),
        kept = prepared.len(),
        "Prepared destination drafts"
    );
    prepared
}

fn non_blank(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
