//! Human-readable text for trip cards and detail views

use chrono::NaiveDate;
use waypoint_types::Destination;

use crate::destinations::completed_count;

/// "Tuesday, June 10, 2025"
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// "$1,250" / "$99.5", or "No budget" when none (or zero) was entered.
pub fn budget_text(budget: Option<f64>) -> String {
    match budget {
        Some(amount) if amount != 0.0 && amount.is_finite() => format!("${}", group_amount(amount)),
        _ => "No budget".to_string(),
    }
}

/// "1 traveler" / "4 travelers"
pub fn traveler_text(count: u32) -> String {
    let suffix = if count > 1 { "s" } else { "" };
    format!("{count} traveler{suffix}")
}

/// "4 out of 5 stars" for ratings 1..=5
pub fn rating_text(rating: Option<u8>) -> Option<String> {
    match rating {
        Some(stars @ 1..=5) => Some(format!("{stars} out of 5 stars")),
        _ => None,
    }
}

/// "2 of 3 destinations completed"
pub fn completion_text(destinations: &[Destination]) -> String {
    format!(
        "{} of {} destinations completed",
        completed_count(destinations),
        destinations.len()
    )
}

/// Thousands-grouped amount with at most three decimals, trailing zeros dropped.
fn group_amount(amount: f64) -> String {
    let formatted = format!("{:.3}", amount.abs());
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 5);
    if amount < 0.0 {
        grouped.push('-');
    }
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if !frac_part.is_empty() {
        grouped.push('.');
        grouped.push_str(frac_part);
    }
    grouped
}
