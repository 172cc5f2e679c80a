//! Shared record types for Waypoint
//!
//! This crate contains the serializable trip/destination records exchanged with
//! the trip backend, the derived status types handed to presentation code, and
//! the planner configuration. It carries no derivation logic (see waypoint-core).

use chrono::NaiveDate;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// Backend identifier of a trip.
pub type TripId = i64;

/// Backend identifier of a destination.
pub type DestinationId = i64;

/// Priority assumed when a destination has none, or an unusable one.
pub const DEFAULT_PRIORITY_LEVEL: i32 = 3;

/// Trip type preselected on the new-trip form.
pub const DEFAULT_TRIP_TYPE: &str = "vacation";

// ─────────────────────────────────────────────────────────────────────────────
// Records
// ─────────────────────────────────────────────────────────────────────────────

/// A user-owned travel plan.
///
/// Only `start_date` and `end_date` are read by the derivation core; everything
/// else is carried through for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub id: TripId,
    #[serde(alias = "startDate", deserialize_with = "calendar_date")]
    pub start_date: NaiveDate,
    #[serde(alias = "endDate", deserialize_with = "calendar_date")]
    pub end_date: NaiveDate,

    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, alias = "tripType", skip_serializing_if = "Option::is_none")]
    pub trip_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(default = "default_traveler_count", alias = "travelerCount")]
    pub traveler_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, alias = "imageUrl", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, alias = "isFavorite")]
    pub is_favorite: bool,
    /// Star rating 1-5 given after the trip
    #[serde(default, alias = "tripRating", skip_serializing_if = "Option::is_none")]
    pub trip_rating: Option<u8>,
}

/// A place to visit, owned by a [`Trip`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub id: DestinationId,
    #[serde(alias = "tripId")]
    pub trip_id: TripId,
    /// 1-based position among the destinations submitted together
    #[serde(default, alias = "orderIndex", deserialize_with = "nullable_order_index")]
    pub order_index: i32,
    /// 1 = "Must See" ... 5 = lowest. Kept as received; the taxonomy in
    /// waypoint-core maps anything outside 1..=5 to the default level.
    #[serde(
        default = "default_priority_level",
        alias = "priorityLevel",
        deserialize_with = "lenient_priority"
    )]
    pub priority_level: i32,
    #[serde(default, alias = "isCompleted")]
    pub is_completed: bool,

    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, alias = "destinationType", skip_serializing_if = "Option::is_none")]
    pub destination_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(
        default,
        alias = "visitDate",
        deserialize_with = "optional_calendar_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub visit_date: Option<NaiveDate>,
    #[serde(default, alias = "visitTime", skip_serializing_if = "Option::is_none")]
    pub visit_time: Option<String>,
    /// "$" through "$$$$"
    #[serde(default, alias = "priceRange", skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
}

/// Snapshot of a user's trips and their destinations as fetched from the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripExport {
    #[serde(default)]
    pub trips: Vec<Trip>,
    #[serde(default)]
    pub destinations: Vec<Destination>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Destination Entry (new-trip form)
// ─────────────────────────────────────────────────────────────────────────────

/// One row of the destination section of the new-trip form, exactly as typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub destination_type: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub visit_date: String,
    #[serde(default)]
    pub visit_time: String,
    #[serde(default)]
    pub price_range: String,
    /// Raw select value; parsed leniently when the draft is submitted
    #[serde(default = "default_priority_input")]
    pub priority_level: String,
}

impl Default for DestinationDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            destination_type: String::new(),
            address: String::new(),
            visit_date: String::new(),
            visit_time: String::new(),
            price_range: String::new(),
            priority_level: default_priority_input(),
        }
    }
}

impl DestinationDraft {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Destination payload ready to be posted to the trip backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDestination {
    pub trip_id: TripId,
    pub order_index: i32,
    pub priority_level: i32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visit_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visit_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
}

/// The trip section of the new-trip form, exactly as typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default = "default_trip_type")]
    pub trip_type: String,
    #[serde(default)]
    pub budget: String,
    #[serde(default = "default_traveler_input")]
    pub traveler_count: String,
    #[serde(default)]
    pub image_url: String,
}

impl Default for TripDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            notes: String::new(),
            country: String::new(),
            city: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            trip_type: default_trip_type(),
            budget: String::new(),
            traveler_count: default_traveler_input(),
            image_url: String::new(),
        }
    }
}

/// A whole new-trip form submission: the trip plus its destination rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripForm {
    #[serde(default)]
    pub trip: TripDraft,
    #[serde(default)]
    pub destinations: Vec<DestinationDraft>,
}

/// Trip payload ready to be posted to the trip backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTrip {
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub trip_type: String,
    pub budget: Option<f64>,
    pub traveler_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Derived Status
// ─────────────────────────────────────────────────────────────────────────────

/// Where a trip sits relative to the current instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    Upcoming,
    Ongoing,
    Completed,
}

impl TripStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            TripStatus::Upcoming => "upcoming",
            TripStatus::Ongoing => "ongoing",
            TripStatus::Completed => "completed",
        }
    }
}

impl std::fmt::Display for TripStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Status label plus countdown text, e.g. `upcoming` / "9 days to go".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusInfo {
    pub status: TripStatus,
    pub days_text: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Planner Configuration
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Trip export loaded on `load` when no path is given
    #[serde(default)]
    pub data_path: String,
    /// Derive "now" from UTC instead of the local clock
    #[serde(default)]
    pub use_utc: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self::with_data_path(String::new())
    }
}

impl PlannerConfig {
    pub fn with_data_path(data_path: String) -> Self {
        Self {
            data_path,
            use_utc: false,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn default_traveler_count() -> u32 {
    1
}

fn default_priority_level() -> i32 {
    DEFAULT_PRIORITY_LEVEL
}

fn default_trip_type() -> String {
    DEFAULT_TRIP_TYPE.to_string()
}

fn default_traveler_input() -> String {
    default_traveler_count().to_string()
}

fn default_priority_input() -> String {
    DEFAULT_PRIORITY_LEVEL.to_string()
}

/// Leading integer of `input` the way a form field is read: surrounding
/// whitespace is ignored, an optional sign is honoured, and parsing stops at
/// the first non-digit ("4 stars" -> 4). `None` when no digit leads.
pub fn parse_leading_int(input: &str) -> Option<i32> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits_len == 0 {
        return None;
    }
    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).ok()
}

/// Accepts a plain `YYYY-MM-DD` date or a timestamp that starts with one
/// (`2025-06-10T00:00:00.000Z`), which is how the backend serialises DATE columns.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    let head = match value.get(..10) {
        Some(head) if value.len() == 10 || matches!(value.as_bytes()[10], b'T' | b' ') => head,
        _ => return None,
    };
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

fn calendar_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_calendar_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid calendar date '{raw}'")))
}

fn optional_calendar_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => parse_calendar_date(&raw)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid calendar date '{raw}'"))),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLevel {
    Int(i64),
    Float(f64),
    Text(String),
    Other(IgnoredAny),
}

/// Whole numbers are kept as-is (so ordering sees what the backend stored);
/// strings are read like the form does. Null, fractions, booleans and
/// containers fall back to the default level.
fn lenient_priority<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let level = match Option::<RawLevel>::deserialize(deserializer)? {
        Some(RawLevel::Int(n)) => i32::try_from(n).ok(),
        Some(RawLevel::Float(f)) if f.is_finite() && f.fract() == 0.0 => {
            i32::try_from(f as i64).ok()
        }
        Some(RawLevel::Float(_)) => None,
        Some(RawLevel::Text(s)) => parse_leading_int(&s),
        Some(RawLevel::Other(_)) | None => None,
    };
    Ok(level.unwrap_or(DEFAULT_PRIORITY_LEVEL))
}

fn nullable_order_index<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i32>::deserialize(deserializer)?.unwrap_or_default())
}
