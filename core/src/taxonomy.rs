//! Fixed label lookups for priorities, trip types and price ranges.
//!
//! Icons and colours belong to the presentation layer; only the wording
//! lives here.

use phf::phf_map;
use serde::{Deserialize, Serialize};
use waypoint_types::DEFAULT_PRIORITY_LEVEL;

/// Destination priority, 1 (highest) to 5 (lowest)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    MustSee = 1,
    High = 2,
    Medium = 3,
    Low = 4,
    Optional = 5,
}

impl Priority {
    pub const ALL: [Priority; 5] = [
        Priority::MustSee,
        Priority::High,
        Priority::Medium,
        Priority::Low,
        Priority::Optional,
    ];

    /// Unknown or out-of-range levels fall back to [`Priority::Medium`].
    pub const fn from_level(level: i32) -> Self {
        match level {
            1 => Priority::MustSee,
            2 => Priority::High,
            3 => Priority::Medium,
            4 => Priority::Low,
            5 => Priority::Optional,
            _ => Priority::Medium,
        }
    }

    pub const fn level(&self) -> i32 {
        *self as i32
    }

    /// Label shown on a destination card
    pub const fn label(&self) -> &'static str {
        match self {
            Priority::MustSee => "Must See",
            Priority::High => "High Priority",
            Priority::Medium => "Medium Priority",
            Priority::Low => "Low Priority",
            Priority::Optional => "Optional",
        }
    }

    /// Label shown in the priority select of the new-trip form
    pub const fn choice_label(&self) -> &'static str {
        match self {
            Priority::Optional => "If Time Allows",
            other => other.label(),
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::from_level(DEFAULT_PRIORITY_LEVEL)
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Trip Types
// ─────────────────────────────────────────────────────────────────────────────

static TRIP_TYPE_LABELS: phf::Map<&'static str, &'static str> = phf_map! {
    "vacation" => "Vacation",
    "business" => "Business",
    "weekend" => "Weekend Getaway",
    "family" => "Family Trip",
};

/// Trip type values offered by the new-trip form, in display order
pub const TRIP_TYPE_CHOICES: [&str; 4] = ["vacation", "business", "weekend", "family"];

pub fn trip_type_choice_label(trip_type: &str) -> Option<&'static str> {
    TRIP_TYPE_LABELS.get(trip_type).copied()
}

/// Heading used on the trip view: the stored value with its first letter
/// capitalised, or "Trip" when there is none.
pub fn trip_type_name(trip_type: Option<&str>) -> String {
    let mut chars = match trip_type {
        Some(value) if !value.is_empty() => value.chars(),
        _ => return "Trip".to_string(),
    };
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => "Trip".to_string(),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Price Ranges
// ─────────────────────────────────────────────────────────────────────────────

static PRICE_RANGE_LABELS: phf::Map<&'static str, &'static str> = phf_map! {
    "$" => "Budget-friendly",
    "$$" => "Moderate",
    "$$$" => "Expensive",
    "$$$$" => "Luxury",
};

pub const PRICE_RANGE_CHOICES: [&str; 4] = ["$", "$$", "$$$", "$$$$"];

pub fn price_range_label(price_range: &str) -> Option<&'static str> {
    PRICE_RANGE_LABELS.get(price_range).copied()
}
