//! Error types for loading, configuration and lookups
//!
//! The derivation functions themselves are total and never return these.

use std::path::PathBuf;
use thiserror::Error;
use waypoint_types::TripId;

/// Errors while reading a trip export
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}")]
    ParseJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("trip {id} appears more than once in the export")]
    DuplicateTrip { id: TripId },
}

/// Errors during configuration operations
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration")]
    Load(#[from] confy::ConfyError),

    #[error("failed to save configuration")]
    Save(#[source] confy::ConfyError),
}

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("trip {id} not found")]
    TripNotFound { id: TripId },
}

/// Errors in user-typed values
#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid date or date-time '{value}' (expected YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS)")]
    InvalidInstant { value: String },

    #[error("{field} must be a date (YYYY-MM-DD), got '{value}'")]
    InvalidDate { field: &'static str, value: String },
}
