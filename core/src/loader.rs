//! Loading trip exports and saved new-trip forms from disk.
//!
//! An export is the JSON the trip backend returns for a user, gathered into
//! one document: `{ "trips": [...], "destinations": [...] }`. A form is
//! `{ "trip": {...}, "destinations": [...] }` with every field as typed.

use std::fs;
use std::path::Path;

use tracing::{debug, info};
use waypoint_types::{TripExport, TripForm};

use crate::error::LoadError;
use crate::overview::TripIndex;

pub fn parse_export(json: &str) -> Result<TripExport, serde_json::Error> {
    serde_json::from_str(json)
}

pub fn load_export(path: &Path) -> Result<TripIndex, LoadError> {
    debug!(path = %path.display(), "Reading trip export");
    let contents = fs::read_to_string(path).map_err(|source| LoadError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    let export = parse_export(&contents).map_err(|source| LoadError::ParseJson {
        path: path.to_path_buf(),
        source,
    })?;

    let index = TripIndex::from_export(export)?;
    info!(path = %path.display(), trips = index.len(), "Loaded trip export");
    Ok(index)
}

pub fn load_form(path: &Path) -> Result<TripForm, LoadError> {
    debug!(path = %path.display(), "Reading trip form");
    let contents = fs::read_to_string(path).map_err(|source| LoadError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| LoadError::ParseJson {
        path: path.to_path_buf(),
        source,
    })
}
