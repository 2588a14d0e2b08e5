//! CSV gazetteer loader.
//!
//! # CSV format
//!
//! One row per place, in match order.  Earlier rows win when several names
//! occur in the same location string.
//!
//! ```csv
//! name,latitude,longitude
//! Mobile,30.6954,-88.0399
//! Montgomery,32.3792,-86.3077
//! ```
//!
//! The loaded gazetteer falls back to the continental-US centroid; chain
//! [`Gazetteer::with_fallback`] to change it.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use eld_core::Coordinate;

use crate::locator::{Gazetteer, GazetteerEntry, US_CENTROID};
use crate::RouteError;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct GazetteerRecord {
    name:      String,
    latitude:  f64,
    longitude: f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a gazetteer from a CSV file.
pub fn load_gazetteer_csv(path: &Path) -> Result<Gazetteer, RouteError> {
    let file = std::fs::File::open(path).map_err(RouteError::Io)?;
    load_gazetteer_reader(file)
}

/// Like [`load_gazetteer_csv`] but accepts any `Read` source.
pub fn load_gazetteer_reader<R: Read>(reader: R) -> Result<Gazetteer, RouteError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut entries = Vec::new();

    for (line, result) in csv_reader.deserialize::<GazetteerRecord>().enumerate() {
        let row = result.map_err(|e| RouteError::Parse(e.to_string()))?;
        let name = row.name.trim();
        if name.is_empty() {
            // +2: one for the header, one for 1-based numbering.
            return Err(RouteError::Parse(format!("row {}: empty place name", line + 2)));
        }
        if !(-90.0..=90.0).contains(&row.latitude) || !(-180.0..=180.0).contains(&row.longitude) {
            return Err(RouteError::Parse(format!(
                "row {}: coordinate ({}, {}) out of range",
                line + 2,
                row.latitude,
                row.longitude
            )));
        }
        entries.push(GazetteerEntry::new(name, Coordinate::new(row.latitude, row.longitude)));
    }

    if entries.is_empty() {
        return Err(RouteError::EmptyGazetteer);
    }
    Ok(Gazetteer::new(entries, US_CENTROID))
}
