//! Free-text location lookup.
//!
//! # Matching rule
//!
//! A [`Gazetteer`] is an *ordered* list of place names.  `locate(text)`
//! lower-cases both sides and returns the first entry whose name is a
//! substring of the text, so `"Downtown Dallas, TX"` resolves to Dallas.
//! Order matters when names overlap ("San Antonio" must be tried before a
//! hypothetical "Antonio"); the table is a `Vec`, never a hash map.
//!
//! Text that matches nothing resolves to the gazetteer's fallback point
//! (the continental-US centroid by default).  The lookup never fails, but
//! the result says whether it was a real match via [`Resolution`].

use eld_core::Coordinate;
use tracing::{debug, warn};

/// Geographic center of the contiguous United States.
pub const US_CENTROID: Coordinate = Coordinate { lat: 39.8283, lon: -98.5795 };

/// The default lookup table, in match order.
const US_MAJOR_CITIES: &[(&str, f64, f64)] = &[
    ("New York",     40.7128,  -74.0060),
    ("Los Angeles",  34.0522, -118.2437),
    ("Chicago",      41.8781,  -87.6298),
    ("Houston",      29.7604,  -95.3698),
    ("Phoenix",      33.4484, -112.0740),
    ("Philadelphia", 39.9526,  -75.1652),
    ("San Antonio",  29.4241,  -98.4936),
    ("San Diego",    32.7157, -117.1611),
    ("Dallas",       32.7767,  -96.7970),
    ("San Jose",     37.3382, -121.8863),
    ("Detroit",      42.3314,  -83.0458),
    ("Atlanta",      33.7490,  -84.3880),
    ("Boston",       42.3601,  -71.0589),
    ("Miami",        25.7617,  -80.1918),
    ("Seattle",      47.6062, -122.3321),
    ("Denver",       39.7392, -104.9903),
    ("Las Vegas",    36.1699, -115.1398),
    ("Nashville",    36.1627,  -86.7816),
    ("Memphis",      35.1495,  -90.0490),
    ("Milwaukee",    43.0389,  -87.9065),
    ("Orlando",      28.5383,  -81.3792),
    ("Jacksonville", 30.3322,  -81.6557),
    ("Tampa",        27.9506,  -82.4572),
    ("Austin",       30.2672,  -97.7431),
];

// ── Located ───────────────────────────────────────────────────────────────────

/// How a location string was resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Resolution {
    /// Matched the named gazetteer entry.
    Matched(String),
    /// Nothing matched; the coordinate is the gazetteer's fallback point.
    Fallback,
}

/// A coordinate plus how it was obtained.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Located {
    pub coordinate: Coordinate,
    pub resolution: Resolution,
}

impl Located {
    /// `true` if the coordinate came from a real match rather than the
    /// fallback.
    pub fn is_resolved(&self) -> bool {
        matches!(self.resolution, Resolution::Matched(_))
    }
}

// ── Geocoder trait ────────────────────────────────────────────────────────────

/// Pluggable location lookup.
///
/// Implementations must be total: an unknown place yields a fallback
/// coordinate marked [`Resolution::Fallback`], never an error.  `Send + Sync`
/// so one geocoder can serve parallel planning runs.
pub trait Geocoder: Send + Sync {
    fn locate(&self, text: &str) -> Located;
}

// ── Gazetteer ─────────────────────────────────────────────────────────────────

/// One named place.
#[derive(Clone, Debug, PartialEq)]
pub struct GazetteerEntry {
    pub name: String,
    pub coordinate: Coordinate,
    /// Lower-cased `name`, precomputed for matching.
    key: String,
}

impl GazetteerEntry {
    pub fn new(name: impl Into<String>, coordinate: Coordinate) -> Self {
        let name = name.into();
        let key = name.to_lowercase();
        Self { name, coordinate, key }
    }
}

/// Ordered place-name table with a fallback coordinate.
#[derive(Clone, Debug)]
pub struct Gazetteer {
    entries: Vec<GazetteerEntry>,
    fallback: Coordinate,
}

impl Gazetteer {
    /// Build a gazetteer from entries in match order.
    pub fn new(entries: Vec<GazetteerEntry>, fallback: Coordinate) -> Self {
        Self { entries, fallback }
    }

    /// The built-in table of 24 major US cities, falling back to the
    /// continental-US centroid.
    pub fn us_major_cities() -> Self {
        let entries = US_MAJOR_CITIES
            .iter()
            .map(|&(name, lat, lon)| GazetteerEntry::new(name, Coordinate::new(lat, lon)))
            .collect();
        Self::new(entries, US_CENTROID)
    }

    /// Replace the fallback coordinate.
    pub fn with_fallback(mut self, fallback: Coordinate) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn entries(&self) -> &[GazetteerEntry] {
        &self.entries
    }

    pub fn fallback(&self) -> Coordinate {
        self.fallback
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry whose name occurs in `text`, case-insensitively.
    pub fn find(&self, text: &str) -> Option<&GazetteerEntry> {
        let haystack = text.to_lowercase();
        self.entries
            .iter()
            .find(|e| !e.key.is_empty() && haystack.contains(e.key.as_str()))
    }
}

impl Default for Gazetteer {
    fn default() -> Self {
        Self::us_major_cities()
    }
}

impl Geocoder for Gazetteer {
    fn locate(&self, text: &str) -> Located {
        match self.find(text) {
            Some(entry) => {
                debug!(text, place = %entry.name, coordinate = %entry.coordinate, "location matched");
                Located {
                    coordinate: entry.coordinate,
                    resolution: Resolution::Matched(entry.name.clone()),
                }
            }
            None => {
                warn!(text, fallback = %self.fallback, "location not in gazetteer, using fallback");
                Located { coordinate: self.fallback, resolution: Resolution::Fallback }
            }
        }
    }
}
