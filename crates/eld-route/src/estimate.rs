//! Distance and naive duration between two coordinates.

use eld_core::{Coordinate, DEFAULT_AVERAGE_SPEED_MPH};

// ── RouteSummary ──────────────────────────────────────────────────────────────

/// Distance and planning-grade driving time for one pickup→dropoff run.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteSummary {
    pub total_distance_miles: f64,
    /// `total_distance_miles / average_speed`.  Not capped to any
    /// regulatory limit; the duty log caps its own copy.
    pub naive_driving_hours: f64,
}

impl RouteSummary {
    /// Summary for `miles` at a constant `speed_mph`.
    pub fn from_distance(miles: f64, speed_mph: f64) -> Self {
        Self {
            total_distance_miles: miles,
            naive_driving_hours: miles / speed_mph,
        }
    }
}

// ── DistanceEstimator trait ───────────────────────────────────────────────────

/// Pluggable distance/duration estimate.
///
/// The default [`GreatCircleEstimator`] ignores the road network entirely;
/// a routing-API client would implement this trait with real road miles.
pub trait DistanceEstimator: Send + Sync {
    fn estimate(&self, from: Coordinate, to: Coordinate) -> RouteSummary;
}

// ── GreatCircleEstimator ──────────────────────────────────────────────────────

/// Haversine distance at a constant average speed (no traffic, terrain or
/// rest time).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GreatCircleEstimator {
    pub average_speed_mph: f64,
}

impl GreatCircleEstimator {
    pub fn new(average_speed_mph: f64) -> Self {
        Self { average_speed_mph }
    }
}

impl Default for GreatCircleEstimator {
    fn default() -> Self {
        Self { average_speed_mph: DEFAULT_AVERAGE_SPEED_MPH }
    }
}

impl DistanceEstimator for GreatCircleEstimator {
    fn estimate(&self, from: Coordinate, to: Coordinate) -> RouteSummary {
        RouteSummary::from_distance(from.distance_miles(to), self.average_speed_mph)
    }
}
