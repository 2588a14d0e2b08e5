//! Stop planning along the pickup→dropoff line.
//!
//! # Timeline
//!
//! All arrivals are offsets from `anchor.now` (defaults shown):
//!
//! ```text
//! pickup            now + 1h                        (60 min)
//! departure         now + 2h                        (cursor, no stop)
//! fuel stop k       departure + naive · k·1000mi / d  (30 min)
//! mandatory break   departure + 8h                  (30 min, iff naive > 8h)
//! dropoff           departure + naive + 1h          (60 min)
//! ```
//!
//! `naive` and `d` come from the [`RouteSummary`], so every en-route
//! arrival falls inside the naive driving window and before the dropoff,
//! whatever speed the estimator assumed.
//!
//! Fuel stops and the break are merged by arrival time before `order` is
//! assigned.  The break (8h) always lands before the first fuel stop
//! (≥ 18.2h at defaults), so listing them in construction order would put
//! a later arrival ahead of an earlier one.
//!
//! # Geometry
//!
//! Fuel stops sit at `covered / total` of the straight pickup→dropoff line.
//! The break is drawn at the fixed `break_route_fraction` (0.6), not at the
//! distance actually driven by its arrival time.

use std::iter;

use chrono::NaiveDateTime;
use tracing::debug;

use eld_core::{PlanAnchor, PlannerConfig, StopKind, TripRequest, hours};

use crate::{Located, RouteSummary};

pub const MANDATORY_BREAK_LABEL: &str = "Mandatory Rest Break";

// ── Stop ──────────────────────────────────────────────────────────────────────

/// One scheduled stop on the route.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop {
    pub kind: StopKind,
    /// The request's location text for pickup/dropoff, a generated label
    /// (`Fuel Stop 2`, `Mandatory Rest Break`) otherwise.
    pub location: String,
    pub coordinate: eld_core::Coordinate,
    pub scheduled_arrival: NaiveDateTime,
    pub duration_minutes: u32,
    /// Zero-based position in the route.
    pub order: u32,
}

// ── RouteEndpoints ────────────────────────────────────────────────────────────

/// The three resolved points of a trip.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteEndpoints {
    pub current: Located,
    pub pickup: Located,
    pub dropoff: Located,
}

impl RouteEndpoints {
    /// `true` if every endpoint came from a real gazetteer match.
    pub fn all_resolved(&self) -> bool {
        self.current.is_resolved() && self.pickup.is_resolved() && self.dropoff.is_resolved()
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Lay out the ordered stops for one trip.
///
/// Total for any finite `summary.total_distance_miles >= 0`.  The result is
/// sorted by `order`, and `scheduled_arrival` is non-decreasing along it.
pub fn plan_stops(
    trip:      &TripRequest,
    summary:   &RouteSummary,
    endpoints: &RouteEndpoints,
    anchor:    &PlanAnchor,
    config:    &PlannerConfig,
) -> Vec<Stop> {
    let departure = anchor.now + hours(config.departure_offset_hours);

    let pickup = Stop {
        kind:              StopKind::Pickup,
        location:          trip.pickup_location.clone(),
        coordinate:        endpoints.pickup.coordinate,
        scheduled_arrival: anchor.now + hours(config.pickup_lead_hours),
        duration_minutes:  config.pickup_minutes,
        order:             0,
    };

    let mut en_route: Vec<Stop> = fuel_stops(summary, endpoints, departure, config)
        .into_iter()
        .chain(mandatory_break(summary, endpoints, departure, config))
        .collect();
    // Stable: equal arrivals keep fuel-before-break order.
    en_route.sort_by_key(|s| s.scheduled_arrival);

    let dropoff = Stop {
        kind:              StopKind::Dropoff,
        location:          trip.dropoff_location.clone(),
        coordinate:        endpoints.dropoff.coordinate,
        scheduled_arrival: departure
            + hours(summary.naive_driving_hours + config.arrival_buffer_hours),
        duration_minutes:  config.dropoff_minutes,
        order:             0,
    };

    let stops: Vec<Stop> = iter::once(pickup)
        .chain(en_route)
        .chain(iter::once(dropoff))
        .enumerate()
        .map(|(i, stop)| Stop { order: i as u32, ..stop })
        .collect();

    debug!(
        distance_miles = summary.total_distance_miles,
        naive_hours = summary.naive_driving_hours,
        stops = stops.len(),
        "planned route stops"
    );
    stops
}

/// Number of completed fuel intervals in `miles`.
#[inline]
pub fn fuel_stop_count(miles: f64, config: &PlannerConfig) -> u32 {
    (miles / config.fuel_interval_miles).floor().max(0.0) as u32
}

// ── Private helpers ───────────────────────────────────────────────────────────

fn fuel_stops(
    summary:   &RouteSummary,
    endpoints: &RouteEndpoints,
    departure: NaiveDateTime,
    config:    &PlannerConfig,
) -> Vec<Stop> {
    let total = summary.total_distance_miles;
    let (from, to) = (endpoints.pickup.coordinate, endpoints.dropoff.coordinate);

    (1..=fuel_stop_count(total, config))
        .map(|k| {
            // k ≥ 1 implies total ≥ fuel_interval_miles > 0.
            let fraction = f64::from(k) * config.fuel_interval_miles / total;
            Stop {
                kind:              StopKind::FuelStop,
                location:          format!("Fuel Stop {k}"),
                coordinate:        from.lerp(to, fraction),
                // Timed off the summary so it stays before the dropoff
                // whatever speed the estimator assumed.
                scheduled_arrival: departure + hours(summary.naive_driving_hours * fraction),
                duration_minutes:  config.fuel_stop_minutes,
                order:             0,
            }
        })
        .collect()
}

fn mandatory_break(
    summary:   &RouteSummary,
    endpoints: &RouteEndpoints,
    departure: NaiveDateTime,
    config:    &PlannerConfig,
) -> Option<Stop> {
    let threshold = config.limits.break_after_driving_hours;
    if summary.naive_driving_hours <= threshold {
        return None;
    }
    Some(Stop {
        kind:              StopKind::MandatoryBreak,
        location:          MANDATORY_BREAK_LABEL.to_owned(),
        coordinate:        endpoints
            .pickup
            .coordinate
            .lerp(endpoints.dropoff.coordinate, config.break_route_fraction),
        scheduled_arrival: departure + hours(threshold),
        duration_minutes:  config.break_minutes,
        order:             0,
    })
}
