//! Duty-log segmentation.
//!
//! # Log shape
//!
//! The log starts at `log_start_hour` (08:00) on `anchor.today` and lays
//! down segments end to end.  Stop segments take their length from the
//! matching `PlannerConfig` minutes and the long-haul branch from
//! `fuel_interval_miles`; defaults shown:
//!
//! ```text
//! 0.5h  on_duty_not_driving   pre-trip inspection     (current location)
//! 1h    driving               en route to pickup
//! 1h    on_duty_not_driving   pickup
//! ── distance > fuel interval (1000 mi) ───────────────────────────────
//! 4h    driving               en route to Fuel Stop 1   (220 mi flat)
//! 0.5h  on_duty_not_driving   Fuel Stop 1
//! 4h    driving               en route to Fuel Stop 2   (220 mi flat)
//! 0.5h  on_duty_not_driving   Fuel Stop 2
//! 0.5h  sleeper_berth         Mandatory Rest Break      (iff capped > 8h)
//! N h   driving               en route to dropoff, N = max(1, capped − 8)
//! ── otherwise ────────────────────────────────────────────────────────
//! capped h  driving           en route to dropoff       (omitted if 0)
//! ─────────────────────────────────────────────────────────────────────
//! 1h    on_duty_not_driving   dropoff
//! ```
//!
//! `capped = min(11, distance / speed)`.  Driving miles are
//! `round(hours × speed)` except the two flat 4h legs.

use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

use eld_core::{DutyStatus, PlanAnchor, PlannerConfig, TripRequest, duration_hours, hours};
use eld_route::{MANDATORY_BREAK_LABEL, RouteSummary};

const PRE_TRIP_HOURS:            f64 = 0.5;
const TO_PICKUP_HOURS:           f64 = 1.0;
const LONG_HAUL_LEG_HOURS:       f64 = 4.0;
const LONG_HAUL_LEG_MILES:       u32 = 220;
const MIN_FINAL_LEG_HOURS:       f64 = 1.0;

// ── DutySegment ───────────────────────────────────────────────────────────────

/// One contiguous interval of the duty log.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DutySegment {
    /// Calendar date of `start`.
    pub date: NaiveDate,
    pub start: NaiveDateTime,
    /// Strictly after `start`; may fall on the next calendar day.
    pub end: NaiveDateTime,
    pub duty_status: DutyStatus,
    pub location: String,
    pub vehicle_miles: u32,
    pub total_hours: f64,
    /// Equal to `total_hours` for driving segments, zero otherwise.
    pub driving_hours: f64,
    /// Equal to `total_hours` for driving and on-duty segments, zero otherwise.
    pub on_duty_hours: f64,
}

impl DutySegment {
    /// Length measured from the timestamps (microsecond precision).
    pub fn elapsed_hours(&self) -> f64 {
        duration_hours(self.end - self.start)
    }

    /// Length in whole minutes, truncated.
    pub fn minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Driving hours the log accounts for: the naive estimate capped at the
/// daily driving limit.
#[inline]
pub fn capped_driving_hours(summary: &RouteSummary, config: &PlannerConfig) -> f64 {
    config
        .limits
        .max_driving_hours
        .min(config.hours_for_miles(summary.total_distance_miles))
}

/// Build the contiguous duty log for one trip.
pub fn segment_duty_log(
    trip:    &TripRequest,
    summary: &RouteSummary,
    anchor:  &PlanAnchor,
    config:  &PlannerConfig,
) -> Vec<DutySegment> {
    let legs = plan_legs(trip, summary, config);
    let segments = lay_down(legs, anchor.day_start(config.log_start_hour));

    debug!(
        segments = segments.len(),
        capped_driving_hours = capped_driving_hours(summary, config),
        "segmented duty log"
    );
    segments
}

// ── Private helpers ───────────────────────────────────────────────────────────

/// A segment before it is placed on the clock.
struct Leg {
    status:   DutyStatus,
    location: String,
    hours:    f64,
    miles:    u32,
}

impl Leg {
    fn on_duty(location: impl Into<String>, hours: f64) -> Self {
        Self { status: DutyStatus::OnDutyNotDriving, location: location.into(), hours, miles: 0 }
    }

    fn driving(location: impl Into<String>, hours: f64, miles: u32) -> Self {
        Self { status: DutyStatus::Driving, location: location.into(), hours, miles }
    }

    fn sleeper(location: impl Into<String>, hours: f64) -> Self {
        Self { status: DutyStatus::SleeperBerth, location: location.into(), hours, miles: 0 }
    }
}

fn plan_legs(trip: &TripRequest, summary: &RouteSummary, config: &PlannerConfig) -> Vec<Leg> {
    let capped = capped_driving_hours(summary, config);
    let miles_for = |h: f64| (h * config.average_speed_mph).round() as u32;
    let fuel_hours = minutes_to_hours(config.fuel_stop_minutes);
    let to_dropoff = format!("En route to {}", trip.dropoff_location);

    let opening = [
        Leg::on_duty(trip.current_location.as_str(), PRE_TRIP_HOURS),
        Leg::driving(
            format!("En route to {}", trip.pickup_location),
            TO_PICKUP_HOURS,
            miles_for(TO_PICKUP_HOURS),
        ),
        Leg::on_duty(trip.pickup_location.as_str(), minutes_to_hours(config.pickup_minutes)),
    ];

    let main: Vec<Leg> = if summary.total_distance_miles > config.fuel_interval_miles {
        let final_hours = MIN_FINAL_LEG_HOURS.max(capped - 2.0 * LONG_HAUL_LEG_HOURS);
        let rest = (capped > config.limits.break_after_driving_hours)
            .then(|| Leg::sleeper(MANDATORY_BREAK_LABEL, minutes_to_hours(config.break_minutes)));

        [
            Leg::driving("En route to Fuel Stop 1", LONG_HAUL_LEG_HOURS, LONG_HAUL_LEG_MILES),
            Leg::on_duty("Fuel Stop 1", fuel_hours),
            Leg::driving("En route to Fuel Stop 2", LONG_HAUL_LEG_HOURS, LONG_HAUL_LEG_MILES),
            Leg::on_duty("Fuel Stop 2", fuel_hours),
        ]
        .into_iter()
        .chain(rest)
        .chain([Leg::driving(to_dropoff, final_hours, miles_for(final_hours))])
        .collect()
    } else if capped > 0.0 {
        vec![Leg::driving(to_dropoff, capped, miles_for(capped))]
    } else {
        // Zero distance: nothing to drive, and a zero-length segment
        // would break end > start.
        Vec::new()
    };

    opening
        .into_iter()
        .chain(main)
        .chain([Leg::on_duty(trip.dropoff_location.as_str(), minutes_to_hours(config.dropoff_minutes))])
        .collect()
}

#[inline]
fn minutes_to_hours(minutes: u32) -> f64 {
    f64::from(minutes) / 60.0
}

/// Place legs end to end starting at `start`.
fn lay_down(legs: Vec<Leg>, start: NaiveDateTime) -> Vec<DutySegment> {
    legs.into_iter()
        .scan(start, |cursor, leg| {
            let begin = *cursor;
            let end = begin + hours(leg.hours);
            *cursor = end;

            let driving = if leg.status.is_driving() { leg.hours } else { 0.0 };
            let on_duty = if leg.status.is_on_duty() { leg.hours } else { 0.0 };
            Some(DutySegment {
                date:          begin.date(),
                start:         begin,
                end,
                duty_status:   leg.status,
                location:      leg.location,
                vehicle_miles: leg.miles,
                total_hours:   leg.hours,
                driving_hours: driving,
                on_duty_hours: on_duty,
            })
        })
        .collect()
}
