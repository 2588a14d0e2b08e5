//! Serializable response shapes.
//!
//! The two groups callers rely on are `route` and `hos_compliance`; the
//! `locations` and `daily_summary` groups are additive.  Timestamps are
//! ISO-8601 without offset, log clock times are `HH:MM:SS`.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use eld_core::{DutyStatus, Severity, StopKind, ViolationKind};
use eld_hos::{DailySummary, DutySegment, Violation};
use eld_route::{Located, Stop};
use serde::Serialize;

use crate::TripPlan;

const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const CLOCK_FORMAT: &str = "%H:%M:%S";

fn iso(ts: NaiveDateTime) -> String {
    ts.format(ISO_FORMAT).to_string()
}

fn clock(t: NaiveTime) -> String {
    t.format(CLOCK_FORMAT).to_string()
}

// ── Top level ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TripResponse {
    pub route: RouteResponse,
    pub hos_compliance: HosComplianceResponse,
    pub locations: LocationsResponse,
    pub daily_summary: DailySummaryResponse,
}

impl From<&TripPlan> for TripResponse {
    fn from(plan: &TripPlan) -> Self {
        let created_at = iso(plan.anchor.now);
        Self {
            route: RouteResponse {
                total_distance: plan.summary.total_distance_miles,
                estimated_duration: plan.summary.naive_driving_hours,
                stops: plan.stops.iter().map(StopResponse::from).collect(),
                route_geometry: plan.geometry.clone(),
            },
            hos_compliance: HosComplianceResponse {
                violations: plan
                    .compliance
                    .violations
                    .iter()
                    .map(|v| ViolationResponse::new(v, &created_at))
                    .collect(),
                eld_logs: plan.duty_log.iter().map(EldLogResponse::from).collect(),
                remaining_hours: plan.compliance.remaining_cycle_hours,
                can_complete_trip: plan.compliance.is_compliant,
                status: plan.compliance.status(),
            },
            locations: LocationsResponse {
                current: LocationResponse::from(&plan.endpoints.current),
                pickup: LocationResponse::from(&plan.endpoints.pickup),
                dropoff: LocationResponse::from(&plan.endpoints.dropoff),
            },
            daily_summary: DailySummaryResponse::from(&plan.daily_summary),
        }
    }
}

// ── route ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RouteResponse {
    /// Miles, pickup → dropoff.
    pub total_distance: f64,
    /// Naive driving hours, uncapped.
    pub estimated_duration: f64,
    pub stops: Vec<StopResponse>,
    /// `[longitude, latitude]` pairs.
    pub route_geometry: Vec<[f64; 2]>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StopResponse {
    pub stop_type: StopKind,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub estimated_arrival: String,
    pub duration_minutes: u32,
    pub order: u32,
}

impl From<&Stop> for StopResponse {
    fn from(stop: &Stop) -> Self {
        Self {
            stop_type: stop.kind,
            location: stop.location.clone(),
            latitude: stop.coordinate.lat,
            longitude: stop.coordinate.lon,
            estimated_arrival: iso(stop.scheduled_arrival),
            duration_minutes: stop.duration_minutes,
            order: stop.order,
        }
    }
}

// ── hos_compliance ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HosComplianceResponse {
    pub violations: Vec<ViolationResponse>,
    pub eld_logs: Vec<EldLogResponse>,
    /// Cycle hours left; negative when the cycle is already exceeded.
    pub remaining_hours: f64,
    pub can_complete_trip: bool,
    /// `compliant` or `violation`.
    pub status: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ViolationResponse {
    pub violation_type: ViolationKind,
    pub description: String,
    pub severity: Severity,
    pub created_at: String,
}

impl ViolationResponse {
    fn new(violation: &Violation, created_at: &str) -> Self {
        Self {
            violation_type: violation.kind,
            description: violation.description.clone(),
            severity: violation.severity,
            created_at: created_at.to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EldLogResponse {
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub duty_status: DutyStatus,
    pub location: String,
    pub vehicle_miles: u32,
    pub total_hours: f64,
    pub driving_time: f64,
    pub on_duty_time: f64,
}

impl From<&DutySegment> for EldLogResponse {
    fn from(seg: &DutySegment) -> Self {
        Self {
            date: seg.date,
            start_time: clock(seg.start.time()),
            end_time: clock(seg.end.time()),
            duty_status: seg.duty_status,
            location: seg.location.clone(),
            vehicle_miles: seg.vehicle_miles,
            total_hours: seg.total_hours,
            driving_time: seg.driving_hours,
            on_duty_time: seg.on_duty_hours,
        }
    }
}

// ── locations ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LocationsResponse {
    pub current: LocationResponse,
    pub pickup: LocationResponse,
    pub dropoff: LocationResponse,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LocationResponse {
    pub latitude: f64,
    pub longitude: f64,
    /// `false` when the text matched nothing and the fallback was used.
    pub resolved: bool,
}

impl From<&Located> for LocationResponse {
    fn from(located: &Located) -> Self {
        Self {
            latitude: located.coordinate.lat,
            longitude: located.coordinate.lon,
            resolved: located.is_resolved(),
        }
    }
}

// ── daily_summary ─────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DailySummaryResponse {
    pub total_driving_hours: f64,
    pub total_on_duty_hours: f64,
    pub total_miles: u32,
    pub remaining_driving_hours: f64,
    pub remaining_on_duty_hours: f64,
}

impl From<&DailySummary> for DailySummaryResponse {
    fn from(s: &DailySummary) -> Self {
        Self {
            total_driving_hours: s.total_driving_hours,
            total_on_duty_hours: s.total_on_duty_hours,
            total_miles: s.total_miles,
            remaining_driving_hours: s.remaining_driving_hours,
            remaining_on_duty_hours: s.remaining_on_duty_hours,
        }
    }
}
