//! Per-day totals of a duty log.

use eld_core::HosLimits;

use crate::DutySegment;

/// Totals for the log and the hours left under the daily limits.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DailySummary {
    pub total_driving_hours: f64,
    pub total_on_duty_hours: f64,
    pub total_miles: u32,
    /// `max(0, max_driving_hours − total_driving_hours)`.
    pub remaining_driving_hours: f64,
    /// `max(0, max_duty_hours − total_on_duty_hours)`.
    pub remaining_on_duty_hours: f64,
}

impl DailySummary {
    pub fn from_log(segments: &[DutySegment], limits: &HosLimits) -> Self {
        let total_driving_hours: f64 = segments.iter().map(|s| s.driving_hours).sum();
        let total_on_duty_hours: f64 = segments.iter().map(|s| s.on_duty_hours).sum();
        let total_miles = segments.iter().map(|s| s.vehicle_miles).sum();

        Self {
            total_driving_hours,
            total_on_duty_hours,
            total_miles,
            remaining_driving_hours: (limits.max_driving_hours - total_driving_hours).max(0.0),
            remaining_on_duty_hours: (limits.max_duty_hours - total_on_duty_hours).max(0.0),
        }
    }
}
