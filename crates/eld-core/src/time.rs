//! Planning time model.
//!
//! # Design
//!
//! Nothing in the planner reads the wall clock.  Every time-dependent entry
//! point takes a [`PlanAnchor`] instead:
//!
//!   stop arrivals     = anchor.now + offsets
//!   duty log start    = anchor.today at the configured start hour
//!
//! The same anchor and request always produce identical output, so tests
//! can pin time and callers decide what "now" means (server local time,
//! a dispatch timestamp, …).
//!
//! Durations in the planner are fractional hours (`9.0909…` h of driving).
//! They are converted to `chrono::Duration` at microsecond precision.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

const MICROS_PER_HOUR: f64 = 3_600_000_000.0;

// ── PlanAnchor ────────────────────────────────────────────────────────────────

/// The explicit "now" that a planning run is evaluated against.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanAnchor {
    /// Origin for scheduled stop arrivals and violation timestamps.
    pub now: NaiveDateTime,
    /// Calendar day the duty log is laid down on.
    pub today: NaiveDate,
}

impl PlanAnchor {
    pub fn new(now: NaiveDateTime, today: NaiveDate) -> Self {
        Self { now, today }
    }

    /// Anchor whose `today` is the calendar date of `now`.
    pub fn at(now: NaiveDateTime) -> Self {
        Self { now, today: now.date() }
    }

    /// Midnight plus `hour` hours on `today`.
    pub fn day_start(&self, hour: u32) -> NaiveDateTime {
        self.today.and_time(NaiveTime::default()) + Duration::hours(i64::from(hour))
    }
}

impl std::fmt::Display for PlanAnchor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (log day {})", self.now.format("%Y-%m-%dT%H:%M:%S"), self.today)
    }
}

// ── Fractional hours ──────────────────────────────────────────────────────────

/// Convert fractional hours to a `Duration`, rounded to the microsecond.
#[inline]
pub fn hours(h: f64) -> Duration {
    Duration::microseconds((h * MICROS_PER_HOUR).round() as i64)
}

/// Length of `d` in fractional hours.
#[inline]
pub fn duration_hours(d: Duration) -> f64 {
    match d.num_microseconds() {
        Some(us) => us as f64 / MICROS_PER_HOUR,
        // Only reachable for spans beyond ~292k years.
        None => d.num_seconds() as f64 / 3_600.0,
    }
}
