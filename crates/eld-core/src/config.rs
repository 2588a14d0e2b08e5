//! Planner configuration.
//!
//! `PlannerConfig::default()` is the standard property-carrying interstate
//! profile: 55 mph average speed, fuel every 1,000 miles, and the FMCSA
//! 11/14/70 limits with advisory warnings one to ten hours below each.
//! Applications may load an override from JSON (feature `serde`); omitted
//! fields keep their defaults.

use crate::{EldError, EldResult};

/// Planning speed used when nothing else is configured.
pub const DEFAULT_AVERAGE_SPEED_MPH: f64 = 55.0;

// ── HosLimits ─────────────────────────────────────────────────────────────────

/// Hours-of-Service thresholds used by the compliance checker.
///
/// Daily totals fire when *strictly greater* than the threshold; the cycle
/// check fires when *greater than or equal*.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct HosLimits {
    pub max_driving_hours: f64,
    pub driving_warning_hours: f64,
    pub max_duty_hours: f64,
    pub duty_warning_hours: f64,
    pub cycle_limit_hours: f64,
    pub cycle_warning_hours: f64,
    /// Cumulative driving after which a 30-minute break is required.
    pub break_after_driving_hours: f64,
    /// Shortest non-driving interval that counts as that break.
    pub min_break_minutes: u32,
}

impl Default for HosLimits {
    fn default() -> Self {
        Self {
            max_driving_hours:         11.0,
            driving_warning_hours:     10.0,
            max_duty_hours:            14.0,
            duty_warning_hours:        12.0,
            cycle_limit_hours:         70.0,
            cycle_warning_hours:       60.0,
            break_after_driving_hours: 8.0,
            min_break_minutes:         30,
        }
    }
}

impl HosLimits {
    /// Limits must be positive, warnings within `[0, limit]`, and the
    /// qualifying break at least one minute.
    pub fn validate(&self) -> EldResult<()> {
        for (limit_name, limit, warning_name, warning) in [
            ("max_driving_hours", self.max_driving_hours, "driving_warning_hours", self.driving_warning_hours),
            ("max_duty_hours", self.max_duty_hours, "duty_warning_hours", self.duty_warning_hours),
            ("cycle_limit_hours", self.cycle_limit_hours, "cycle_warning_hours", self.cycle_warning_hours),
        ] {
            positive(limit_name, limit)?;
            non_negative(warning_name, warning)?;
            if warning > limit {
                return Err(EldError::Config(format!(
                    "{warning_name} ({warning}) must not exceed {limit_name} ({limit})"
                )));
            }
        }
        positive("break_after_driving_hours", self.break_after_driving_hours)?;
        if self.min_break_minutes == 0 {
            return Err(EldError::Config("min_break_minutes must be > 0".into()));
        }
        Ok(())
    }
}

// ── PlannerConfig ─────────────────────────────────────────────────────────────

/// Top-level planning configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PlannerConfig {
    /// Constant average speed for every time estimate.  Must be > 0.
    pub average_speed_mph: f64,

    /// One fuel stop per completed interval.  Must be > 0.
    pub fuel_interval_miles: f64,

    /// Hours from `now` until the driver reaches the pickup.
    pub pickup_lead_hours: f64,

    /// Hours from `now` until the loaded truck departs the pickup.
    pub departure_offset_hours: f64,

    /// Extra hours added to the naive driving time for the dropoff ETA
    /// (break and approach buffer).
    pub arrival_buffer_hours: f64,

    /// Fraction of the pickup→dropoff line where the break stop is drawn.
    ///
    /// Fixed rather than derived from the break's arrival time, so the
    /// marker does not move with trip length.
    pub break_route_fraction: f64,

    pub pickup_minutes: u32,
    pub dropoff_minutes: u32,
    pub fuel_stop_minutes: u32,
    pub break_minutes: u32,

    /// Local hour at which the duty log begins on the anchor day.
    pub log_start_hour: u32,

    pub limits: HosLimits,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            average_speed_mph:      DEFAULT_AVERAGE_SPEED_MPH,
            fuel_interval_miles:    1_000.0,
            pickup_lead_hours:      1.0,
            departure_offset_hours: 2.0,
            arrival_buffer_hours:   1.0,
            break_route_fraction:   0.6,
            pickup_minutes:         60,
            dropoff_minutes:        60,
            fuel_stop_minutes:      30,
            break_minutes:          30,
            log_start_hour:         8,
            limits:                 HosLimits::default(),
        }
    }
}

impl PlannerConfig {
    /// Check the invariants the planning functions rely on.
    ///
    /// Division by `average_speed_mph` and `fuel_interval_miles` is only
    /// total when both are finite and positive.  Every hour value must be
    /// finite and non-negative; the break threshold must be positive so the
    /// break lands after departure.
    pub fn validate(&self) -> EldResult<()> {
        positive("average_speed_mph", self.average_speed_mph)?;
        positive("fuel_interval_miles", self.fuel_interval_miles)?;
        if self.log_start_hour >= 24 {
            return Err(EldError::Config(format!(
                "log_start_hour must be < 24, got {}",
                self.log_start_hour
            )));
        }
        if [self.pickup_minutes, self.dropoff_minutes, self.fuel_stop_minutes, self.break_minutes]
            .contains(&0)
        {
            return Err(EldError::Config("stop durations must be > 0 minutes".into()));
        }
        non_negative("pickup_lead_hours", self.pickup_lead_hours)?;
        non_negative("departure_offset_hours", self.departure_offset_hours)?;
        non_negative("arrival_buffer_hours", self.arrival_buffer_hours)?;
        if self.departure_offset_hours < self.pickup_lead_hours {
            return Err(EldError::Config(
                "departure_offset_hours must be >= pickup_lead_hours".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.break_route_fraction) {
            return Err(EldError::Config(format!(
                "break_route_fraction must be within [0, 1], got {}",
                self.break_route_fraction
            )));
        }
        self.limits.validate()
    }

    /// Hours needed to cover `miles` at the configured average speed.
    #[inline]
    pub fn hours_for_miles(&self, miles: f64) -> f64 {
        miles / self.average_speed_mph
    }
}

fn positive(name: &str, value: f64) -> EldResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(EldError::Config(format!("{name} must be positive, got {value}")))
    }
}

fn non_negative(name: &str, value: f64) -> EldResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(EldError::Config(format!("{name} must be >= 0, got {value}")))
    }
}
