//! Hours-of-Service evaluation of a duty log.
//!
//! # Checks
//!
//! Each check has a violation tier and a lower warning tier; the warning is
//! only reported when the violation tier did not fire.
//!
//! | Check            | Measured                         | Violation | Warning |
//! |------------------|----------------------------------|-----------|---------|
//! | `cycle_limit`    | request's `current_cycle_hours`  | ≥ 70      | ≥ 60    |
//! | `daily_driving`  | Σ `driving_hours`                | > 11      | > 10    |
//! | `daily_duty`     | Σ `on_duty_hours`                | > 14      | > 12    |
//! | `mandatory_break`| longest driving run without a ≥ 30 min non-driving segment | > 8 | — |
//!
//! Findings are reported in the table's order.

use tracing::debug;

use eld_core::{HosLimits, Severity, TripRequest, ViolationKind};

use crate::{DailySummary, DutySegment};

// ── Violation ─────────────────────────────────────────────────────────────────

/// One compliance finding.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Violation {
    pub kind: ViolationKind,
    pub severity: Severity,
    /// Human-readable; always includes the measured value.
    pub description: String,
}

impl Violation {
    fn new(kind: ViolationKind, severity: Severity, description: String) -> Self {
        Self { kind, severity, description }
    }
}

// ── ComplianceResult ──────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComplianceResult {
    pub violations: Vec<Violation>,
    /// `cycle_limit_hours − current_cycle_hours`; negative when the input
    /// already exceeds the cycle.
    pub remaining_cycle_hours: f64,
    /// `true` iff no finding has severity `Violation`.
    pub is_compliant: bool,
}

impl ComplianceResult {
    /// `"compliant"` or `"violation"`.
    pub fn status(&self) -> &'static str {
        if self.is_compliant { "compliant" } else { "violation" }
    }

    /// Number of findings with the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.violations.iter().filter(|v| v.severity == severity).count()
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Evaluate the trip's cycle hours and its duty log against `limits`.
pub fn check_compliance(
    segments: &[DutySegment],
    trip:     &TripRequest,
    limits:   &HosLimits,
) -> ComplianceResult {
    let totals = DailySummary::from_log(segments, limits);

    let violations: Vec<Violation> = [
        check_cycle(trip.current_cycle_hours, limits),
        check_daily_driving(totals.total_driving_hours, limits),
        check_daily_duty(totals.total_on_duty_hours, limits),
        check_break(segments, limits),
    ]
    .into_iter()
    .flatten()
    .collect();

    let is_compliant = violations.iter().all(|v| v.severity != Severity::Violation);
    let remaining_cycle_hours = limits.cycle_limit_hours - trip.current_cycle_hours;

    debug!(
        findings = violations.len(),
        is_compliant,
        remaining_cycle_hours,
        "evaluated hours of service"
    );

    ComplianceResult { violations, remaining_cycle_hours, is_compliant }
}

// ── Individual checks ─────────────────────────────────────────────────────────

fn check_cycle(used: f64, limits: &HosLimits) -> Option<Violation> {
    let limit = limits.cycle_limit_hours;
    if used >= limit {
        Some(Violation::new(
            ViolationKind::CycleLimit,
            Severity::Violation,
            format!("Driver has reached the {limit}-hour limit for the 8-day cycle ({used:.1} hours used)"),
        ))
    } else if used >= limits.cycle_warning_hours {
        Some(Violation::new(
            ViolationKind::CycleLimit,
            Severity::Warning,
            format!("Driver approaching the {limit}-hour limit for the 8-day cycle ({used:.1} hours used)"),
        ))
    } else {
        None
    }
}

fn check_daily_driving(total: f64, limits: &HosLimits) -> Option<Violation> {
    let limit = limits.max_driving_hours;
    if total > limit {
        Some(Violation::new(
            ViolationKind::DailyDriving,
            Severity::Violation,
            format!("Daily driving time ({total:.1} hours) exceeds {limit}-hour limit"),
        ))
    } else if total > limits.driving_warning_hours {
        Some(Violation::new(
            ViolationKind::DailyDriving,
            Severity::Warning,
            format!("Daily driving time ({total:.1} hours) approaching {limit}-hour limit"),
        ))
    } else {
        None
    }
}

fn check_daily_duty(total: f64, limits: &HosLimits) -> Option<Violation> {
    let limit = limits.max_duty_hours;
    if total > limit {
        Some(Violation::new(
            ViolationKind::DailyDuty,
            Severity::Violation,
            format!("Daily on-duty time ({total:.1} hours) exceeds {limit}-hour limit"),
        ))
    } else if total > limits.duty_warning_hours {
        Some(Violation::new(
            ViolationKind::DailyDuty,
            Severity::Warning,
            format!("Daily on-duty time ({total:.1} hours) approaching {limit}-hour limit"),
        ))
    } else {
        None
    }
}

fn check_break(segments: &[DutySegment], limits: &HosLimits) -> Option<Violation> {
    let longest = longest_driving_run(segments, limits.min_break_minutes);
    let threshold = limits.break_after_driving_hours;
    (longest > threshold).then(|| {
        Violation::new(
            ViolationKind::MandatoryBreak,
            Severity::Violation,
            format!(
                "Driving ran {longest:.1} hours without a {}-minute break ({threshold}-hour limit)",
                limits.min_break_minutes
            ),
        )
    })
}

/// Longest cumulative driving between qualifying breaks.
///
/// Any non-driving segment of at least `min_break_minutes` resets the
/// count, whatever its status.  Shorter non-driving segments pause it.
pub(crate) fn longest_driving_run(segments: &[DutySegment], min_break_minutes: u32) -> f64 {
    segments
        .iter()
        .scan(0.0_f64, |run, seg| {
            if seg.duty_status.is_driving() {
                *run += seg.driving_hours;
            } else if seg.minutes() >= i64::from(min_break_minutes) {
                *run = 0.0;
            }
            Some(*run)
        })
        .fold(0.0, f64::max)
}
