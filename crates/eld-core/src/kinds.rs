//! Closed classification enums shared by the route, duty-log, and
//! compliance crates.
//!
//! Every enum carries an `as_str` wire value (snake_case, the form written
//! to JSON and log exports) and a `label` for human-facing display.

use std::fmt;

// ── StopKind ──────────────────────────────────────────────────────────────────

/// Why the driver stops at a point on the route.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum StopKind {
    Pickup,
    FuelStop,
    /// Reserved for off-duty rest periods; the planner does not emit it yet.
    RestStop,
    MandatoryBreak,
    Dropoff,
}

impl StopKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StopKind::Pickup         => "pickup",
            StopKind::FuelStop       => "fuel_stop",
            StopKind::RestStop       => "rest_stop",
            StopKind::MandatoryBreak => "mandatory_break",
            StopKind::Dropoff        => "dropoff",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StopKind::Pickup         => "Pickup",
            StopKind::FuelStop       => "Fuel Stop",
            StopKind::RestStop       => "Rest Stop",
            StopKind::MandatoryBreak => "Mandatory Break",
            StopKind::Dropoff        => "Dropoff",
        }
    }
}

impl fmt::Display for StopKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── DutyStatus ────────────────────────────────────────────────────────────────

/// The four duty statuses of a driver's record of duty status.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum DutyStatus {
    OffDuty,
    SleeperBerth,
    Driving,
    OnDutyNotDriving,
}

impl DutyStatus {
    /// `true` for statuses that count against the on-duty window.
    #[inline]
    pub fn is_on_duty(self) -> bool {
        matches!(self, DutyStatus::Driving | DutyStatus::OnDutyNotDriving)
    }

    #[inline]
    pub fn is_driving(self) -> bool {
        matches!(self, DutyStatus::Driving)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DutyStatus::OffDuty          => "off_duty",
            DutyStatus::SleeperBerth     => "sleeper_berth",
            DutyStatus::Driving          => "driving",
            DutyStatus::OnDutyNotDriving => "on_duty_not_driving",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DutyStatus::OffDuty          => "Off Duty",
            DutyStatus::SleeperBerth     => "Sleeper Berth",
            DutyStatus::Driving          => "Driving",
            DutyStatus::OnDutyNotDriving => "On Duty (Not Driving)",
        }
    }
}

impl fmt::Display for DutyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ViolationKind ─────────────────────────────────────────────────────────────

/// Which Hours-of-Service rule a finding refers to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ViolationKind {
    DailyDriving,
    DailyDuty,
    CycleLimit,
    MandatoryBreak,
}

impl ViolationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ViolationKind::DailyDriving   => "daily_driving",
            ViolationKind::DailyDuty      => "daily_duty",
            ViolationKind::CycleLimit     => "cycle_limit",
            ViolationKind::MandatoryBreak => "mandatory_break",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViolationKind::DailyDriving   => "Daily Driving Limit (11 hours)",
            ViolationKind::DailyDuty      => "Daily Duty Limit (14 hours)",
            ViolationKind::CycleLimit     => "70-Hour/8-Day Cycle Limit",
            ViolationKind::MandatoryBreak => "Mandatory 30-minute Break",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Severity ──────────────────────────────────────────────────────────────────

/// `Warning` findings are advisory; only `Violation` breaks compliance.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Severity {
    Warning,
    Violation,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Warning   => "warning",
            Severity::Violation => "violation",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
