//! `eld-hos` — the driver's duty-status log for a trip and its
//! Hours-of-Service evaluation.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                |
//! |----------------|---------------------------------------------------------|
//! | [`segment`]    | `DutySegment`, `segment_duty_log`, `capped_driving_hours` |
//! | [`compliance`] | `Violation`, `ComplianceResult`, `check_compliance`     |
//! | [`summary`]    | `DailySummary` totals and remaining hours               |
//!
//! # Independence from the stop list
//!
//! The log is derived from the trip's total distance alone and does not
//! read `eld-route`'s stops.  The route uses the uncapped naive driving
//! time to place stops; the log uses [`capped_driving_hours`].  The two
//! timelines therefore need not agree (a 500-mile trip gets a break *stop*
//! but a single unbroken driving *segment*), and the compliance checker
//! reports what the log shows.

pub mod compliance;
pub mod segment;
pub mod summary;


pub use compliance::{ComplianceResult, Violation, check_compliance};
pub use segment::{DutySegment, capped_driving_hours, segment_duty_log};
pub use summary::DailySummary;
