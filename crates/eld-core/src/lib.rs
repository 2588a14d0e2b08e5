//! `eld-core` — foundational types for the ELD trip planner.
//!
//! This crate is a dependency of every other `eld-*` crate.  It has no
//! `eld-*` dependencies and minimal external ones (`chrono` and `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`geo`]       | `Coordinate`, haversine distance in miles, interpolation|
//! | [`time`]      | `PlanAnchor`, fractional-hour `Duration` helpers        |
//! | [`kinds`]     | `StopKind`, `DutyStatus`, `ViolationKind`, `Severity`   |
//! | [`trip`]      | `TripRequest` and its validation                        |
//! | [`config`]    | `PlannerConfig`, `HosLimits`                            |
//! | [`error`]     | `EldError`, `EldResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod kinds;
pub mod time;
pub mod trip;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{DEFAULT_AVERAGE_SPEED_MPH, HosLimits, PlannerConfig};
pub use error::{EldError, EldResult};
pub use geo::Coordinate;
pub use kinds::{DutyStatus, Severity, StopKind, ViolationKind};
pub use time::{PlanAnchor, duration_hours, hours};
pub use trip::TripRequest;
