//! `eld-route` — locating trip endpoints and laying out the stops between them.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`locator`]   | `Geocoder` trait, `Gazetteer`, `Located`, `Resolution`     |
//! | [`loader`]    | `load_gazetteer_csv`, `load_gazetteer_reader`              |
//! | [`estimate`]  | `DistanceEstimator` trait, `GreatCircleEstimator`, `RouteSummary` |
//! | [`planner`]   | `Stop`, `RouteEndpoints`, `plan_stops`                     |
//! | [`geometry`]  | `route_geometry` (`[lon, lat]` polyline)                   |
//! | [`error`]     | `RouteError`, `RouteResult<T>`                             |
//!
//! # Pluggability
//!
//! The gazetteer and great-circle estimator are stand-ins for a geocoding
//! service and a road-routing API.  `eld-planner` talks to both through the
//! [`Geocoder`] and [`DistanceEstimator`] traits, so real services can be
//! swapped in without touching the stop planner.

pub mod error;
pub mod estimate;
pub mod geometry;
pub mod loader;
pub mod locator;
pub mod planner;

#[cfg(test)]
mod tests;

pub use error::{RouteError, RouteResult};
pub use estimate::{DistanceEstimator, GreatCircleEstimator, RouteSummary};
pub use geometry::route_geometry;
pub use loader::{load_gazetteer_csv, load_gazetteer_reader};
pub use locator::{Gazetteer, GazetteerEntry, Geocoder, Located, Resolution};
pub use planner::{MANDATORY_BREAK_LABEL, RouteEndpoints, Stop, fuel_stop_count, plan_stops};
