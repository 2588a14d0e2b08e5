//! `eld-planner` — the end-to-end trip planning pipeline.
//!
//! # Pipeline
//!
//! ```text
//! TripRequest ──validate──► locate (Geocoder) ──► estimate (DistanceEstimator)
//!                                                   │
//!                    ┌──────────────────────────────┤
//!                    ▼                              ▼
//!             plan_stops (route)          segment_duty_log (hos)
//!                    │                              │
//!                    │                       check_compliance
//!                    ▼                              ▼
//!                 TripPlan  ──wire──►  { route, hos_compliance, … }
//! ```
//!
//! Every stage is a pure function of the request, the [`PlanAnchor`] and
//! the [`PlannerConfig`]; a planner can be shared across threads and the
//! same inputs always yield the same plan.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | [`TripPlanner::plan_batch`] runs on Rayon's thread pool. |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use eld_core::{PlanAnchor, PlannerConfig, TripRequest};
//! use eld_planner::{TripPlannerBuilder, TripResponse};
//!
//! let planner = TripPlannerBuilder::new(PlannerConfig::default()).build()?;
//! let request = TripRequest::new("Chicago, IL", "Dallas, TX", "Atlanta, GA", 42.0);
//! let plan = planner.plan(&request, PlanAnchor::at(now))?;
//! let body = serde_json::to_string(&TripResponse::from(&plan))?;
//! ```
//!
//! [`PlanAnchor`]: eld_core::PlanAnchor
//! [`PlannerConfig`]: eld_core::PlannerConfig

pub mod builder;
pub mod error;
pub mod planner;
pub mod wire;


pub use builder::TripPlannerBuilder;
pub use error::{PlannerError, PlannerResult};
pub use planner::{TripPlan, TripPlanner};
pub use wire::{
    DailySummaryResponse, EldLogResponse, HosComplianceResponse, LocationResponse,
    LocationsResponse,
    RouteResponse, StopResponse, TripResponse, ViolationResponse,
};
