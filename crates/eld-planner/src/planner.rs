//! The planning pipeline: one request in, one fully evaluated plan out.

use eld_core::{PlanAnchor, PlannerConfig, TripRequest};
use eld_hos::{ComplianceResult, DailySummary, DutySegment, check_compliance, segment_duty_log};
use eld_route::{
    DistanceEstimator, Gazetteer, Geocoder, GreatCircleEstimator, RouteEndpoints, RouteSummary,
    Stop, plan_stops, route_geometry,
};
use tracing::{info, warn};

use crate::PlannerResult;

// ── TripPlan ──────────────────────────────────────────────────────────────────

/// Everything computed for one trip.
#[derive(Clone, Debug, PartialEq)]
pub struct TripPlan {
    pub request: TripRequest,
    pub anchor: PlanAnchor,
    pub endpoints: RouteEndpoints,
    /// Pickup → dropoff estimate.
    pub summary: RouteSummary,
    pub stops: Vec<Stop>,
    /// `[lon, lat]` for current, pickup, dropoff.
    pub geometry: Vec<[f64; 2]>,
    pub duty_log: Vec<DutySegment>,
    pub compliance: ComplianceResult,
    pub daily_summary: DailySummary,
}

// ── TripPlanner ───────────────────────────────────────────────────────────────

/// Stateless trip planner.
///
/// Holds only read-only configuration and the two pluggable lookups, so a
/// single instance can serve any number of concurrent requests.
///
/// Build with [`TripPlannerBuilder`](crate::TripPlannerBuilder) to get a
/// validated configuration; `Default` uses the stock configuration.
pub struct TripPlanner<G: Geocoder = Gazetteer, E: DistanceEstimator = GreatCircleEstimator> {
    pub config: PlannerConfig,
    pub geocoder: G,
    pub estimator: E,
}

impl Default for TripPlanner<Gazetteer, GreatCircleEstimator> {
    fn default() -> Self {
        let config = PlannerConfig::default();
        Self {
            estimator: GreatCircleEstimator::new(config.average_speed_mph),
            geocoder: Gazetteer::us_major_cities(),
            config,
        }
    }
}

impl<G: Geocoder, E: DistanceEstimator> TripPlanner<G, E> {
    /// Validate `request` and plan it.
    ///
    /// # Errors
    ///
    /// [`PlannerError::Invalid`](crate::PlannerError::Invalid) when
    /// `current_cycle_hours` is outside `[0, 70]`.
    pub fn plan(&self, request: &TripRequest, anchor: PlanAnchor) -> PlannerResult<TripPlan> {
        request.validate()?;
        Ok(self.plan_unchecked(request, anchor))
    }

    /// Plan without validating the request.
    ///
    /// Used to evaluate what-if inputs such as a cycle already past the
    /// limit; the compliance result reports them instead of rejecting them.
    pub fn plan_unchecked(&self, request: &TripRequest, anchor: PlanAnchor) -> TripPlan {
        info!(
            pickup = %request.pickup_location,
            dropoff = %request.dropoff_location,
            cycle_hours = request.current_cycle_hours,
            "planning trip"
        );

        let endpoints = self.locate(request);
        if !endpoints.all_resolved() {
            warn!("one or more trip locations fell back to the default coordinate");
        }

        let summary = self
            .estimator
            .estimate(endpoints.pickup.coordinate, endpoints.dropoff.coordinate);
        let stops = plan_stops(request, &summary, &endpoints, &anchor, &self.config);
        let geometry = route_geometry(&endpoints);
        let duty_log = segment_duty_log(request, &summary, &anchor, &self.config);
        let compliance = check_compliance(&duty_log, request, &self.config.limits);
        let daily_summary = DailySummary::from_log(&duty_log, &self.config.limits);

        info!(
            distance_miles = summary.total_distance_miles,
            stops = stops.len(),
            segments = duty_log.len(),
            findings = compliance.violations.len(),
            status = compliance.status(),
            "trip planned"
        );

        TripPlan {
            request: request.clone(),
            anchor,
            endpoints,
            summary,
            stops,
            geometry,
            duty_log,
            compliance,
            daily_summary,
        }
    }

    /// Resolve the three location strings of `request`.
    pub fn locate(&self, request: &TripRequest) -> RouteEndpoints {
        RouteEndpoints {
            current: self.geocoder.locate(&request.current_location),
            pickup: self.geocoder.locate(&request.pickup_location),
            dropoff: self.geocoder.locate(&request.dropoff_location),
        }
    }

    /// Plan many trips against the same anchor.
    ///
    /// Results come back in request order; one invalid request does not
    /// affect the others.
    pub fn plan_batch(
        &self,
        requests: &[TripRequest],
        anchor: PlanAnchor,
    ) -> Vec<PlannerResult<TripPlan>> {
        #[cfg(not(feature = "parallel"))]
        {
            requests.iter().map(|r| self.plan(r, anchor)).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            requests.par_iter().map(|r| self.plan(r, anchor)).collect()
        }
    }
}
