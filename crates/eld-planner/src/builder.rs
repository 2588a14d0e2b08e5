//! Fluent builder for constructing a [`TripPlanner`].

use std::path::Path;

use eld_core::PlannerConfig;
use eld_route::{DistanceEstimator, Gazetteer, GreatCircleEstimator, Geocoder, load_gazetteer_csv};

use crate::{PlannerResult, TripPlanner};

/// Fluent builder for [`TripPlanner<G, E>`].
///
/// # Optional inputs (have defaults)
///
/// | Method                 | Default                                          |
/// |------------------------|--------------------------------------------------|
/// | `.geocoder(g)`         | `Gazetteer::us_major_cities()`                   |
/// | `.gazetteer_csv(path)` | —                                                |
/// | `.estimator(e)`        | `GreatCircleEstimator` at the config's speed     |
///
/// # Example
///
/// ```rust,ignore
/// let planner = TripPlannerBuilder::new(config)
///     .gazetteer_csv(Path::new("places.csv"))?
///     .build()?;
/// ```
pub struct TripPlannerBuilder<G: Geocoder, E: DistanceEstimator> {
    config:    PlannerConfig,
    geocoder:  G,
    estimator: E,
}

impl TripPlannerBuilder<Gazetteer, GreatCircleEstimator> {
    /// Start from `config` with the built-in gazetteer and a great-circle
    /// estimator running at `config.average_speed_mph`.
    pub fn new(config: PlannerConfig) -> Self {
        let estimator = GreatCircleEstimator::new(config.average_speed_mph);
        Self {
            config,
            geocoder: Gazetteer::us_major_cities(),
            estimator,
        }
    }
}

impl<E: DistanceEstimator> TripPlannerBuilder<Gazetteer, E> {
    /// Replace the built-in gazetteer with one loaded from a CSV file.
    pub fn gazetteer_csv(self, path: &Path) -> PlannerResult<Self> {
        let geocoder = load_gazetteer_csv(path)?;
        Ok(Self { geocoder, ..self })
    }
}

impl<G: Geocoder, E: DistanceEstimator> TripPlannerBuilder<G, E> {
    /// Use a different location lookup.
    pub fn geocoder<G2: Geocoder>(self, geocoder: G2) -> TripPlannerBuilder<G2, E> {
        TripPlannerBuilder {
            config:    self.config,
            geocoder,
            estimator: self.estimator,
        }
    }

    /// Use a different distance estimate.
    ///
    /// The estimator's own speed assumption governs the route summary;
    /// `config.average_speed_mph` still drives stop and log arithmetic.
    pub fn estimator<E2: DistanceEstimator>(self, estimator: E2) -> TripPlannerBuilder<G, E2> {
        TripPlannerBuilder {
            config:   self.config,
            geocoder: self.geocoder,
            estimator,
        }
    }

    /// Validate the configuration and return a ready-to-use planner.
    pub fn build(self) -> PlannerResult<TripPlanner<G, E>> {
        self.config.validate()?;
        Ok(TripPlanner {
            config:    self.config,
            geocoder:  self.geocoder,
            estimator: self.estimator,
        })
    }
}
