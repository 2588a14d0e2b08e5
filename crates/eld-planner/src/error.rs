use eld_core::EldError;
use eld_route::RouteError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    /// Rejected request or configuration.
    #[error("invalid input: {0}")]
    Invalid(#[from] EldError),

    #[error("gazetteer error: {0}")]
    Gazetteer(#[from] RouteError),
}

pub type PlannerResult<T> = Result<T, PlannerError>;
