//! The trip request accepted by the planner.

use crate::{EldError, EldResult};

/// Upper bound of the 70-hour/8-day cycle, inclusive.
pub const MAX_CYCLE_HOURS: f64 = 70.0;

/// One trip to plan: where the driver is, where the load is, where it goes,
/// and how many cycle hours the driver has already used.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripRequest {
    pub current_location: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    /// On-duty hours already used in the current 8-day cycle, `0..=70`.
    pub current_cycle_hours: f64,
}

impl TripRequest {
    pub fn new(
        current_location: impl Into<String>,
        pickup_location: impl Into<String>,
        dropoff_location: impl Into<String>,
        current_cycle_hours: f64,
    ) -> Self {
        Self {
            current_location: current_location.into(),
            pickup_location: pickup_location.into(),
            dropoff_location: dropoff_location.into(),
            current_cycle_hours,
        }
    }

    /// Reject cycle hours outside `[0, 70]` (NaN included).
    ///
    /// The planning functions themselves accept any value so that callers
    /// can evaluate out-of-range input deliberately; this check belongs at
    /// the request boundary.
    pub fn validate(&self) -> EldResult<()> {
        if (0.0..=MAX_CYCLE_HOURS).contains(&self.current_cycle_hours) {
            Ok(())
        } else {
            Err(EldError::InvalidCycleHours(self.current_cycle_hours))
        }
    }
}
