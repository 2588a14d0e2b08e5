//! Planner error type.
//!
//! The planning core itself is total over validated input; the only
//! failures are rejected requests, bad configuration, and the I/O of
//! loading lookup tables.  Sub-crates wrap `EldError` as one variant of
//! their own enums.

use thiserror::Error;

/// The top-level error type for `eld-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum EldError {
    #[error("current cycle hours must be between 0 and 70, got {0}")]
    InvalidCycleHours(f64),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `eld-*` crates.
pub type EldResult<T> = Result<T, EldError>;
