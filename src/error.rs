//! Error types for the simulation engine.

use thiserror::Error;

/// Errors surfaced before any trial is run.
///
/// The engine validates defensively and fails closed: an invalid
/// configuration produces one of these before the first attempt is drawn,
/// never a partial summary. Nothing here is transient; a failure is either
/// bad input or a bug, so there are no retries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// A probability field fell outside the closed interval [0.0, 1.0].
    /// Out-of-range values are rejected, never clamped.
    #[error("{field} must be within [0.0, 1.0], got {value}")]
    ProbabilityOutOfRange { field: &'static str, value: f64 },

    /// A count field that must be at least 1 was not.
    #[error("{field} must be at least 1, got {value}")]
    CountTooSmall { field: &'static str, value: u32 },

    /// The condition name does not match any modeled condition.
    #[error("unrecognized condition '{0}'")]
    UnknownCondition(String),
}
