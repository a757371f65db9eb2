//! Centralized request validation.
//!
//! The engine has no guards of its own: a zero or negative quantity would
//! divide by zero in the continued-fraction matcher or never advance the
//! linear search. Every caller runs [`validate_request`] first.

use crate::core::request::MatchRequest;

/// Smallest meaningful upper complexity bound; `(1, 1)` already has complexity 2
pub const MIN_MAX_COMPLEXITY: u64 = 2;

/// Request validation error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{name} must be a finite number, got {value}")]
    NotFinite { name: &'static str, value: f64 },
    #[error("{name} must be greater than zero, got {value}")]
    NotPositive { name: &'static str, value: f64 },
    #[error("Maximum complexity must be at least 2, got {0}")]
    MaxComplexityTooSmall(u64),
    #[error("Minimum complexity ({min}) must be less than maximum complexity ({max})")]
    ComplexityRangeInverted { min: u64, max: u64 },
}

impl ValidationError {
    /// Stable machine-readable identifier for API responses
    #[must_use]
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::NotFinite { .. } => "not_finite",
            Self::NotPositive { .. } => "not_positive",
            Self::MaxComplexityTooSmall(_) => "max_complexity_too_small",
            Self::ComplexityRangeInverted { .. } => "complexity_range_inverted",
        }
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { name, value });
    }
    if value <= 0.0 {
        return Err(ValidationError::NotPositive { name, value });
    }
    Ok(())
}

/// Check every precondition the engine relies on.
///
/// `threshold` is checked even for `only_closest` requests, which ignore it,
/// so a request stays valid when the flag is toggled.
///
/// # Errors
///
/// Returns the first violated constraint: non-finite or non-positive `a`,
/// `b` or `threshold`, `max_complexity < 2`, or
/// `min_complexity >= max_complexity`.
///
/// # Examples
///
/// ```
/// use ratio_matcher::MatchRequest;
/// use ratio_matcher::utils::validation::{validate_request, ValidationError};
///
/// assert!(validate_request(&MatchRequest::new(3.0, 2.0)).is_ok());
/// assert!(matches!(
///     validate_request(&MatchRequest::new(0.0, 2.0)),
///     Err(ValidationError::NotPositive { name: "A", .. })
/// ));
/// ```
pub fn validate_request(request: &MatchRequest) -> Result<(), ValidationError> {
    check_positive("A", request.a)?;
    check_positive("B", request.b)?;
    check_positive("Threshold", request.threshold)?;

    if request.max_complexity < MIN_MAX_COMPLEXITY {
        return Err(ValidationError::MaxComplexityTooSmall(
            request.max_complexity,
        ));
    }
    if request.min_complexity >= request.max_complexity {
        return Err(ValidationError::ComplexityRangeInverted {
            min: request.min_complexity,
            max: request.max_complexity,
        });
    }

    Ok(())
}
