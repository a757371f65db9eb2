use serde::{Deserialize, Serialize};

use crate::core::request::MatchRequest;
use crate::core::result::SearchOutcome;
use crate::matching::guard::{IterationGuard, DEFAULT_MAX_ITERATIONS};
use crate::matching::hydrate::{hydrate_convergents, hydrate_linear};
use crate::matching::{continued_fraction, linear};

/// Configuration for the matching engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Iteration ceiling applied to each search
    pub max_iterations: u64,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Which matcher answers a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// All matches below the threshold
    LinearSearch,
    /// Best-yet matches only
    ContinuedFraction,
}

impl Algorithm {
    #[must_use]
    pub fn for_request(request: &MatchRequest) -> Self {
        if request.only_closest {
            Self::ContinuedFraction
        } else {
            Self::LinearSearch
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LinearSearch => write!(f, "linear search"),
            Self::ContinuedFraction => write!(f, "continued fraction"),
        }
    }
}

/// The main matching engine.
///
/// Holds configuration only; every call to [`find_matches`](Self::find_matches)
/// runs with its own guard and buffers, so one engine can serve any number of
/// callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchingEngine {
    config: MatchingConfig,
}

impl MatchingEngine {
    /// Create a new matching engine with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new matching engine with custom configuration
    #[must_use]
    pub fn with_config(config: MatchingConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// Run one request to completion or to the iteration ceiling.
    ///
    /// The request must satisfy
    /// [`validate_request`](crate::utils::validation::validate_request);
    /// results are in discovery order.
    #[must_use]
    pub fn find_matches(&self, request: &MatchRequest) -> SearchOutcome {
        let algorithm = Algorithm::for_request(request);
        tracing::debug!(
            "Matching a={} b={} with {algorithm} (complexity {}..={})",
            request.a,
            request.b,
            request.min_complexity,
            request.max_complexity
        );

        let mut guard = IterationGuard::new(self.config.max_iterations);
        let outcome = match algorithm {
            Algorithm::LinearSearch => {
                let set = linear::search(request, &mut guard);
                SearchOutcome {
                    results: hydrate_linear(&set.candidates, request.a, request.b),
                    iteration_limit_reached: set.iteration_limit_reached,
                }
            }
            Algorithm::ContinuedFraction => {
                let set = continued_fraction::search(request, &mut guard);
                SearchOutcome {
                    results: hydrate_convergents(&set.candidates, request.a, request.b),
                    iteration_limit_reached: set.iteration_limit_reached,
                }
            }
        };

        if outcome.iteration_limit_reached {
            tracing::debug!(
                "Iteration limit of {} reached; results may be incomplete",
                guard.limit()
            );
        }
        tracing::debug!(
            "Found {} matches in {} iterations",
            outcome.len(),
            guard.iterations()
        );

        outcome
    }
}
