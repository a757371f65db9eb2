//! Ratio matching engine.
//!
//! This module provides the core matching functionality:
//!
//! - [`MatchingEngine`]: Main entry point; dispatches a request to one of the matchers
//! - [`linear`]: Every match below a threshold, by incremental search
//! - [`continued_fraction`]: Best-yet matches only, from convergents of `a / b`
//! - [`hydrate`]: Expansion of `(count_a, count_b)` pairs into full results
//!
//! ## Matching Algorithm
//!
//! Requests with `only_closest` set go to the continued-fraction matcher,
//! which generates the best approximations directly in logarithmic time.
//! All other requests go to the linear search, which walks every crossing
//! of the two sequences of multiples up to `max_complexity`.
//!
//! Both matchers are bounded by an [`IterationGuard`](guard::IterationGuard)
//! and emit lightweight [`Candidate`]s; metrics are computed afterwards, once
//! per surviving candidate.
//!
//! ## Example
//!
//! ```rust
//! use ratio_matcher::{MatchRequest, MatchingEngine};
//!
//! let request = MatchRequest::new(std::f64::consts::PI, 1.0)
//!     .with_threshold(0.05)
//!     .with_complexity(0, 30)
//!     .primitive_only(true);
//!
//! let outcome = MatchingEngine::new().find_matches(&request);
//! let first = &outcome.results[0];
//! assert_eq!((first.count_a, first.count_b), (7, 22));
//! ```

use crate::core::result::Candidate;

pub mod continued_fraction;
pub mod engine;
pub mod gcd;
pub mod guard;
pub mod hydrate;
pub mod linear;

pub use engine::{Algorithm, MatchingConfig, MatchingEngine};

/// Raw output of a matcher, before hydration
#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    /// Candidates in discovery order
    pub candidates: Vec<Candidate>,

    /// The iteration guard stopped the matcher early
    pub iteration_limit_reached: bool,
}
