//! # ratio-matcher
//!
//! A library for finding integer multiples of two real numbers that nearly
//! coincide: pairs `(count_a, count_b)` with `count_a * a ≈ count_b * b`.
//!
//! Musical tuning, gear trains and unit reconciliation all reduce to this
//! question. Seven fifths against four octaves, 22 turns of one wheel
//! against 7 of another, or the best simple fraction for π.
//!
//! ## Features
//!
//! - **Threshold search**: Every pair whose absolute difference is below a
//!   threshold, up to a complexity bound, optionally primitive ratios only
//! - **Best-yet sequence**: Continued-fraction convergents of `a / b`, each
//!   the closest approximation available at its size
//! - **Bounded runtime**: A hard iteration ceiling on every search; hitting
//!   it is reported, not treated as an error
//! - **Full metrics**: Sums, difference, complexity and relative error for
//!   every match
//!
//! ## Example
//!
//! ```rust
//! use ratio_matcher::{MatchRequest, MatchingEngine};
//!
//! let request = MatchRequest::new(2.0, 1.0)
//!     .only_closest(true)
//!     .with_complexity(0, 10);
//!
//! let outcome = MatchingEngine::new().find_matches(&request);
//!
//! for m in &outcome.results {
//!     println!("{} x A = {} x B (off by {:e})", m.count_a, m.count_b, m.difference);
//! }
//! assert_eq!((outcome.results[0].count_a, outcome.results[0].count_b), (1, 2));
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Request and result types
//! - [`matching`]: Matching engine and the two search algorithms
//! - [`utils`]: Request validation and display helpers
//! - [`cli`]: Command-line interface implementation
//! - [`web`]: Web server for browser-based matching

pub mod cli;
pub mod core;
pub mod matching;
pub mod utils;
pub mod web;

// Re-export commonly used types for convenience
pub use crate::core::request::MatchRequest;
pub use crate::core::result::{Candidate, MatchResult, SearchOutcome};
pub use crate::matching::engine::{Algorithm, MatchingConfig, MatchingEngine};
