//! Core data types for ratio matching.
//!
//! - [`MatchRequest`]: The immutable input to one computation
//! - [`Candidate`]: A bare `(count_a, count_b)` pair produced inside a matcher
//! - [`MatchResult`]: A fully described match with sums, difference and quality
//! - [`SearchOutcome`]: Results in discovery order plus the completeness flag
//!
//! ## Metrics
//!
//! | Metric | Definition |
//! |--------|------------|
//! | difference | `abs(count_a * a - count_b * b)` |
//! | complexity | `count_a + count_b` |
//! | quality | `difference / max(sum_a, sum_b)` |
//!
//! Lower complexity means a simpler integer ratio, lower quality means a
//! closer one.

pub mod request;
pub mod result;
