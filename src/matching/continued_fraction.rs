//! Best rational approximations of `a / b` via continued-fraction convergents.
//!
//! Convergents `h_n / k_n` of `a / b` are the best approximations available
//! for their size, so no search is needed when only best-yet matches are
//! wanted: each convergent read as `(count_a, count_b) = (k_n, h_n)` gives
//! `count_a * a ≈ count_b * b`, and each one is closer than every simpler
//! pair. Generation takes `O(log(max_complexity))` steps.
//!
//! The recurrence is
//!
//! ```text
//! h₋₁ = 0, h₀ = 1, k₋₁ = 1, k₀ = 0
//! hₙ₊₁ = ⌊x⌋ · hₙ + hₙ₋₁
//! kₙ₊₁ = ⌊x⌋ · kₙ + kₙ₋₁
//! x ← 1 / (x − ⌊x⌋)
//! ```
//!
//! `threshold` and `primitive_only` do not apply here; convergents are always
//! in lowest terms.

use crate::core::request::MatchRequest;
use crate::core::result::Candidate;
use crate::matching::guard::IterationGuard;
use crate::matching::CandidateSet;

/// Remaining fractional part below which the expansion is treated as finished
pub const CONVERGENCE_EPSILON: f64 = 1e-15;

/// 2^64 as f64; every partial quotient below it fits in a `u64`
const U64_CEILING: f64 = 18_446_744_073_709_551_616.0;

/// Generate convergents of `a / b` with complexity in
/// `[min_complexity, max_complexity]`.
///
/// Stops when the next convergent would exceed `max_complexity`, when the
/// expansion terminates (fractional part below [`CONVERGENCE_EPSILON`]), or
/// when the guard is exhausted. A convergent with a zero count, which is the
/// leading `0 / 1` term when `a < b`, is skipped.
pub fn search(request: &MatchRequest, guard: &mut IterationGuard) -> CandidateSet {
    let mut x = request.a / request.b;
    let (mut h_prev, mut h_curr) = (0u64, 1u64);
    let (mut k_prev, mut k_curr) = (1u64, 0u64);

    let mut candidates = Vec::new();
    let mut iteration_limit_reached = false;

    loop {
        if !guard.tick() {
            iteration_limit_reached = true;
            break;
        }

        let int_part = x.floor();
        let Some(term) = partial_quotient(int_part) else {
            break;
        };
        let Some((h_next, k_next)) = next_convergent(term, (h_prev, h_curr), (k_prev, k_curr))
        else {
            break;
        };
        let Some(complexity) = h_next.checked_add(k_next) else {
            break;
        };
        if complexity > request.max_complexity {
            break;
        }

        if complexity >= request.min_complexity && h_next > 0 && k_next > 0 {
            candidates.push(Candidate::new(k_next, h_next));
        }

        (h_prev, h_curr) = (h_curr, h_next);
        (k_prev, k_curr) = (k_curr, k_next);

        let frac_part = x - int_part;
        if frac_part < CONVERGENCE_EPSILON {
            break;
        }
        x = 1.0 / frac_part;
    }

    CandidateSet {
        candidates,
        iteration_limit_reached,
    }
}

/// Integer value of `⌊x⌋`, or `None` when it does not fit in a `u64`
fn partial_quotient(int_part: f64) -> Option<u64> {
    if int_part.is_finite() && (0.0..U64_CEILING).contains(&int_part) {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Range checked above
        Some(int_part as u64)
    } else {
        None
    }
}

/// Apply one step of the recurrence; `None` on overflow
fn next_convergent(term: u64, h: (u64, u64), k: (u64, u64)) -> Option<(u64, u64)> {
    let h_next = term.checked_mul(h.1)?.checked_add(h.0)?;
    let k_next = term.checked_mul(k.1)?.checked_add(k.0)?;
    Some((h_next, k_next))
}
