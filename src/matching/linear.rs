//! Bounded incremental search for every match below a threshold.
//!
//! Two running sums start at `a` and `b`. Each step grows whichever sum is
//! currently smaller by one more multiple of its quantity, so the walk visits
//! every point where the two sequences of multiples cross. After each step
//! the pair is a candidate when the gap is under the threshold.
//!
//! The loop only records `(count_a, count_b)`; sums, difference and quality
//! are recomputed once per surviving candidate by the hydrator.

use crate::core::request::MatchRequest;
use crate::core::result::Candidate;
use crate::matching::gcd::is_primitive;
use crate::matching::guard::IterationGuard;
use crate::matching::CandidateSet;

/// Collect every pair with `|count_a * a - count_b * b| < threshold` up to
/// `max_complexity`, honouring `min_complexity` and `primitive_only`.
///
/// The starting pair `(1, 1)` is never reported; candidates appear in order
/// of non-decreasing complexity.
pub fn search(request: &MatchRequest, guard: &mut IterationGuard) -> CandidateSet {
    let (a, b) = (request.a, request.b);

    let mut count_a: u64 = 1;
    let mut count_b: u64 = 1;
    let mut sum_a = a;
    let mut sum_b = b;

    let mut candidates = Vec::new();
    let mut iteration_limit_reached = false;

    while count_a + count_b < request.max_complexity {
        if !guard.tick() {
            iteration_limit_reached = true;
            break;
        }

        if sum_a < sum_b {
            sum_a += a;
            count_a += 1;
        } else {
            sum_b += b;
            count_b += 1;
        }

        if (sum_a - sum_b).abs() >= request.threshold {
            continue;
        }
        if count_a + count_b < request.min_complexity {
            continue;
        }
        if request.primitive_only && !is_primitive(count_a, count_b) {
            continue;
        }

        candidates.push(Candidate::new(count_a, count_b));
    }

    CandidateSet {
        candidates,
        iteration_limit_reached,
    }
}
