//! Expand bare candidates into fully described [`MatchResult`]s.

use crate::core::result::{Candidate, MatchResult};

/// Convert a count to f64; counts beyond 2^53 lose precision, which the
/// metrics already tolerate
#[inline]
fn count_to_f64(count: u64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Compute every metric for one candidate
#[must_use]
pub fn hydrate(candidate: Candidate, a: f64, b: f64, is_best_yet: bool) -> MatchResult {
    let sum_a = count_to_f64(candidate.count_a) * a;
    let sum_b = count_to_f64(candidate.count_b) * b;
    let difference = (sum_a - sum_b).abs();
    let quality = difference / sum_a.max(sum_b);

    MatchResult {
        count_a: candidate.count_a,
        count_b: candidate.count_b,
        sum_a,
        sum_b,
        difference,
        complexity: candidate.complexity(),
        quality,
        is_best_yet,
    }
}

/// Running minimum of differences seen so far in discovery order
#[derive(Debug, Clone, Copy)]
pub struct BestYetTrace {
    min_difference: f64,
}

impl BestYetTrace {
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_difference: f64::INFINITY,
        }
    }

    /// Record a difference; true when it strictly improves on every earlier one
    pub fn observe(&mut self, difference: f64) -> bool {
        if difference < self.min_difference {
            self.min_difference = difference;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn min_difference(&self) -> f64 {
        self.min_difference
    }
}

impl Default for BestYetTrace {
    fn default() -> Self {
        Self::new()
    }
}

/// Hydrate linear-search candidates, flagging strict improvements as best-yet
#[must_use]
pub fn hydrate_linear(candidates: &[Candidate], a: f64, b: f64) -> Vec<MatchResult> {
    let mut trace = BestYetTrace::new();
    candidates
        .iter()
        .map(|&candidate| {
            let mut result = hydrate(candidate, a, b, false);
            result.is_best_yet = trace.observe(result.difference);
            result
        })
        .collect()
}

/// Hydrate convergents; every one is best-yet
#[must_use]
pub fn hydrate_convergents(candidates: &[Candidate], a: f64, b: f64) -> Vec<MatchResult> {
    candidates
        .iter()
        .map(|&candidate| hydrate(candidate, a, b, true))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hydrate_metrics() {
        let result = hydrate(Candidate::new(7, 22), std::f64::consts::PI, 1.0, true);

        assert_eq!(result.count_a, 7);
        assert_eq!(result.count_b, 22);
        assert_eq!(result.complexity, 29);
        assert!((result.sum_a - 21.991_148_575_128_552).abs() < 1e-12);
        assert!((result.sum_b - 22.0).abs() < f64::EPSILON);
        assert!((result.difference - 0.008_851_424_871_448).abs() < 1e-12);
        assert!((result.quality - result.difference / 22.0).abs() < 1e-15);
        assert!(result.is_best_yet);
    }

    #[test]
    fn test_hydrate_exact_match() {
        let result = hydrate(Candidate::new(1, 2), 2.0, 1.0, true);
        assert!(result.difference.abs() < f64::EPSILON);
        assert!(result.quality.abs() < f64::EPSILON);
        assert_eq!(result.complexity, 3);
    }

    #[test]
    fn test_best_yet_requires_strict_improvement() {
        let mut trace = BestYetTrace::new();
        assert!(trace.observe(0.5));
        assert!(!trace.observe(0.5));
        assert!(!trace.observe(0.7));
        assert!(trace.observe(0.1));
        assert!((trace.min_difference() - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hydrate_linear_flags() {
        // Multiples of an exact match tie at zero and are not best-yet
        let candidates = [
            Candidate::new(1, 2),
            Candidate::new(2, 4),
            Candidate::new(3, 6),
        ];
        let results = hydrate_linear(&candidates, 2.0, 1.0);
        let flags: Vec<bool> = results.iter().map(|r| r.is_best_yet).collect();
        assert_eq!(flags, vec![true, false, false]);
    }

    #[test]
    fn test_hydrate_linear_improving_sequence() {
        let a = std::f64::consts::PI;
        let candidates = [
            Candidate::new(1, 3),
            Candidate::new(6, 19),
            Candidate::new(7, 22),
        ];
        let flags: Vec<bool> = hydrate_linear(&candidates, a, 1.0)
            .iter()
            .map(|r| r.is_best_yet)
            .collect();
        // 6π vs 19 is further off than π vs 3
        assert_eq!(flags, vec![true, false, true]);
    }

    #[test]
    fn test_hydrate_convergents_all_best_yet() {
        let candidates = [Candidate::new(1, 3), Candidate::new(7, 22)];
        let results = hydrate_convergents(&candidates, std::f64::consts::PI, 1.0);
        assert!(results.iter().all(|r| r.is_best_yet));
    }
}
