use serde::{Deserialize, Serialize};

/// A trial pair of multipliers emitted by a matcher.
///
/// Candidates carry no metrics so the search loops stay allocation-light;
/// see [`hydrate`](crate::matching::hydrate) for the expansion into a
/// [`MatchResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Candidate {
    pub count_a: u64,
    pub count_b: u64,
}

impl Candidate {
    #[must_use]
    pub fn new(count_a: u64, count_b: u64) -> Self {
        Self { count_a, count_b }
    }

    /// `count_a + count_b`, saturating at `u64::MAX`
    #[must_use]
    pub fn complexity(&self) -> u64 {
        self.count_a.saturating_add(self.count_b)
    }
}

/// A fully described match between `count_a * a` and `count_b * b`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub count_a: u64,
    pub count_b: u64,

    /// `count_a * a`
    pub sum_a: f64,

    /// `count_b * b`
    pub sum_b: f64,

    /// `|sum_a - sum_b|`
    pub difference: f64,

    /// `count_a + count_b`
    pub complexity: u64,

    /// Relative error: `difference / max(sum_a, sum_b)`
    pub quality: f64,

    /// Strictly closer than every match discovered before it
    pub is_best_yet: bool,
}

/// Everything one computation produces
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOutcome {
    /// Matches in discovery order
    pub results: Vec<MatchResult>,

    /// The iteration ceiling stopped the search before it exhausted the
    /// complexity bound, so `results` may be an incomplete prefix
    pub iteration_limit_reached: bool,
}

impl SearchOutcome {
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Results flagged as best-yet, in discovery order
    pub fn best_yet(&self) -> impl Iterator<Item = &MatchResult> {
        self.results.iter().filter(|r| r.is_best_yet)
    }
}
