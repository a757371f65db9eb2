//! Hard ceiling on the number of loop iterations a single search may run.
//!
//! The complexity bound alone does not keep runtime in check: a request with
//! a huge `max_complexity` and a ratio close to 1 can step billions of times
//! before reaching it. Both matchers tick an [`IterationGuard`] on every loop
//! iteration and stop with `iteration_limit_reached` once it is exhausted.

/// Default iteration ceiling per search
pub const DEFAULT_MAX_ITERATIONS: u64 = 100_000_000;

/// Per-search iteration counter
#[derive(Debug, Clone)]
pub struct IterationGuard {
    iterations: u64,
    limit: u64,
}

impl IterationGuard {
    #[must_use]
    pub fn new(limit: u64) -> Self {
        Self {
            iterations: 0,
            limit,
        }
    }

    /// Claim one iteration.
    ///
    /// Returns `false`, without counting, once `limit` iterations have been
    /// claimed; the caller must not run the iteration.
    pub fn tick(&mut self) -> bool {
        if self.iterations >= self.limit {
            return false;
        }
        self.iterations += 1;
        true
    }

    #[must_use]
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    #[must_use]
    pub fn limit(&self) -> u64 {
        self.limit
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.iterations >= self.limit
    }
}

impl Default for IterationGuard {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ITERATIONS)
    }
}
