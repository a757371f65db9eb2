use serde::{Deserialize, Serialize};

/// Default absolute-difference threshold for the linear search
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Default lower complexity bound (inclusive)
pub const DEFAULT_MIN_COMPLEXITY: u64 = 0;

/// Default upper complexity bound
pub const DEFAULT_MAX_COMPLEXITY: u64 = 100;

/// Input to a single matching computation.
///
/// The engine assumes the request has already been checked with
/// [`validate_request`](crate::utils::validation::validate_request): positive
/// finite `a`, `b` and `threshold`, `max_complexity >= 2` and
/// `min_complexity < max_complexity`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    /// First quantity
    pub a: f64,

    /// Second quantity
    pub b: f64,

    /// Matches must have an absolute difference strictly below this value.
    /// Ignored when `only_closest` is set.
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Only return best-yet matches (continued-fraction convergents)
    #[serde(default)]
    pub only_closest: bool,

    /// Smallest `count_a + count_b` to report
    #[serde(default)]
    pub min_complexity: u64,

    /// Largest `count_a + count_b` to explore
    #[serde(default = "default_max_complexity")]
    pub max_complexity: u64,

    /// Skip pairs that are a multiple of a simpler pair.
    /// Ignored when `only_closest` is set.
    #[serde(default)]
    pub primitive_only: bool,
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

fn default_max_complexity() -> u64 {
    DEFAULT_MAX_COMPLEXITY
}

impl MatchRequest {
    /// Create a request for `a` and `b` with default threshold and bounds
    #[must_use]
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            a,
            b,
            threshold: DEFAULT_THRESHOLD,
            only_closest: false,
            min_complexity: DEFAULT_MIN_COMPLEXITY,
            max_complexity: DEFAULT_MAX_COMPLEXITY,
            primitive_only: false,
        }
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_complexity(mut self, min: u64, max: u64) -> Self {
        self.min_complexity = min;
        self.max_complexity = max;
        self
    }

    #[must_use]
    pub fn only_closest(mut self, only_closest: bool) -> Self {
        self.only_closest = only_closest;
        self
    }

    #[must_use]
    pub fn primitive_only(mut self, primitive_only: bool) -> Self {
        self.primitive_only = primitive_only;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_fields() {
        let request = MatchRequest::new(3.0, 2.0)
            .with_threshold(0.01)
            .with_complexity(5, 50)
            .only_closest(true)
            .primitive_only(true);

        assert!((request.a - 3.0).abs() < f64::EPSILON);
        assert!((request.b - 2.0).abs() < f64::EPSILON);
        assert!((request.threshold - 0.01).abs() < f64::EPSILON);
        assert_eq!(request.min_complexity, 5);
        assert_eq!(request.max_complexity, 50);
        assert!(request.only_closest);
        assert!(request.primitive_only);
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let request: MatchRequest = serde_json::from_str(r#"{"a": 1.5, "b": 1}"#).unwrap();
        assert_eq!(request, MatchRequest::new(1.5, 1.0));
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "a": 3.14159265359,
            "b": 1,
            "threshold": 0.05,
            "onlyClosest": false,
            "minComplexity": 0,
            "maxComplexity": 30,
            "primitiveOnly": true
        }"#;
        let request: MatchRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.max_complexity, 30);
        assert!(request.primitive_only);
        assert!(!request.only_closest);
    }
}
