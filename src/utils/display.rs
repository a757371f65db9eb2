//! Sorting and truncation of results for display.
//!
//! The engine returns matches in discovery order. Interfaces show them
//! sorted, simplest or closest first, and cap how many rows they render.

use serde::{Deserialize, Serialize};

use crate::core::result::MatchResult;

/// Default maximum number of rows shown
pub const DEFAULT_DISPLAY_LIMIT: usize = 10_000;

/// Digits after the decimal point in formatted sums, differences and qualities
pub const FRACTION_DIGITS: usize = 5;

/// Display ordering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Simplest ratios first
    #[default]
    Complexity,
    /// Smallest relative error first
    Quality,
}

/// Results prepared for display
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayPage {
    pub results: Vec<MatchResult>,
    /// Number of matches before truncation
    pub total: usize,
    /// Rows were dropped to respect the display limit
    pub truncated: bool,
}

/// Stable sort; ties keep discovery order
pub fn sort_results(results: &mut [MatchResult], key: SortKey) {
    match key {
        SortKey::Complexity => results.sort_by_key(|r| r.complexity),
        SortKey::Quality => results.sort_by(|x, y| x.quality.total_cmp(&y.quality)),
    }
}

/// Sort, then keep at most `limit` rows
#[must_use]
pub fn prepare_for_display(
    mut results: Vec<MatchResult>,
    key: SortKey,
    limit: usize,
) -> DisplayPage {
    let total = results.len();
    sort_results(&mut results, key);
    let truncated = total > limit;
    results.truncate(limit);

    DisplayPage {
        results,
        total,
        truncated,
    }
}

/// Fixed-point rendering used for sums
#[must_use]
pub fn format_fixed(value: f64) -> String {
    format!("{value:.prec$}", prec = FRACTION_DIGITS)
}

/// Exponent rendering used for differences and qualities, with an explicit
/// sign on the exponent (`8.85142e-3`, `1.23450e+2`)
#[must_use]
pub fn format_exponent(value: f64) -> String {
    let formatted = format!("{value:.prec$e}", prec = FRACTION_DIGITS);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(count_a: u64, count_b: u64, quality: f64) -> MatchResult {
        MatchResult {
            count_a,
            count_b,
            sum_a: 0.0,
            sum_b: 0.0,
            difference: 0.0,
            complexity: count_a + count_b,
            quality,
            is_best_yet: false,
        }
    }

    #[test]
    fn test_sort_by_quality() {
        let mut results = vec![result(1, 2, 0.3), result(2, 3, 0.1), result(3, 4, 0.2)];
        sort_results(&mut results, SortKey::Quality);
        let order: Vec<u64> = results.iter().map(|r| r.count_a).collect();
        assert_eq!(order, vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_by_complexity_is_stable() {
        let mut results = vec![result(5, 5, 0.0), result(3, 7, 0.1), result(1, 2, 0.2)];
        sort_results(&mut results, SortKey::Complexity);
        let order: Vec<(u64, u64)> = results.iter().map(|r| (r.count_a, r.count_b)).collect();
        assert_eq!(order, vec![(1, 2), (5, 5), (3, 7)]);
    }

    #[test]
    fn test_prepare_truncates() {
        let results = vec![result(1, 2, 0.3), result(2, 3, 0.1), result(3, 4, 0.2)];

        let page = prepare_for_display(results.clone(), SortKey::Quality, 2);
        assert_eq!(page.total, 3);
        assert!(page.truncated);
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].count_a, 2);

        let page = prepare_for_display(results, SortKey::Complexity, 3);
        assert!(!page.truncated);
        assert_eq!(page.results.len(), 3);
    }

    #[test]
    fn test_formatting() {
        assert_eq!(format_fixed(21.991_148_575), "21.99115");
        assert_eq!(format_exponent(0.008_851_424_87), "8.85142e-3");
        assert_eq!(format_exponent(0.0), "0.00000e+0");
        assert_eq!(format_exponent(123.45), "1.23450e+2");
        assert_eq!(format_exponent(1.0), "1.00000e+0");
        assert_eq!(format_exponent(f64::INFINITY), "inf");
    }
}
