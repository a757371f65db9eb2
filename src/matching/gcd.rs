//! Greatest common divisor, used to filter out non-primitive ratios.

/// Greatest common divisor by repeated remainder.
///
/// `gcd(x, 0) == x`, so the result is only zero when both inputs are.
///
/// # Examples
///
/// ```
/// use ratio_matcher::matching::gcd::gcd;
///
/// assert_eq!(gcd(12, 18), 6);
/// assert_eq!(gcd(7, 22), 1);
/// ```
#[must_use]
pub fn gcd(mut x: u64, mut y: u64) -> u64 {
    while y != 0 {
        let remainder = x % y;
        x = y;
        y = remainder;
    }
    x
}

/// True when the pair is not a multiple of a simpler pair
#[must_use]
pub fn is_primitive(count_a: u64, count_b: u64) -> bool {
    gcd(count_a, count_b) == 1
}
