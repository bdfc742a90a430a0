//! Utility functions for the foxfinder crate

/// Factorial of `n` as a `u64`.
///
/// The crate only ever needs factorials up to 16!, which fits comfortably in
/// a `u64`.
///
/// # Examples
///
/// ```
/// use foxfinder::utils::factorial;
///
/// assert_eq!(factorial(0), 1);
/// assert_eq!(factorial(5), 120);
/// assert_eq!(factorial(16), 20_922_789_888_000);
/// ```
pub fn factorial(n: usize) -> u64 {
    (1..=n as u64).product()
}

/// Multinomial coefficient: the number of distinct orderings of a multiset
/// with the given per-kind counts.
///
/// # Examples
///
/// ```
/// use foxfinder::utils::multinomial;
///
/// // The full fox tile bag: 16! / (5! * 6! * 5!)
/// assert_eq!(multinomial(&[5, 6, 5]), 2_018_016);
/// assert_eq!(multinomial(&[0, 0, 0]), 1);
/// ```
pub fn multinomial(counts: &[usize]) -> u64 {
    let total: usize = counts.iter().sum();
    let denominator: u64 = counts.iter().map(|&c| factorial(c)).product();
    factorial(total) / denominator
}

/// A ratio as a percentage truncated (not rounded) to two decimal places.
///
/// Matches the original game's statistic formatting: `floor(x * 10000) / 100`.
///
/// # Examples
///
/// ```
/// use foxfinder::utils::truncated_percent;
///
/// assert_eq!(truncated_percent(0.455_55), 45.55);
/// assert_eq!(truncated_percent(0.999_999), 99.99);
/// assert_eq!(truncated_percent(1.0), 100.0);
/// ```
pub fn truncated_percent(ratio: f64) -> f64 {
    (ratio * 10_000.0).floor() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial_small_values() {
        assert_eq!(factorial(1), 1);
        assert_eq!(factorial(6), 720);
    }

    #[test]
    fn test_multinomial_single_kind() {
        assert_eq!(multinomial(&[4]), 1);
    }

    #[test]
    fn test_multinomial_binomial_case() {
        // 6 choose 2
        assert_eq!(multinomial(&[2, 4]), 15);
    }

    #[test]
    fn test_truncated_percent_never_rounds_up() {
        assert_eq!(truncated_percent(0.123_456), 12.34);
        assert_eq!(truncated_percent(0.000_09), 0.0);
    }
}
