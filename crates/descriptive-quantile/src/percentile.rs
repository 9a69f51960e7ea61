//! Linear-interpolation percentile over a sorted view

use descriptive_core::{Error, Result, SortedView};

/// Compute the `p`-th percentile of a sorted view, `p` in `[0, 100]`.
///
/// Uses the fractional-index rule: `idx = (p / 100) * (n - 1)`, linearly
/// interpolating between the order statistics at `floor(idx)` and
/// `ceil(idx)` by the fractional part. `percentile(sorted, 0)` is the
/// minimum and `percentile(sorted, 100)` the maximum.
///
/// ```rust
/// use descriptive_core::Dataset;
/// use descriptive_quantile::percentile;
///
/// let sorted = Dataset::parse("1, 2, 3, 4").sorted();
/// assert_eq!(percentile(&sorted, 25.0).unwrap(), 1.75);
/// ```
pub fn percentile(sorted: &SortedView, p: f64) -> Result<f64> {
    if !(0.0..=100.0).contains(&p) {
        return Err(Error::invalid_percentile(p));
    }
    let values = sorted.as_slice();
    if values.is_empty() {
        return Err(Error::empty_input("percentile"));
    }

    let idx = (p / 100.0) * (values.len() - 1) as f64;
    let lower = idx.floor() as usize;
    let upper = idx.ceil() as usize;
    let weight = idx - lower as f64;

    Ok(values[lower] + (values[upper] - values[lower]) * weight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use descriptive_core::Dataset;
    use proptest::prelude::*;

    fn sorted(input: &str) -> SortedView {
        Dataset::parse(input).sorted()
    }

    #[test]
    fn test_percentile_endpoints() {
        let s = sorted("5, 1, 9, 3");
        assert_relative_eq!(percentile(&s, 0.0).unwrap(), 1.0);
        assert_relative_eq!(percentile(&s, 100.0).unwrap(), 9.0);
    }

    #[test]
    fn test_percentile_interpolates() {
        // idx = 0.25 * 3 = 0.75 -> between 1 and 3, weight 0.75
        let s = sorted("1, 3, 5, 7");
        assert_relative_eq!(percentile(&s, 25.0).unwrap(), 2.5);
        // idx = 0.5 * 3 = 1.5 -> midpoint of 3 and 5
        assert_relative_eq!(percentile(&s, 50.0).unwrap(), 4.0);
    }

    #[test]
    fn test_percentile_exact_index() {
        let s = sorted("10, 20, 30, 40, 50");
        // idx = 0.25 * 4 = 1.0, no interpolation
        assert_relative_eq!(percentile(&s, 25.0).unwrap(), 20.0);
        assert_relative_eq!(percentile(&s, 75.0).unwrap(), 40.0);
    }

    #[test]
    fn test_percentile_single_element() {
        let s = sorted("42");
        for p in [0.0, 37.0, 50.0, 100.0] {
            assert_relative_eq!(percentile(&s, p).unwrap(), 42.0);
        }
    }

    #[test]
    fn test_percentile_rejects_out_of_range() {
        let s = sorted("1, 2, 3");
        assert!(percentile(&s, -1.0).is_err());
        assert!(percentile(&s, 100.5).is_err());
        assert!(percentile(&s, f64::NAN).is_err());
    }

    #[test]
    fn test_percentile_empty_input() {
        let s = sorted("");
        assert!(matches!(
            percentile(&s, 50.0),
            Err(Error::InsufficientData { .. })
        ));
    }

    proptest! {
        #[test]
        fn prop_percentile_within_bounds(
            values in prop::collection::vec(-1e6..1e6f64, 1..100),
            p in 0.0..=100.0f64,
        ) {
            let s = Dataset::from_values(values).sorted();
            let v = percentile(&s, p).unwrap();
            prop_assert!(v >= s.min().unwrap());
            prop_assert!(v <= s.max().unwrap());
        }

        #[test]
        fn prop_percentile_monotone_in_p(
            values in prop::collection::vec(-1e6..1e6f64, 1..100),
            p1 in 0.0..=100.0f64,
            p2 in 0.0..=100.0f64,
        ) {
            let s = Dataset::from_values(values).sorted();
            let (lo, hi) = if p1 <= p2 { (p1, p2) } else { (p2, p1) };
            prop_assert!(percentile(&s, lo).unwrap() <= percentile(&s, hi).unwrap());
        }
    }
}
