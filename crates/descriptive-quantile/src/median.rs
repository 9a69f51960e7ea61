//! Classic even/odd median
//!
//! Kept as its own function, distinct from [`percentile`](crate::percentile)
//! at p = 50: the engine's median (and everything downstream of it, notably
//! the median-based skewness coefficient) is defined by the classic rule,
//! while Q1/Q3 use the interpolation rule. The two formulas agree on odd
//! counts and coincide up to rounding on even counts, but they are separate
//! contracts and must stay separate.

use descriptive_core::{Error, Result, SortedView};

/// Median by the classic rule: the middle order statistic for odd counts,
/// the average of the two middle order statistics for even counts.
pub fn median_classic(sorted: &SortedView) -> Result<f64> {
    let values = sorted.as_slice();
    let n = values.len();
    if n == 0 {
        return Err(Error::empty_input("median"));
    }

    if n % 2 == 1 {
        Ok(values[n / 2])
    } else {
        Ok((values[n / 2 - 1] + values[n / 2]) / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use descriptive_core::Dataset;

    #[test]
    fn test_median_odd_count() {
        let s = Dataset::parse("5, 1, 3").sorted();
        assert_relative_eq!(median_classic(&s).unwrap(), 3.0);
    }

    #[test]
    fn test_median_even_count() {
        let s = Dataset::parse("4, 1, 3, 2").sorted();
        assert_relative_eq!(median_classic(&s).unwrap(), 2.5);
    }

    #[test]
    fn test_median_single_element() {
        let s = Dataset::parse("7").sorted();
        assert_relative_eq!(median_classic(&s).unwrap(), 7.0);
    }

    #[test]
    fn test_median_empty() {
        let s = Dataset::parse("").sorted();
        assert!(median_classic(&s).is_err());
    }

    #[test]
    fn test_median_agrees_with_interpolated_p50() {
        // The two median contracts coincide on these inputs; this pins the
        // agreement without unifying the implementations.
        for input in ["1,2,3,4,5", "1,2,3,4", "10, 20", "2, 2, 9, 9"] {
            let s = Dataset::parse(input).sorted();
            assert_relative_eq!(
                median_classic(&s).unwrap(),
                crate::percentile(&s, 50.0).unwrap()
            );
        }
    }
}
