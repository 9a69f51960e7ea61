//! Dispersion measures under a sample/population divisor

use descriptive_core::{safe_div, Dataset, Error, Result, SortedView};
use serde::{Deserialize, Serialize};

/// Variance divisor selection: `n - 1` (unbiased sample estimate) or `n`
/// (the dataset is the whole population).
///
/// External configuration, not derived data. It affects variance, standard
/// deviation, standard error, coefficient of variation, and the confidence
/// interval; location and order statistics are untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VarianceMode {
    #[default]
    Sample,
    Population,
}

impl VarianceMode {
    /// The divisor for a dataset of `n` elements.
    ///
    /// `Sample` with `n == 1` yields zero; [`variance`] guards that case.
    pub fn divisor(self, n: usize) -> f64 {
        match self {
            VarianceMode::Sample => n.saturating_sub(1) as f64,
            VarianceMode::Population => n as f64,
        }
    }
}

/// Variance of a non-empty dataset around a precomputed mean.
///
/// `Sample` mode with a single observation has no well-defined variance;
/// the engine reports `0.0` for it rather than an infinity, keeping every
/// output finite.
pub fn variance(data: &Dataset, mean: f64, mode: VarianceMode) -> Result<f64> {
    if data.is_empty() {
        return Err(Error::empty_input("variance"));
    }
    let sum_sq: f64 = data
        .iter()
        .map(|&x| {
            let diff = x - mean;
            diff * diff
        })
        .sum();
    Ok(safe_div(sum_sq, mode.divisor(data.len()), 0.0))
}

/// All dispersion measures of one dataset, computed in a single pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dispersion {
    pub variance: f64,
    pub std_dev: f64,
    /// `max - min`.
    pub range: f64,
    /// `std_dev / sqrt(n)`.
    pub standard_error: f64,
    /// `(std_dev / |mean|) * 100`, or `0.0` when the mean is zero.
    pub coefficient_of_variation: f64,
}

impl Dispersion {
    /// Compute dispersion for a non-empty dataset.
    ///
    /// `sorted` must be the sorted view of `data` and `mean` its arithmetic
    /// mean; both are computed earlier in the same pipeline pass.
    pub fn compute(
        data: &Dataset,
        sorted: &SortedView,
        mean: f64,
        mode: VarianceMode,
    ) -> Result<Self> {
        let (min, max) = match (sorted.min(), sorted.max()) {
            (Some(min), Some(max)) => (min, max),
            _ => return Err(Error::empty_input("dispersion")),
        };

        let variance = variance(data, mean, mode)?;
        let std_dev = variance.sqrt();

        Ok(Self {
            variance,
            std_dev,
            range: max - min,
            standard_error: std_dev / (data.len() as f64).sqrt(),
            coefficient_of_variation: safe_div(std_dev, mean.abs(), 0.0) * 100.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use descriptive_core::Dataset;
    use proptest::prelude::*;

    fn dispersion(input: &str, mode: VarianceMode) -> Dispersion {
        let data = Dataset::parse(input);
        let mean = data.sum() / data.len() as f64;
        Dispersion::compute(&data, &data.sorted(), mean, mode).unwrap()
    }

    #[test]
    fn test_sample_variance() {
        // Classic example: population variance 4, sample variance 32/7.
        let d = dispersion("2,4,4,4,5,5,7,9", VarianceMode::Sample);
        assert_relative_eq!(d.variance, 32.0 / 7.0);
        assert_relative_eq!(d.std_dev, (32.0f64 / 7.0).sqrt());
    }

    #[test]
    fn test_population_variance() {
        let d = dispersion("2,4,4,4,5,5,7,9", VarianceMode::Population);
        assert_relative_eq!(d.variance, 4.0);
        assert_relative_eq!(d.std_dev, 2.0);
    }

    #[test]
    fn test_sample_vs_population_ratio() {
        let n = 8.0f64;
        let sample = dispersion("2,4,4,4,5,5,7,9", VarianceMode::Sample);
        let population = dispersion("2,4,4,4,5,5,7,9", VarianceMode::Population);
        assert_relative_eq!(
            sample.std_dev / population.std_dev,
            (n / (n - 1.0)).sqrt(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_single_observation_sample_mode() {
        // Divisor n - 1 is zero; the documented policy is 0.0, not infinity.
        let d = dispersion("42", VarianceMode::Sample);
        assert_eq!(d.variance, 0.0);
        assert_eq!(d.std_dev, 0.0);
        assert_eq!(d.range, 0.0);
    }

    #[test]
    fn test_single_observation_population_mode() {
        let d = dispersion("42", VarianceMode::Population);
        assert_eq!(d.variance, 0.0);
    }

    #[test]
    fn test_standard_error() {
        let d = dispersion("2,4,4,4,5,5,7,9", VarianceMode::Population);
        assert_relative_eq!(d.standard_error, 2.0 / 8.0f64.sqrt());
    }

    #[test]
    fn test_coefficient_of_variation_zero_mean() {
        let d = dispersion("-1, 1", VarianceMode::Population);
        assert_eq!(d.coefficient_of_variation, 0.0);
    }

    #[test]
    fn test_coefficient_of_variation_negative_mean() {
        let d = dispersion("-2, -4, -6", VarianceMode::Population);
        let expected = d.std_dev / 4.0 * 100.0;
        assert_relative_eq!(d.coefficient_of_variation, expected);
    }

    #[test]
    fn test_range() {
        let d = dispersion("12, 35, 20", VarianceMode::Sample);
        assert_relative_eq!(d.range, 23.0);
    }

    #[test]
    fn test_empty_dataset_errors() {
        let data = Dataset::parse("");
        assert!(Dispersion::compute(&data, &data.sorted(), 0.0, VarianceMode::Sample).is_err());
    }

    proptest! {
        #[test]
        fn prop_non_negativity(
            values in prop::collection::vec(-1e6..1e6f64, 1..100),
            population in proptest::bool::ANY,
        ) {
            let mode = if population { VarianceMode::Population } else { VarianceMode::Sample };
            let data = Dataset::from_values(values);
            let mean = data.sum() / data.len() as f64;
            let d = Dispersion::compute(&data, &data.sorted(), mean, mode).unwrap();
            prop_assert!(d.variance >= 0.0);
            prop_assert!(d.std_dev >= 0.0);
            prop_assert!(d.range >= 0.0);
            prop_assert!(d.standard_error >= 0.0);
        }
    }
}
