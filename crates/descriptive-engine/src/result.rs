//! The assembled statistics record and the `describe` entry point

use descriptive_central::{geometric_mean, harmonic_mean, mean, Mode};
use descriptive_confidence::mean_ci;
use descriptive_core::{Dataset, Result};
use descriptive_quantile::Quartiles;
use descriptive_spread::{kurtosis, skewness, Dispersion, DistributionShape, VarianceMode};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The full battery of descriptive statistics for one dataset.
///
/// Produced once per computation and immutable thereafter. Every numeric
/// field is a full-precision `f64`; rounding for display is a caller
/// concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsResult {
    pub count: usize,
    pub sum: f64,
    pub min: f64,
    pub max: f64,
    pub range: f64,
    pub mean: f64,
    /// Classic even/odd median; identical to `q2`.
    pub median: f64,
    pub mode: Mode,
    pub variance: f64,
    pub std_dev: f64,
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,
    pub iqr: f64,
    pub standard_error: f64,
    pub coefficient_of_variation: f64,
    pub skewness: f64,
    /// Excess kurtosis (normal distribution = 0).
    pub kurtosis: f64,
    pub distribution_shape: DistributionShape,
    pub ci_lower: f64,
    pub ci_upper: f64,
    pub geometric_mean: f64,
    pub harmonic_mean: f64,
    pub sorted_data: Vec<f64>,
}

/// Compute every statistic for a dataset under the given variance mode.
///
/// Pure and idempotent: the result is a function of `(data, mode)` alone.
/// An empty dataset is the engine's sole error-like outcome and yields
/// `None`; every non-empty dataset produces a result whose fields are all
/// finite, with the degenerate cases covered by the documented
/// zero-fallbacks.
pub fn describe(data: &Dataset, mode: VarianceMode) -> Option<StatisticsResult> {
    if data.is_empty() {
        debug!("empty dataset, nothing to describe");
        return None;
    }
    match assemble(data, mode) {
        Ok(result) => Some(result),
        Err(err) => {
            // Unreachable for non-empty input; kept as a guard rather than
            // a panic path.
            debug!(%err, "statistics assembly failed");
            None
        }
    }
}

fn assemble(data: &Dataset, mode: VarianceMode) -> Result<StatisticsResult> {
    let sorted = data.sorted();
    let mean = mean(data)?;
    let quartiles = Quartiles::from_sorted(&sorted)?;
    let dispersion = Dispersion::compute(data, &sorted, mean, mode)?;

    // Skewness is defined against the classic median (q2), not the
    // interpolated 50th percentile.
    let skewness = skewness(mean, quartiles.q2, dispersion.std_dev);
    let kurtosis = kurtosis(data, mean, dispersion.std_dev)?;
    let ci = mean_ci(mean, dispersion.standard_error);

    Ok(StatisticsResult {
        count: data.len(),
        sum: data.sum(),
        min: sorted.min().unwrap_or_default(),
        max: sorted.max().unwrap_or_default(),
        range: dispersion.range,
        mean,
        median: quartiles.q2,
        mode: Mode::of(data),
        variance: dispersion.variance,
        std_dev: dispersion.std_dev,
        q1: quartiles.q1,
        q2: quartiles.q2,
        q3: quartiles.q3,
        iqr: quartiles.iqr(),
        standard_error: dispersion.standard_error,
        coefficient_of_variation: dispersion.coefficient_of_variation,
        skewness,
        kurtosis,
        distribution_shape: DistributionShape::classify(skewness),
        ci_lower: ci.lower,
        ci_upper: ci.upper,
        geometric_mean: geometric_mean(data)?,
        harmonic_mean: harmonic_mean(data)?,
        sorted_data: sorted.into_vec(),
    })
}
