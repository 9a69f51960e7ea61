//! Distribution shape: skewness, excess kurtosis, and a qualitative label

use descriptive_core::{safe_div, Dataset, Error, Result};
use serde::{Deserialize, Serialize};

/// Absolute skewness below this is reported as symmetric.
pub const SKEWNESS_THRESHOLD: f64 = 0.5;

/// Pearson's second skewness coefficient, `3 * (mean - median) / std_dev`.
///
/// This is the median-based coefficient, not the third standardized moment;
/// the two disagree in general and the engine's contract is the median-based
/// one. Zero standard deviation (constant data) reports `0.0`.
pub fn skewness(mean: f64, median: f64, std_dev: f64) -> f64 {
    safe_div(3.0 * (mean - median), std_dev, 0.0)
}

/// Excess kurtosis, `E[(x - mean)^4] / std_dev^4 - 3`.
///
/// Normalized against the normal distribution, whose excess kurtosis is
/// zero. Zero standard deviation reports `0.0`.
pub fn kurtosis(data: &Dataset, mean: f64, std_dev: f64) -> Result<f64> {
    if data.is_empty() {
        return Err(Error::empty_input("kurtosis"));
    }
    if std_dev == 0.0 {
        return Ok(0.0);
    }
    let fourth_moment: f64 = data
        .iter()
        .map(|&x| {
            let diff = x - mean;
            let sq = diff * diff;
            sq * sq
        })
        .sum::<f64>()
        / data.len() as f64;
    Ok(fourth_moment / std_dev.powi(4) - 3.0)
}

/// Qualitative distribution shape derived from skewness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistributionShape {
    Symmetric,
    RightSkewed,
    LeftSkewed,
}

impl DistributionShape {
    /// Classify a skewness value at the fixed ±0.5 thresholds.
    pub fn classify(skewness: f64) -> Self {
        if skewness >= SKEWNESS_THRESHOLD {
            DistributionShape::RightSkewed
        } else if skewness <= -SKEWNESS_THRESHOLD {
            DistributionShape::LeftSkewed
        } else {
            DistributionShape::Symmetric
        }
    }
}

impl std::fmt::Display for DistributionShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            DistributionShape::Symmetric => "Symmetric",
            DistributionShape::RightSkewed => "Right-skewed",
            DistributionShape::LeftSkewed => "Left-skewed",
        };
        write!(f, "{label}")
    }
}
