//! Normal-approximation confidence interval for the mean
//!
//! The engine uses the fixed two-tailed 95% normal critical value
//! (z = 1.96) regardless of sample size; it deliberately does not switch to
//! a t-distribution for small n. That is a documented accuracy limitation
//! of the contract, not an oversight.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Two-tailed 95% critical value of the standard normal distribution.
pub const Z_95: f64 = 1.96;

/// A confidence interval around a point estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    /// Lower bound of the interval
    pub lower: f64,
    /// Upper bound of the interval
    pub upper: f64,
    /// The point estimate (center of interval)
    pub estimate: f64,
    /// Confidence level (e.g., 0.95 for 95% CI)
    pub confidence_level: f64,
}

impl ConfidenceInterval {
    /// Width of the confidence interval.
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Margin of error (half-width).
    pub fn margin_of_error(&self) -> f64 {
        self.width() / 2.0
    }

    /// Check if a value is contained in the interval.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

impl fmt::Display for ConfidenceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1}% CI: [{}, {}], estimate: {}",
            self.confidence_level * 100.0,
            self.lower,
            self.upper,
            self.estimate
        )
    }
}

/// 95% normal-approximation interval for a mean with a known standard error.
///
/// `margin = 1.96 * standard_error`; the interval is
/// `[mean - margin, mean + margin]`. With a zero standard error (constant
/// data, or the single-observation fallback) the interval collapses onto
/// the mean.
pub fn mean_ci(mean: f64, standard_error: f64) -> ConfidenceInterval {
    let margin = Z_95 * standard_error;
    ConfidenceInterval {
        lower: mean - margin,
        upper: mean + margin,
        estimate: mean,
        confidence_level: 0.95,
    }
}
