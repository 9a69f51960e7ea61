//! Dispersion and distribution shape for the descriptive statistics engine
//!
//! - [`Dispersion`] — variance, standard deviation, range, standard error,
//!   and coefficient of variation under a [`VarianceMode`] divisor
//! - [`shape`] — Pearson-2 skewness, excess kurtosis, and the qualitative
//!   [`DistributionShape`] classification
//!
//! All degenerate cases (constant data, zero mean, a single observation
//! under the sample divisor) fall back to `0.0` by documented policy,
//! routed through `descriptive_core::safe_div`.

pub mod dispersion;
pub mod shape;

pub use dispersion::{variance, Dispersion, VarianceMode};
pub use shape::{kurtosis, skewness, DistributionShape, SKEWNESS_THRESHOLD};
