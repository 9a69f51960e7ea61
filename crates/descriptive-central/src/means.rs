//! Arithmetic, geometric, and harmonic means

use descriptive_core::{Dataset, Error, Result};

/// Arithmetic mean of a non-empty dataset.
pub fn mean(data: &Dataset) -> Result<f64> {
    if data.is_empty() {
        return Err(Error::empty_input("mean"));
    }
    Ok(data.sum() / data.len() as f64)
}

/// Geometric mean, `(∏ x)^(1/n)`.
///
/// Defined only for strictly positive data; any zero or negative value makes
/// the result `0.0` by policy (a fallback, not an error). Computed as
/// `exp(mean(ln x))`, which is algebraically the n-th root of the product
/// but does not overflow on long inputs.
pub fn geometric_mean(data: &Dataset) -> Result<f64> {
    if data.is_empty() {
        return Err(Error::empty_input("geometric mean"));
    }
    if data.iter().any(|&x| x <= 0.0) {
        return Ok(0.0);
    }
    let log_sum: f64 = data.iter().map(|&x| x.ln()).sum();
    Ok((log_sum / data.len() as f64).exp())
}

/// Harmonic mean, `n / Σ(1/x)`.
///
/// Same strict-positivity precondition and `0.0` fallback as
/// [`geometric_mean`].
pub fn harmonic_mean(data: &Dataset) -> Result<f64> {
    if data.is_empty() {
        return Err(Error::empty_input("harmonic mean"));
    }
    if data.iter().any(|&x| x <= 0.0) {
        return Ok(0.0);
    }
    let reciprocal_sum: f64 = data.iter().map(|&x| 1.0 / x).sum();
    Ok(data.len() as f64 / reciprocal_sum)
}
