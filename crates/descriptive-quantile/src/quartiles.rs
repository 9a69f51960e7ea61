//! Quartiles and interquartile range

use crate::{median_classic, percentile};
use descriptive_core::{Result, SortedView};
use serde::{Deserialize, Serialize};

/// The three quartiles of a dataset.
///
/// Q1 and Q3 come from the interpolated [`percentile`] rule at p = 25 and
/// p = 75; Q2 is the classic [`median_classic`]. Invariant: `q1 <= q2 <= q3`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quartiles {
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,
}

impl Quartiles {
    /// Compute quartiles from a non-empty sorted view.
    pub fn from_sorted(sorted: &SortedView) -> Result<Self> {
        Ok(Self {
            q1: percentile(sorted, 25.0)?,
            q2: median_classic(sorted)?,
            q3: percentile(sorted, 75.0)?,
        })
    }

    /// Interquartile range, `q3 - q1`.
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}
