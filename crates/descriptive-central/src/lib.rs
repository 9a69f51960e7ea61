//! Central tendency measures for the descriptive statistics engine
//!
//! - [`mean`] — arithmetic mean
//! - [`Mode`] — multimodal frequency-based mode with a `No Mode` sentinel
//! - [`geometric_mean`] / [`harmonic_mean`] — multiplicative/rate means,
//!   zero-fallback on non-positive data
//!
//! The median lives in `descriptive-quantile` with the other order
//! statistics.

pub mod means;
pub mod mode;

pub use means::{geometric_mean, harmonic_mean, mean};
pub use mode::Mode;
