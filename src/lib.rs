//! Descriptive statistics engine
//!
//! Turns a raw list of numbers into a full battery of descriptive
//! statistics: central tendency, dispersion, quantiles, distribution shape,
//! and a normal-approximation confidence interval. The engine is a
//! single-pass pipeline of pure functions over an immutable dataset
//! snapshot; the only state anywhere is the caller-owned, bounded run
//! history.
//!
//! # Crates
//!
//! - [`descriptive_core`] — dataset parsing, sorted views, errors
//! - [`descriptive_quantile`] — interpolated percentiles, the classic
//!   median, quartiles
//! - [`descriptive_central`] — mean, mode, geometric/harmonic means
//! - [`descriptive_spread`] — variance, standard error, skewness, kurtosis
//! - [`descriptive_confidence`] — the fixed-z 95% interval
//! - [`descriptive_engine`] — the assembled result, history, and session
//!
//! # Example
//!
//! ```rust
//! use descriptive_stats::{StatsSession, VarianceMode};
//!
//! let mut session = StatsSession::new();
//! let stats = session.run("12, 15, 18, 20, 22, 25, 28, 30, 32, 35").unwrap();
//! assert_eq!(stats.mean, 23.7);
//! assert_eq!(stats.median, 23.5);
//!
//! session.set_mode(VarianceMode::Population);
//! let stats = session.run("2, 4, 4, 4, 5, 5, 7, 9").unwrap();
//! assert_eq!(stats.variance, 4.0);
//! ```

// Re-export workspace crates
pub use descriptive_central as central;
pub use descriptive_confidence as confidence;
pub use descriptive_core as core;
pub use descriptive_engine as engine;
pub use descriptive_quantile as quantile;
pub use descriptive_spread as spread;

// Flat re-exports of the main entry points
pub use descriptive_central::Mode;
pub use descriptive_confidence::{mean_ci, ConfidenceInterval, Z_95};
pub use descriptive_core::{Dataset, Error, Result, SortedView};
pub use descriptive_engine::{
    describe, RunHistory, RunHistoryEntry, StatisticsResult, StatsSession, HISTORY_CAPACITY,
};
pub use descriptive_quantile::{median_classic, percentile, Quartiles};
pub use descriptive_spread::{DistributionShape, VarianceMode};
