//! Order statistics for the descriptive statistics engine
//!
//! Two deliberately separate median contracts live here:
//!
//! - [`percentile`] — fractional-index linear interpolation, used for
//!   arbitrary percentiles and for Q1/Q3
//! - [`median_classic`] — the even/odd rule, used for the reported median
//!   and everything downstream of it (notably skewness)
//!
//! # Example
//!
//! ```rust
//! use descriptive_core::Dataset;
//! use descriptive_quantile::{percentile, Quartiles};
//!
//! let sorted = Dataset::parse("12, 15, 18, 20, 22, 25, 28, 30, 32, 35").sorted();
//! let q = Quartiles::from_sorted(&sorted).unwrap();
//! assert_eq!(q.q1, 18.5);
//! assert_eq!(q.q3, 29.5);
//! assert_eq!(percentile(&sorted, 50.0).unwrap(), 23.5);
//! ```

pub mod median;
pub mod percentile;
pub mod quartiles;

pub use median::median_classic;
pub use percentile::percentile;
pub use quartiles::Quartiles;
