//! Core types for the descriptive statistics engine
//!
//! This crate provides the foundation the calculator crates build on:
//!
//! - [`Dataset`] / [`SortedView`] — the immutable input snapshot and its
//!   ascending permutation
//! - [`Error`] / [`Result`] — the unified error type for all
//!   descriptive-stats crates
//! - [`safe_div`] — the single home of the divide-by-zero fallback policy
//!
//! # Example
//!
//! ```rust
//! use descriptive_core::Dataset;
//!
//! let data = Dataset::parse("12, 15 18,20");
//! assert_eq!(data.len(), 4);
//!
//! let sorted = data.sorted();
//! assert_eq!(sorted.min(), Some(12.0));
//! assert_eq!(sorted.max(), Some(20.0));
//! ```

pub mod dataset;
pub mod error;
pub mod math;

// Re-export core types
pub use dataset::{Dataset, SortedView};
pub use error::{Error, Result};
pub use math::safe_div;
