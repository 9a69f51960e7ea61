//! Result assembly for the descriptive statistics engine
//!
//! Ties the calculator crates together into a single record:
//!
//! - [`describe`] — the pure `(Dataset, VarianceMode) -> Option<StatisticsResult>`
//!   pipeline: parse-independent, idempotent, referentially transparent
//! - [`StatisticsResult`] — the immutable record of every computed field
//! - [`RunHistory`] / [`StatsSession`] — caller-owned bounded history,
//!   one per logical session
//!
//! # Example
//!
//! ```rust
//! use descriptive_engine::StatsSession;
//!
//! let mut session = StatsSession::new();
//! let stats = session.run("12, 15, 18, 20, 22, 25, 28, 30, 32, 35").unwrap();
//!
//! assert_eq!(stats.count, 10);
//! assert_eq!(stats.mean, 23.7);
//! assert_eq!(session.history().len(), 1);
//! ```

pub mod history;
pub mod result;
pub mod session;

pub use history::{RunHistory, RunHistoryEntry, HISTORY_CAPACITY};
pub use result::{describe, StatisticsResult};
pub use session::StatsSession;

// Re-export the configuration types callers need alongside the engine
pub use descriptive_core::Dataset;
pub use descriptive_spread::{DistributionShape, VarianceMode};
