//! Bounded run history
//!
//! A fixed-capacity FIFO of lightweight run snapshots. The history is
//! caller-owned state, not an engine singleton: each session gets its own
//! instance, so concurrent sessions never share or contend on it.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::SystemTime;
use tracing::debug;

/// Default number of runs retained before eviction.
pub const HISTORY_CAPACITY: usize = 10;

/// One successful run, snapshotted for the history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunHistoryEntry {
    /// Short label for the input the run was computed from.
    pub dataset_label: String,
    pub mean: f64,
    pub std_dev: f64,
    pub timestamp: SystemTime,
}

impl RunHistoryEntry {
    /// Snapshot a run at the current time.
    pub fn new(dataset_label: impl Into<String>, mean: f64, std_dev: f64) -> Self {
        Self {
            dataset_label: dataset_label.into(),
            mean,
            std_dev,
            timestamp: SystemTime::now(),
        }
    }
}

/// Fixed-capacity FIFO of [`RunHistoryEntry`] values.
///
/// Append-only except for eviction: pushing onto a full history drops the
/// oldest entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunHistory {
    entries: VecDeque<RunHistoryEntry>,
    capacity: usize,
}

impl RunHistory {
    /// History with the default capacity of 10.
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    /// History with a custom capacity (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an entry, evicting the oldest when full.
    pub fn push(&mut self, entry: RunHistoryEntry) {
        if self.entries.len() == self.capacity {
            if let Some(evicted) = self.entries.pop_front() {
                debug!(label = %evicted.dataset_label, "evicting oldest history entry");
            }
        }
        self.entries.push_back(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Entries oldest-first.
    pub fn iter(&self) -> impl Iterator<Item = &RunHistoryEntry> {
        self.entries.iter()
    }

    /// The oldest retained entry, if any.
    pub fn oldest(&self) -> Option<&RunHistoryEntry> {
        self.entries.front()
    }

    /// The most recent entry, if any.
    pub fn newest(&self) -> Option<&RunHistoryEntry> {
        self.entries.back()
    }
}

impl Default for RunHistory {
    fn default() -> Self {
        Self::new()
    }
}
