//! Per-session driver: parse, describe, record

use crate::history::{RunHistory, RunHistoryEntry};
use crate::result::{describe, StatisticsResult};
use descriptive_core::Dataset;
use descriptive_spread::VarianceMode;
use tracing::debug;

/// Longest label stored for a run; longer inputs are truncated.
const LABEL_MAX_CHARS: usize = 40;

/// One caller's statistics session: a variance mode and a private run
/// history.
///
/// The engine itself is stateless; the session is the thin stateful wrapper
/// a caller re-runs on every input or mode change. A server holding many
/// sessions gives each its own `StatsSession`, so histories never mix.
#[derive(Debug, Clone, Default)]
pub struct StatsSession {
    mode: VarianceMode,
    history: RunHistory,
}

impl StatsSession {
    /// Session with the default `Sample` variance mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Session with an explicit variance mode.
    pub fn with_mode(mode: VarianceMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> VarianceMode {
        self.mode
    }

    /// Change the variance divisor for subsequent runs.
    pub fn set_mode(&mut self, mode: VarianceMode) {
        self.mode = mode;
    }

    /// Parse `input`, compute the full statistics, and record the run.
    ///
    /// Returns `None` (and records nothing) when the parsed dataset is
    /// empty — the caller renders that as "nothing to show", not as an
    /// error.
    pub fn run(&mut self, input: &str) -> Option<StatisticsResult> {
        let data = Dataset::parse(input);
        debug!(count = data.len(), mode = ?self.mode, "running statistics");

        let result = describe(&data, self.mode)?;
        self.history.push(RunHistoryEntry::new(
            dataset_label(input),
            result.mean,
            result.std_dev,
        ));
        Some(result)
    }

    /// This session's run history, oldest-first.
    pub fn history(&self) -> &RunHistory {
        &self.history
    }
}

fn dataset_label(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.chars().count() <= LABEL_MAX_CHARS {
        trimmed.to_string()
    } else {
        let mut label: String = trimmed.chars().take(LABEL_MAX_CHARS - 1).collect();
        label.push('…');
        label
    }
}
