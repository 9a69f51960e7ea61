//! Mode detection with multimodal support

use descriptive_core::Dataset;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The mode(s) of a dataset.
///
/// When the maximum frequency exceeds one, every value at that frequency is
/// a mode, listed in order of first appearance — a perfectly uniform
/// dataset legitimately reports every distinct value. When all values are
/// unique there is no mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Mode {
    /// All values occur exactly once.
    None,
    /// Every value tied at the maximum frequency, in first-appearance order.
    Values(Vec<f64>),
}

impl Mode {
    /// Find the mode(s) of a dataset.
    ///
    /// ```rust
    /// use descriptive_central::Mode;
    /// use descriptive_core::Dataset;
    ///
    /// let mode = Mode::of(&Dataset::parse("3, 1, 3, 2, 1"));
    /// assert_eq!(mode.to_string(), "3, 1");
    ///
    /// let mode = Mode::of(&Dataset::parse("1, 2, 3"));
    /// assert_eq!(mode.to_string(), "No Mode");
    /// ```
    pub fn of(data: &Dataset) -> Self {
        let mut counts: HashMap<OrderedFloat<f64>, usize> = HashMap::new();
        let mut first_seen: Vec<f64> = Vec::new();

        for &x in data {
            let count = counts.entry(OrderedFloat(x)).or_insert(0);
            if *count == 0 {
                first_seen.push(x);
            }
            *count += 1;
        }

        let max_freq = counts.values().copied().max().unwrap_or(0);
        if max_freq <= 1 {
            return Mode::None;
        }

        Mode::Values(
            first_seen
                .into_iter()
                .filter(|x| counts[&OrderedFloat(*x)] == max_freq)
                .collect(),
        )
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::None => write!(f, "No Mode"),
            Mode::Values(values) => {
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{v}")?;
                }
                Ok(())
            }
        }
    }
}
