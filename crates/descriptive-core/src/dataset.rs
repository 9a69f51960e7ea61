//! Dataset parsing and ordered views
//!
//! A [`Dataset`] is the immutable snapshot every calculator operates on: the
//! finite numbers recovered from a free-text input, in the order they were
//! typed. All statistics treat it as a multiset; input order is kept only for
//! display and audit purposes. [`SortedView`] is its ascending permutation and
//! backs every order-statistic computation.

use serde::{Deserialize, Serialize};

/// An ordered sequence of finite numbers parsed from raw input.
///
/// Invariant: every element is finite. Duplicates are allowed; the sequence
/// may be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    values: Vec<f64>,
}

impl Dataset {
    /// Parse a dataset from free text.
    ///
    /// Tokens are separated by any mixture of commas and whitespace. Tokens
    /// that fail to parse, or parse to NaN/infinity, are dropped silently:
    /// the parser never fails, so incrementally-typed input just yields a
    /// shorter (possibly empty) dataset.
    ///
    /// ```rust
    /// use descriptive_core::Dataset;
    ///
    /// let data = Dataset::parse("12, 15 18,,20 oops");
    /// assert_eq!(data.as_slice(), &[12.0, 15.0, 18.0, 20.0]);
    /// ```
    pub fn parse(text: &str) -> Self {
        let values = text
            .split(|c: char| c == ',' || c.is_whitespace())
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .filter_map(|token| token.parse::<f64>().ok())
            .filter(|x| x.is_finite())
            .collect();
        Self { values }
    }

    /// Build a dataset from values already in hand, dropping non-finite ones.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: values.into_iter().filter(|x| x.is_finite()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.values.iter()
    }

    /// Sum of all elements.
    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Sort ascending into a [`SortedView`].
    pub fn sorted(&self) -> SortedView {
        let mut sorted = self.values.clone();
        // Elements are finite by invariant, so total_cmp is a plain ordering.
        sorted.sort_unstable_by(f64::total_cmp);
        SortedView { values: sorted }
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// The elements of a [`Dataset`], sorted ascending.
///
/// Invariant: a permutation of the dataset it came from; same length.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SortedView {
    values: Vec<f64>,
}

impl SortedView {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Smallest element, if any.
    pub fn min(&self) -> Option<f64> {
        self.values.first().copied()
    }

    /// Largest element, if any.
    pub fn max(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Consume the view, yielding the sorted values.
    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }
}
