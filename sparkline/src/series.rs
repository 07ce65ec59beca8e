//! Value storage owned by each sparkline instance.

use std::num::NonZeroUsize;

/// Flat buffer of samples, optionally holding several interleaved series
/// laid out back to back (`[a0, a1, .., b0, b1, ..]`).
///
/// The buffer is always an owned copy: setters never alias the caller's data,
/// so mutating the source after a set has no effect on what is drawn.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValueSeries {
    values: Vec<f64>,
}

impl ValueSeries {
    /// Upper bound advertised for individual samples.
    pub const MAX_VALUE: f64 = 100.0;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_slice(values: &[f64]) -> Self {
        Self {
            values: values.to_vec(),
        }
    }

    /// Replace the whole buffer with a copy of `values`.
    pub fn replace(&mut self, values: &[f64]) {
        self.values.clear();
        self.values.extend_from_slice(values);
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Points available to each of `num_sets` series. Trailing values that do
    /// not fill a whole series are dropped.
    pub fn points_per_series(&self, num_sets: NonZeroUsize) -> usize {
        self.values.len() / num_sets.get()
    }

    /// Number of trailing values ignored for `num_sets` series.
    pub fn remainder(&self, num_sets: NonZeroUsize) -> usize {
        self.values.len() % num_sets.get()
    }
}
