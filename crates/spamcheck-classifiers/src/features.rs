//! Sparse feature rows produced by vectorizers

use spamcheck_core::{Error, Result};

/// One feature row per input document
pub type FeatureMatrix = Vec<FeatureVector>;

/// Sparse feature vector with a fixed dimension.
///
/// Entries are kept sorted by column index with no duplicates.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureVector {
    dim: usize,
    entries: Vec<(usize, f64)>,
}

impl FeatureVector {
    /// Create an all-zero vector
    pub fn zeros(dim: usize) -> Self {
        Self {
            dim,
            entries: Vec::new(),
        }
    }

    /// Build a vector from `(index, value)` pairs.
    ///
    /// Pairs may arrive in any order; repeated indices are summed and zero
    /// values dropped. Any index `>= dim` is rejected.
    pub fn from_entries(dim: usize, mut entries: Vec<(usize, f64)>) -> Result<Self> {
        if let Some(&(index, _)) = entries.iter().find(|(index, _)| *index >= dim) {
            return Err(Error::internal(format!(
                "feature index {index} out of range for dimension {dim}"
            )));
        }

        entries.sort_by_key(|(index, _)| *index);

        let mut merged: Vec<(usize, f64)> = Vec::with_capacity(entries.len());
        for (index, value) in entries {
            match merged.last_mut() {
                Some((last, acc)) if *last == index => *acc += value,
                _ => merged.push((index, value)),
            }
        }
        merged.retain(|(_, value)| *value != 0.0);

        Ok(Self {
            dim,
            entries: merged,
        })
    }

    /// Build a sparse vector from a dense slice
    pub fn from_dense(values: &[f64]) -> Self {
        Self {
            dim: values.len(),
            entries: values
                .iter()
                .enumerate()
                .filter(|(_, value)| **value != 0.0)
                .map(|(index, value)| (index, *value))
                .collect(),
        }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    /// Number of stored (non-zero) entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dot product with a dense weight row of the same dimension
    pub fn dot(&self, weights: &[f64]) -> Result<f64> {
        if weights.len() != self.dim {
            return Err(Error::dimension_mismatch(weights.len(), self.dim));
        }

        Ok(self
            .entries
            .iter()
            .map(|(index, value)| value * weights[*index])
            .sum())
    }

    pub fn l1_norm(&self) -> f64 {
        self.entries.iter().map(|(_, value)| value.abs()).sum()
    }

    pub fn l2_norm(&self) -> f64 {
        self.entries
            .iter()
            .map(|(_, value)| value * value)
            .sum::<f64>()
            .sqrt()
    }

    /// Multiply every entry by `factor`
    pub fn scale(&mut self, factor: f64) {
        for (_, value) in &mut self.entries {
            *value *= factor;
        }
    }

    /// Dense copy of the vector
    pub fn to_dense(&self) -> Vec<f64> {
        let mut dense = vec![0.0; self.dim];
        for (index, value) in &self.entries {
            dense[*index] = *value;
        }
        dense
    }
}
