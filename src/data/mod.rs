//! # Data Module
//!
//! Labelled samples and their conversion into the column-per-sample `X`/`Y`
//! matrices the network consumes.
//!
//! ```rust
//! use deepnn::data::{samples_to_x, samples_to_y, Sample};
//!
//! let samples = vec![
//!     Sample::new(vec![0.5, -0.2], 1),
//!     Sample::new(vec![-0.7, 0.1], 0),
//! ];
//! let x = samples_to_x(&samples).unwrap();
//! let y = samples_to_y(&samples).unwrap();
//! assert_eq!(x.shape(), (2, 2));
//! assert_eq!(y.shape(), (1, 2));
//! ```

pub mod loader;

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{NetError, Result};
use crate::matrix::Matrix;

pub use loader::{load_sample_files, load_samples};

/// One training or test item: a feature vector and an integer label.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub features: Vec<f32>,
    pub label: usize,
}

impl Sample {
    pub fn new(features: Vec<f32>, label: usize) -> Self {
        Sample { features, label }
    }

    /// Features as a `d x 1` column.
    pub fn to_x(&self) -> Result<Matrix> {
        Matrix::from_vec(self.features.len(), 1, self.features.clone())
    }

    /// Label as a `1 x 1` matrix.
    pub fn to_y(&self) -> Matrix {
        Matrix::scalar(self.label as f32)
    }

    /// Label as a `num_labels x 1` one-hot column.
    pub fn to_y_one_hot(&self, num_labels: usize) -> Result<Matrix> {
        Matrix::from_vec(num_labels, 1, one_hot_vec(self.label, num_labels)?)
    }
}

/// A vector of `num_labels` zeros with a one at `label`.
pub fn one_hot_vec(label: usize, num_labels: usize) -> Result<Vec<f32>> {
    if label >= num_labels {
        return Err(NetError::IndexOutOfRange { index: label, bound: num_labels });
    }
    let mut v = vec![0.0; num_labels];
    v[label] = 1.0;
    Ok(v)
}

/// Feature matrix with one column per sample.
pub fn samples_to_x(samples: &[Sample]) -> Result<Matrix> {
    let columns = samples.iter().map(Sample::to_x).collect::<Result<Vec<_>>>()?;
    Matrix::append_columns(&columns)
}

/// `1 x m` label row.
pub fn samples_to_y(samples: &[Sample]) -> Result<Matrix> {
    let columns: Vec<Matrix> = samples.iter().map(Sample::to_y).collect();
    Matrix::append_columns(&columns)
}

/// `num_labels x m` one-hot label matrix.
pub fn samples_to_y_one_hot(samples: &[Sample], num_labels: usize) -> Result<Matrix> {
    let columns = samples
        .iter()
        .map(|s| s.to_y_one_hot(num_labels))
        .collect::<Result<Vec<_>>>()?;
    Matrix::append_columns(&columns)
}

/// Group samples by label, labels in ascending order.
pub fn group_by_label(samples: &[Sample]) -> BTreeMap<usize, Vec<Sample>> {
    let mut groups: BTreeMap<usize, Vec<Sample>> = BTreeMap::new();
    for sample in samples {
        groups.entry(sample.label).or_default().push(sample.clone());
    }
    groups
}

/// Split samples in two, label by label: each sample lands in the first set
/// when a seeded uniform draw in `[0, 1)` falls below `fraction`.
pub fn split_data_set(samples: &[Sample], fraction: f32, seed: u64) -> Result<(Vec<Sample>, Vec<Sample>)> {
    if !(0.0..=1.0).contains(&fraction) {
        return Err(NetError::invalid_parameter(
            "fraction".to_string(),
            format!("must be within [0, 1], got {}", fraction),
        ));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut first = Vec::new();
    let mut second = Vec::new();
    for (_, group) in group_by_label(samples) {
        for sample in group {
            if rng.gen::<f32>() < fraction {
                first.push(sample);
            } else {
                second.push(sample);
            }
        }
    }
    Ok((first, second))
}

/// Percentage of samples carrying each label.
pub fn samples_diversity(samples: &[Sample]) -> BTreeMap<usize, f32> {
    let total = samples.len() as f32;
    let mut counts: BTreeMap<usize, f32> = BTreeMap::new();
    for sample in samples {
        *counts.entry(sample.label).or_insert(0.0) += 1.0;
    }
    for share in counts.values_mut() {
        *share = *share / total * 100.0;
    }
    counts
}

/// Smallest number of samples carried by any label, `None` when empty.
pub fn min_samples_per_label(samples: &[Sample]) -> Option<usize> {
    group_by_label(samples).values().map(Vec::len).min()
}
