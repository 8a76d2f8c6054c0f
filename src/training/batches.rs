//! Seeded shuffling and mini-batch partitioning.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::{NetError, Result};
use crate::matrix::Matrix;

/// A column slice of the training set used for one gradient step.
#[derive(Debug, Clone)]
pub struct MiniBatch {
    pub x: Matrix,
    pub y: Matrix,
}

/// Shuffle seed for `epoch`: `base + epoch + 1`, so every epoch sees a
/// different permutation and the whole run is reproducible from `base`.
pub fn epoch_seed(base: u64, epoch: usize) -> u64 {
    base.wrapping_add(epoch as u64).wrapping_add(1)
}

/// A permutation of `0..m` determined entirely by `seed`.
pub fn shuffled_indices(m: usize, seed: u64) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..m).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);
    indices
}

/// Split `indices` into consecutive chunks of `batch_size`. A shorter final
/// chunk holds the remainder; there is none when the remainder is zero.
pub fn partition_indices(indices: &[usize], batch_size: usize) -> Result<Vec<&[usize]>> {
    if batch_size == 0 {
        return Err(NetError::invalid_parameter("mini_batch_size", "must be greater than 0"));
    }
    Ok(indices.chunks(batch_size).collect())
}

/// Shuffle the sample columns of `x` and `y` with `seed` and cut them into
/// mini-batches of `batch_size` columns.
pub fn random_mini_batches(x: &Matrix, y: &Matrix, batch_size: usize, seed: u64) -> Result<Vec<MiniBatch>> {
    if x.cols() != y.cols() {
        return Err(NetError::dimension_mismatch(
            format!("{} label columns", x.cols()),
            format!("{} label columns", y.cols()),
        ));
    }

    let indices = shuffled_indices(y.cols(), seed);
    partition_indices(&indices, batch_size)?
        .into_iter()
        .map(|chunk| -> Result<MiniBatch> {
            Ok(MiniBatch {
                x: x.select_columns(chunk)?,
                y: y.select_columns(chunk)?,
            })
        })
        .collect()
}
