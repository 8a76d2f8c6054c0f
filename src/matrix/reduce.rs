use ndarray::{concatenate, ArrayView2, Axis};

use super::Matrix;
use crate::error::{NetError, Result};

/// Reductions
impl Matrix {
    /// Sum of all entries.
    pub fn sum(&self) -> f32 {
        self.data.sum()
    }

    /// Sum each row, giving a `rows x 1` column vector.
    pub fn sum_per_row(&self) -> Matrix {
        Matrix::wrap(self.data.sum_axis(Axis(1)).insert_axis(Axis(1)))
    }

    /// Sum each column, giving a `1 x cols` row vector.
    pub fn sum_per_column(&self) -> Matrix {
        Matrix::wrap(self.data.sum_axis(Axis(0)).insert_axis(Axis(0)))
    }

    /// Maximum of each row, as a `rows x 1` column vector.
    pub fn max_per_row(&self) -> Matrix {
        let folded = self.data.fold_axis(Axis(1), f32::NEG_INFINITY, |&acc, &v| acc.max(v));
        Matrix::wrap(folded.insert_axis(Axis(1)))
    }

    /// Maximum of each column, as a `1 x cols` row vector.
    pub fn max_per_column(&self) -> Matrix {
        let folded = self.data.fold_axis(Axis(0), f32::NEG_INFINITY, |&acc, &v| acc.max(v));
        Matrix::wrap(folded.insert_axis(Axis(0)))
    }

    /// Minimum of each row, as a `rows x 1` column vector.
    pub fn min_per_row(&self) -> Matrix {
        let folded = self.data.fold_axis(Axis(1), f32::INFINITY, |&acc, &v| acc.min(v));
        Matrix::wrap(folded.insert_axis(Axis(1)))
    }

    /// Minimum of each column, as a `1 x cols` row vector.
    pub fn min_per_column(&self) -> Matrix {
        let folded = self.data.fold_axis(Axis(0), f32::INFINITY, |&acc, &v| acc.min(v));
        Matrix::wrap(folded.insert_axis(Axis(0)))
    }

    pub fn max(&self) -> f32 {
        self.data.fold(f32::NEG_INFINITY, |acc, &v| acc.max(v))
    }

    pub fn min(&self) -> f32 {
        self.data.fold(f32::INFINITY, |acc, &v| acc.min(v))
    }
}

/// Row and column selection
impl Matrix {
    fn check_indices(indices: &[usize], bound: usize) -> Result<()> {
        if indices.is_empty() {
            return Err(NetError::EmptyIndices);
        }
        if let Some(&index) = indices.iter().find(|&&i| i >= bound) {
            return Err(NetError::IndexOutOfRange { index, bound });
        }
        Ok(())
    }

    /// Gather the given columns, in the given order.
    pub fn select_columns(&self, indices: &[usize]) -> Result<Matrix> {
        Self::check_indices(indices, self.cols())?;
        Ok(Matrix::wrap(self.data.select(Axis(1), indices)))
    }

    /// Gather the given rows, in the given order.
    pub fn select_rows(&self, indices: &[usize]) -> Result<Matrix> {
        Self::check_indices(indices, self.rows())?;
        Ok(Matrix::wrap(self.data.select(Axis(0), indices)))
    }

    /// Place matrices with equal row counts side by side.
    pub fn append_columns(matrices: &[Matrix]) -> Result<Matrix> {
        let first = matrices.first().ok_or_else(|| {
            NetError::invalid_parameter("matrices", "cannot append an empty list")
        })?;
        if let Some(bad) = matrices.iter().find(|m| m.rows() != first.rows()) {
            return Err(NetError::dimension_mismatch(
                format!("{} rows", first.rows()),
                format!("{} rows", bad.rows()),
            ));
        }

        let views: Vec<ArrayView2<f32>> = matrices.iter().map(|m| m.data.view()).collect();
        let data = concatenate(Axis(1), &views).map_err(|e| {
            NetError::dimension_mismatch(format!("{} rows", first.rows()), e.to_string())
        })?;
        Ok(Matrix::wrap(data))
    }
}
