use ndarray::Zip;

use super::Matrix;
use crate::error::{NetError, Result};

#[inline]
fn mask(condition: bool) -> f32 {
    if condition {
        1.0
    } else {
        0.0
    }
}

/// Unary elementwise operations. All of them return a new matrix of the same shape.
impl Matrix {
    /// Apply `f` to every entry.
    pub fn map<F: Fn(f32) -> f32>(&self, f: F) -> Matrix {
        Matrix::wrap(self.data.mapv(f))
    }

    pub fn mul_scalar(&self, s: f32) -> Matrix {
        self.map(|v| v * s)
    }

    pub fn add_scalar(&self, s: f32) -> Matrix {
        self.map(|v| v + s)
    }

    pub fn sub_scalar(&self, s: f32) -> Matrix {
        self.map(|v| v - s)
    }

    pub fn div_scalar(&self, s: f32) -> Matrix {
        self.map(|v| v / s)
    }

    /// `s - v` for every entry `v`.
    pub fn scalar_minus(&self, s: f32) -> Matrix {
        self.map(|v| s - v)
    }

    /// `1 - v` for every entry `v`.
    pub fn one_minus(&self) -> Matrix {
        self.scalar_minus(1.0)
    }

    /// Natural logarithm. Non-positive entries yield `-inf`/`NaN`.
    pub fn ln(&self) -> Matrix {
        self.map(f32::ln)
    }

    pub fn exp(&self) -> Matrix {
        self.map(f32::exp)
    }

    /// `1 / (1 + e^-v)`
    pub fn sigmoid(&self) -> Matrix {
        self.map(|v| 1.0 / (1.0 + (-v).exp()))
    }

    /// `max(0, v)`
    pub fn relu(&self) -> Matrix {
        self.map(|v| v.max(0.0))
    }

    pub fn powf(&self, p: f32) -> Matrix {
        self.map(|v| v.powf(p))
    }

    pub fn square(&self) -> Matrix {
        self.map(|v| v * v)
    }

    pub fn sqrt(&self) -> Matrix {
        self.map(f32::sqrt)
    }

    /// Raise every entry below `floor` up to `floor`.
    pub fn clamp_min(&self, floor: f32) -> Matrix {
        self.map(|v| if v < floor { floor } else { v })
    }

    /// 0/1 mask of `v > s`
    pub fn greater_than(&self, s: f32) -> Matrix {
        self.map(|v| mask(v > s))
    }

    /// 0/1 mask of `v < s`
    pub fn less_than(&self, s: f32) -> Matrix {
        self.map(|v| mask(v < s))
    }

    /// 0/1 mask of `|v - s| <= epsilon`
    pub fn approx_eq_scalar(&self, s: f32, epsilon: f32) -> Matrix {
        self.map(|v| mask((v - s).abs() <= epsilon))
    }
}

/// Binary elementwise operations, matrix product, transpose and broadcasting.
impl Matrix {
    fn zip_with<F: Fn(f32, f32) -> f32>(&self, other: &Matrix, f: F) -> Result<Matrix> {
        if self.shape() != other.shape() {
            return Err(NetError::shape_mismatch(self.shape(), other.shape()));
        }
        let data = Zip::from(&self.data)
            .and(&other.data)
            .map_collect(|&a, &b| f(a, b));
        Ok(Matrix::wrap(data))
    }

    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, |a, b| a + b)
    }

    pub fn sub(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Elementwise (Hadamard) product.
    pub fn mul_elementwise(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, |a, b| a * b)
    }

    /// Elementwise division.
    pub fn div_elementwise(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, |a, b| a / b)
    }

    /// 0/1 mask of `a > b`
    pub fn greater_than_matrix(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, |a, b| mask(a > b))
    }

    /// 0/1 mask of `a < b`
    pub fn less_than_matrix(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, |a, b| mask(a < b))
    }

    /// 0/1 mask of `|a - b| <= epsilon`
    pub fn approx_eq_matrix(&self, other: &Matrix, epsilon: f32) -> Result<Matrix> {
        self.zip_with(other, |a, b| mask((a - b).abs() <= epsilon))
    }

    /// 0/1 mask of exact equality `a == b`
    pub fn eq_mask(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, |a, b| mask(a == b))
    }

    /// Matrix product `(r x k) . (k x c) -> (r x c)`.
    pub fn dot(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols() != other.rows() {
            return Err(NetError::dimension_mismatch(
                format!("{} rows in right operand", self.cols()),
                format!("{:?}", other.shape()),
            ));
        }
        Ok(Matrix::wrap(self.data.dot(&other.data)))
    }

    /// `(r x c) -> (c x r)`
    pub fn transpose(&self) -> Matrix {
        Matrix::wrap(self.data.t().to_owned())
    }

    /// Repeat a single-column matrix across `cols` columns.
    pub fn broadcast_columns(&self, cols: usize) -> Result<Matrix> {
        if self.cols() > 1 {
            return Err(NetError::invalid_parameter(
                "broadcast_columns".to_string(),
                format!("source has {} columns, expected 1", self.cols()),
            ));
        }
        if cols < 1 {
            return Err(NetError::invalid_parameter("cols", "broadcast count must be at least 1"));
        }
        self.broadcast_to(self.rows(), cols)
    }

    /// Repeat a single-row matrix across `rows` rows.
    pub fn broadcast_rows(&self, rows: usize) -> Result<Matrix> {
        if self.rows() > 1 {
            return Err(NetError::invalid_parameter(
                "broadcast_rows".to_string(),
                format!("source has {} rows, expected 1", self.rows()),
            ));
        }
        if rows < 1 {
            return Err(NetError::invalid_parameter("rows", "broadcast count must be at least 1"));
        }
        self.broadcast_to(rows, self.cols())
    }

    fn broadcast_to(&self, rows: usize, cols: usize) -> Result<Matrix> {
        let view = self.data.broadcast((rows, cols)).ok_or_else(|| {
            NetError::shape_mismatch((rows, cols), self.shape())
        })?;
        Ok(Matrix::wrap(view.to_owned()))
    }
}
