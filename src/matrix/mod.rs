//! # Matrix Module
//!
//! A dense, immutable, row-major 2-D matrix of `f32` values. Every operation
//! allocates and returns a fresh [`Matrix`]; no method mutates its receiver.
//!
//! Shapes are validated eagerly: a matrix always has at least one row and one
//! column, binary elementwise operations require identical shapes, and the
//! matrix product requires matching inner dimensions. Violations surface as
//! [`NetError`](crate::error::NetError) values.
//!
//! ## Usage Example
//!
//! ```rust
//! use deepnn::matrix::Matrix;
//!
//! let a = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
//! let b = Matrix::from_rows(&[[7.0, 8.0], [9.0, 10.0], [11.0, 12.0]]).unwrap();
//!
//! let c = a.dot(&b).unwrap();
//! assert_eq!(c, Matrix::from_rows(&[[58.0, 64.0], [139.0, 154.0]]).unwrap());
//! ```

mod ops;
mod reduce;

use std::fmt;

use ndarray::Array2;
use ndarray_rand::RandomExt;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::StandardNormal;

use crate::error::{NetError, Result};

/// Maximum rows rendered by `Display`
const DISPLAY_ROWS: usize = 6;
/// Maximum columns rendered by `Display`
const DISPLAY_COLS: usize = 10;

/// An immutable `rows x cols` matrix of single-precision values.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Array2<f32>,
}

impl Matrix {
    fn check_shape(rows: usize, cols: usize) -> Result<()> {
        if rows < 1 || cols < 1 {
            return Err(NetError::InvalidShape { rows, cols });
        }
        Ok(())
    }

    /// Wrap an already-validated array. Callers guarantee a non-empty shape.
    pub(crate) fn wrap(data: Array2<f32>) -> Self {
        debug_assert!(data.nrows() > 0 && data.ncols() > 0);
        Matrix { data }
    }

    /// Create a zero-filled matrix.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::filled(rows, cols, 0.0)
    }

    /// Create a matrix filled with ones.
    pub fn ones(rows: usize, cols: usize) -> Result<Self> {
        Self::filled(rows, cols, 1.0)
    }

    /// Create a matrix with every entry set to `value`.
    pub fn filled(rows: usize, cols: usize, value: f32) -> Result<Self> {
        Self::check_shape(rows, cols)?;
        Ok(Matrix::wrap(Array2::from_elem((rows, cols), value)))
    }

    /// Create a `1 x 1` matrix holding a single value.
    pub fn scalar(value: f32) -> Self {
        Matrix::wrap(Array2::from_elem((1, 1), value))
    }

    /// Create a matrix from row-major data. Fails if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f32>) -> Result<Self> {
        Self::check_shape(rows, cols)?;
        if data.len() != rows * cols {
            return Err(NetError::DataLength {
                expected: rows * cols,
                actual: data.len(),
            });
        }
        let data = Array2::from_shape_vec((rows, cols), data).map_err(|e| {
            NetError::dimension_mismatch(format!("({}, {})", rows, cols), e.to_string())
        })?;
        Ok(Matrix::wrap(data))
    }

    /// Create a matrix from a 2-D literal. Every row must have the same length.
    pub fn from_rows<R: AsRef<[f32]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        Self::check_shape(rows.len(), cols)?;

        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(NetError::dimension_mismatch(
                    format!("{} columns", cols),
                    format!("{} columns", row.len()),
                ));
            }
            data.extend_from_slice(row);
        }
        Self::from_vec(rows.len(), cols, data)
    }

    /// Wrap an existing `ndarray` array, rejecting empty shapes.
    pub fn from_array(data: Array2<f32>) -> Result<Self> {
        Self::check_shape(data.nrows(), data.ncols())?;
        Ok(Matrix::wrap(data))
    }

    /// Sample every entry from a standard normal distribution.
    ///
    /// The generator is seeded with `seed`, so equal seeds give bit-identical
    /// matrices.
    pub fn random(rows: usize, cols: usize, seed: u64) -> Result<Self> {
        Self::check_shape(rows, cols)?;
        let mut rng = StdRng::seed_from_u64(seed);
        Ok(Matrix::wrap(Array2::random_using((rows, cols), StandardNormal, &mut rng)))
    }

    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// Returns the shape as `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// Read the value at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<f32> {
        if row >= self.rows() {
            return Err(NetError::IndexOutOfRange { index: row, bound: self.rows() });
        }
        if col >= self.cols() {
            return Err(NetError::IndexOutOfRange { index: col, bound: self.cols() });
        }
        Ok(self.data[[row, col]])
    }

    /// Borrow the underlying array.
    pub fn as_array(&self) -> &Array2<f32> {
        &self.data
    }

    pub fn into_array(self) -> Array2<f32> {
        self.data
    }

    /// Row-major copy of the values.
    pub fn to_vec(&self) -> Vec<f32> {
        self.data.iter().copied().collect()
    }
}

fn format_value(v: f32) -> String {
    let s = format!("{:.3}", v);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.');
        if trimmed == "-0" {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    } else {
        s
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Shape({}, {})", self.rows(), self.cols())?;
        write!(f, "[")?;
        let max_rows = self.rows().min(DISPLAY_ROWS);
        let max_cols = self.cols().min(DISPLAY_COLS);
        for row in 0..max_rows {
            write!(f, "[")?;
            for col in 0..max_cols {
                if col > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", format_value(self.data[[row, col]]))?;
            }
            if self.cols() > max_cols {
                write!(f, ", ...")?;
            }
            write!(f, "]")?;
            if row < self.rows() - 1 {
                writeln!(f)?;
            }
        }
        if self.rows() > max_rows {
            write!(f, "...")?;
        }
        write!(f, "]")
    }
}
