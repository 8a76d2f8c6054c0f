use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::matrix::Matrix;

/// An enumeration of the activation functions a dense layer can apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Activation {
    #[default]
    Relu,
    Sigmoid,
    Softmax,
}

impl Activation {
    /// Compute `A = g(Z)`.
    pub fn forward(&self, z: &Matrix) -> Result<Matrix> {
        match self {
            Activation::Relu => Ok(z.relu()),
            Activation::Sigmoid => Ok(z.sigmoid()),
            Activation::Softmax => softmax(z),
        }
    }

    /// Compute `dZ` from the upstream gradient `dA` and the cached pre-activation `Z`.
    pub fn backward(&self, da: &Matrix, z: &Matrix) -> Result<Matrix> {
        match self {
            Activation::Relu => {
                // derivative at exactly 0 is taken as 0
                da.mul_elementwise(&z.greater_than(0.0))
            }
            Activation::Sigmoid => {
                let s = z.sigmoid();
                da.mul_elementwise(&s)?.mul_elementwise(&s.one_minus())
            }
            Activation::Softmax => {
                // Diagonal-only approximation. The exact gradient for softmax
                // outputs comes from MultiClassCrossEntropy, which skips this step.
                let s = softmax(z)?;
                da.mul_elementwise(&s)?.mul_elementwise(&s.one_minus())
            }
        }
    }
}

/// Column-wise softmax: each column is shifted by its own maximum before
/// exponentiating and divided by its own sum of exponentials.
fn softmax(z: &Matrix) -> Result<Matrix> {
    let max = z.max_per_column().broadcast_rows(z.rows())?;
    let exp_z = z.sub(&max)?.exp();
    let sums = exp_z.sum_per_column().broadcast_rows(z.rows())?;
    exp_z.div_elementwise(&sums)
}
