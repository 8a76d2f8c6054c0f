use crate::activations::Activation;
use crate::error::{NetError, Result};
use crate::matrix::Matrix;

use super::cache::{ActivationCache, LayerCache, LinearCache};
use super::LayerGradients;

/// Scale applied to standard-normal samples when initializing weights.
pub const WEIGHT_SCALE: f32 = 0.01;

/// Parameters of a fully connected (dense) layer.
///
/// `weights` has shape `(output_size, input_size)` and `biases` has shape
/// `(output_size, 1)`. Samples are columns, so the layer maps an
/// `(input_size, m)` activation to an `(output_size, m)` one.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseLayer {
    weights: Matrix,
    biases: Matrix,
}

impl DenseLayer {
    /// Create a new dense layer. Weights are standard-normal samples drawn
    /// from a generator seeded with `seed`, scaled by [`WEIGHT_SCALE`].
    /// Biases start at zero.
    pub fn new(input_size: usize, output_size: usize, seed: u64) -> Result<Self> {
        let weights = Matrix::random(output_size, input_size, seed)?.mul_scalar(WEIGHT_SCALE);
        let biases = Matrix::zeros(output_size, 1)?;
        Ok(DenseLayer { weights, biases })
    }

    /// Build a layer from explicit parameters, checking that `biases` is a
    /// column vector with one entry per weight row.
    pub fn from_parameters(weights: Matrix, biases: Matrix) -> Result<Self> {
        if biases.shape() != (weights.rows(), 1) {
            return Err(NetError::shape_mismatch((weights.rows(), 1), biases.shape()));
        }
        Ok(DenseLayer { weights, biases })
    }

    pub fn weights(&self) -> &Matrix {
        &self.weights
    }

    pub fn biases(&self) -> &Matrix {
        &self.biases
    }

    pub fn input_size(&self) -> usize {
        self.weights.cols()
    }

    pub fn output_size(&self) -> usize {
        self.weights.rows()
    }

    /// Linear step `Z = W . A_prev + b`, with `b` broadcast across the sample columns.
    pub fn linear(&self, a_prev: &Matrix) -> Result<Matrix> {
        let wx = self.weights.dot(a_prev)?;
        wx.add(&self.biases.broadcast_columns(wx.cols())?)
    }

    /// Linear step followed by `activation`, returning the activation and the
    /// cache the backward pass needs.
    pub fn forward(&self, a_prev: &Matrix, activation: Activation) -> Result<(Matrix, LayerCache)> {
        let z = self.linear(a_prev)?;
        let a = activation.forward(&z)?;
        let cache = LayerCache {
            linear: LinearCache {
                a_prev: a_prev.clone(),
                weights: self.weights.clone(),
                biases: self.biases.clone(),
            },
            activation: ActivationCache { z },
        };
        Ok((a, cache))
    }

    /// Gradient descent step, returning the updated layer.
    pub fn apply_gradients(&self, gradients: &LayerGradients, learning_rate: f32) -> Result<DenseLayer> {
        let weights = self.weights.sub(&gradients.dw.mul_scalar(learning_rate))?;
        let biases = self.biases.sub(&gradients.db.mul_scalar(learning_rate))?;
        Ok(DenseLayer { weights, biases })
    }
}
