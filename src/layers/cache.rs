use crate::error::Result;
use crate::matrix::Matrix;

/// Inputs of a layer's linear step, captured during the forward pass.
#[derive(Debug, Clone)]
pub struct LinearCache {
    pub a_prev: Matrix,
    pub weights: Matrix,
    pub biases: Matrix,
}

/// Pre-activation output `Z` of a layer.
#[derive(Debug, Clone)]
pub struct ActivationCache {
    pub z: Matrix,
}

/// Everything one layer's backward step needs from the forward pass.
#[derive(Debug, Clone)]
pub struct LayerCache {
    pub linear: LinearCache,
    pub activation: ActivationCache,
}

/// Gradients for one layer. `da_prev` is the gradient flowing into the
/// previous layer's activation.
#[derive(Debug, Clone)]
pub struct LayerGradients {
    pub da_prev: Matrix,
    pub dw: Matrix,
    pub db: Matrix,
}

impl LinearCache {
    /// Linear backward step for incoming `dZ`, with batch size `m = cols(A_prev)`:
    ///
    /// - `dW = 1/m * dZ . A_prev^T + lambda/m * W`
    /// - `db = 1/m * sum_per_row(dZ)`
    /// - `dA_prev = W^T . dZ`
    pub fn backward(&self, dz: &Matrix, lambda: f32) -> Result<LayerGradients> {
        let m = self.a_prev.cols() as f32;

        let dw = dz
            .dot(&self.a_prev.transpose())?
            .mul_scalar(1.0 / m)
            .add(&self.weights.mul_scalar(lambda / m))?;
        let db = dz.sum_per_row().mul_scalar(1.0 / m);
        let da_prev = self.weights.transpose().dot(dz)?;

        Ok(LayerGradients { da_prev, dw, db })
    }
}
