use crate::activations::Activation;
use crate::error::{NetError, Result};
use crate::matrix::Matrix;

/// Smallest value passed to `ln` and used as a divisor when computing costs,
/// so saturated predictions never produce `-inf` or a division by zero.
pub const LOG_FLOOR: f32 = 1e-8;

/// Trait defining the interface for loss functions.
///
/// `targets` (`Y`) and `predictions` (`AL`) share a shape; columns are samples.
pub trait Loss: Send + Sync {
    /// Compute the scalar cost averaged over the `m` sample columns
    fn compute_cost(&self, targets: &Matrix, predictions: &Matrix) -> Result<f32>;

    /// Compute the gradient of the cost with respect to the predictions
    fn cost_gradient(&self, targets: &Matrix, predictions: &Matrix) -> Result<Matrix>;

    /// Whether [`cost_gradient`](Loss::cost_gradient) already yields `dZ` for
    /// the given output activation, so its backward step must be skipped.
    fn fuses_with(&self, _output: Activation) -> bool {
        false
    }
}

fn check_same_shape(targets: &Matrix, predictions: &Matrix) -> Result<()> {
    if targets.shape() != predictions.shape() {
        return Err(NetError::shape_mismatch(targets.shape(), predictions.shape()));
    }
    Ok(())
}

/// Binary cross-entropy for a single sigmoid output row.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryCrossEntropy;

impl Loss for BinaryCrossEntropy {
    fn compute_cost(&self, targets: &Matrix, predictions: &Matrix) -> Result<f32> {
        check_same_shape(targets, predictions)?;
        let m = targets.cols() as f32;

        // -1/m * sum(Y * log(AL) + (1 - Y) * log(1 - AL))
        let positive = targets.mul_elementwise(&predictions.clamp_min(LOG_FLOOR).ln())?;
        let negative = targets
            .one_minus()
            .mul_elementwise(&predictions.one_minus().clamp_min(LOG_FLOOR).ln())?;
        Ok(-positive.add(&negative)?.sum() / m)
    }

    fn cost_gradient(&self, targets: &Matrix, predictions: &Matrix) -> Result<Matrix> {
        check_same_shape(targets, predictions)?;

        // dAL = -(Y / AL - (1 - Y) / (1 - AL)), denominators floored at LOG_FLOOR
        let positive = targets.div_elementwise(&predictions.clamp_min(LOG_FLOOR))?;
        let negative = targets
            .one_minus()
            .div_elementwise(&predictions.one_minus().clamp_min(LOG_FLOOR))?;
        Ok(positive.sub(&negative)?.mul_scalar(-1.0))
    }
}

/// Categorical cross-entropy for one-hot targets and softmax outputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct MultiClassCrossEntropy;

impl Loss for MultiClassCrossEntropy {
    fn compute_cost(&self, targets: &Matrix, predictions: &Matrix) -> Result<f32> {
        check_same_shape(targets, predictions)?;
        let m = targets.cols() as f32;

        // -1/m * sum(Y * log(AL))
        let log_likelihood = targets.mul_elementwise(&predictions.clamp_min(LOG_FLOOR).ln())?;
        Ok(-log_likelihood.sum() / m)
    }

    /// Combined softmax + cross-entropy derivative `dZ = AL - Y`.
    fn cost_gradient(&self, targets: &Matrix, predictions: &Matrix) -> Result<Matrix> {
        check_same_shape(targets, predictions)?;
        predictions.sub(targets)
    }

    fn fuses_with(&self, output: Activation) -> bool {
        output == Activation::Softmax
    }
}
