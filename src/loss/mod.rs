//! # Loss Functions Module
//!
//! Cost functions for the output layer. [`Loss`] is implemented by the unit
//! structs [`BinaryCrossEntropy`] and [`MultiClassCrossEntropy`];
//! [`LossFunction`] is the serializable selector used in configuration.

pub mod functions;

use serde::{Deserialize, Serialize};

use crate::activations::Activation;
use crate::error::Result;
use crate::matrix::Matrix;

pub use functions::{BinaryCrossEntropy, Loss, MultiClassCrossEntropy, LOG_FLOOR};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LossFunction {
    BinaryCrossEntropy,
    MultiClassCrossEntropy,
}

impl Loss for LossFunction {
    fn compute_cost(&self, targets: &Matrix, predictions: &Matrix) -> Result<f32> {
        match self {
            LossFunction::BinaryCrossEntropy => BinaryCrossEntropy.compute_cost(targets, predictions),
            LossFunction::MultiClassCrossEntropy => MultiClassCrossEntropy.compute_cost(targets, predictions),
        }
    }

    fn cost_gradient(&self, targets: &Matrix, predictions: &Matrix) -> Result<Matrix> {
        match self {
            LossFunction::BinaryCrossEntropy => BinaryCrossEntropy.cost_gradient(targets, predictions),
            LossFunction::MultiClassCrossEntropy => MultiClassCrossEntropy.cost_gradient(targets, predictions),
        }
    }

    fn fuses_with(&self, output: Activation) -> bool {
        match self {
            LossFunction::BinaryCrossEntropy => BinaryCrossEntropy.fuses_with(output),
            LossFunction::MultiClassCrossEntropy => MultiClassCrossEntropy.fuses_with(output),
        }
    }
}
