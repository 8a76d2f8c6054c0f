//! # deepnn - Fully Connected Neural Networks from First Principles
//!
//! deepnn trains feedforward networks of arbitrary depth with mini-batch
//! gradient descent and optional L2 regularization, then uses the trained
//! parameters to predict labels for new inputs.
//!
//! ## Key Features
//!
//! - **Matrix engine**: an immutable dense `f32` matrix with products,
//!   elementwise arithmetic, broadcasting, reductions and column slicing
//! - **Networks**: ReLU/Sigmoid/Softmax activations, binary and multi-class
//!   cross-entropy losses, explicit forward/backward/update steps
//! - **Training**: seeded, reproducible shuffles and mini-batches
//! - **Evaluation**: precision/recall/F1/accuracy for binary classifiers and
//!   accuracy for one-hot multi-class output
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use deepnn::activations::Activation;
//! use deepnn::loss::LossFunction;
//! use deepnn::matrix::Matrix;
//! use deepnn::training::{Trainer, TrainingConfig};
//!
//! let x = Matrix::from_rows(&[[0.5, -0.3, 0.9, -0.8], [0.1, 0.7, -0.2, -0.4]]).unwrap();
//! let y = Matrix::from_rows(&[[1.0, 0.0, 1.0, 0.0]]).unwrap();
//!
//! let config = TrainingConfig::new()
//!     .layer_dims(&[2, 1])
//!     .mini_batch_size(2)
//!     .iterations(500)
//!     .learning_rate(0.075)
//!     .output_activation(Activation::Sigmoid)
//!     .loss(LossFunction::BinaryCrossEntropy);
//!
//! let result = Trainer::new(config).unwrap().train(&x, &y).unwrap();
//! let predictions = result.network.predict(&x).unwrap();
//! ```
//!
//! ## Module Organization
//!
//! - [`activations`] - Activation functions (ReLU, Sigmoid, Softmax)
//! - [`builders`] - Builder pattern for network construction
//! - [`data`] - Labelled samples, matrix conversion and file loading
//! - [`error`] - Error types and result handling
//! - [`layers`] - Dense layer parameters, forward caches and gradients
//! - [`loss`] - Loss functions for training
//! - [`matrix`] - The dense matrix type
//! - [`metrics`] - Prediction statistics
//! - [`network`] - Forward/backward propagation, parameter update, prediction
//! - [`training`] - Configuration, mini-batching and the training loop

pub mod activations;
pub mod builders;
pub mod data;
pub mod error;
pub mod layers;
pub mod loss;
pub mod matrix;
pub mod metrics;
pub mod network;
pub mod training;

pub use error::{NetError, Result};
pub use matrix::Matrix;
pub use network::NeuralNetwork;

#[cfg(test)]
mod tests;
