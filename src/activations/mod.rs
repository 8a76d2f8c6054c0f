//! # Activation Functions Module
//!
//! Activation functions applied after each dense layer's linear step.
//! Each variant provides a `forward` transform and a `backward` step that turns
//! the upstream gradient `dA` into `dZ` using the cached pre-activation `Z`.
//!
//! ## Available Activations
//!
//! - **ReLU**: `max(0, z)`. Backward passes `dA` through where `z > 0` and zeroes it elsewhere
//! - **Sigmoid**: `1 / (1 + e^(-z))`. Backward is `dA * s * (1 - s)`
//! - **Softmax**: column-wise normalized exponentials, one probability
//!   distribution per sample column
//!
//! ## Usage Example
//!
//! ```rust
//! use deepnn::activations::Activation;
//! use deepnn::matrix::Matrix;
//!
//! let z = Matrix::from_rows(&[[-1.0, 0.0, 2.0]]).unwrap();
//! let a = Activation::Relu.forward(&z).unwrap();
//! assert_eq!(a, Matrix::from_rows(&[[0.0, 0.0, 2.0]]).unwrap());
//! ```
//!
//! ## Choosing an Activation Function
//!
//! - **Hidden Layers**: ReLU
//! - **Output Layer**:
//!   - Binary classification: Sigmoid with binary cross-entropy
//!   - Multi-class classification: Softmax with multi-class cross-entropy

pub mod functions;

pub use functions::Activation;
