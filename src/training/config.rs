//! Training configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::activations::Activation;
use crate::error::{NetError, Result};
use crate::loss::LossFunction;

/// Configuration for building and training a network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Input width, hidden widths, output width.
    pub layer_dims: Vec<usize>,
    /// Seed for parameter initialization and per-epoch shuffles.
    pub seed: u64,
    /// Samples per mini-batch. The last batch of an epoch may be shorter.
    pub mini_batch_size: usize,
    /// Number of epochs.
    pub iterations: usize,
    /// Gradient descent step size.
    pub learning_rate: f32,
    /// L2 regularization strength.
    pub lambda: f32,
    /// Activation shared by every hidden layer.
    pub hidden_activation: Activation,
    /// Activation of the output layer.
    pub output_activation: Activation,
    /// Loss function scoring the output layer.
    pub loss: LossFunction,
    /// Whether to log the cost every 100 epochs.
    pub print_cost: bool,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            layer_dims: vec![2, 1],
            seed: 12345,
            mini_batch_size: 128,
            iterations: 2000,
            learning_rate: 0.075,
            lambda: 0.0,
            hidden_activation: Activation::Relu,
            output_activation: Activation::Sigmoid,
            loss: LossFunction::BinaryCrossEntropy,
            print_cost: false,
        }
    }
}

impl TrainingConfig {
    /// Creates a new TrainingConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layer_dims(mut self, layer_dims: &[usize]) -> Self {
        self.layer_dims = layer_dims.to_vec();
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn mini_batch_size(mut self, size: usize) -> Self {
        self.mini_batch_size = size;
        self
    }

    /// Sets the number of epochs.
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn learning_rate(mut self, lr: f32) -> Self {
        self.learning_rate = lr;
        self
    }

    pub fn lambda(mut self, lambda: f32) -> Self {
        self.lambda = lambda;
        self
    }

    pub fn hidden_activation(mut self, activation: Activation) -> Self {
        self.hidden_activation = activation;
        self
    }

    pub fn output_activation(mut self, activation: Activation) -> Self {
        self.output_activation = activation;
        self
    }

    pub fn loss(mut self, loss: LossFunction) -> Self {
        self.loss = loss;
        self
    }

    pub fn print_cost(mut self, print_cost: bool) -> Self {
        self.print_cost = print_cost;
        self
    }

    /// Reject configurations that cannot train.
    pub fn validate(&self) -> Result<()> {
        if self.layer_dims.len() < 2 {
            return Err(NetError::invalid_parameter(
                "layer_dims".to_string(),
                format!("must have at least 2 entries, got {}", self.layer_dims.len()),
            ));
        }
        if let Some(pos) = self.layer_dims.iter().position(|&d| d == 0) {
            return Err(NetError::invalid_parameter(
                "layer_dims".to_string(),
                format!("entry {} is zero", pos),
            ));
        }
        if self.mini_batch_size == 0 {
            return Err(NetError::invalid_parameter("mini_batch_size", "must be greater than 0"));
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(NetError::invalid_parameter(
                "learning_rate".to_string(),
                format!("must be a positive finite value, got {}", self.learning_rate),
            ));
        }
        if !self.lambda.is_finite() || self.lambda < 0.0 {
            return Err(NetError::invalid_parameter(
                "lambda".to_string(),
                format!("must be a non-negative finite value, got {}", self.lambda),
            ));
        }
        Ok(())
    }

    /// Parse a JSON configuration. Missing fields take their default values.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: TrainingConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON configuration file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
