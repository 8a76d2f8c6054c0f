use crate::activations::Activation;
use crate::error::{NetError, Result};
use crate::loss::LossFunction;
use crate::network::NeuralNetwork;
use crate::training::TrainingConfig;

/// Builder for constructing neural networks with a fluent API
pub struct NetworkBuilder {
    layer_dims: Vec<usize>,
    hidden_activation: Activation,
    output_activation: Activation,
    loss: Option<LossFunction>,
    seed: u64,
}

impl NetworkBuilder {
    /// Create a new network builder
    pub fn new() -> Self {
        NetworkBuilder {
            layer_dims: Vec::new(),
            hidden_activation: Activation::Relu,
            output_activation: Activation::Sigmoid,
            loss: None,
            seed: 0,
        }
    }

    /// Start from the architecture described by a training configuration
    pub fn from_config(config: &TrainingConfig) -> Self {
        NetworkBuilder {
            layer_dims: config.layer_dims.clone(),
            hidden_activation: config.hidden_activation,
            output_activation: config.output_activation,
            loss: Some(config.loss),
            seed: config.seed,
        }
    }

    /// Set the input width
    pub fn input(mut self, size: usize) -> Self {
        self.layer_dims.clear();
        self.layer_dims.push(size);
        self
    }

    /// Append a dense layer with `size` units
    pub fn add_dense(mut self, size: usize) -> Self {
        self.layer_dims.push(size);
        self
    }

    /// Replace the whole layer dimension list
    pub fn layer_dims(mut self, layer_dims: &[usize]) -> Self {
        self.layer_dims = layer_dims.to_vec();
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
        self.loss = Some(loss);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Configure a binary classifier: sigmoid output scored by binary cross-entropy
    pub fn binary_classifier(self) -> Self {
        self.output_activation(Activation::Sigmoid)
            .loss(LossFunction::BinaryCrossEntropy)
    }

    /// Configure a multi-class classifier: softmax output scored by multi-class cross-entropy
    pub fn multi_class_classifier(self) -> Self {
        self.output_activation(Activation::Softmax)
            .loss(LossFunction::MultiClassCrossEntropy)
    }

    /// Build the neural network
    pub fn build(self) -> Result<NeuralNetwork> {
        if self.layer_dims.len() < 2 {
            return Err(NetError::InvalidParameter {
                name: "layer_dims".to_string(),
                reason: "Must have an input size and at least one layer".to_string(),
            });
        }

        let loss = self.loss.ok_or_else(|| NetError::InvalidParameter {
            name: "loss".to_string(),
            reason: "Loss function not specified".to_string(),
        })?;

        NeuralNetwork::new(
            &self.layer_dims,
            self.hidden_activation,
            self.output_activation,
            loss,
            self.seed,
        )
    }
}

impl Default for NetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}
