use crate::activations::Activation;
use crate::error::{NetError, Result};
use crate::layers::{DenseLayer, LayerCache, LayerGradients};
use crate::loss::{Loss, LossFunction};
use crate::matrix::Matrix;

/// Output threshold above which a single-row prediction is marked positive.
pub const BINARY_THRESHOLD: f32 = 0.5;

/// Per-layer gradients from one backward pass. Layer `l` (1-based) is stored
/// at index `l - 1`.
#[derive(Debug, Clone)]
pub struct Gradients {
    pub layers: Vec<LayerGradients>,
}

impl Gradients {
    /// Gradients of layer `l`, 1-based.
    pub fn layer(&self, l: usize) -> Option<&LayerGradients> {
        l.checked_sub(1).and_then(|i| self.layers.get(i))
    }
}

/// A fully connected feedforward network.
///
/// Hidden layers share one activation; the output layer has its own, and the
/// loss function scores the output activation against the labels. Samples are
/// matrix columns throughout: `X` is `(layer_dims[0], m)` and the output is
/// `(layer_dims[L], m)`.
#[derive(Debug, Clone)]
pub struct NeuralNetwork {
    layer_dims: Vec<usize>,
    hidden_activation: Activation,
    output_activation: Activation,
    loss: LossFunction,
    layers: Vec<DenseLayer>,
}

impl NeuralNetwork {
    /// Create a new network and initialize its parameters with `seed`.
    ///
    /// `layer_dims` lists the input width, every hidden width, and the output
    /// width, so a network has `layer_dims.len() - 1` layers.
    pub fn new(
        layer_dims: &[usize],
        hidden_activation: Activation,
        output_activation: Activation,
        loss: LossFunction,
        seed: u64,
    ) -> Result<Self> {
        let layers = Self::initialize_parameters(layer_dims, seed)?;
        Ok(NeuralNetwork {
            layer_dims: layer_dims.to_vec(),
            hidden_activation,
            output_activation,
            loss,
            layers,
        })
    }

    /// Build the parameter set for `layer_dims`: for `l = 1..L`,
    /// `W_l = gaussian(dims[l], dims[l-1], seed) * 0.01` and `b_l = zeros(dims[l], 1)`.
    pub fn initialize_parameters(layer_dims: &[usize], seed: u64) -> Result<Vec<DenseLayer>> {
        if layer_dims.len() < 2 {
            return Err(NetError::invalid_parameter(
                "layer_dims".to_string(),
                format!("must have at least 2 entries, got {}", layer_dims.len()),
            ));
        }
        layer_dims
            .windows(2)
            .map(|window| DenseLayer::new(window[0], window[1], seed))
            .collect()
    }

    /// Discard the current parameters and initialize fresh ones from `seed`.
    pub fn reinitialize(&mut self, seed: u64) -> Result<()> {
        self.layers = Self::initialize_parameters(&self.layer_dims, seed)?;
        Ok(())
    }

    pub fn layer_dims(&self) -> &[usize] {
        &self.layer_dims
    }

    /// Number of layers `L` (hidden plus output).
    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    pub fn layers(&self) -> &[DenseLayer] {
        &self.layers
    }

    /// Parameters of layer `l`, 1-based.
    pub fn layer(&self, l: usize) -> Option<&DenseLayer> {
        l.checked_sub(1).and_then(|i| self.layers.get(i))
    }

    /// Replace the parameters of layer `l` (1-based). The new weights and
    /// biases must have the shapes the layer already has.
    pub fn set_layer(&mut self, l: usize, layer: DenseLayer) -> Result<()> {
        let bound = self.layers.len() + 1;
        let slot = l
            .checked_sub(1)
            .and_then(|i| self.layers.get_mut(i))
            .ok_or(NetError::IndexOutOfRange { index: l, bound })?;
        if slot.weights().shape() != layer.weights().shape() {
            return Err(NetError::shape_mismatch(slot.weights().shape(), layer.weights().shape()));
        }
        *slot = layer;
        Ok(())
    }

    pub fn hidden_activation(&self) -> Activation {
        self.hidden_activation
    }

    pub fn output_activation(&self) -> Activation {
        self.output_activation
    }

    pub fn loss(&self) -> LossFunction {
        self.loss
    }

    /// Forward propagation. Hidden layers apply the hidden activation and the
    /// last layer applies the output activation. Returns `AL` and one cache
    /// per layer, in layer order.
    pub fn forward(&self, x: &Matrix) -> Result<(Matrix, Vec<LayerCache>)> {
        if x.rows() != self.layer_dims[0] {
            return Err(NetError::dimension_mismatch(
                format!("{} input rows", self.layer_dims[0]),
                format!("{} input rows", x.rows()),
            ));
        }

        let last = self.layers.len() - 1;
        let mut caches = Vec::with_capacity(self.layers.len());
        let mut a = x.clone();
        for (i, layer) in self.layers.iter().enumerate() {
            let activation = if i == last {
                self.output_activation
            } else {
                self.hidden_activation
            };
            let (next, cache) = layer.forward(&a, activation)?;
            caches.push(cache);
            a = next;
        }
        Ok((a, caches))
    }

    /// Loss of `AL` against `Y` plus the L2 penalty
    /// `lambda / (2m) * sum(W_l^2)` over the hidden layers `l = 1..L-1`.
    pub fn compute_cost(&self, al: &Matrix, y: &Matrix, lambda: f32) -> Result<f32> {
        let m = y.cols() as f32;
        let loss_cost = self.loss.compute_cost(y, al)?;

        let hidden = &self.layers[..self.layers.len() - 1];
        let l2_sum: f32 = hidden.iter().map(|layer| layer.weights().square().sum()).sum();
        let l2_cost = l2_sum * lambda / (2.0 * m);

        Ok(loss_cost + l2_cost)
    }

    /// Backward propagation over the caches of the preceding forward pass.
    ///
    /// The output layer goes first. When the loss function already produces
    /// `dZ` for the output activation (softmax with multi-class cross-entropy)
    /// the activation's own backward step is skipped.
    pub fn backward(&self, al: &Matrix, y: &Matrix, caches: &[LayerCache], lambda: f32) -> Result<Gradients> {
        if caches.len() != self.layers.len() {
            return Err(NetError::dimension_mismatch(
                format!("{} caches", self.layers.len()),
                format!("{} caches", caches.len()),
            ));
        }

        let dal = self.loss.cost_gradient(y, al)?;
        let (output_cache, hidden_caches) = caches
            .split_last()
            .ok_or_else(|| NetError::invalid_parameter("caches", "no layers to propagate through"))?;

        let dz = if self.loss.fuses_with(self.output_activation) {
            dal
        } else {
            self.output_activation.backward(&dal, &output_cache.activation.z)?
        };
        let mut gradients = vec![output_cache.linear.backward(&dz, lambda)?];

        for cache in hidden_caches.iter().rev() {
            let upstream = &gradients[gradients.len() - 1].da_prev;
            let dz = self.hidden_activation.backward(upstream, &cache.activation.z)?;
            gradients.push(cache.linear.backward(&dz, lambda)?);
        }

        gradients.reverse();
        Ok(Gradients { layers: gradients })
    }

    /// Gradient descent step: `W_l -= lr * dW_l` and `b_l -= lr * db_l` for every layer.
    pub fn update_parameters(&mut self, gradients: &Gradients, learning_rate: f32) -> Result<()> {
        if gradients.layers.len() != self.layers.len() {
            return Err(NetError::dimension_mismatch(
                format!("{} layer gradients", self.layers.len()),
                format!("{} layer gradients", gradients.layers.len()),
            ));
        }
        for (layer, grads) in self.layers.iter_mut().zip(&gradients.layers) {
            *layer = layer.apply_gradients(grads, learning_rate)?;
        }
        Ok(())
    }

    /// Predict labels for `X`.
    ///
    /// A single output row is thresholded with a strict `> 0.5`. Multi-row
    /// output is turned into a one-hot mask marking each column's maximum;
    /// ties mark every tied entry.
    pub fn predict(&self, x: &Matrix) -> Result<Matrix> {
        let (al, _) = self.forward(x)?;
        if al.rows() == 1 {
            Ok(al.greater_than(BINARY_THRESHOLD))
        } else {
            let max = al.max_per_column().broadcast_rows(al.rows())?;
            al.eq_mask(&max)
        }
    }
}
