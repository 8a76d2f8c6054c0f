//! Training loop implementation.

use super::batches::{epoch_seed, random_mini_batches};
use super::TrainingConfig;
use crate::error::{NetError, Result};
use crate::matrix::Matrix;
use crate::network::NeuralNetwork;

/// Epoch interval between cost reports.
pub const COST_REPORT_INTERVAL: usize = 100;

/// Upper bound on the epochs reserved up front in the cost history.
const MAX_PREALLOCATED_EPOCHS: usize = 4096;

/// Whether the cost of `epoch` is reported: every 100th epoch, starting at 0.
pub fn reports_cost(epoch: usize) -> bool {
    epoch % COST_REPORT_INTERVAL == 0
}

fn cost_history_for(iterations: usize) -> Vec<f32> {
    Vec::with_capacity(iterations.min(MAX_PREALLOCATED_EPOCHS))
}

/// Training result containing the trained network and its cost history.
#[derive(Debug, Clone)]
pub struct TrainingResult {
    /// The trained network.
    pub network: NeuralNetwork,
    /// Cost of the last mini-batch of each epoch.
    pub cost_history: Vec<f32>,
}

impl TrainingResult {
    pub fn final_cost(&self) -> Option<f32> {
        self.cost_history.last().copied()
    }
}

/// Runs mini-batch gradient descent for a [`TrainingConfig`].
#[derive(Debug, Clone)]
pub struct Trainer {
    config: TrainingConfig,
}

impl Trainer {
    /// Create a trainer, rejecting invalid configurations up front.
    pub fn new(config: TrainingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Trainer { config })
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Fresh network with parameters initialized from the configured seed.
    pub fn initial_network(&self) -> Result<NeuralNetwork> {
        NeuralNetwork::new(
            &self.config.layer_dims,
            self.config.hidden_activation,
            self.config.output_activation,
            self.config.loss,
            self.config.seed,
        )
    }

    fn check_data(&self, x: &Matrix, y: &Matrix) -> Result<()> {
        let dims = &self.config.layer_dims;
        let input = dims[0];
        let output = dims[dims.len() - 1];
        if x.rows() != input {
            return Err(NetError::dimension_mismatch(
                format!("{} feature rows", input),
                format!("{} feature rows", x.rows()),
            ));
        }
        if y.rows() != output {
            return Err(NetError::dimension_mismatch(
                format!("{} label rows", output),
                format!("{} label rows", y.rows()),
            ));
        }
        if x.cols() != y.cols() {
            return Err(NetError::dimension_mismatch(
                format!("{} label columns", x.cols()),
                format!("{} label columns", y.cols()),
            ));
        }
        Ok(())
    }

    /// Train a freshly initialized network on features `x` and labels `y`.
    ///
    /// Each epoch reshuffles the sample columns with a seed derived from the
    /// base seed and runs forward, cost, backward and update on every
    /// mini-batch in order. The cost recorded for an epoch is the cost of its
    /// last mini-batch. Any shape error aborts the whole run.
    pub fn train(&self, x: &Matrix, y: &Matrix) -> Result<TrainingResult> {
        self.check_data(x, y)?;
        let config = &self.config;

        let mut network = self.initial_network()?;
        let mut cost_history = cost_history_for(config.iterations);

        log::debug!(
            "training {:?} on {} samples, mini-batch size {}, {} epochs",
            config.layer_dims,
            x.cols(),
            config.mini_batch_size,
            config.iterations
        );

        for epoch in 0..config.iterations {
            let seed = epoch_seed(config.seed, epoch);
            let mini_batches = random_mini_batches(x, y, config.mini_batch_size, seed)?;

            let mut cost = f32::MAX;
            for batch in &mini_batches {
                let (al, caches) = network.forward(&batch.x)?;
                cost = network.compute_cost(&al, &batch.y, config.lambda)?;
                let gradients = network.backward(&al, &batch.y, &caches, config.lambda)?;
                network.update_parameters(&gradients, config.learning_rate)?;
            }
            cost_history.push(cost);

            if config.print_cost && reports_cost(epoch) {
                log::info!("Cost after iteration {}: {}", epoch, cost);
            }
        }

        Ok(TrainingResult { network, cost_history })
    }
}

/// Train with `config` in one call.
pub fn train(config: TrainingConfig, x: &Matrix, y: &Matrix) -> Result<TrainingResult> {
    Trainer::new(config)?.train(x, y)
}
