//! Mini-batch gradient descent training.
//!
//! - [`TrainingConfig`] - every knob of a training run, loadable from JSON
//! - [`batches`] - seeded shuffles and mini-batch partitioning
//! - [`Trainer`] - the epoch loop

pub mod batches;
mod config;
mod trainer;

pub use batches::{epoch_seed, partition_indices, random_mini_batches, shuffled_indices, MiniBatch};
pub use config::TrainingConfig;
pub use trainer::{reports_cost, train, Trainer, TrainingResult, COST_REPORT_INTERVAL};
