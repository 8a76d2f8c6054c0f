//! Evaluation of predictions against labels.

pub mod classification;

pub use classification::{multi_class_accuracy, PredictionStats};
