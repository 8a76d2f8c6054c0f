use std::fmt;

use crate::error::{NetError, Result};
use crate::matrix::Matrix;

fn check_same_shape(y: &Matrix, y_hat: &Matrix) -> Result<()> {
    if y.shape() != y_hat.shape() {
        return Err(NetError::shape_mismatch(y.shape(), y_hat.shape()));
    }
    Ok(())
}

/// Confusion counts and derived scores for a binary classifier.
///
/// Ratios with a zero denominator are `NaN`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionStats {
    pub true_positives: usize,
    pub false_positives: usize,
    pub true_negatives: usize,
    pub false_negatives: usize,
    pub precision: f32,
    pub recall: f32,
    pub accuracy: f32,
    pub f1: f32,
}

impl PredictionStats {
    /// Compare `1 x m` label and prediction rows of 0/1 values.
    pub fn new(y: &Matrix, y_hat: &Matrix) -> Result<Self> {
        check_same_shape(y, y_hat)?;
        if y.rows() != 1 {
            return Err(NetError::dimension_mismatch(
                "1 label row".to_string(),
                format!("{} label rows", y.rows()),
            ));
        }

        let (mut tp, mut fp, mut tn, mut fn_) = (0, 0, 0, 0);
        for (&label, &predicted) in y.as_array().iter().zip(y_hat.as_array().iter()) {
            match (label == 1.0, predicted == 1.0) {
                (true, true) => tp += 1,
                (false, true) => fp += 1,
                (true, false) => fn_ += 1,
                (false, false) => tn += 1,
            }
        }

        let precision = tp as f32 / (tp + fp) as f32;
        let recall = tp as f32 / (tp + fn_) as f32;
        let accuracy = (tp + tn) as f32 / (tp + tn + fp + fn_) as f32;
        let f1 = 2.0 * (precision * recall) / (precision + recall);

        Ok(PredictionStats {
            true_positives: tp,
            false_positives: fp,
            true_negatives: tn,
            false_negatives: fn_,
            precision,
            recall,
            accuracy,
            f1,
        })
    }
}

impl fmt::Display for PredictionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Accuracy: {}, Precision: {}, Recall: {}, F1: {}",
            self.accuracy * 100.0,
            self.precision * 100.0,
            self.recall * 100.0,
            self.f1 * 100.0
        )
    }
}

/// Fraction of sample columns where the predicted column equals the label column.
pub fn multi_class_accuracy(y: &Matrix, y_hat: &Matrix) -> Result<f32> {
    check_same_shape(y, y_hat)?;
    let labels = y.as_array();
    let predictions = y_hat.as_array();
    let correct = labels
        .columns()
        .into_iter()
        .zip(predictions.columns())
        .filter(|(label, predicted)| label == predicted)
        .count();
    Ok(correct as f32 / y.cols() as f32)
}
