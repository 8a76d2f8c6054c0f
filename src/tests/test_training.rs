use crate::activations::Activation;
use crate::error::NetError;
use crate::loss::LossFunction;
use crate::matrix::Matrix;
use crate::training::{
    epoch_seed, partition_indices, random_mini_batches, reports_cost, shuffled_indices, train, Trainer,
    TrainingConfig,
};

fn m(rows: &[&[f32]]) -> Matrix {
    Matrix::from_rows(rows).unwrap()
}

/// Columns are 0..n in row 0 and their negatives in row 1; labels mirror row 0.
fn tagged_columns(n: usize) -> (Matrix, Matrix) {
    let row: Vec<f32> = (0..n).map(|i| i as f32).collect();
    let neg: Vec<f32> = row.iter().map(|v| -v).collect();
    let x = Matrix::from_rows(&[row.clone(), neg]).unwrap();
    let y = Matrix::from_rows(&[row]).unwrap();
    (x, y)
}

fn separable(n: usize) -> (Matrix, Matrix) {
    let xs: Vec<f32> = (0..n).map(|i| (i as f32 / n as f32) * 2.0 - 1.0 + 0.5 / n as f32).collect();
    let ys: Vec<f32> = (0..n).map(|i| ((i * 7) % 13) as f32 / 13.0 - 0.5).collect();
    let labels: Vec<f32> = xs.iter().map(|&v| if v > 0.0 { 1.0 } else { 0.0 }).collect();
    (
        Matrix::from_rows(&[xs, ys]).unwrap(),
        Matrix::from_rows(&[labels]).unwrap(),
    )
}

#[test]
fn test_default_config() {
    let config = TrainingConfig::default();
    assert_eq!(config.layer_dims, vec![2, 1]);
    assert_eq!(config.mini_batch_size, 128);
    assert_eq!(config.output_activation, Activation::Sigmoid);
    assert_eq!(config.loss, LossFunction::BinaryCrossEntropy);
    assert!(!config.print_cost);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_builder() {
    let config = TrainingConfig::new()
        .layer_dims(&[4, 8, 3])
        .seed(7)
        .mini_batch_size(16)
        .iterations(10)
        .learning_rate(0.1)
        .lambda(0.5)
        .hidden_activation(Activation::Sigmoid)
        .output_activation(Activation::Softmax)
        .loss(LossFunction::MultiClassCrossEntropy)
        .print_cost(true);

    assert_eq!(config.layer_dims, vec![4, 8, 3]);
    assert_eq!(config.seed, 7);
    assert_eq!(config.mini_batch_size, 16);
    assert_eq!(config.iterations, 10);
    assert_eq!(config.learning_rate, 0.1);
    assert_eq!(config.lambda, 0.5);
    assert_eq!(config.hidden_activation, Activation::Sigmoid);
    assert!(config.print_cost);
}

#[test]
fn test_config_validation() {
    let invalid = [
        TrainingConfig::new().layer_dims(&[3]),
        TrainingConfig::new().layer_dims(&[3, 0, 1]),
        TrainingConfig::new().mini_batch_size(0),
        TrainingConfig::new().learning_rate(0.0),
        TrainingConfig::new().learning_rate(f32::NAN),
        TrainingConfig::new().lambda(-1.0),
        TrainingConfig::new().lambda(f32::INFINITY),
    ];
    for config in &invalid {
        assert!(
            matches!(config.validate(), Err(NetError::InvalidParameter { .. })),
            "{:?} should be rejected",
            config
        );
    }
    assert!(Trainer::new(TrainingConfig::new().mini_batch_size(0)).is_err());
}

#[test]
fn test_config_json() {
    let config = TrainingConfig::new().layer_dims(&[5, 3, 1]).lambda(0.25);
    let json = config.to_json().unwrap();
    assert_eq!(TrainingConfig::from_json_str(&json).unwrap(), config);

    let partial = TrainingConfig::from_json_str(r#"{"layer_dims": [3, 2], "iterations": 5}"#).unwrap();
    assert_eq!(partial.layer_dims, vec![3, 2]);
    assert_eq!(partial.iterations, 5);
    assert_eq!(partial.mini_batch_size, TrainingConfig::default().mini_batch_size);

    let parsed = TrainingConfig::from_json_str(r#"{"output_activation": "Softmax", "loss": "MultiClassCrossEntropy"}"#)
        .unwrap();
    assert_eq!(parsed.output_activation, Activation::Softmax);
    assert_eq!(parsed.loss, LossFunction::MultiClassCrossEntropy);

    assert!(matches!(TrainingConfig::from_json_str("{not json"), Err(NetError::Config(_))));
    assert!(matches!(
        TrainingConfig::from_json_str(r#"{"mini_batch_size": 0}"#),
        Err(NetError::InvalidParameter { .. })
    ));
}

#[test]
fn test_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let config = TrainingConfig::new().iterations(42);
    std::fs::write(&path, config.to_json().unwrap()).unwrap();

    assert_eq!(TrainingConfig::from_json_file(&path).unwrap(), config);
    assert!(matches!(
        TrainingConfig::from_json_file(dir.path().join("missing.json")),
        Err(NetError::Io(_))
    ));
}

#[test]
fn test_epoch_seed() {
    assert_eq!(epoch_seed(10, 0), 11);
    assert_eq!(epoch_seed(10, 4), 15);
    assert_eq!(epoch_seed(u64::MAX, 0), 0);
}

#[test]
fn test_shuffled_indices_is_permutation() {
    let a = shuffled_indices(50, 3);
    let mut sorted = a.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    assert_eq!(a, shuffled_indices(50, 3));
    assert_ne!(a, shuffled_indices(50, 4));
}

#[test]
fn test_partition_indices() {
    let indices: Vec<usize> = (0..10).collect();

    let batches = partition_indices(&indices, 4).unwrap();
    let sizes: Vec<usize> = batches.iter().map(|b| b.len()).collect();
    assert_eq!(sizes, vec![4, 4, 2]);

    let exact = partition_indices(&indices, 5).unwrap();
    assert_eq!(exact.len(), 2);

    let whole = partition_indices(&indices, 64).unwrap();
    assert_eq!(whole, vec![&indices[..]]);

    assert!(partition_indices(&indices, 0).is_err());
}

#[test]
fn test_random_mini_batches_keep_columns_paired() {
    let (x, y) = tagged_columns(11);
    let batches = random_mini_batches(&x, &y, 4, 9).unwrap();
    assert_eq!(batches.len(), 3);
    assert_eq!(batches[2].x.cols(), 3);

    let mut seen = Vec::new();
    for batch in &batches {
        assert_eq!(batch.x.rows(), 2);
        assert_eq!(batch.y.rows(), 1);
        for c in 0..batch.x.cols() {
            let tag = batch.x.get(0, c).unwrap();
            assert_eq!(batch.x.get(1, c).unwrap(), -tag);
            assert_eq!(batch.y.get(0, c).unwrap(), tag);
            seen.push(tag as usize);
        }
    }
    seen.sort_unstable();
    assert_eq!(seen, (0..11).collect::<Vec<_>>());
}

#[test]
fn test_random_mini_batches_rejects_mismatch() {
    let x = Matrix::zeros(2, 5).unwrap();
    let y = Matrix::zeros(1, 4).unwrap();
    assert!(random_mini_batches(&x, &y, 2, 0).is_err());
}

#[test]
fn test_training_reduces_cost() {
    let (x, y) = separable(200);
    let config = TrainingConfig::new()
        .layer_dims(&[2, 1])
        .mini_batch_size(32)
        .iterations(300)
        .learning_rate(0.5);
    let result = train(config, &x, &y).unwrap();

    assert_eq!(result.cost_history.len(), 300);
    let first = result.cost_history[0];
    let last = result.final_cost().unwrap();
    assert!(last < first, "cost went from {} to {}", first, last);
}

#[test]
fn test_training_is_deterministic() {
    let (x, y) = separable(60);
    let config = TrainingConfig::new()
        .layer_dims(&[2, 3, 1])
        .mini_batch_size(16)
        .iterations(20)
        .seed(5);
    let a = train(config.clone(), &x, &y).unwrap();
    let b = train(config.clone(), &x, &y).unwrap();
    assert_eq!(a.cost_history, b.cost_history);
    assert_eq!(a.network.layers(), b.network.layers());

    let c = train(config.seed(6), &x, &y).unwrap();
    assert_ne!(a.network.layers(), c.network.layers());
}

#[test]
fn test_zero_iterations_returns_initial_network() {
    let (x, y) = separable(10);
    let trainer = Trainer::new(TrainingConfig::new().iterations(0)).unwrap();
    let result = trainer.train(&x, &y).unwrap();
    assert!(result.cost_history.is_empty());
    assert!(result.final_cost().is_none());
    assert_eq!(result.network.layers(), trainer.initial_network().unwrap().layers());
}

#[test]
fn test_train_rejects_mismatched_data() {
    let trainer = Trainer::new(TrainingConfig::new().layer_dims(&[2, 1])).unwrap();
    let y = m(&[&[1.0, 0.0]]);
    assert!(trainer.train(&Matrix::zeros(3, 2).unwrap(), &y).is_err());
    assert!(trainer.train(&Matrix::zeros(2, 3).unwrap(), &y).is_err());
    assert!(trainer.train(&Matrix::zeros(2, 2).unwrap(), &Matrix::zeros(2, 2).unwrap()).is_err());
}

#[test]
fn test_cost_report_epochs() {
    for epoch in [0, 100, 200, 1000] {
        assert!(reports_cost(epoch), "epoch {} should report", epoch);
    }
    for epoch in [1, 50, 99, 101, 199] {
        assert!(!reports_cost(epoch), "epoch {} should not report", epoch);
    }
}

#[test]
fn test_print_cost_does_not_change_training() {
    let (x, y) = separable(40);
    let config = TrainingConfig::new()
        .layer_dims(&[2, 1])
        .mini_batch_size(8)
        .iterations(205);
    let quiet = train(config.clone(), &x, &y).unwrap();
    let reported = train(config.print_cost(true), &x, &y).unwrap();
    assert_eq!(quiet.cost_history, reported.cost_history);
    assert_eq!(quiet.network.layers(), reported.network.layers());
}
