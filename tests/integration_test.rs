use deepnn::{
    activations::Activation,
    builders::NetworkBuilder,
    data::{load_sample_files, samples_to_x, samples_to_y_one_hot, split_data_set, Sample},
    layers::DenseLayer,
    loss::LossFunction,
    matrix::Matrix,
    metrics::{multi_class_accuracy, PredictionStats},
    training::{Trainer, TrainingConfig, TrainingResult},
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform points in `[-1, 1]^2` labelled by the sign of their x-coordinate.
fn sign_points(n: usize, seed: u64, margin: f32) -> (Matrix, Matrix) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut xs = Vec::with_capacity(n);
    let mut ys = Vec::with_capacity(n);
    while xs.len() < n {
        let x: f32 = rng.gen_range(-1.0..1.0);
        if x.abs() <= margin {
            continue;
        }
        xs.push(x);
        ys.push(rng.gen_range(-1.0..1.0));
    }
    let labels: Vec<f32> = xs.iter().map(|&x| if x > 0.0 { 1.0 } else { 0.0 }).collect();
    (
        Matrix::from_rows(&[xs, ys]).unwrap(),
        Matrix::from_rows(&[labels]).unwrap(),
    )
}

/// Three gaussian blobs around well separated centers.
fn blob_samples(per_class: usize, seed: u64) -> Vec<Sample> {
    let centers = [(-2.0f32, -2.0f32), (2.0, -2.0), (0.0, 2.5)];
    let mut rng = StdRng::seed_from_u64(seed);
    let mut samples = Vec::new();
    for (label, &(cx, cy)) in centers.iter().enumerate() {
        for _ in 0..per_class {
            let dx: f32 = rng.gen_range(-0.8..0.8);
            let dy: f32 = rng.gen_range(-0.8..0.8);
            samples.push(Sample::new(vec![cx + dx, cy + dy], label));
        }
    }
    samples
}

#[test]
fn test_end_to_end_binary_classification() {
    let (x, y) = sign_points(1000, 1, 0.0);
    let config = TrainingConfig::new()
        .layer_dims(&[2, 1])
        .mini_batch_size(64)
        .iterations(500)
        .learning_rate(0.075)
        .output_activation(Activation::Sigmoid)
        .loss(LossFunction::BinaryCrossEntropy);

    let result = Trainer::new(config).unwrap().train(&x, &y).unwrap();
    assert!(result.final_cost().unwrap() < result.cost_history[0]);

    let (test_x, test_y) = sign_points(500, 2, 0.1);
    let predictions = result.network.predict(&test_x).unwrap();
    let stats = PredictionStats::new(&test_y, &predictions).unwrap();
    assert!(stats.accuracy > 0.95, "held-out accuracy {}", stats.accuracy);
}

#[test]
fn test_scalar_multiplication() {
    let a = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
    let expected = Matrix::from_rows(&[[2.0, 4.0, 6.0], [8.0, 10.0, 12.0]]).unwrap();
    assert_eq!(a.mul_scalar(2.0), expected);
}

#[test]
fn test_matrix_product() {
    let a = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
    let b = Matrix::from_rows(&[[7.0, 8.0], [9.0, 10.0], [11.0, 12.0]]).unwrap();
    let expected = Matrix::from_rows(&[[58.0, 64.0], [139.0, 154.0]]).unwrap();
    assert_eq!(a.dot(&b).unwrap(), expected);
}

#[test]
fn test_half_output_is_not_positive() {
    let mut network = NetworkBuilder::new()
        .input(2)
        .add_dense(1)
        .binary_classifier()
        .build()
        .unwrap();
    let zeros = DenseLayer::from_parameters(
        Matrix::zeros(1, 2).unwrap(),
        Matrix::zeros(1, 1).unwrap(),
    )
    .unwrap();
    network.set_layer(1, zeros).unwrap();

    let x = Matrix::random(2, 8, 3).unwrap();
    assert_eq!(network.predict(&x).unwrap(), Matrix::zeros(1, 8).unwrap());
}

#[test]
fn test_training_is_reproducible() {
    let (x, y) = sign_points(300, 4, 0.0);
    let config = TrainingConfig::new()
        .layer_dims(&[2, 4, 1])
        .mini_batch_size(32)
        .iterations(25)
        .learning_rate(0.1)
        .seed(77);

    let first = Trainer::new(config.clone()).unwrap().train(&x, &y).unwrap();
    let second = Trainer::new(config).unwrap().train(&x, &y).unwrap();
    assert_eq!(first.cost_history, second.cost_history);
    assert_eq!(first.network.layers(), second.network.layers());
}

#[test]
fn test_multi_class_training() {
    let samples = blob_samples(60, 9);
    let (train_set, test_set) = split_data_set(&samples, 0.75, 3).unwrap();
    assert!(!test_set.is_empty());

    let x = samples_to_x(&train_set).unwrap();
    let y = samples_to_y_one_hot(&train_set, 3).unwrap();

    let config = TrainingConfig::new()
        .layer_dims(&[2, 3])
        .mini_batch_size(16)
        .iterations(300)
        .learning_rate(0.5)
        .output_activation(Activation::Softmax)
        .loss(LossFunction::MultiClassCrossEntropy);
    let result = Trainer::new(config).unwrap().train(&x, &y).unwrap();

    let test_x = samples_to_x(&test_set).unwrap();
    let test_y = samples_to_y_one_hot(&test_set, 3).unwrap();
    let predictions = result.network.predict(&test_x).unwrap();
    let accuracy = multi_class_accuracy(&test_y, &predictions).unwrap();
    assert!(accuracy > 0.9, "multi-class accuracy {}", accuracy);
}

#[test]
fn test_regularized_training_shrinks_weights() {
    let (x, y) = sign_points(200, 5, 0.0);
    let base = TrainingConfig::new()
        .layer_dims(&[2, 6, 1])
        .mini_batch_size(50)
        .iterations(200)
        .learning_rate(0.2);

    let plain = Trainer::new(base.clone()).unwrap().train(&x, &y).unwrap();
    let regularized = Trainer::new(base.lambda(5.0)).unwrap().train(&x, &y).unwrap();

    let norm = |r: &TrainingResult| r.network.layer(1).unwrap().weights().square().sum();
    assert!(norm(&regularized) < norm(&plain));
}

#[test]
fn test_config_and_data_files() {
    let dir = tempfile::tempdir().unwrap();

    let config_path = dir.path().join("training.json");
    std::fs::write(
        &config_path,
        r#"{
            "layer_dims": [2, 2],
            "mini_batch_size": 4,
            "iterations": 200,
            "learning_rate": 0.5,
            "output_activation": "Softmax",
            "loss": "MultiClassCrossEntropy"
        }"#,
    )
    .unwrap();

    let features_path = dir.path().join("features.csv");
    let labels_path = dir.path().join("labels.txt");
    std::fs::write(&features_path, "1.0,0.9\n0.8,1.1\n-1.0,-0.9\n-1.2,-0.8\n0.9,1.2\n-0.9,-1.1\n").unwrap();
    std::fs::write(&labels_path, "1\n1\n10\n10\n1\n10\n").unwrap();

    let config = TrainingConfig::from_json_file(&config_path).unwrap();
    let samples = load_sample_files(&features_path, &labels_path).unwrap();
    assert_eq!(samples.len(), 6);
    assert_eq!(samples[2].label, 0);

    let x = samples_to_x(&samples).unwrap();
    let y = samples_to_y_one_hot(&samples, 2).unwrap();
    let network = NetworkBuilder::from_config(&config).build().unwrap();
    assert_eq!(network.output_activation(), Activation::Softmax);

    let result = Trainer::new(config).unwrap().train(&x, &y).unwrap();
    let predictions = result.network.predict(&x).unwrap();
    assert_eq!(multi_class_accuracy(&y, &predictions).unwrap(), 1.0);
}
