//! Three-class classification of gaussian blobs with a softmax output.
//!
//! Run with: RUST_LOG=info cargo run --example simple_multiclass

use deepnn::builders::NetworkBuilder;
use deepnn::data::{samples_diversity, samples_to_x, samples_to_y_one_hot, split_data_set, Sample};
use deepnn::metrics::multi_class_accuracy;
use deepnn::training::{Trainer, TrainingConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use std::error::Error;

const NUM_CLASSES: usize = 3;

fn make_blobs(per_class: usize, seed: u64) -> Result<Vec<Sample>, Box<dyn Error>> {
    let centers = [(-2.0f32, -1.5f32), (2.0, -1.5), (0.0, 2.0)];
    let noise = Normal::new(0.0f32, 0.6)?;
    let mut rng = StdRng::seed_from_u64(seed);

    let mut samples = Vec::with_capacity(per_class * centers.len());
    for (label, &(cx, cy)) in centers.iter().enumerate() {
        for _ in 0..per_class {
            let features = vec![cx + noise.sample(&mut rng), cy + noise.sample(&mut rng)];
            samples.push(Sample::new(features, label));
        }
    }
    Ok(samples)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let samples = make_blobs(200, 7)?;
    let (train_set, test_set) = split_data_set(&samples, 0.8, 1)?;
    for (label, share) in samples_diversity(&train_set) {
        println!("label {}: {:.1}% of training set", label, share);
    }

    let config = TrainingConfig::new()
        .layer_dims(&[2, 8, NUM_CLASSES])
        .mini_batch_size(32)
        .iterations(400)
        .learning_rate(0.3)
        .lambda(0.01)
        .print_cost(true);

    // Same architecture, switched to softmax + multi-class cross-entropy
    let network = NetworkBuilder::from_config(&config)
        .multi_class_classifier()
        .build()?;
    let config = config
        .output_activation(network.output_activation())
        .loss(network.loss());

    let x = samples_to_x(&train_set)?;
    let y = samples_to_y_one_hot(&train_set, NUM_CLASSES)?;
    let result = Trainer::new(config)?.train(&x, &y)?;

    let train_accuracy = multi_class_accuracy(&y, &result.network.predict(&x)?)?;
    let test_x = samples_to_x(&test_set)?;
    let test_y = samples_to_y_one_hot(&test_set, NUM_CLASSES)?;
    let test_accuracy = multi_class_accuracy(&test_y, &result.network.predict(&test_x)?)?;

    println!("Train accuracy: {:.2}%", train_accuracy * 100.0);
    println!("Test accuracy: {:.2}%", test_accuracy * 100.0);

    Ok(())
}
