//! Train a classifier from a feature CSV, a label file and a JSON config.
//!
//! Run with:
//!   cargo run --example csv_classifier -- features.csv labels.txt [config.json]
//!
//! Labels are integers, one per line; `10` is read as `0`. Without a config
//! file the network is `[features, 25, labels]` with ReLU hidden units and a
//! softmax output.

use deepnn::activations::Activation;
use deepnn::data::{
    load_sample_files, min_samples_per_label, samples_to_x, samples_to_y_one_hot, split_data_set,
};
use deepnn::loss::LossFunction;
use deepnn::metrics::multi_class_accuracy;
use deepnn::training::{Trainer, TrainingConfig};
use std::env;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("usage: {} <features.csv> <labels.txt> [config.json]", args[0]);
        std::process::exit(2);
    }

    let samples = load_sample_files(&args[1], &args[2])?;
    let first = samples.first().ok_or("no samples loaded")?;
    let num_features = first.features.len();
    let num_labels = samples.iter().map(|s| s.label).max().unwrap_or(0) + 1;
    println!(
        "Loaded {} samples, {} features, {} labels (smallest class: {})",
        samples.len(),
        num_features,
        num_labels,
        min_samples_per_label(&samples).unwrap_or(0)
    );

    let config = match args.get(3) {
        Some(path) => TrainingConfig::from_json_file(path)?,
        None => TrainingConfig::new()
            .layer_dims(&[num_features, 25, num_labels])
            .mini_batch_size(64)
            .iterations(300)
            .learning_rate(0.1)
            .hidden_activation(Activation::Relu)
            .output_activation(Activation::Softmax)
            .loss(LossFunction::MultiClassCrossEntropy)
            .print_cost(true),
    };

    let (train_set, test_set) = split_data_set(&samples, 0.8, config.seed)?;
    let x = samples_to_x(&train_set)?;
    let y = samples_to_y_one_hot(&train_set, num_labels)?;

    let result = Trainer::new(config)?.train(&x, &y)?;
    println!("Final cost: {:?}", result.final_cost());

    if test_set.is_empty() {
        println!("No held-out samples to evaluate");
        return Ok(());
    }
    let test_x = samples_to_x(&test_set)?;
    let test_y = samples_to_y_one_hot(&test_set, num_labels)?;
    let accuracy = multi_class_accuracy(&test_y, &result.network.predict(&test_x)?)?;
    println!("Held-out accuracy: {:.2}%", accuracy * 100.0);

    Ok(())
}
