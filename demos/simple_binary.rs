//! Binary classification of 2-D points by the sign of their x-coordinate.
//!
//! Run with: RUST_LOG=info cargo run --example simple_binary

use deepnn::activations::Activation;
use deepnn::loss::LossFunction;
use deepnn::matrix::Matrix;
use deepnn::metrics::PredictionStats;
use deepnn::training::{Trainer, TrainingConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::error::Error;

/// Points in [-1, 1]^2 with |x| > margin, labelled 1 when x > 0.
fn make_points(n: usize, margin: f32, rng: &mut StdRng) -> Result<(Matrix, Matrix), Box<dyn Error>> {
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
    Ok((Matrix::from_rows(&[xs, ys])?, Matrix::from_rows(&[labels])?))
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(2024);
    let (train_x, train_y) = make_points(1000, 0.0, &mut rng)?;
    let (test_x, test_y) = make_points(400, 0.1, &mut rng)?;

    let config = TrainingConfig::new()
        .layer_dims(&[2, 1])
        .mini_batch_size(64)
        .iterations(500)
        .learning_rate(0.075)
        .output_activation(Activation::Sigmoid)
        .loss(LossFunction::BinaryCrossEntropy)
        .print_cost(true);

    println!("Training on {} samples...", train_x.cols());
    let result = Trainer::new(config)?.train(&train_x, &train_y)?;
    if let Some(cost) = result.final_cost() {
        println!("Final cost: {:.5}", cost);
    }

    let layer = result
        .network
        .layer(1)
        .ok_or("trained network has no output layer")?;
    println!("Weights:\n{}", layer.weights());
    println!("Bias:\n{}", layer.biases());

    let predictions = result.network.predict(&test_x)?;
    let stats = PredictionStats::new(&test_y, &predictions)?;
    println!("Held-out: {}", stats);

    Ok(())
}
