use rand::rngs::StdRng;
use rand::SeedableRng;

use graphite_nn::train::trainer::{accuracy, argmax, train_epoch};
use graphite_nn::{InitScheme, Layer, Linear, Momentum, Sequential, SoftmaxCrossEntropy, Tanh, Tensor};

/// The lowest 10 binary digits of n, least significant first.
fn binary_encode(n: u32) -> Tensor {
    Tensor::from((0..10).map(|bit| ((n >> bit) & 1) as f64).collect::<Vec<f64>>())
}

const LABELS: [&str; 4] = ["number", "fizz", "buzz", "fizzbuzz"];

/// One-hot encoding over [number, fizz, buzz, fizzbuzz].
fn fizz_buzz_encode(n: u32) -> Tensor {
    let class = if n % 15 == 0 {
        3
    } else if n % 5 == 0 {
        2
    } else if n % 3 == 0 {
        1
    } else {
        0
    };
    let mut one_hot = vec![0.0; 4];
    one_hot[class] = 1.0;
    Tensor::from(one_hot)
}

const NUM_HIDDEN: usize = 25;

fn main() {
    // Train on 101..1024 so that 1..101 stays unseen for testing.
    let inputs: Vec<Tensor> = (101..1024).map(binary_encode).collect();
    let targets: Vec<Tensor> = (101..1024).map(fizz_buzz_encode).collect();

    let mut rng = StdRng::seed_from_u64(0);
    let mut net = Sequential::new(vec![
        Box::new(Linear::new(10, NUM_HIDDEN, InitScheme::Uniform, &mut rng)),
        Box::new(Tanh::new()),
        Box::new(Linear::new(NUM_HIDDEN, 4, InitScheme::Uniform, &mut rng)),
    ]);

    let loss = SoftmaxCrossEntropy;
    let mut optimizer = Momentum::new(0.1);

    for epoch in 0..100 {
        let epoch_loss = train_epoch(&mut net, &inputs, &targets, &loss, &mut optimizer);
        if epoch % 10 == 0 {
            let train_accuracy = accuracy(&mut net, &inputs, &targets);
            println!("Epoch {epoch}: loss = {epoch_loss:.3}, accuracy = {train_accuracy:.2}");
        }
    }

    let test_inputs: Vec<Tensor> = (1..101).map(binary_encode).collect();
    let test_targets: Vec<Tensor> = (1..101).map(fizz_buzz_encode).collect();
    println!("test accuracy: {:.2}", accuracy(&mut net, &test_inputs, &test_targets));

    for n in 1..=15 {
        let output = net.forward(&binary_encode(n));
        println!("{n}: {}", LABELS[argmax(output.as_vector())]);
    }
}
