use rand::rngs::StdRng;
use rand::SeedableRng;

use graphite_nn::{
    train_epoch, GradientDescent, InitScheme, Layer, Linear, Sequential, Sigmoid, SseLoss, Tensor,
};

fn main() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut net = Sequential::new(vec![
        Box::new(Linear::new(2, 2, InitScheme::Xavier, &mut rng)),
        Box::new(Sigmoid::new()),
        Box::new(Linear::new(2, 1, InitScheme::Xavier, &mut rng)),
    ]);

    let inputs: Vec<Tensor> = [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]]
        .into_iter()
        .map(|point| Tensor::from(point.to_vec()))
        .collect();
    let targets: Vec<Tensor> = [0.0, 1.0, 1.0, 0.0]
        .into_iter()
        .map(|target| Tensor::from(vec![target]))
        .collect();

    let loss = SseLoss;
    let mut optimizer = GradientDescent::new(0.1);
    let epochs = 3000;

    for epoch in 0..epochs {
        let epoch_loss = train_epoch(&mut net, &inputs, &targets, &loss, &mut optimizer);
        if epoch % 300 == 0 {
            println!("Epoch {epoch}: loss = {epoch_loss:.6}");
        }
    }

    for input in &inputs {
        let output = net.forward(input);
        println!("Input: {:?} -> Output: {:.4}", input.as_vector(), output.as_vector()[0]);
    }
}
