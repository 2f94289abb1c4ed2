use crate::layers::layer::Layer;
use crate::loss::loss::Loss;
use crate::optim::optimizer::Optimizer;
use crate::tensor::tensor::Tensor;

/// Runs one pass of per-sample gradient descent over the dataset.
///
/// For each (input, target) pair: forward, accumulate loss, compute the
/// loss gradient, backpropagate, then one optimizer step. Returns the
/// mean sample loss.
///
/// # Panics
/// Panics if `inputs` is empty or the lengths mismatch.
pub fn train_epoch(
    net: &mut dyn Layer,
    inputs: &[Tensor],
    targets: &[Tensor],
    loss: &dyn Loss,
    optimizer: &mut dyn Optimizer,
) -> f64 {
    assert!(!inputs.is_empty(), "inputs must not be empty");
    assert_eq!(
        inputs.len(),
        targets.len(),
        "inputs and targets must have equal length"
    );

    let mut total_loss = 0.0;
    for (input, target) in inputs.iter().zip(targets.iter()) {
        let predicted = net.forward(input);
        total_loss += loss.loss(&predicted, target);

        let gradient = loss.gradient(&predicted, target);
        net.backward(&gradient);
        optimizer.step(&mut *net);
    }
    total_loss / inputs.len() as f64
}

/// Mean loss over a dataset without updating any parameters.
pub fn evaluate(net: &mut dyn Layer, inputs: &[Tensor], targets: &[Tensor], loss: &dyn Loss) -> f64 {
    if inputs.is_empty() {
        return 0.0;
    }
    let total: f64 = inputs
        .iter()
        .zip(targets.iter())
        .map(|(input, target)| loss.loss(&net.forward(input), target))
        .sum();
    total / inputs.len() as f64
}

/// Fraction of samples whose argmax prediction matches the argmax target.
pub fn accuracy(net: &mut dyn Layer, inputs: &[Tensor], targets: &[Tensor]) -> f64 {
    if inputs.is_empty() {
        return 0.0;
    }
    let correct = inputs
        .iter()
        .zip(targets.iter())
        .filter(|&(input, target)| {
            let output = net.forward(input);
            argmax(output.as_vector()) == argmax(target.as_vector())
        })
        .count();
    correct as f64 / inputs.len() as f64
}

/// Index of the largest element in a slice.
pub fn argmax(values: &[f64]) -> usize {
    values
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, _)| i)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::linear::Linear;
    use crate::loss::sse::SseLoss;
    use crate::optim::gradient_descent::GradientDescent;
    use crate::tensor::init::InitScheme;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn argmax_picks_the_largest_index() {
        assert_eq!(argmax(&[0.1, 0.9, 0.3]), 1);
        assert_eq!(argmax(&[2.0]), 0);
    }

    #[test]
    fn training_fits_a_line() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut net = Linear::new(1, 1, InitScheme::Xavier, &mut rng);

        // y = 2x + 1 over a handful of points in [0, 1).
        let inputs: Vec<Tensor> = (0..8).map(|i| Tensor::from(vec![i as f64 / 8.0])).collect();
        let targets: Vec<Tensor> = inputs.iter().map(|x| x.map(|v| 2.0 * v + 1.0)).collect();

        let loss = SseLoss;
        let mut optimizer = GradientDescent::new(0.1);

        let first = train_epoch(&mut net, &inputs, &targets, &loss, &mut optimizer);
        let mut last = first;
        for _ in 0..200 {
            last = train_epoch(&mut net, &inputs, &targets, &loss, &mut optimizer);
        }
        assert!(last < first);
        assert!(last < 1e-2);
    }

    #[test]
    fn evaluate_leaves_parameters_alone() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut net = Linear::new(2, 1, InitScheme::Normal, &mut rng);
        let before: Vec<Tensor> = net.params().iter().map(|p| (*p).clone()).collect();

        let inputs = vec![Tensor::from(vec![1.0, 2.0])];
        let targets = vec![Tensor::from(vec![0.0])];
        evaluate(&mut net, &inputs, &targets, &SseLoss);

        let after: Vec<Tensor> = net.params().iter().map(|p| (*p).clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn accuracy_counts_argmax_matches() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut net = Linear::new(2, 2, InitScheme::Xavier, &mut rng);
        net.w = Tensor::from(vec![vec![1.0, 0.0], vec![0.0, 1.0]]); // identity
        net.b = Tensor::from(vec![0.0, 0.0]);

        let inputs = vec![Tensor::from(vec![3.0, 1.0]), Tensor::from(vec![0.0, 2.0])];
        let targets = vec![Tensor::from(vec![1.0, 0.0]), Tensor::from(vec![1.0, 0.0])];
        assert_eq!(accuracy(&mut net, &inputs, &targets), 0.5);
    }
}
