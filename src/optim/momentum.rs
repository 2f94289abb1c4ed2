use crate::layers::layer::Layer;
use crate::optim::optimizer::Optimizer;
use crate::tensor::tensor::Tensor;

/// Gradient descent on a running average of the gradients, so a single
/// noisy gradient cannot whip the parameters around.
///
/// One running average is kept per parameter, allocated as zeros on the
/// first `step` and keyed by position in the layer's `params()`
/// ordering. Reusing one instance across differently shaped layers is
/// unsupported.
#[derive(Debug)]
pub struct Momentum {
    pub learning_rate: f64,
    pub momentum: f64,
    updates: Vec<Tensor>,
}

impl Momentum {
    /// Momentum coefficient 0.9.
    pub fn new(learning_rate: f64) -> Momentum {
        Momentum::with_momentum(learning_rate, 0.9)
    }

    pub fn with_momentum(learning_rate: f64, momentum: f64) -> Momentum {
        Momentum {
            learning_rate,
            momentum,
            updates: Vec::new(),
        }
    }
}

impl Optimizer for Momentum {
    fn step(&mut self, layer: &mut dyn Layer) {
        let pairs = layer.params_and_grads();

        // First step: start the running averages at zero.
        if self.updates.is_empty() {
            self.updates = pairs.iter().map(|(_, grad)| grad.zeros_like()).collect();
        }

        let lr = self.learning_rate;
        let mo = self.momentum;
        for (update, (param, grad)) in self.updates.iter_mut().zip(pairs) {
            // Fold the new gradient into the running average, then step.
            *update = update.zip_with(grad, |u, g| mo * u + (1.0 - mo) * g);
            *param = param.zip_with(update, |p, u| p - lr * u);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::linear::Linear;
    use crate::tensor::init::InitScheme;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fixed_layer() -> Linear {
        let mut rng = StdRng::seed_from_u64(0);
        let mut layer = Linear::new(1, 1, InitScheme::Xavier, &mut rng);
        layer.w = Tensor::from(vec![vec![1.0]]);
        layer.b = Tensor::from(vec![0.0]);
        layer
    }

    #[test]
    fn first_step_scales_the_gradient() {
        let mut layer = fixed_layer();
        layer.forward(&Tensor::from(vec![2.0]));
        layer.backward(&Tensor::from(vec![1.0])); // w_grad = [[2]], b_grad = [1]

        let mut optimizer = Momentum::new(0.1); // coefficient 0.9

        optimizer.step(&mut layer);

        // The running average starts at zero, so after one step it is
        // (1 - 0.9) * grad and the parameter moves by lr times that.
        let w = layer.w.as_stack()[0].as_vector()[0];
        assert!((w - (1.0 - 0.1 * 0.1 * 2.0)).abs() < 1e-12);
        let b = layer.b.as_vector()[0];
        assert!((b + 0.1 * 0.1).abs() < 1e-12);
    }

    #[test]
    fn running_average_persists_across_steps() {
        let mut layer = fixed_layer();
        let mut optimizer = Momentum::new(0.1);

        // Two steps with the same gradient: averages 0.1g then 0.19g.
        for _ in 0..2 {
            layer.forward(&Tensor::from(vec![2.0]));
            layer.backward(&Tensor::from(vec![1.0]));
            optimizer.step(&mut layer);
        }

        let expected_w = 1.0 - 0.1 * (0.1 * 2.0) - 0.1 * (0.19 * 2.0);
        let w = layer.w.as_stack()[0].as_vector()[0];
        assert!((w - expected_w).abs() < 1e-12);
    }
}
