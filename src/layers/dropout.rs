use rand::rngs::StdRng;
use rand::Rng;

use crate::layers::layer::Layer;
use crate::tensor::tensor::Tensor;

/// Randomly zeroes elements while training; scales everything by
/// `1 - p` during evaluation so the expected magnitudes match.
///
/// The layer owns its random generator, so a seeded `StdRng` makes the
/// masks reproducible without any process-wide state.
#[derive(Debug)]
pub struct Dropout {
    /// Probability of zeroing any given element in training mode.
    pub p: f64,
    /// Training mode draws masks; evaluation mode rescales. Backward is
    /// only valid in training mode.
    pub train: bool,
    mask: Option<Tensor>, // cached by the training-mode forward
    rng: StdRng,
}

impl Dropout {
    pub fn new(p: f64, rng: StdRng) -> Dropout {
        Dropout {
            p,
            train: true,
            mask: None,
            rng,
        }
    }
}

impl Layer for Dropout {
    fn forward(&mut self, input: &Tensor) -> Tensor {
        if self.train {
            let p = self.p;
            let rng = &mut self.rng;
            // Per-leaf Bernoulli mask: 0 with probability p, 1 otherwise.
            let mask = input.map(|_| if rng.gen::<f64>() < p { 0.0 } else { 1.0 });
            let output = input.zip_with(&mask, |x, m| x * m);
            self.mask = Some(mask);
            output
        } else {
            let p = self.p;
            input.map(|x| x * (1.0 - p))
        }
    }

    fn backward(&mut self, gradient: &Tensor) -> Tensor {
        if !self.train {
            panic!("Dropout::backward called while not in train mode");
        }
        match &self.mask {
            // Gradients only flow where the mask kept the input.
            Some(mask) => gradient.zip_with(mask, |grad, m| grad * m),
            None => panic!("Dropout::backward called before forward"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn eval_mode_scales_uniformly() {
        let mut layer = Dropout::new(0.25, StdRng::seed_from_u64(0));
        layer.train = false;
        let output = layer.forward(&Tensor::from(vec![4.0, 8.0]));
        assert_eq!(output, Tensor::from(vec![3.0, 6.0]));
    }

    #[test]
    #[should_panic(expected = "not in train mode")]
    fn eval_mode_backward_is_an_error() {
        let mut layer = Dropout::new(0.25, StdRng::seed_from_u64(0));
        layer.train = false;
        layer.forward(&Tensor::from(vec![1.0]));
        layer.backward(&Tensor::from(vec![1.0]));
    }

    #[test]
    #[should_panic(expected = "before forward")]
    fn training_backward_requires_forward() {
        let mut layer = Dropout::new(0.25, StdRng::seed_from_u64(0));
        layer.backward(&Tensor::from(vec![1.0]));
    }

    #[test]
    fn training_mask_gates_forward_and_backward_alike() {
        let mut layer = Dropout::new(0.5, StdRng::seed_from_u64(42));
        let input = Tensor::from(vec![1.0; 32]);

        let output = layer.forward(&input);
        let grad = layer.backward(&Tensor::from(vec![1.0; 32]));

        // The same cached mask gates both directions.
        assert_eq!(output, grad);
        // With p = 0.5 over 32 draws, both mask values show up.
        assert!(output.sum() > 0.0 && output.sum() < 32.0);
    }

    #[test]
    fn drop_probability_one_zeroes_everything() {
        let mut layer = Dropout::new(1.0, StdRng::seed_from_u64(0));
        let output = layer.forward(&Tensor::from(vec![1.0, 2.0, 3.0]));
        assert_eq!(output, Tensor::from(vec![0.0, 0.0, 0.0]));
    }
}
