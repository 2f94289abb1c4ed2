use crate::layers::layer::Layer;
use crate::optim::optimizer::Optimizer;

/// Plain gradient descent: `param -= learning_rate * grad`.
#[derive(Debug)]
pub struct GradientDescent {
    pub learning_rate: f64,
}

impl GradientDescent {
    pub fn new(learning_rate: f64) -> GradientDescent {
        GradientDescent { learning_rate }
    }
}

impl Optimizer for GradientDescent {
    fn step(&mut self, layer: &mut dyn Layer) {
        let lr = self.learning_rate;
        for (param, grad) in layer.params_and_grads() {
            *param = param.zip_with(grad, |p, g| p - lr * g);
        }
    }
}
