use rand::rngs::StdRng;

use crate::layers::layer::Layer;
use crate::tensor::init::{random_tensor, InitScheme};
use crate::tensor::tensor::Tensor;

/// A fully connected affine layer: `output[o] = dot(w[o], input) + b[o]`.
#[derive(Debug)]
pub struct Linear {
    pub input_dim: usize,
    pub output_dim: usize,
    /// w[o] holds the weights of the o-th output unit; shape [output_dim][input_dim].
    pub w: Tensor,
    /// b[o] is the bias of the o-th output unit; shape [output_dim].
    pub b: Tensor,
    w_grad: Tensor,
    b_grad: Tensor,
    input: Option<Tensor>, // saved by forward for the backward pass
}

impl Linear {
    pub fn new(input_dim: usize, output_dim: usize, init: InitScheme, rng: &mut StdRng) -> Linear {
        let w = random_tensor(&[output_dim, input_dim], init, rng);
        let b = random_tensor(&[output_dim], init, rng);

        Linear {
            input_dim,
            output_dim,
            w_grad: w.zeros_like(),
            b_grad: b.zeros_like(),
            w,
            b,
            input: None,
        }
    }
}

impl Layer for Linear {
    fn forward(&mut self, input: &Tensor) -> Tensor {
        self.input = Some(input.clone());

        let x = input.as_vector();
        let outputs = self
            .w
            .as_stack()
            .iter()
            .zip(self.b.as_vector())
            .map(|(row, bias)| dot(row.as_vector(), x) + bias)
            .collect();
        Tensor::Vector(outputs)
    }

    fn backward(&mut self, gradient: &Tensor) -> Tensor {
        let input = match &self.input {
            Some(input) => input.as_vector(),
            None => panic!("Linear::backward called before forward"),
        };
        let grad = gradient.as_vector();

        // b[o] is added straight into output[o], so its gradient is the
        // output gradient itself.
        self.b_grad = gradient.clone();

        // w[o][i] multiplies input[i] into output[o].
        self.w_grad = Tensor::Stack(
            grad.iter()
                .map(|g| Tensor::Vector(input.iter().map(|x| x * g).collect()))
                .collect(),
        );

        // input[i] feeds every output[o] through w[o][i], so its gradient
        // sums w[o][i] * grad[o] across the outputs.
        let input_grad = (0..self.input_dim)
            .map(|i| {
                self.w
                    .as_stack()
                    .iter()
                    .zip(grad)
                    .map(|(row, g)| row.as_vector()[i] * g)
                    .sum()
            })
            .collect();
        Tensor::Vector(input_grad)
    }

    fn params(&self) -> Vec<&Tensor> {
        vec![&self.w, &self.b]
    }

    fn grads(&self) -> Vec<&Tensor> {
        vec![&self.w_grad, &self.b_grad]
    }

    fn params_and_grads(&mut self) -> Vec<(&mut Tensor, &Tensor)> {
        vec![(&mut self.w, &self.w_grad), (&mut self.b, &self.b_grad)]
    }
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}
