use crate::layers::layer::Layer;
use crate::tensor::tensor::Tensor;

/// A layer made of other layers, applied in declared order.
///
/// It is up to the caller to make sure each layer's output is a sensible
/// input for the next one. `Sequential` has no parameters of its own;
/// `params`/`grads` flatten the children's, in child order.
pub struct Sequential {
    pub layers: Vec<Box<dyn Layer>>,
}

impl Sequential {
    pub fn new(layers: Vec<Box<dyn Layer>>) -> Sequential {
        Sequential { layers }
    }
}

impl Layer for Sequential {
    fn forward(&mut self, input: &Tensor) -> Tensor {
        let mut current = input.clone();
        for layer in &mut self.layers {
            current = layer.forward(&current);
        }
        current
    }

    fn backward(&mut self, gradient: &Tensor) -> Tensor {
        let mut current = gradient.clone();
        for layer in self.layers.iter_mut().rev() {
            current = layer.backward(&current);
        }
        current
    }

    fn params(&self) -> Vec<&Tensor> {
        self.layers.iter().flat_map(|layer| layer.params()).collect()
    }

    fn grads(&self) -> Vec<&Tensor> {
        self.layers.iter().flat_map(|layer| layer.grads()).collect()
    }

    fn params_and_grads(&mut self) -> Vec<(&mut Tensor, &Tensor)> {
        self.layers
            .iter_mut()
            .flat_map(|layer| layer.params_and_grads())
            .collect()
    }
}
