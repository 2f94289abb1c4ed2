use crate::layers::layer::Layer;

/// Updates a layer's parameters in place from its gradients.
pub trait Optimizer {
    /// Applies one update to every (param, grad) pair of `layer`.
    fn step(&mut self, layer: &mut dyn Layer);
}
