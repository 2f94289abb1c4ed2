use crate::tensor::tensor::Tensor;

/// A unit of computation with a forward pass, a backward pass, and
/// optional trainable parameters.
///
/// `forward` caches whatever its own `backward` will need; every new
/// forward call overwrites the cache of the previous one, and calling
/// `backward` before any forward is a usage error (the layer panics).
/// Parameterless layers keep the default empty `params`/`grads`.
pub trait Layer {
    /// Computes the layer's output from `input`, saving intermediates
    /// for the backward pass.
    fn forward(&mut self, input: &Tensor) -> Tensor;

    /// Given the loss gradient with respect to this layer's output,
    /// populates the layer's parameter gradients and returns the
    /// gradient with respect to its input.
    fn backward(&mut self, gradient: &Tensor) -> Tensor;

    /// The layer's parameter tensors, in a fixed order matching `grads`.
    fn params(&self) -> Vec<&Tensor> {
        Vec::new()
    }

    /// One gradient per parameter, in the same order as `params`.
    fn grads(&self) -> Vec<&Tensor> {
        Vec::new()
    }

    /// Exclusive (parameter, gradient) pairs, in `params` order, for
    /// in-place optimizer updates.
    fn params_and_grads(&mut self) -> Vec<(&mut Tensor, &Tensor)> {
        Vec::new()
    }
}
