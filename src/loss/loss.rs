use crate::tensor::tensor::Tensor;

/// Scalar measure of prediction error plus its gradient with respect to
/// the prediction. Larger values are worse.
pub trait Loss {
    /// How bad the predictions are; non-negative, 0 at a perfect match.
    fn loss(&self, predicted: &Tensor, actual: &Tensor) -> f64;

    /// How the loss changes as the predictions change; same shape as
    /// `predicted`.
    fn gradient(&self, predicted: &Tensor, actual: &Tensor) -> Tensor;
}
