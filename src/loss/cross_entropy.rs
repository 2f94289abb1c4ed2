use crate::loss::loss::Loss;
use crate::tensor::tensor::Tensor;

/// Keeps log() finite when a probability underflows to zero.
const EPS: f64 = 1e-30;

/// Softmax along the last rank, with the largest value subtracted before
/// exponentiating so large inputs cannot overflow.
pub fn softmax(tensor: &Tensor) -> Tensor {
    match tensor {
        Tensor::Vector(values) => {
            let largest = values.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
            let exps: Vec<f64> = values.iter().map(|x| (x - largest).exp()).collect();
            let sum_of_exps: f64 = exps.iter().sum();
            Tensor::Vector(exps.iter().map(|e| e / sum_of_exps).collect())
        }
        Tensor::Stack(parts) => Tensor::Stack(parts.iter().map(softmax).collect()),
    }
}

/// Cross-entropy against softmax probabilities: the negative log
/// likelihood of the observed targets under the model.
///
/// The softmax lives inside the loss rather than the network. Composed
/// this way, the gradient with respect to the raw network outputs
/// reduces to `probability - actual` (valid for one-hot or
/// probability-simplex targets), so no separate softmax layer is needed.
pub struct SoftmaxCrossEntropy;

impl Loss for SoftmaxCrossEntropy {
    fn loss(&self, predicted: &Tensor, actual: &Tensor) -> f64 {
        let probabilities = softmax(predicted);

        // log p_i weighted by the target class indicator.
        let likelihoods = probabilities.zip_with(actual, |p, act| (p + EPS).ln() * act);
        -likelihoods.sum()
    }

    fn gradient(&self, predicted: &Tensor, actual: &Tensor) -> Tensor {
        softmax(predicted).zip_with(actual, |p, act| p - act)
    }
}
