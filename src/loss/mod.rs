pub mod loss;
pub mod sse;
pub mod cross_entropy;

pub use loss::Loss;
pub use sse::SseLoss;
pub use cross_entropy::{softmax, SoftmaxCrossEntropy};
