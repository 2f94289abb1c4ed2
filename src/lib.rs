pub mod tensor;
pub mod layers;
pub mod loss;
pub mod optim;
pub mod persist;
pub mod train;

// Convenience re-exports
pub use tensor::tensor::Tensor;
pub use tensor::init::InitScheme;
pub use layers::layer::Layer;
pub use layers::linear::Linear;
pub use layers::activations::{Relu, Sigmoid, Tanh};
pub use layers::dropout::Dropout;
pub use layers::sequential::Sequential;
pub use loss::loss::Loss;
pub use loss::sse::SseLoss;
pub use loss::cross_entropy::SoftmaxCrossEntropy;
pub use optim::optimizer::Optimizer;
pub use optim::gradient_descent::GradientDescent;
pub use optim::momentum::Momentum;
pub use persist::weights::{load_weights, save_weights};
pub use train::trainer::train_epoch;
