pub mod layer;
pub mod linear;
pub mod activations;
pub mod dropout;
pub mod sequential;

pub use layer::Layer;
pub use linear::Linear;
pub use activations::{Relu, Sigmoid, Tanh};
pub use dropout::Dropout;
pub use sequential::Sequential;
