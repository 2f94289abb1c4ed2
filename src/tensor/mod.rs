pub mod tensor;
pub mod init;

pub use tensor::Tensor;
pub use init::{random_normal, random_tensor, random_uniform, InitScheme};
