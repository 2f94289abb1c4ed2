pub mod trainer;

pub use trainer::{accuracy, argmax, evaluate, train_epoch};
