pub mod weights;

pub use weights::{load_weights, save_weights};
