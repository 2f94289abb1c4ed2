use std::f64::consts::PI;

use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::tensor::tensor::Tensor;

/// Weight-initialization scheme for layers with trainable parameters.
///
/// - `Uniform`: each value drawn from U(0, 1)
/// - `Normal`: each value drawn from the standard normal
/// - `Xavier`: zero-mean normal with variance 2 / (fan_in + fan_out),
///   which keeps activation and gradient magnitudes roughly stable
///   across layers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitScheme {
    Uniform,
    Normal,
    Xavier,
}

impl InitScheme {
    /// Resolves a scheme from its configuration name.
    ///
    /// # Panics
    /// Panics on a name other than `uniform`, `normal` or `xavier`.
    pub fn from_name(name: &str) -> InitScheme {
        match name {
            "uniform" => InitScheme::Uniform,
            "normal" => InitScheme::Normal,
            "xavier" => InitScheme::Xavier,
            _ => panic!("unknown init scheme: {name}"),
        }
    }
}

/// Samples a single value from N(0, 1) using the Box-Muller transform.
/// Both u1 and u2 must be uniform on (0, 1].
fn sample_standard_normal(rng: &mut StdRng) -> f64 {
    // Draw two independent uniform samples in (0, 1] to avoid log(0).
    let u1: f64 = 1.0 - rng.gen::<f64>();
    let u2: f64 = 1.0 - rng.gen::<f64>();
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}

/// Tensor of shape `dims` with every leaf drawn from U(0, 1).
pub fn random_uniform(dims: &[usize], rng: &mut StdRng) -> Tensor {
    if dims.len() == 1 {
        Tensor::Vector((0..dims[0]).map(|_| rng.gen::<f64>()).collect())
    } else {
        Tensor::Stack((0..dims[0]).map(|_| random_uniform(&dims[1..], rng)).collect())
    }
}

/// Tensor of shape `dims` with every leaf drawn from N(mean, std_dev²).
pub fn random_normal(dims: &[usize], mean: f64, std_dev: f64, rng: &mut StdRng) -> Tensor {
    if dims.len() == 1 {
        Tensor::Vector(
            (0..dims[0])
                .map(|_| mean + std_dev * sample_standard_normal(rng))
                .collect(),
        )
    } else {
        Tensor::Stack(
            (0..dims[0])
                .map(|_| random_normal(&dims[1..], mean, std_dev, rng))
                .collect(),
        )
    }
}

/// Tensor of shape `dims` drawn according to `init`.
///
/// Xavier uses variance `dims.len() / sum(dims)`, which is
/// 2 / (fan_in + fan_out) for a rank-2 weight matrix.
pub fn random_tensor(dims: &[usize], init: InitScheme, rng: &mut StdRng) -> Tensor {
    match init {
        InitScheme::Uniform => random_uniform(dims, rng),
        InitScheme::Normal => random_normal(dims, 0.0, 1.0, rng),
        InitScheme::Xavier => {
            let variance = dims.len() as f64 / dims.iter().sum::<usize>() as f64;
            random_normal(dims, 0.0, variance.sqrt(), rng)
        }
    }
}
