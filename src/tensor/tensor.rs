use serde::{Deserialize, Serialize};

/// An n-dimensional numeric array stored as nested vectors.
///
/// Rank 1 is a flat `Vector` of values; rank 2 and up is a `Stack` of
/// sub-tensors. Rank 0 is not representable. Shape is derived
/// structurally by probing the first element at each level, so tensors
/// are assumed non-empty and non-jagged at every level; neither is
/// checked. Serializes as plain nested JSON arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Tensor {
    Vector(Vec<f64>),
    Stack(Vec<Tensor>),
}

impl Tensor {
    /// Sizes along each nesting level, outermost first.
    pub fn shape(&self) -> Vec<usize> {
        let mut sizes = Vec::new();
        let mut tensor = self;
        loop {
            match tensor {
                Tensor::Vector(values) => {
                    sizes.push(values.len());
                    return sizes;
                }
                Tensor::Stack(parts) => {
                    sizes.push(parts.len());
                    tensor = &parts[0];
                }
            }
        }
    }

    /// True iff this tensor is rank 1.
    pub fn is_vector(&self) -> bool {
        matches!(self, Tensor::Vector(_))
    }

    /// Sum of every leaf value.
    pub fn sum(&self) -> f64 {
        match self {
            Tensor::Vector(values) => values.iter().sum(),
            Tensor::Stack(parts) => parts.iter().map(Tensor::sum).sum(),
        }
    }

    /// Applies `f` to every leaf, preserving structure.
    pub fn map<F>(&self, mut f: F) -> Tensor
    where
        F: FnMut(f64) -> f64,
    {
        self.map_impl(&mut f)
    }

    fn map_impl<F>(&self, f: &mut F) -> Tensor
    where
        F: FnMut(f64) -> f64,
    {
        match self {
            Tensor::Vector(values) => Tensor::Vector(values.iter().map(|&x| f(x)).collect()),
            Tensor::Stack(parts) => Tensor::Stack(parts.iter().map(|t| t.map_impl(f)).collect()),
        }
    }

    /// Applies `f` to corresponding leaves of two same-shaped tensors.
    /// Panics if the shapes disagree at any level.
    pub fn zip_with<F>(&self, other: &Tensor, mut f: F) -> Tensor
    where
        F: FnMut(f64, f64) -> f64,
    {
        self.zip_with_impl(other, &mut f)
    }

    fn zip_with_impl<F>(&self, other: &Tensor, f: &mut F) -> Tensor
    where
        F: FnMut(f64, f64) -> f64,
    {
        match (self, other) {
            (Tensor::Vector(a), Tensor::Vector(b)) => {
                assert_eq!(a.len(), b.len(), "tensor shapes disagree");
                Tensor::Vector(a.iter().zip(b.iter()).map(|(&x, &y)| f(x, y)).collect())
            }
            (Tensor::Stack(a), Tensor::Stack(b)) => {
                assert_eq!(a.len(), b.len(), "tensor shapes disagree");
                Tensor::Stack(
                    a.iter()
                        .zip(b.iter())
                        .map(|(x, y)| x.zip_with_impl(y, f))
                        .collect(),
                )
            }
            _ => panic!("tensor ranks disagree"),
        }
    }

    /// Same shape, every leaf 0.0.
    pub fn zeros_like(&self) -> Tensor {
        self.map(|_| 0.0)
    }

    /// Leaf values of a rank-1 tensor. Panics on higher ranks.
    pub fn as_vector(&self) -> &[f64] {
        match self {
            Tensor::Vector(values) => values,
            Tensor::Stack(_) => panic!("expected a rank-1 tensor"),
        }
    }

    /// Sub-tensors of a rank-2-or-higher tensor. Panics on rank 1.
    pub fn as_stack(&self) -> &[Tensor] {
        match self {
            Tensor::Stack(parts) => parts,
            Tensor::Vector(_) => panic!("expected a tensor of rank 2 or higher"),
        }
    }
}

impl From<Vec<f64>> for Tensor {
    fn from(values: Vec<f64>) -> Tensor {
        Tensor::Vector(values)
    }
}

impl From<Vec<Vec<f64>>> for Tensor {
    fn from(rows: Vec<Vec<f64>>) -> Tensor {
        Tensor::Stack(rows.into_iter().map(Tensor::Vector).collect())
    }
}
