use crate::error::{Error, Result};

/// N-dimensional tensor backed by a flat `Vec<f32>`.
///
/// This is the value that flows between layers and the storage for layer
/// parameters and gradients.  It deliberately carries no arithmetic beyond
/// what gradient bookkeeping needs; numeric work belongs to the layers.
#[derive(Clone, Debug, PartialEq)]
pub struct Tensor {
    /// Tensor elements in row-major order.
    pub data: Vec<f32>,
    /// Sizes for each dimension.
    pub shape: Vec<usize>,
}

impl Tensor {
    /// Create a new tensor from raw parts.  The number of elements in `data`
    /// must match the product of the requested `shape`.
    pub fn new(data: Vec<f32>, shape: Vec<usize>) -> Result<Self> {
        let elements = shape.iter().product::<usize>();
        if data.len() != elements {
            return Err(Error::ShapeDataMismatch {
                shape,
                elements,
                len: data.len(),
            });
        }
        Ok(Tensor { data, shape })
    }

    /// Single element tensor of shape `[1]`.
    pub fn scalar(value: f32) -> Self {
        Tensor {
            data: vec![value],
            shape: vec![1],
        }
    }

    /// Create a tensor of zeros with the given shape.
    pub fn zeros(shape: Vec<usize>) -> Self {
        let len: usize = shape.iter().product();
        Tensor {
            data: vec![0.0; len],
            shape,
        }
    }

    /// Create a tensor of zeros matching the shape of `other`.
    pub fn zeros_like(other: &Tensor) -> Self {
        Tensor {
            data: vec![0.0; other.data.len()],
            shape: other.shape.clone(),
        }
    }

    /// Create a tensor of ones matching the shape of `other`.
    pub fn ones_like(other: &Tensor) -> Self {
        Tensor {
            data: vec![1.0; other.data.len()],
            shape: other.shape.clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Overwrite every element with `value`, keeping the shape.
    pub fn fill(&mut self, value: f32) {
        self.data.iter_mut().for_each(|v| *v = value);
    }

    /// Reset every element to zero in place.
    pub fn zero(&mut self) {
        self.fill(0.0);
    }

    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&v| v == 0.0)
    }

    /// Elementwise `self += other`.  Both tensors must have the same shape.
    pub fn add_assign(&mut self, other: &Tensor) -> Result<()> {
        if self.shape != other.shape {
            return Err(Error::ShapeMismatch {
                expected: self.shape.clone(),
                actual: other.shape.clone(),
            });
        }
        for (a, b) in self.data.iter_mut().zip(other.data.iter()) {
            *a += b;
        }
        Ok(())
    }
}
