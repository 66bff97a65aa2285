// src/tensor/mod.rs

use crate::error::EnlargeError;
use crate::ops::traits::FloatElement;

pub mod create;
pub mod shape;
pub mod utils;

pub use create::{arange, full, rand, randn, zeros, zeros_like};
pub use shape::Nchw;

use utils::{calculate_strides, checked_numel};

/// A dense, owned, row-major tensor.
///
/// The buffer is always contiguous (width fastest-varying for NCHW data), so a
/// multi-dimensional index maps to `sum(index[i] * strides[i])`. Input and
/// output tensors of the enlarge transform are always distinct `Tensor`s; the
/// transform never aliases them.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor<T> {
    data: Vec<T>,
    shape: Vec<usize>,
    strides: Vec<usize>,
}

impl<T: FloatElement> Tensor<T> {
    /// Creates a new tensor from row-major data and a shape.
    ///
    /// # Errors
    /// Returns `EnlargeError::TensorCreationError` if `data.len()` does not match
    /// the number of elements described by `shape`.
    pub fn new(data: Vec<T>, shape: Vec<usize>) -> Result<Self, EnlargeError> {
        if checked_numel(&shape) != Some(data.len()) {
            return Err(EnlargeError::TensorCreationError {
                data_len: data.len(),
                shape,
            });
        }
        let strides = calculate_strides(&shape);
        Ok(Tensor {
            data,
            shape,
            strides,
        })
    }

    /// Returns the shape of the tensor.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Returns the contiguous strides of the tensor.
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Returns the number of elements in the tensor.
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// Read-only view of the flat buffer.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consumes the tensor and returns its flat buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Interprets the shape as `(batch, channels, height, width)`.
    pub fn nchw(&self) -> Result<Nchw, EnlargeError> {
        Nchw::from_slice(&self.shape)
    }

    /// Linear offset of a multi-dimensional index.
    ///
    /// # Errors
    /// `RankMismatch` if the index rank differs from the tensor rank,
    /// `IndexOutOfBounds` if any coordinate exceeds its dimension.
    pub fn offset(&self, indices: &[usize]) -> Result<usize, EnlargeError> {
        if indices.len() != self.shape.len() {
            return Err(EnlargeError::RankMismatch {
                expected: self.shape.len(),
                actual: indices.len(),
            });
        }
        let mut offset = 0;
        for ((&idx, &dim), &stride) in indices.iter().zip(&self.shape).zip(&self.strides) {
            if idx >= dim {
                return Err(EnlargeError::IndexOutOfBounds {
                    index: indices.to_vec(),
                    shape: self.shape.clone(),
                });
            }
            offset += idx * stride;
        }
        Ok(offset)
    }

    /// Returns the element at a multi-dimensional index.
    pub fn get(&self, indices: &[usize]) -> Result<T, EnlargeError> {
        let offset = self.offset(indices)?;
        Ok(self.data[offset])
    }

    /// Inner product `<self, other>` accumulated in `f64`.
    pub fn dot(&self, other: &Tensor<T>) -> Result<f64, EnlargeError> {
        if self.shape != other.shape {
            return Err(EnlargeError::ShapeMismatch {
                expected: self.shape.clone(),
                actual: other.shape.clone(),
                operation: "dot".to_string(),
            });
        }
        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| a.as_f64() * b.as_f64())
            .sum())
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
