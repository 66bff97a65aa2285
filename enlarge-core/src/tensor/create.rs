// src/tensor/create.rs

use crate::error::EnlargeError;
use crate::ops::traits::FloatElement;
use crate::tensor::utils::checked_numel;
use crate::tensor::Tensor;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

fn numel_of(shape: &[usize]) -> Result<usize, EnlargeError> {
    checked_numel(shape).ok_or_else(|| EnlargeError::TensorCreationError {
        data_len: 0,
        shape: shape.to_vec(),
    })
}

/// Creates a new tensor filled with zeros with the specified shape.
pub fn zeros<T: FloatElement>(shape: &[usize]) -> Result<Tensor<T>, EnlargeError> {
    full(shape, T::zero())
}

/// Creates a zero tensor with the same shape as `tensor`.
pub fn zeros_like<T: FloatElement>(tensor: &Tensor<T>) -> Result<Tensor<T>, EnlargeError> {
    zeros(tensor.shape())
}

/// Creates a new tensor filled with `value` with the specified shape.
pub fn full<T: FloatElement>(shape: &[usize], value: T) -> Result<Tensor<T>, EnlargeError> {
    let numel = numel_of(shape)?;
    Tensor::new(vec![value; numel], shape.to_vec())
}

/// Creates a tensor holding `0, 1, 2, ...` in row-major order.
/// Handy for tracing where each element lands after a rearrangement.
pub fn arange<T: FloatElement>(shape: &[usize]) -> Result<Tensor<T>, EnlargeError> {
    let numel = numel_of(shape)?;
    let data = (0..numel).map(T::from_count).collect();
    Tensor::new(data, shape.to_vec())
}

/// Uniform samples in `[0, 1)` from a seeded generator.
pub fn rand<T: FloatElement>(shape: &[usize], seed: u64) -> Result<Tensor<T>, EnlargeError> {
    let numel = numel_of(shape)?;
    let mut rng = StdRng::seed_from_u64(seed);
    let data = (0..numel)
        .map(|_| T::from_f64(rng.gen::<f64>()))
        .collect();
    Tensor::new(data, shape.to_vec())
}

/// Standard normal samples from a seeded generator.
pub fn randn<T: FloatElement>(shape: &[usize], seed: u64) -> Result<Tensor<T>, EnlargeError> {
    let numel = numel_of(shape)?;
    let mut rng = StdRng::seed_from_u64(seed);
    let data = (0..numel)
        .map(|_| {
            let sample: f64 = rng.sample(StandardNormal);
            T::from_f64(sample)
        })
        .collect();
    Tensor::new(data, shape.to_vec())
}

#[cfg(test)]
#[path = "create_test.rs"]
mod tests;
