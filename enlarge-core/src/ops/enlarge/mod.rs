//! Depth-to-space "enlarge" transform and its adjoint.
//!
//! Output channel `n` at position `(h, w)` reads input channel
//! `n * scale² + (h % scale) * scale + (w % scale)` at `(h / scale, w / scale)`.
//! When the channel count leaves `extra` leftover channels, the last output
//! channel's final block slot is the mean of `extra + 1` input channels, and
//! the backward pass hands each of them `1 / (extra + 1)` of the gradient.

pub mod geometry;
mod kernels;

pub use geometry::{configure, EnlargeGeometry};

use crate::autograd::BackwardOp;
use crate::config::EnlargeConfig;
use crate::error::EnlargeError;
use crate::ops::traits::FloatElement;
use crate::tensor::{self, Tensor};

// --- Backward Operation Structure ---
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnlargeBackward {
    geometry: EnlargeGeometry,
    parallel: bool,
}

impl EnlargeBackward {
    pub fn new(geometry: EnlargeGeometry, parallel: bool) -> Self {
        EnlargeBackward { geometry, parallel }
    }

    pub fn geometry(&self) -> &EnlargeGeometry {
        &self.geometry
    }
}

impl<T: FloatElement> BackwardOp<T> for EnlargeBackward {
    fn backward(&self, grad_output: &Tensor<T>) -> Result<Vec<Tensor<T>>, EnlargeError> {
        let grad_input = enlarge_backward_op(grad_output, &self.geometry, self.parallel)?;
        Ok(vec![grad_input])
    }
}

fn check_shape(actual: &[usize], expected: Vec<usize>, operation: &str) -> Result<(), EnlargeError> {
    if actual != expected.as_slice() {
        return Err(EnlargeError::ShapeMismatch {
            expected,
            actual: actual.to_vec(),
            operation: operation.to_string(),
        });
    }
    Ok(())
}

// --- Forward Operation ---

/// Binds `input`'s shape to `config` and applies the forward transform.
pub fn enlarge_op<T: FloatElement>(
    input: &Tensor<T>,
    config: &EnlargeConfig,
) -> Result<Tensor<T>, EnlargeError> {
    let geometry = EnlargeGeometry::new(input.nchw()?, config.target_size)?;
    enlarge_forward_op(input, &geometry, config.parallel)
}

/// Applies the forward transform for an already validated geometry.
///
/// # Errors
/// `ShapeMismatch` if `input` is not shaped like `geometry.input`.
pub fn enlarge_forward_op<T: FloatElement>(
    input: &Tensor<T>,
    geometry: &EnlargeGeometry,
    parallel: bool,
) -> Result<Tensor<T>, EnlargeError> {
    check_shape(input.shape(), geometry.input.to_vec(), "enlarge_forward_op")?;
    let mut output = tensor::zeros(&geometry.output_shape().to_vec())?;
    kernels::forward(geometry, input.data(), output.data_mut(), parallel);
    Ok(output)
}

// --- Backward Operation ---

/// Maps an output-space gradient back to the input shape of `geometry`.
///
/// # Errors
/// `ShapeMismatch` if `grad_output` is not shaped like the forward output.
pub fn enlarge_backward_op<T: FloatElement>(
    grad_output: &Tensor<T>,
    geometry: &EnlargeGeometry,
    parallel: bool,
) -> Result<Tensor<T>, EnlargeError> {
    check_shape(
        grad_output.shape(),
        geometry.output_shape().to_vec(),
        "enlarge_backward_op",
    )?;
    let mut grad_input = tensor::zeros(&geometry.input.to_vec())?;
    kernels::backward(geometry, grad_output.data(), grad_input.data_mut(), parallel);
    Ok(grad_input)
}

#[cfg(test)]
#[path = "enlarge_test.rs"]
mod tests;
