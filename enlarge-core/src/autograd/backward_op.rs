use crate::error::EnlargeError;
use crate::tensor::Tensor;
use std::fmt::Debug;

/// Defines the interface for the backward pass of a differentiable tensor operation.
///
/// An implementation captures whatever the forward pass bound (shapes, derived
/// parameters) and maps the gradient of the operation's output to the gradients
/// of its inputs, in the order the inputs were given to the forward pass.
///
/// The `Send + Sync` bounds let a backward node be shared with the worker
/// threads of a training loop.
pub trait BackwardOp<T>: Debug + Send + Sync {
    /// Computes `dL/dInput_i` for each input from `dL/dOutput`.
    ///
    /// # Arguments
    /// * `grad_output`: gradient flowing into the output node, with the same
    ///   shape as the forward output.
    ///
    /// # Returns
    /// One gradient tensor per forward input, each shaped like its input.
    fn backward(&self, grad_output: &Tensor<T>) -> Result<Vec<Tensor<T>>, EnlargeError>;
}
