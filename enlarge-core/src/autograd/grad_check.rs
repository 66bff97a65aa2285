use crate::autograd::BackwardOp;
use crate::error::EnlargeError;
use crate::ops::traits::FloatElement;
use crate::tensor::Tensor;
use log::debug;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed at element index {element_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        element_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Adjoint check failed: <F(x), dy> = {forward_dot:?} but <x, B(dy)> = {backward_dot:?}. Difference: {difference:?}")]
    AdjointMismatch {
        forward_dot: f64,
        backward_dot: f64,
        difference: f64,
    },

    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(EnlargeError),

    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(EnlargeError),

    #[error("Backward pass returned {actual} gradients, expected {expected}")]
    GradientCountMismatch { expected: usize, actual: usize },

    #[error("Tensor error during intermediate calculation: {0}")]
    TensorError(EnlargeError),

    #[error("Numerical gradient is NaN or infinite for element {element_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        element_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for element {element_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { element_index: usize, value: f64 },
}

impl From<EnlargeError> for GradCheckError {
    fn from(err: EnlargeError) -> Self {
        GradCheckError::TensorError(err)
    }
}

/// Runs the backward op and returns the gradient of its single input.
fn single_input_grad<T, B>(backward_op: &B, grad_output: &Tensor<T>) -> Result<Tensor<T>, GradCheckError>
where
    T: FloatElement,
    B: BackwardOp<T> + ?Sized,
{
    let mut grads = backward_op
        .backward(grad_output)
        .map_err(GradCheckError::BackwardPassError)?;
    if grads.len() != 1 {
        return Err(GradCheckError::GradientCountMismatch {
            expected: 1,
            actual: grads.len(),
        });
    }
    Ok(grads.remove(0))
}

/// Checks the gradient-check law `<F(x), dy> == <x, B(dy)>` for a linear `F`.
///
/// Inner products are accumulated in `f64`; `tolerance` is relative to the
/// larger of the two products (or absolute when both are below 1).
pub fn check_adjoint<T, F, B>(
    func: F,
    backward_op: &B,
    input: &Tensor<T>,
    grad_output: &Tensor<T>,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    T: FloatElement,
    F: Fn(&Tensor<T>) -> Result<Tensor<T>, EnlargeError>,
    B: BackwardOp<T> + ?Sized,
{
    let output = func(input).map_err(GradCheckError::ForwardPassError)?;
    let forward_dot = output.dot(grad_output)?;

    let grad_input = single_input_grad(backward_op, grad_output)?;
    let backward_dot = input.dot(&grad_input)?;

    let difference = (forward_dot - backward_dot).abs();
    let scale = forward_dot.abs().max(backward_dot.abs()).max(1.0);
    debug!(
        "check_adjoint: forward {} backward {} difference {}",
        forward_dot, backward_dot, difference
    );
    if difference > tolerance * scale {
        return Err(GradCheckError::AdjointMismatch {
            forward_dot,
            backward_dot,
            difference,
        });
    }
    Ok(())
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences of the scalar loss `L(x) = <F(x), grad_output>`.
pub fn check_grad<T, F, B>(
    func: F,
    backward_op: &B,
    input: &Tensor<T>,
    grad_output: &Tensor<T>,
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    T: FloatElement,
    F: Fn(&Tensor<T>) -> Result<Tensor<T>, EnlargeError>,
    B: BackwardOp<T> + ?Sized,
{
    let analytical = single_input_grad(backward_op, grad_output)?;
    if analytical.shape() != input.shape() {
        return Err(GradCheckError::TensorError(EnlargeError::ShapeMismatch {
            expected: input.shape().to_vec(),
            actual: analytical.shape().to_vec(),
            operation: "check_grad (analytical gradient)".to_string(),
        }));
    }

    let loss_at = |data: Vec<T>| -> Result<f64, GradCheckError> {
        let perturbed = Tensor::new(data, input.shape().to_vec())?;
        let output = func(&perturbed).map_err(GradCheckError::ForwardPassError)?;
        Ok(output.dot(grad_output)?)
    };

    for element_index in 0..input.numel() {
        let original = input.data()[element_index].as_f64();

        let mut data_plus = input.data().to_vec();
        data_plus[element_index] = T::from_f64(original + epsilon);
        let loss_plus = loss_at(data_plus)?;

        let mut data_minus = input.data().to_vec();
        data_minus[element_index] = T::from_f64(original - epsilon);
        let loss_minus = loss_at(data_minus)?;

        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        let analytical_grad = analytical.data()[element_index].as_f64();

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                element_index,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                element_index,
                value: analytical_grad,
            });
        }

        let difference = (analytical_grad - numerical_grad).abs();
        if difference > tolerance && difference / (analytical_grad.abs() + epsilon) > tolerance {
            return Err(GradCheckError::GradientMismatch {
                element_index,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
    }

    Ok(())
}
