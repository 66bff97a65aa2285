use crate::config::EnlargeConfig;
use crate::error::EnlargeError;
use crate::ops::enlarge::{enlarge_backward_op, enlarge_forward_op, EnlargeBackward, EnlargeGeometry};
use crate::ops::traits::FloatElement;
use crate::tensor::{Nchw, Tensor};
use log::debug;

/// Layer that expands spatial resolution by moving channel blocks into space.
///
/// Holds no learnable parameters. The derived geometry is cached per input
/// shape: it is recomputed only when a differently shaped input arrives, and
/// the last successful binding is what `backward` maps gradients through.
#[derive(Debug, Clone)]
pub struct Enlarge {
    config: EnlargeConfig,
    geometry: Option<EnlargeGeometry>,
}

impl Enlarge {
    /// Creates a new Enlarge layer.
    ///
    /// # Errors
    /// `NonPositiveTargetSize` if `config.target_size` is 0.
    pub fn new(config: EnlargeConfig) -> Result<Self, EnlargeError> {
        if config.target_size == 0 {
            return Err(EnlargeError::NonPositiveTargetSize {
                target_size: config.target_size,
            });
        }
        Ok(Enlarge {
            config,
            geometry: None,
        })
    }

    pub fn config(&self) -> &EnlargeConfig {
        &self.config
    }

    /// Geometry of the currently bound input shape, if any.
    pub fn geometry(&self) -> Option<&EnlargeGeometry> {
        self.geometry.as_ref()
    }

    /// Binds an input shape and returns the output shape.
    ///
    /// A failed binding leaves the layer unconfigured.
    pub fn configure(&mut self, input_shape: &[usize]) -> Result<Vec<usize>, EnlargeError> {
        let geometry = self.bind(input_shape)?;
        Ok(geometry.output_shape().to_vec())
    }

    fn bind(&mut self, input_shape: &[usize]) -> Result<EnlargeGeometry, EnlargeError> {
        let bound = Nchw::from_slice(input_shape)
            .and_then(|input| match self.geometry {
                Some(geometry) if geometry.input == input => Ok(geometry),
                _ => EnlargeGeometry::new(input, self.config.target_size),
            });
        match bound {
            Ok(geometry) => {
                self.geometry = Some(geometry);
                Ok(geometry)
            }
            Err(err) => {
                self.geometry = None;
                Err(err)
            }
        }
    }

    /// Enlarges `input`, rebinding first if its shape differs from the bound one.
    pub fn forward<T: FloatElement>(&mut self, input: &Tensor<T>) -> Result<Tensor<T>, EnlargeError> {
        let geometry = self.bind(input.shape())?;
        enlarge_forward_op(input, &geometry, self.config.parallel)
    }

    /// Maps `grad_output` back to the bound input shape.
    ///
    /// Returns `Ok(None)` without reading `grad_output` when the caller does
    /// not need the input gradient.
    ///
    /// # Errors
    /// `NotConfigured` if no shape has been bound yet, `ShapeMismatch` if
    /// `grad_output` is not shaped like the forward output.
    pub fn backward<T: FloatElement>(
        &self,
        grad_output: &Tensor<T>,
        needs_input_grad: bool,
    ) -> Result<Option<Tensor<T>>, EnlargeError> {
        if !needs_input_grad {
            debug!("Enlarge: input gradient not requested, skipping backward");
            return Ok(None);
        }
        let geometry = self.geometry.as_ref().ok_or_else(|| EnlargeError::NotConfigured {
            operation: "Enlarge::backward".to_string(),
        })?;
        enlarge_backward_op(grad_output, geometry, self.config.parallel).map(Some)
    }

    /// Backward node for the bound shape, for callers that keep their own graph.
    pub fn backward_op(&self) -> Result<EnlargeBackward, EnlargeError> {
        self.geometry
            .map(|geometry| EnlargeBackward::new(geometry, self.config.parallel))
            .ok_or_else(|| EnlargeError::NotConfigured {
                operation: "Enlarge::backward_op".to_string(),
            })
    }
}

#[cfg(test)]
#[path = "enlarge_test.rs"]
mod tests;
