//! Depth-to-space "enlarge" transform for 4-D feature maps, with its exact
//! adjoint for gradient-based training.
//!
//! The freestanding surface is [`configure`], [`enlarge_op`] /
//! [`enlarge_forward_op`] and [`enlarge_backward_op`]; [`nn::Enlarge`] wraps
//! them in a layer that caches the derived geometry per input shape.

pub mod autograd;
pub mod config;
pub mod error;
pub mod nn;
pub mod ops;
pub mod tensor;
pub mod utils;

pub use config::EnlargeConfig;
pub use error::EnlargeError;
pub use nn::Enlarge;
pub use ops::enlarge::{configure, EnlargeGeometry};
pub use ops::{enlarge_backward_op, enlarge_forward_op, enlarge_op, EnlargeBackward};
pub use ops::traits::FloatElement;
pub use tensor::{Nchw, Tensor};
// Re-export traits required by public functions/structs
pub use num_traits;
