use thiserror::Error;

/// Custom error type for the enlarge transform.
///
/// Configuration variants are raised when a shape is bound to the transform,
/// before any data is touched. The remaining variants guard the tensor
/// boundary (buffers handed in by the caller).
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum EnlargeError {
    #[error("Target size must be greater than 0, got {target_size}")]
    NonPositiveTargetSize { target_size: usize },

    #[error("Input spatial extent must be non-empty, got {height}x{width}")]
    EmptySpatialExtent { height: usize, width: usize },

    #[error("Target size {target_size} must be a multiple of the input height/width {input_size}")]
    TargetNotMultiple { target_size: usize, input_size: usize },

    #[error("Input feature map must be square, got height {height} and width {width}")]
    NonSquareInput { height: usize, width: usize },

    #[error("Target size {target_size} must be greater than the input height/width {input_size}")]
    TargetNotLarger { target_size: usize, input_size: usize },

    #[error("Input has {channels} channels but one output channel needs at least {block} (scale {scale})")]
    InsufficientChannels {
        channels: usize,
        scale: usize,
        block: usize,
    },

    #[error("Element count of shape {shape:?} overflows usize")]
    ShapeOverflow { shape: Vec<usize> },

    #[error("Rank mismatch: expected {expected}, got {actual}")]
    RankMismatch { expected: usize, actual: usize },

    #[error("Tensor creation error: data length {data_len} does not match shape {shape:?}")]
    TensorCreationError { data_len: usize, shape: Vec<usize> },

    #[error("Shape mismatch: expected {expected:?}, got {actual:?} during operation {operation}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
        operation: String,
    },

    #[error("Index out of bounds: index {index:?} for shape {shape:?}")]
    IndexOutOfBounds {
        index: Vec<usize>,
        shape: Vec<usize>,
    },

    #[error("Operation '{operation}' requires a bound input shape; call configure or forward first")]
    NotConfigured { operation: String },
}

impl EnlargeError {
    /// True for errors raised while binding a shape (fatal to that configuration attempt).
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            EnlargeError::NonPositiveTargetSize { .. }
                | EnlargeError::EmptySpatialExtent { .. }
                | EnlargeError::TargetNotMultiple { .. }
                | EnlargeError::NonSquareInput { .. }
                | EnlargeError::TargetNotLarger { .. }
                | EnlargeError::InsufficientChannels { .. }
                | EnlargeError::ShapeOverflow { .. }
                | EnlargeError::RankMismatch { .. }
        )
    }
}
