use num_traits::{Float, NumAssignOps, NumOps};
use std::fmt::Debug;

/// Floating-point element types the enlarge kernels run on.
///
/// Restricted to IEEE types (`f32`, `f64`). Averages are accumulated in `Self`,
/// so the working precision is the element precision.
pub trait FloatElement:
    Float
    + NumAssignOps
    + NumOps
    + PartialOrd
    + Debug
    + Copy
    + Send
    + Sync
    + 'static
{
    /// Converts a term count (e.g. the number of averaged channels) into `Self`.
    fn from_count(count: usize) -> Self;

    /// Converts from `f64`, rounding to the nearest representable value.
    fn from_f64(value: f64) -> Self;

    /// Widens to `f64` for inner products and gradient checks.
    fn as_f64(self) -> f64;
}

impl FloatElement for f32 {
    fn from_count(count: usize) -> Self {
        count as f32
    }

    fn from_f64(value: f64) -> Self {
        value as f32
    }

    fn as_f64(self) -> f64 {
        self as f64
    }
}

impl FloatElement for f64 {
    fn from_count(count: usize) -> Self {
        count as f64
    }

    fn from_f64(value: f64) -> Self {
        value
    }

    fn as_f64(self) -> f64 {
        self
    }
}
