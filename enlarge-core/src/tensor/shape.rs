use crate::error::EnlargeError;

/// Extents of a 4-D feature map tensor: `(batch, channels, height, width)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Nchw {
    pub batch: usize,
    pub channels: usize,
    pub height: usize,
    pub width: usize,
}

impl Nchw {
    pub fn new(batch: usize, channels: usize, height: usize, width: usize) -> Self {
        Nchw {
            batch,
            channels,
            height,
            width,
        }
    }

    /// Builds the descriptor from a shape slice.
    ///
    /// # Errors
    /// Returns `EnlargeError::RankMismatch` unless `shape` has exactly four dimensions.
    pub fn from_slice(shape: &[usize]) -> Result<Self, EnlargeError> {
        match *shape {
            [batch, channels, height, width] => Ok(Nchw::new(batch, channels, height, width)),
            _ => Err(EnlargeError::RankMismatch {
                expected: 4,
                actual: shape.len(),
            }),
        }
    }

    /// Elements in one `height x width` map.
    pub fn plane(&self) -> usize {
        self.height * self.width
    }

    pub fn numel(&self) -> usize {
        self.batch * self.channels * self.plane()
    }

    pub fn to_vec(&self) -> Vec<usize> {
        vec![self.batch, self.channels, self.height, self.width]
    }
}
