use crate::error::EnlargeError;
use crate::tensor::utils::checked_numel;
use crate::tensor::Nchw;
use log::debug;

/// Derived parameters of an enlarge transform for one bound input shape.
///
/// `scale = S / h`, `group = C / scale²` output channels and
/// `extra = C % scale²` leftover input channels. When `extra > 0` the last
/// output channel also owns the leftover channels; its final block slot is the
/// mean of `extra + 1` input channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnlargeGeometry {
    pub input: Nchw,
    pub target_size: usize,
    pub scale: usize,
    pub group: usize,
    pub extra: usize,
}

impl EnlargeGeometry {
    /// Validates `input` against `target_size` and derives the block layout.
    ///
    /// # Errors
    /// Returns the configuration error for the first failing invariant, checked
    /// in this order: target size positive, spatial extent non-empty, target a
    /// multiple of the height, square input, target larger than the input,
    /// at least `scale²` channels, input element count fits `usize`.
    pub fn new(input: Nchw, target_size: usize) -> Result<Self, EnlargeError> {
        if target_size == 0 {
            return Err(EnlargeError::NonPositiveTargetSize { target_size });
        }
        let Nchw {
            channels,
            height,
            width,
            ..
        } = input;
        if height == 0 || width == 0 {
            return Err(EnlargeError::EmptySpatialExtent { height, width });
        }
        if target_size % height != 0 {
            return Err(EnlargeError::TargetNotMultiple {
                target_size,
                input_size: height,
            });
        }
        if height != width {
            return Err(EnlargeError::NonSquareInput { height, width });
        }
        if target_size <= height {
            return Err(EnlargeError::TargetNotLarger {
                target_size,
                input_size: height,
            });
        }

        let scale = target_size / height;
        // An overflowing scale² exceeds any channel count.
        let block = scale.checked_mul(scale).unwrap_or(usize::MAX);
        if channels < block {
            return Err(EnlargeError::InsufficientChannels {
                channels,
                scale,
                block,
            });
        }

        let geometry = EnlargeGeometry {
            input,
            target_size,
            scale,
            group: channels / block,
            extra: channels % block,
        };
        // The output holds at most as many elements as the input, so S² and the
        // output element count fit whenever the input's does.
        if checked_numel(&input.to_vec()).is_none() {
            return Err(EnlargeError::ShapeOverflow {
                shape: input.to_vec(),
            });
        }
        debug!(
            "Enlarge: bound input {:?} to target {} (scale {}, group {}, extra {})",
            input.to_vec(),
            target_size,
            geometry.scale,
            geometry.group,
            geometry.extra
        );
        Ok(geometry)
    }

    /// `scale²`: input channels unpacked into one output channel.
    pub fn block(&self) -> usize {
        self.scale * self.scale
    }

    pub fn in_plane(&self) -> usize {
        self.input.plane()
    }

    pub fn out_plane(&self) -> usize {
        self.target_size * self.target_size
    }

    pub fn output_shape(&self) -> Nchw {
        Nchw::new(
            self.input.batch,
            self.group,
            self.target_size,
            self.target_size,
        )
    }

    /// Whether output channel `n` carries the averaged remainder slot.
    pub fn is_averaged_group(&self, n: usize) -> bool {
        self.extra > 0 && n + 1 == self.group
    }

    /// Number of input channels read by output channel `n`.
    pub fn channels_in_group(&self, n: usize) -> usize {
        if self.is_averaged_group(n) {
            self.block() + self.extra
        } else {
            self.block()
        }
    }

    /// Input channels averaged into the last block slot of the remainder group.
    pub fn averaged_terms(&self) -> usize {
        self.extra + 1
    }
}

/// Validates `input_shape` for `target_size` and returns the output shape
/// `[N, C / scale², S, S]`.
pub fn configure(input_shape: &[usize], target_size: usize) -> Result<Vec<usize>, EnlargeError> {
    let input = Nchw::from_slice(input_shape)?;
    let geometry = EnlargeGeometry::new(input, target_size)?;
    Ok(geometry.output_shape().to_vec())
}

#[cfg(test)]
#[path = "geometry_test.rs"]
mod tests;
