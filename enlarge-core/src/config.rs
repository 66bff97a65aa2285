/// Parameters of an enlarge transform.
///
/// Only the target output size is a model parameter; `parallel` selects how
/// the `(batch, group)` slabs are scheduled and never changes the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnlargeConfig {
    /// Side length `S` of the square output feature map.
    pub target_size: usize,
    /// Fan the independent `(batch, group)` slabs out over the rayon pool.
    pub parallel: bool,
}

impl EnlargeConfig {
    /// Sequential configuration for a target output size.
    pub fn new(target_size: usize) -> Self {
        EnlargeConfig {
            target_size,
            parallel: false,
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
