//! Slab kernels for the enlarge transform.
//!
//! The buffers are cut into one job per `(batch, group)` pair with safe
//! `split_at`/`split_at_mut`. A forward job reads the contiguous channel range
//! of group `n` in batch `m` and writes one `S x S` output plane; a backward job
//! does the opposite. Jobs never share memory, so they can run on any thread.

use super::geometry::EnlargeGeometry;
use crate::ops::traits::FloatElement;
use log::trace;
use rayon::prelude::*;

/// One `(batch, group)` job: read `src`, write every element of `dst`.
struct Slab<'a, T> {
    group: usize,
    src: &'a [T],
    dst: &'a mut [T],
}

/// Pairs each input group slab with its output plane.
fn forward_slabs<'a, T>(
    geometry: &EnlargeGeometry,
    input: &'a [T],
    output: &'a mut [T],
) -> Vec<Slab<'a, T>> {
    let mut slabs = Vec::with_capacity(geometry.input.batch * geometry.group);
    let mut src_rest = input;
    let mut dst_rest = output;
    for _ in 0..geometry.input.batch {
        for n in 0..geometry.group {
            let (src, rest) = src_rest.split_at(geometry.channels_in_group(n) * geometry.in_plane());
            src_rest = rest;
            let (dst, rest) = std::mem::take(&mut dst_rest).split_at_mut(geometry.out_plane());
            dst_rest = rest;
            slabs.push(Slab { group: n, src, dst });
        }
    }
    slabs
}

/// Pairs each output-gradient plane with its input-gradient group slab.
fn backward_slabs<'a, T>(
    geometry: &EnlargeGeometry,
    grad_output: &'a [T],
    grad_input: &'a mut [T],
) -> Vec<Slab<'a, T>> {
    let mut slabs = Vec::with_capacity(geometry.input.batch * geometry.group);
    let mut src_rest = grad_output;
    let mut dst_rest = grad_input;
    for _ in 0..geometry.input.batch {
        for n in 0..geometry.group {
            let (src, rest) = src_rest.split_at(geometry.out_plane());
            src_rest = rest;
            let (dst, rest) = std::mem::take(&mut dst_rest)
                .split_at_mut(geometry.channels_in_group(n) * geometry.in_plane());
            dst_rest = rest;
            slabs.push(Slab { group: n, src, dst });
        }
    }
    slabs
}

fn dispatch<'a, T, F>(slabs: Vec<Slab<'a, T>>, parallel: bool, kernel: F)
where
    T: FloatElement,
    F: Fn(Slab<'a, T>) + Send + Sync,
{
    if parallel {
        slabs.into_par_iter().for_each(kernel);
    } else {
        slabs.into_iter().for_each(kernel);
    }
}

/// Block slot of the remainder group that holds the average, if `group` has one.
fn averaged_slot(geometry: &EnlargeGeometry, group: usize) -> Option<usize> {
    if geometry.is_averaged_group(group) {
        Some(geometry.block() - 1)
    } else {
        None
    }
}

fn forward_slab<T: FloatElement>(geometry: &EnlargeGeometry, slab: Slab<'_, T>) {
    let Slab { group, src, dst } = slab;
    let scale = geometry.scale;
    let size = geometry.target_size;
    let width = geometry.input.width;
    let plane = geometry.in_plane();
    let slot = averaged_slot(geometry, group);
    let terms = geometry.averaged_terms();
    let count = T::from_count(terms);

    for h in 0..size {
        for w in 0..size {
            let local = (h % scale) * scale + w % scale;
            let cell = (h / scale) * width + w / scale;
            dst[h * size + w] = if slot == Some(local) {
                let mut sum = T::zero();
                for i in 0..terms {
                    sum += src[(local + i) * plane + cell];
                }
                sum / count
            } else {
                src[local * plane + cell]
            };
        }
    }
}

fn backward_slab<T: FloatElement>(geometry: &EnlargeGeometry, slab: Slab<'_, T>) {
    let Slab { group, src, dst } = slab;
    let scale = geometry.scale;
    let size = geometry.target_size;
    let width = geometry.input.width;
    let plane = geometry.in_plane();
    let slot = averaged_slot(geometry, group);
    let terms = geometry.averaged_terms();
    let count = T::from_count(terms);

    for h in 0..size {
        for w in 0..size {
            let local = (h % scale) * scale + w % scale;
            let cell = (h / scale) * width + w / scale;
            let grad = src[h * size + w];
            if slot == Some(local) {
                let share = grad / count;
                for i in 0..terms {
                    dst[(local + i) * plane + cell] = share;
                }
            } else {
                dst[local * plane + cell] = grad;
            }
        }
    }
}

/// Writes the enlarged view of `input` into `output`.
///
/// Both slices must hold exactly `geometry.input.numel()` and
/// `geometry.output_shape().numel()` elements.
pub(crate) fn forward<T: FloatElement>(
    geometry: &EnlargeGeometry,
    input: &[T],
    output: &mut [T],
    parallel: bool,
) {
    let slabs = forward_slabs(geometry, input, output);
    trace!("Enlarge forward: {} slabs (parallel: {})", slabs.len(), parallel);
    dispatch(slabs, parallel, |slab| forward_slab(geometry, slab));
}

/// Writes the input-space gradient of `grad_output` into `grad_input`.
/// Every element of `grad_input` is written exactly once.
pub(crate) fn backward<T: FloatElement>(
    geometry: &EnlargeGeometry,
    grad_output: &[T],
    grad_input: &mut [T],
    parallel: bool,
) {
    let slabs = backward_slabs(geometry, grad_output, grad_input);
    trace!("Enlarge backward: {} slabs (parallel: {})", slabs.len(), parallel);
    dispatch(slabs, parallel, |slab| backward_slab(geometry, slab));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tensor::Nchw;

    #[test]
    fn test_slabs_partition_input_exactly() {
        let geometry = EnlargeGeometry::new(Nchw::new(2, 11, 3, 3), 6).unwrap();
        let input = vec![0.0f32; geometry.input.numel()];
        let mut output = vec![0.0f32; geometry.output_shape().numel()];
        let slabs = forward_slabs(&geometry, &input, &mut output);

        assert_eq!(slabs.len(), 4);
        let read: usize = slabs.iter().map(|s| s.src.len()).sum();
        let written: usize = slabs.iter().map(|s| s.dst.len()).sum();
        assert_eq!(read, input.len());
        assert_eq!(written, 2 * 2 * 36);
        assert_eq!(slabs[0].src.len(), 4 * 9);
        assert_eq!(slabs[1].src.len(), 7 * 9);
        assert_eq!(slabs.iter().map(|s| s.group).collect::<Vec<_>>(), vec![0, 1, 0, 1]);
    }

    #[test]
    fn test_backward_writes_every_input_slot() {
        let geometry = EnlargeGeometry::new(Nchw::new(1, 7, 2, 2), 4).unwrap();
        let size = geometry.target_size;
        let grad_output: Vec<f64> = (0..geometry.output_shape().numel())
            .map(|i| i as f64)
            .collect();
        let mut grad_input = vec![f64::NAN; geometry.input.numel()];
        backward(&geometry, &grad_output, &mut grad_input, false);

        // Distinct upstream values: a missed slot stays NaN and a slot written
        // from the wrong output position holds the wrong value.
        let terms = geometry.averaged_terms() as f64;
        let plane = geometry.in_plane();
        let width = geometry.input.width;
        for (idx, &v) in grad_input.iter().enumerate() {
            let (channel, cell) = (idx / plane, idx % plane);
            let local = channel.min(geometry.block() - 1);
            let h = (cell / width) * geometry.scale + local / geometry.scale;
            let w = (cell % width) * geometry.scale + local % geometry.scale;
            let upstream = grad_output[h * size + w];
            let expected = if channel >= geometry.block() - 1 {
                upstream / terms
            } else {
                upstream
            };
            assert!(!v.is_nan(), "slot {idx} never written");
            assert_eq!(v, expected, "slot {idx}");
        }
    }
}
