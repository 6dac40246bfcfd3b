//! Row-major index arithmetic for flattened N-dimensional arrays.
//!
//! All arrays in this crate store their data as a contiguous buffer in
//! row-major (C-contiguous) order: the rightmost axis varies fastest.
//! These helpers convert between flat offsets and per-axis multi-indices
//! using explicit stride arithmetic.

/// Total number of elements implied by a shape (product of axis sizes).
pub fn total_size(shape: &[usize]) -> usize {
    shape.iter().product()
}

/// Convert a flat offset into per-axis indices for the given shape.
///
/// Inverse of [`multi_to_flat`] for every `flat < total_size(shape)`.
pub fn flat_to_multi(shape: &[usize], mut flat: usize) -> Vec<usize> {
    let mut multi = vec![0usize; shape.len()];
    for i in (0..shape.len()).rev() {
        multi[i] = flat % shape[i];
        flat /= shape[i];
    }
    multi
}

/// Convert per-axis indices into a flat offset for the given shape.
///
/// Strides are accumulated from the rightmost axis inward.
pub fn multi_to_flat(shape: &[usize], multi: &[usize]) -> usize {
    let mut flat = 0;
    let mut stride = 1;
    for i in (0..shape.len()).rev() {
        flat += multi[i] * stride;
        stride *= shape[i];
    }
    flat
}
