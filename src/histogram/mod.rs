//! Histogram Builder: Discrete Probability Estimation
//!
//! Discretizes a matrix of continuous samples into a smoothed, normalized
//! N-dimensional joint probability array. Each variable gets equal-width
//! bins over its observed finite range; a small additive smoothing term
//! keeps every cell strictly positive, which the safe-log convention in
//! the entropy layer relies on.

mod nd_histogram;

pub use nd_histogram::{NdHistogram, MAX_BINS, MIN_BINS};
