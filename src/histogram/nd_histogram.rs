//! N-dimensional histogram construction from continuous samples.

use ndarray::Array2;

use crate::entropy::indexing::multi_to_flat;
use crate::error::SurdError;

/// Additive smoothing applied to every bin before normalization so that
/// no probability is ever exactly zero.
const SMOOTHING_FACTOR: f64 = 1e-14;

/// Widening applied to a variable's upper range when min == max, to avoid
/// a zero-width bin.
const DEGENERATE_RANGE_EPS: f64 = 1e-10;

/// Minimum number of bins allowed per variable.
pub const MIN_BINS: usize = 1;

/// Maximum number of bins allowed per variable (memory safety limit).
pub const MAX_BINS: usize = 10_000;

/// N-dimensional histogram estimating a joint probability distribution
/// from continuous samples.
///
/// Each variable is discretized into a fixed number of equal-width bins
/// over its observed range; counts are smoothed and normalized into a
/// flattened row-major probability array. Built once and immutable
/// thereafter; accessors return independent copies.
#[derive(Debug, Clone)]
pub struct NdHistogram {
    /// Flattened probability distribution, row-major.
    probs: Vec<f64>,
    /// Bin count per variable axis.
    shape: Vec<usize>,
}

impl NdHistogram {
    /// Build a histogram from a sample matrix.
    ///
    /// `data` holds one sample per row, one variable per column
    /// (column 0 is conventionally the target). `bins[j]` is the number
    /// of bins for variable `j` and must lie in `[MIN_BINS, MAX_BINS]`.
    ///
    /// Samples containing NaN or infinite values are dropped whole;
    /// per-variable ranges are computed over the finite values only.
    /// Fails if the matrix is empty, bin counts mismatch the variable
    /// count, any variable has no finite value, or every sample is
    /// invalid.
    pub fn from_samples(data: &Array2<f64>, bins: &[usize]) -> Result<Self, SurdError> {
        let n_samples = data.nrows();
        let n_vars = data.ncols();

        if n_samples == 0 {
            return Err(SurdError::EmptyData);
        }
        if n_vars == 0 {
            return Err(SurdError::NoVariables);
        }
        if bins.len() != n_vars {
            return Err(SurdError::BinLengthMismatch {
                bins: bins.len(),
                variables: n_vars,
            });
        }
        for (j, &b) in bins.iter().enumerate() {
            if b < MIN_BINS || b > MAX_BINS {
                return Err(SurdError::BinCountOutOfRange {
                    variable: j,
                    bins: b,
                });
            }
        }

        // Per-variable ranges over finite values only.
        let mut min_vals = vec![f64::INFINITY; n_vars];
        let mut max_vals = vec![f64::NEG_INFINITY; n_vars];
        for sample in data.rows() {
            for (j, &val) in sample.iter().enumerate() {
                if !val.is_finite() {
                    continue;
                }
                if val < min_vals[j] {
                    min_vals[j] = val;
                }
                if val > max_vals[j] {
                    max_vals[j] = val;
                }
            }
        }

        for j in 0..n_vars {
            if !min_vals[j].is_finite() || !max_vals[j].is_finite() {
                return Err(SurdError::NoValidValues { variable: j });
            }
            if min_vals[j] == max_vals[j] {
                max_vals[j] += DEGENERATE_RANGE_EPS;
            }
        }

        let total_bins: usize = bins.iter().product();
        let mut counts = vec![0.0_f64; total_bins];
        let mut bin_indices = vec![0usize; n_vars];
        let mut n_valid = 0usize;

        for sample in data.rows() {
            let mut valid = true;
            for (j, &val) in sample.iter().enumerate() {
                if !val.is_finite() {
                    valid = false;
                    break;
                }
                let normalized = (val - min_vals[j]) / (max_vals[j] - min_vals[j]);
                let idx = (normalized * bins[j] as f64) as usize;
                // Exact upper-boundary values land one past the last bin.
                bin_indices[j] = idx.min(bins[j] - 1);
            }
            if !valid {
                continue;
            }
            counts[multi_to_flat(bins, &bin_indices)] += 1.0;
            n_valid += 1;
        }

        if n_valid == 0 {
            return Err(SurdError::AllSamplesInvalid);
        }

        for c in counts.iter_mut() {
            *c += SMOOTHING_FACTOR;
        }
        let total: f64 = counts.iter().sum();
        let probs: Vec<f64> = counts.iter().map(|&c| c / total).collect();

        Ok(Self {
            probs,
            shape: bins.to_vec(),
        })
    }

    /// Normalized probability distribution, flattened in row-major order.
    ///
    /// Sums to 1 within floating tolerance; no entry is exactly zero.
    /// Returns an independent copy.
    pub fn probabilities(&self) -> Vec<f64> {
        self.probs.clone()
    }

    /// Bin count per variable axis. Returns an independent copy.
    pub fn shape(&self) -> Vec<usize> {
        self.shape.clone()
    }

    /// Total number of bins (product of all axis sizes).
    pub fn size(&self) -> usize {
        self.probs.len()
    }

    /// Number of variable axes.
    pub fn ndims(&self) -> usize {
        self.shape.len()
    }
}
