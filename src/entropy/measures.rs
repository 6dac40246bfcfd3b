//! Shannon entropy and mutual-information measures over discrete
//! joint distributions.
//!
//! All measures operate on a [`ProbArray`] (flattened probability data
//! plus shape) and marginalize over axis subsets before reducing, so a
//! single joint distribution supports every entropy-family quantity the
//! decomposition needs. Everything here is a pure function; inputs are
//! never mutated.

use crate::entropy::indexing::{flat_to_multi, multi_to_flat, total_size};
use crate::histogram::NdHistogram;

/// N-dimensional probability array: flattened row-major data plus shape.
///
/// May hold a full joint distribution or any marginal produced by
/// [`marginalize`]. Produced on demand and never mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbArray {
    /// Flattened probabilities in row-major order.
    pub data: Vec<f64>,
    /// Size of each axis.
    pub shape: Vec<usize>,
}

impl ProbArray {
    /// Snapshot a histogram's joint distribution as a working array.
    pub fn from_histogram(hist: &NdHistogram) -> Self {
        Self {
            data: hist.probabilities(),
            shape: hist.shape(),
        }
    }

    /// Number of axes.
    pub fn ndims(&self) -> usize {
        self.shape.len()
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the array holds no cells.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Base-2 logarithm that returns 0 for non-positive or non-finite input.
///
/// Makes the 0·log(0) = 0 convention hold by construction everywhere
/// entropy terms are accumulated.
pub fn log2_safe(x: f64) -> f64 {
    if x <= 0.0 || !x.is_finite() {
        return 0.0;
    }
    x.log2()
}

/// Shannon entropy H(p) = -Σ pᵢ log₂(pᵢ) of a probability vector, in bits.
///
/// Normalization is not enforced; zero entries contribute nothing.
pub fn entropy(p: &[f64]) -> f64 {
    let mut sum = 0.0;
    for &pi in p {
        if pi > 0.0 {
            sum += pi * log2_safe(pi);
        }
    }
    -sum
}

/// Sum out every axis not listed in `keep_axes`, producing the marginal
/// distribution shaped by the kept axes (in the order given).
///
/// If `keep_axes` covers all axes the data is returned as an unchanged
/// copy. Axes must be valid for `arr.shape`.
pub fn marginalize(arr: &ProbArray, keep_axes: &[usize]) -> ProbArray {
    let ndim = arr.ndims();
    if ndim == 0 || keep_axes.len() == ndim {
        return arr.clone();
    }

    let marginal_shape: Vec<usize> = keep_axes.iter().map(|&ax| arr.shape[ax]).collect();
    let mut result = vec![0.0; total_size(&marginal_shape)];

    for (flat, &p) in arr.data.iter().enumerate() {
        let multi = flat_to_multi(&arr.shape, flat);
        let kept: Vec<usize> = keep_axes.iter().map(|&ax| multi[ax]).collect();
        result[multi_to_flat(&marginal_shape, &kept)] += p;
    }

    ProbArray {
        data: result,
        shape: marginal_shape,
    }
}

/// Joint entropy H(X_axes) of the marginal over the given axes, in bits.
///
/// Empty `axes` is the trivial distribution and has entropy 0.
pub fn joint_entropy(arr: &ProbArray, axes: &[usize]) -> f64 {
    if axes.is_empty() {
        return 0.0;
    }
    entropy(&marginalize(arr, axes).data)
}

/// Conditional entropy H(X|Y) via the chain rule H(X,Y) − H(Y).
///
/// With no conditioning axes this is just H(X).
pub fn conditional_entropy(arr: &ProbArray, target: &[usize], conditioning: &[usize]) -> f64 {
    if conditioning.is_empty() {
        return joint_entropy(arr, target);
    }
    let joint_axes = union_indices(target, conditioning);
    joint_entropy(arr, &joint_axes) - joint_entropy(arr, conditioning)
}

/// Mutual information I(X;Y) = H(X) − H(X|Y), in bits.
///
/// Zero if either axis set is empty.
pub fn mutual_information(arr: &ProbArray, set_a: &[usize], set_b: &[usize]) -> f64 {
    if set_a.is_empty() || set_b.is_empty() {
        return 0.0;
    }
    joint_entropy(arr, set_a) - conditional_entropy(arr, set_a, set_b)
}

/// Conditional mutual information I(X;Y|Z) = H(X|Z) − H(X|Y,Z), in bits.
///
/// Zero if either primary set is empty; with empty conditioning this
/// reduces to plain mutual information.
pub fn conditional_mutual_information(
    arr: &ProbArray,
    set_a: &[usize],
    set_b: &[usize],
    conditioning: &[usize],
) -> f64 {
    if set_a.is_empty() || set_b.is_empty() {
        return 0.0;
    }
    if conditioning.is_empty() {
        return mutual_information(arr, set_a, set_b);
    }
    let combined = union_indices(set_b, conditioning);
    conditional_entropy(arr, set_a, conditioning) - conditional_entropy(arr, set_a, &combined)
}

/// Ordered union of two axis lists: first-seen order, no duplicates.
pub fn union_indices(a: &[usize], b: &[usize]) -> Vec<usize> {
    let mut result = Vec::with_capacity(a.len() + b.len());
    for &idx in a.iter().chain(b.iter()) {
        if !result.contains(&idx) {
            result.push(idx);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    fn uniform_2x2() -> ProbArray {
        ProbArray {
            data: vec![0.25; 4],
            shape: vec![2, 2],
        }
    }

    /// P(X,Y) for Y = X with uniform X over {0,1}.
    fn correlated_2x2() -> ProbArray {
        ProbArray {
            data: vec![0.5, 0.0, 0.0, 0.5],
            shape: vec![2, 2],
        }
    }

    #[test]
    fn log2_safe_edge_cases() {
        assert_eq!(log2_safe(0.0), 0.0);
        assert_eq!(log2_safe(-1.0), 0.0);
        assert_eq!(log2_safe(f64::NAN), 0.0);
        assert_eq!(log2_safe(f64::INFINITY), 0.0);
        assert!((log2_safe(8.0) - 3.0).abs() < TOL);
        assert!((log2_safe(0.5) + 1.0).abs() < TOL);
    }

    #[test]
    fn entropy_uniform_is_log_n() {
        let p = vec![0.25; 4];
        assert!((entropy(&p) - 2.0).abs() < TOL);
    }

    #[test]
    fn entropy_deterministic_is_zero() {
        let p = vec![1.0, 0.0, 0.0];
        assert!(entropy(&p).abs() < TOL);
    }

    #[test]
    fn entropy_binary_half() {
        let p = vec![0.5, 0.5];
        assert!((entropy(&p) - 1.0).abs() < TOL);
    }

    #[test]
    fn marginalize_2d_rows() {
        let arr = ProbArray {
            data: vec![0.1, 0.2, 0.3, 0.15, 0.15, 0.1],
            shape: vec![2, 3],
        };
        let rows = marginalize(&arr, &[0]);
        assert_eq!(rows.shape, vec![2]);
        assert!((rows.data[0] - 0.6).abs() < TOL);
        assert!((rows.data[1] - 0.4).abs() < TOL);

        let cols = marginalize(&arr, &[1]);
        assert_eq!(cols.shape, vec![3]);
        assert!((cols.data[0] - 0.25).abs() < TOL);
        assert!((cols.data[1] - 0.35).abs() < TOL);
        assert!((cols.data[2] - 0.4).abs() < TOL);
    }

    #[test]
    fn marginalize_keep_all_returns_copy() {
        let arr = uniform_2x2();
        let copy = marginalize(&arr, &[0, 1]);
        assert_eq!(copy, arr);
    }

    #[test]
    fn marginalize_3d_pair() {
        // Uniform 2x2x2: any pairwise marginal is uniform 2x2.
        let arr = ProbArray {
            data: vec![0.125; 8],
            shape: vec![2, 2, 2],
        };
        let pair = marginalize(&arr, &[0, 2]);
        assert_eq!(pair.shape, vec![2, 2]);
        for &p in &pair.data {
            assert!((p - 0.25).abs() < TOL);
        }
    }

    #[test]
    fn joint_entropy_empty_axes_is_zero() {
        assert_eq!(joint_entropy(&uniform_2x2(), &[]), 0.0);
    }

    #[test]
    fn joint_entropy_uniform() {
        let arr = uniform_2x2();
        assert!((joint_entropy(&arr, &[0, 1]) - 2.0).abs() < TOL);
        assert!((joint_entropy(&arr, &[0]) - 1.0).abs() < TOL);
    }

    #[test]
    fn conditional_entropy_chain_rule() {
        let arr = uniform_2x2();
        // Independent uniform: H(X|Y) = H(X) = 1.
        assert!((conditional_entropy(&arr, &[0], &[1]) - 1.0).abs() < TOL);

        // Perfectly correlated: H(X|Y) = 0.
        let corr = correlated_2x2();
        assert!(conditional_entropy(&corr, &[0], &[1]).abs() < TOL);
    }

    #[test]
    fn conditional_entropy_no_conditioning() {
        let arr = correlated_2x2();
        let h = conditional_entropy(&arr, &[0], &[]);
        assert!((h - joint_entropy(&arr, &[0])).abs() < TOL);
    }

    #[test]
    fn mutual_information_independent_is_zero() {
        assert!(mutual_information(&uniform_2x2(), &[0], &[1]).abs() < TOL);
    }

    #[test]
    fn mutual_information_correlated_is_one_bit() {
        let corr = correlated_2x2();
        assert!((mutual_information(&corr, &[0], &[1]) - 1.0).abs() < TOL);
    }

    #[test]
    fn mutual_information_symmetric() {
        let arr = ProbArray {
            data: vec![0.4, 0.1, 0.1, 0.4],
            shape: vec![2, 2],
        };
        let ab = mutual_information(&arr, &[0], &[1]);
        let ba = mutual_information(&arr, &[1], &[0]);
        assert!((ab - ba).abs() < TOL);
        assert!(ab > 0.0);
    }

    #[test]
    fn mutual_information_empty_set_is_zero() {
        let arr = correlated_2x2();
        assert_eq!(mutual_information(&arr, &[], &[1]), 0.0);
        assert_eq!(mutual_information(&arr, &[0], &[]), 0.0);
    }

    #[test]
    fn cmi_reduces_to_mi_without_conditioning() {
        let corr = correlated_2x2();
        let cmi = conditional_mutual_information(&corr, &[0], &[1], &[]);
        let mi = mutual_information(&corr, &[0], &[1]);
        assert!((cmi - mi).abs() < TOL);
    }

    #[test]
    fn cmi_xor_is_one_bit() {
        // T = A XOR B over uniform binary agents: I(T;A) = 0 but
        // I(T;A|B) = 1.
        let mut data = vec![0.0; 8];
        let shape = vec![2, 2, 2];
        for a in 0..2usize {
            for b in 0..2usize {
                let t = a ^ b;
                data[multi_to_flat(&shape, &[t, a, b])] = 0.25;
            }
        }
        let arr = ProbArray { data, shape };
        assert!(mutual_information(&arr, &[0], &[1]).abs() < TOL);
        assert!((conditional_mutual_information(&arr, &[0], &[1], &[2]) - 1.0).abs() < TOL);
    }

    #[test]
    fn union_indices_order_and_dedup() {
        assert_eq!(union_indices(&[0, 2], &[1, 2, 3]), vec![0, 2, 1, 3]);
        assert_eq!(union_indices(&[], &[4, 4, 1]), vec![4, 1]);
        assert_eq!(union_indices(&[3, 1], &[]), vec![3, 1]);
    }
}
