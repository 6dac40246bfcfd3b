//! Entropy Primitives: Information Measures over Joint Distributions
//!
//! Pure functions computing the Shannon entropy family over N-dimensional
//! probability arrays via axis marginalization:
//!
//! - Entropy:                 H(X)      = -Σ p log₂ p
//! - Joint entropy:           H(X,Y)    over any axis subset
//! - Conditional entropy:     H(X|Y)    = H(X,Y) − H(Y)
//! - Mutual information:      I(X;Y)    = H(X) − H(X|Y)
//! - Conditional MI:          I(X;Y|Z)  = H(X|Z) − H(X|Y,Z)
//!
//! All results are in bits. The safe-log convention (log₂ of a
//! non-positive value is 0) makes the 0·log(0) = 0 limit exact, so
//! zero-probability cells never contaminate a sum.

pub mod indexing;
mod measures;

pub use indexing::{flat_to_multi, multi_to_flat, total_size};
pub use measures::{
    conditional_entropy, conditional_mutual_information, entropy, joint_entropy, log2_safe,
    marginalize, mutual_information, union_indices, ProbArray,
};
