//! Error taxonomy for histogram construction and decomposition.
//!
//! Validation failures are fatal and surface immediately as one of the
//! variants below; numeric degeneracies (zero marginals, log of zero)
//! never raise errors and are absorbed inside the algorithms.

/// Errors produced by histogram construction and SURD decomposition.
#[derive(Debug, thiserror::Error)]
pub enum SurdError {
    #[error("sample matrix is empty")]
    EmptyData,

    #[error("sample matrix has no variables")]
    NoVariables,

    #[error("sample matrix needs at least 2 variables (target + agents), got {variables}")]
    TooFewVariables { variables: usize },

    #[error("bins length ({bins}) must match number of variables ({variables})")]
    BinLengthMismatch { bins: usize, variables: usize },

    #[error("bins[{variable}] = {bins} is outside the allowed range [1, 10000]")]
    BinCountOutOfRange { variable: usize, bins: usize },

    #[error("variable {variable} has no valid (finite) values")]
    NoValidValues { variable: usize },

    #[error("all samples contain NaN or infinite values")]
    AllSamplesInvalid,

    #[error("histogram must have at least 2 axes (target + agents), got {axes}")]
    TooFewAxes { axes: usize },

    #[error("histogram construction failed: {source}")]
    HistogramStage { source: Box<SurdError> },

    #[error("decomposition failed: {source}")]
    DecompositionStage { source: Box<SurdError> },
}
