//! Validation error types

/// Validation error type
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid step: {0} (must be > 0)")]
    InvalidStep(usize),

    #[error("Invalid dilation iterations: {0} (must be > 0)")]
    InvalidDilationIterations(usize),

    #[error("Invalid acquisition rank: {0} (shape must have 2 or 3 axes)")]
    InvalidRank(usize),

    #[error("Invalid acquisition shape: {0:?} (every axis must be > 0)")]
    EmptyAxis(Vec<usize>),

    #[error("Invalid decimation: {0} (must be in [0.0, 1.0])")]
    InvalidDecimation(f64),

    #[error("Invalid iterations: {0} (must be > 0)")]
    InvalidIterations(usize),
}
