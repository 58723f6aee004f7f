//! Error types with actionable diagnostics.
//!
//! Configuration problems abort a run before the first iteration; everything
//! else is a caller bug and is propagated, never clamped away.

use crate::config::ValidationError;
use thiserror::Error;

/// Result type alias for revelar operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building masks or running a schedule.
#[derive(Error, Debug)]
pub enum Error {
    /// Schedule parameters cannot drive a scheduler.
    #[error("Invalid schedule: {message}\n  → {suggestion}")]
    InvalidSchedule { message: String, suggestion: String },

    /// A probability-like argument fell outside `[0, 1]`.
    #[error("Invalid {name}: {value} (must be in [0.0, 1.0])")]
    InvalidFraction { name: &'static str, value: f64 },

    /// Masks are rank 1, 2 or 3.
    #[error("Unsupported mask rank: {0}\n  → Masks are (time, space) or (time, space, space) arrays")]
    UnsupportedRank(usize),

    /// Two masks combined sample-for-sample disagree in shape.
    #[error("Mask shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch { expected: Vec<usize>, actual: Vec<usize> },

    /// Configuration file could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration parsed but failed validation.
    #[error("Invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    /// IO error with context.
    #[error("IO error: {context}\n  Cause: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io { context: context.into(), source }
    }

    /// Errors the user fixes by editing configuration rather than code.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidSchedule { .. } | Self::Config(_) | Self::Validation(_) | Self::Io { .. }
        )
    }

    /// Get the error code for structured output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidSchedule { .. } => "E001",
            Self::Config(_) => "E002",
            Self::Validation(_) => "E003",
            Self::InvalidFraction { .. } => "E010",
            Self::UnsupportedRank(_) => "E020",
            Self::ShapeMismatch { .. } => "E021",
            Self::Io { .. } => "E050",
        }
    }
}
