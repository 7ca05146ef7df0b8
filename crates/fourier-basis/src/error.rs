//! Basis Error Types

use thiserror::Error;

/// Errors raised while building or applying a Fourier basis
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BasisError {
    /// State dimension or order cannot describe a basis
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Input (or output buffer) does not match the basis shape
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, BasisError>;
