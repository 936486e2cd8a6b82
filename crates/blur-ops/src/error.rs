//! Error types for blur operations.

use thiserror::Error;

/// Error type for blur operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OpsError {
    /// Dimensions cannot describe a raster (e.g. `width * height` overflows).
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// A buffer does not match its declared size, or source and
    /// destination buffers differ in size.
    #[error("size mismatch: {0}")]
    SizeMismatch(String),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Kernel radius above the supported maximum.
    #[error("blur radius {radius} exceeds maximum {max}")]
    RadiusOutOfRange {
        /// Requested radius.
        radius: usize,
        /// Largest radius the kernel accepts.
        max: usize,
    },

    /// Raster contract violation reported by `blur-core`.
    #[error(transparent)]
    Raster(#[from] blur_core::Error),
}

/// Result type for blur operations.
pub type OpsResult<T> = Result<T, OpsError>;
