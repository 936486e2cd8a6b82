//! Error types for the blur layer controller.

use thiserror::Error;

/// Errors raised by [`crate::BlurLayout`] and [`crate::LayoutConfig`].
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Reading a configuration file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration text is not valid YAML for [`crate::LayoutConfig`].
    #[error("config parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Configuration parsed but holds an unusable value.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Blur kernel rejected its input.
    #[error(transparent)]
    Ops(#[from] blur_ops::OpsError),

    /// Offscreen buffer could not be created.
    #[error(transparent)]
    Raster(#[from] blur_core::Error),
}

/// Result type for blur layer operations.
pub type LayoutResult<T> = Result<T, LayoutError>;
