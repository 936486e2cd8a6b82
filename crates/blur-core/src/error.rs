//! Error types for raster construction and validation.
//!
//! Every variant here is a contract violation: a buffer whose length does
//! not agree with its declared dimensions, dimensions that cannot be
//! addressed, or two rasters that were expected to share a size. None of
//! them are recoverable runtime conditions, so callers are expected to
//! propagate them rather than retry.
//!
//! # Usage
//!
//! ```rust
//! use blur_core::{Error, Result};
//!
//! fn check(len: usize, width: usize, height: usize) -> Result<()> {
//!     if len != width * height {
//!         return Err(Error::length_mismatch(width, height, len));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check(12, 4, 3).is_ok());
//! assert!(check(11, 4, 3).is_err());
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building or validating rasters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Pixel buffer length does not equal `width * height`.
    #[error("raster {width}x{height} needs {expected} pixels, got {got}")]
    LengthMismatch {
        /// Declared width
        width: usize,
        /// Declared height
        height: usize,
        /// `width * height`
        expected: usize,
        /// Actual buffer length
        got: usize,
    },

    /// `width * height` does not fit in `usize`.
    #[error("raster dimensions {width}x{height} overflow")]
    DimensionOverflow {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },

    /// Two rasters that must share dimensions do not.
    #[error("dimension mismatch: {a_width}x{a_height} vs {b_width}x{b_height}")]
    DimensionMismatch {
        /// First raster width
        a_width: usize,
        /// First raster height
        a_height: usize,
        /// Second raster width
        b_width: usize,
        /// Second raster height
        b_height: usize,
    },
}

impl Error {
    /// Creates an [`Error::LengthMismatch`] error.
    ///
    /// `expected` saturates when the dimensions overflow; use
    /// [`Error::DimensionOverflow`] when that is the actual problem.
    #[inline]
    pub fn length_mismatch(width: usize, height: usize, got: usize) -> Self {
        Self::LengthMismatch {
            width,
            height,
            expected: width.saturating_mul(height),
            got,
        }
    }

    /// Creates an [`Error::DimensionMismatch`] error.
    #[inline]
    pub fn dimension_mismatch(a: (usize, usize), b: (usize, usize)) -> Self {
        Self::DimensionMismatch {
            a_width: a.0,
            a_height: a.1,
            b_width: b.0,
            b_height: b.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch_message() {
        let err = Error::length_mismatch(4, 3, 11);
        let msg = err.to_string();
        assert!(msg.contains("4x3"));
        assert!(msg.contains("12"));
        assert!(msg.contains("11"));
    }

    #[test]
    fn test_length_mismatch_saturates() {
        let err = Error::length_mismatch(usize::MAX, 2, 0);
        assert!(matches!(err, Error::LengthMismatch { expected: usize::MAX, .. }));
    }

    #[test]
    fn test_dimension_mismatch() {
        let err = Error::dimension_mismatch((100, 100), (200, 50));
        let msg = err.to_string();
        assert!(msg.contains("100x100"));
        assert!(msg.contains("200x50"));
    }
}
