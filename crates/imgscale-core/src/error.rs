//! Error types for imgscale-core operations.
//!
//! Pixel access itself never fails: reads clamp to the nearest edge and
//! writes outside the grid are dropped. The errors here cover buffer
//! construction from caller-supplied data.
//!
//! # Usage
//!
//! ```rust
//! use imgscale_core::{Error, Pixel, PixelBuffer};
//!
//! let err = PixelBuffer::from_pixels(4, 4, vec![Pixel::BLACK; 3]).unwrap_err();
//! assert!(matches!(err, Error::InvalidDimensions { .. }));
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building pixel buffers.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid buffer dimensions.
    ///
    /// Returned when supplied pixel data does not match `width * height`,
    /// or when the dimensions overflow the addressable size.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }
}
