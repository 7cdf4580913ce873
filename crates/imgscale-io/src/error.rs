//! Error types for raster conversion.

use std::io;
use thiserror::Error;

/// Raster I/O error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Row stride cannot hold one row of pixels.
    #[error("stride {stride} too small for width {width} (need at least {min} bytes)")]
    Stride {
        /// Given stride in bytes.
        stride: usize,
        /// Image width in pixels.
        width: u32,
        /// Minimum stride, `width * 3`.
        min: usize,
    },

    /// Raster is shorter than its geometry requires, or the geometry
    /// overflows.
    #[error("raster of {actual} bytes too small for {width}x{height} at stride {stride}")]
    Size {
        /// Image width in pixels.
        width: u32,
        /// Image height in pixels.
        height: u32,
        /// Row stride in bytes.
        stride: usize,
        /// Bytes available.
        actual: usize,
    },

    /// Buffer construction failed.
    #[error(transparent)]
    Core(#[from] imgscale_core::Error),
}

/// Result type for raster I/O.
pub type IoResult<T> = Result<T, IoError>;
