//! # imgscale-core
//!
//! Core types for the imgscale filtering engine.
//!
//! - [`Pixel`] - immutable 8-bit RGB value with derived color views
//! - [`PixelBuffer`] - fixed-size row-major grid with clamped reads
//! - [`Error`] - construction errors
//!
//! ## Crate Structure
//!
//! ```text
//! imgscale-core (this crate)
//!    ^
//!    |
//!    +-- imgscale-ops (channel views, filter registry, dispatch)
//!    +-- imgscale-io  (24-bit raster bridge)
//!    +-- imgscale-cli
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel` - rayon-backed fills and row chunking (enabled by default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod error;
pub mod pixel;

pub use buffer::PixelBuffer;
pub use error::{Error, Result};
pub use pixel::{Pixel, REC601_LUMA_B, REC601_LUMA_G, REC601_LUMA_R};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::buffer::PixelBuffer;
    pub use crate::error::{Error, Result};
    pub use crate::pixel::Pixel;
}
