//! # imgscale-io
//!
//! Bridge between [`PixelBuffer`](imgscale_core::PixelBuffer) and packed
//! 24-bit BGR rasters with row padding, plus headerless raw file helpers.
//!
//! ```rust,no_run
//! use imgscale_io::raster;
//!
//! let frame = raster::read_raw("frame.bgr", 320, 240, raster::aligned_stride(320, 4))?;
//! raster::write_raw("copy.bgr", &frame, 960)?;
//! # Ok::<(), imgscale_io::IoError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod raster;

pub use error::{IoError, IoResult};
pub use raster::{aligned_stride, from_raster, read_raw, to_raster, to_raster_with_stride, write_raw};
