//! # imgscale-ops
//!
//! Filters over [`PixelBuffer`](imgscale_core::PixelBuffer)s.
//!
//! This crate holds the filter catalog and the engine that runs a filter
//! across a buffer in parallel row ranges.
//!
//! # Modules
//!
//! - [`channel`] - per-pixel color channel views
//! - [`descriptor`] - filter descriptors (name, scale, work)
//! - [`dispatch`] - row-parallel filter application
//! - [`registry`] - immutable, case-insensitive filter catalog
//! - [`scalers`] - built-in neighbor-aware scalers
//! - [`parallel`] - fork-join row partitioning
//!
//! # Example
//!
//! ```rust
//! use imgscale_core::{Pixel, PixelBuffer};
//!
//! let src = PixelBuffer::filled(16, 9, Pixel::new(90, 160, 30));
//! let big = imgscale_ops::filter_image(&src, "Scale 2x").unwrap();
//! assert_eq!(big.dimensions(), (32, 18));
//!
//! for info in imgscale_ops::list_filters() {
//!     println!("{info}");
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel` - run bands on the rayon pool (enabled by default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod channel;
pub mod descriptor;
pub mod dispatch;
pub mod parallel;
pub mod registry;
pub mod scalers;

pub use channel::Channel;
pub use descriptor::{FilterDescriptor, FilterInfo, FilterKind, PixelMap, ScaleFn};
pub use dispatch::{Band, Placement};
pub use error::{OpsError, OpsResult};
pub use registry::FilterRegistry;

use imgscale_core::PixelBuffer;

/// Applies the built-in filter called `name` (case-insensitive) to `src`.
///
/// Returns `None` if the name is unknown.
pub fn filter_image(src: &PixelBuffer, name: &str) -> Option<PixelBuffer> {
    FilterRegistry::global().filter_image(src, name)
}

/// Lists the built-in filters in registration order.
pub fn list_filters() -> Vec<FilterInfo> {
    FilterRegistry::global().list()
}
