//! Filter descriptors.
//!
//! A [`FilterDescriptor`] names a filter, declares its integer scale factors
//! and carries one of two kinds of work:
//!
//! - [`FilterKind::Map`] - a pure per-pixel mapping, run as a channel view
//!   (always 1x1).
//! - [`FilterKind::Scale`] - a neighbor-aware transform called once per
//!   source pixel, writing the `scale_x * scale_y` destination block it owns.
//!
//! Parameters are captured by the closure rather than passed as an opaque
//! value, so a transform always sees its own typed configuration:
//!
//! ```rust
//! use imgscale_core::Pixel;
//! use imgscale_ops::FilterDescriptor;
//!
//! let tint = 40u8;
//! let warm = FilterDescriptor::mapping("Warm", move |px| {
//!     Pixel::new(px.r().saturating_add(tint), px.g(), px.b())
//! });
//! assert_eq!(warm.scale(), (1, 1));
//! ```

use crate::channel::Channel;
use crate::dispatch::{Band, Placement};
use imgscale_core::{Pixel, PixelBuffer};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Pure per-pixel mapping.
pub type PixelMap = Arc<dyn Fn(Pixel) -> Pixel + Send + Sync>;

/// Neighbor-aware transform.
///
/// Called once per source pixel with the source buffer (read through its
/// clamped [`PixelBuffer::get`]), the pixel's [`Placement`], and the
/// destination [`Band`] that contains the pixel's block.
pub type ScaleFn = Arc<dyn Fn(&PixelBuffer, Placement, &mut Band<'_>) + Send + Sync>;

/// The work a filter performs.
#[derive(Clone)]
pub enum FilterKind {
    /// Per-pixel mapping, dispatched as a channel view.
    Map(PixelMap),
    /// Neighbor-aware scaling transform.
    Scale(ScaleFn),
}

impl fmt::Debug for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterKind::Map(_) => f.write_str("Map"),
            FilterKind::Scale(_) => f.write_str("Scale"),
        }
    }
}

/// Read-only summary of a registered filter, for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilterInfo {
    /// Display name.
    pub name: String,
    /// Horizontal scale factor.
    pub scale_x: u32,
    /// Vertical scale factor.
    pub scale_y: u32,
}

impl fmt::Display for FilterInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}x{})", self.name, self.scale_x, self.scale_y)
    }
}

/// A named filter with its scale factors and work.
#[derive(Clone, Debug)]
pub struct FilterDescriptor {
    name: Cow<'static, str>,
    scale_x: u32,
    scale_y: u32,
    kind: FilterKind,
}

impl FilterDescriptor {
    /// Creates a 1x1 per-pixel mapping filter.
    pub fn mapping<F>(name: impl Into<Cow<'static, str>>, f: F) -> Self
    where
        F: Fn(Pixel) -> Pixel + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            scale_x: 1,
            scale_y: 1,
            kind: FilterKind::Map(Arc::new(f)),
        }
    }

    /// Creates the mapping filter for a named color [`Channel`].
    pub fn channel(channel: Channel) -> Self {
        Self::mapping(channel.name(), move |px| channel.apply(px))
    }

    /// Creates a neighbor-aware scaling filter.
    ///
    /// Scale factors are validated when the descriptor enters a
    /// [`FilterRegistry`](crate::FilterRegistry).
    pub fn scaling<F>(name: impl Into<Cow<'static, str>>, scale_x: u32, scale_y: u32, f: F) -> Self
    where
        F: Fn(&PixelBuffer, Placement, &mut Band<'_>) + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            scale_x,
            scale_y,
            kind: FilterKind::Scale(Arc::new(f)),
        }
    }

    /// Filter name as registered.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Horizontal scale factor.
    #[inline]
    pub fn scale_x(&self) -> u32 {
        self.scale_x
    }

    /// Vertical scale factor.
    #[inline]
    pub fn scale_y(&self) -> u32 {
        self.scale_y
    }

    /// `(scale_x, scale_y)`.
    #[inline]
    pub fn scale(&self) -> (u32, u32) {
        (self.scale_x, self.scale_y)
    }

    /// The filter's work.
    #[inline]
    pub fn kind(&self) -> &FilterKind {
        &self.kind
    }

    /// Allocates the black destination for `source`:
    /// `width * scale_x` by `height * scale_y`.
    pub fn create_destination(&self, source: &PixelBuffer) -> PixelBuffer {
        PixelBuffer::new(
            source.width().saturating_mul(self.scale_x),
            source.height().saturating_mul(self.scale_y),
        )
    }

    /// Presentation summary.
    pub fn info(&self) -> FilterInfo {
        FilterInfo {
            name: self.name.to_string(),
            scale_x: self.scale_x,
            scale_y: self.scale_y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_defaults_to_unit_scale() {
        let desc = FilterDescriptor::mapping("Invert", |px| {
            Pixel::new(255 - px.r(), 255 - px.g(), 255 - px.b())
        });
        assert_eq!(desc.name(), "Invert");
        assert_eq!(desc.scale(), (1, 1));
        assert!(matches!(desc.kind(), FilterKind::Map(_)));
    }

    #[test]
    fn test_create_destination_scales() {
        let desc = FilterDescriptor::scaling("Tall", 2, 3, |_, _, _| {});
        let dest = desc.create_destination(&PixelBuffer::new(5, 4));
        assert_eq!(dest.dimensions(), (10, 12));
        assert!(dest.pixels().iter().all(|px| *px == Pixel::BLACK));
    }

    #[test]
    fn test_channel_descriptor() {
        let desc = FilterDescriptor::channel(Channel::HueColored);
        assert_eq!(desc.name(), "Hue Colored");
        let FilterKind::Map(f) = desc.kind() else {
            panic!("channel filters are mappings");
        };
        assert_eq!(f(Pixel::new(255, 0, 0)), Pixel::new(255, 0, 0));
    }

    #[test]
    fn test_info() {
        let info = FilterDescriptor::scaling("Scale 2x", 2, 2, |_, _, _| {}).info();
        assert_eq!(info.to_string(), "Scale 2x (2x2)");
    }
}
