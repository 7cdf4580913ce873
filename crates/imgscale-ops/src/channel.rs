//! Per-pixel color channel views.
//!
//! A channel view builds a new buffer of the same size in which every output
//! pixel depends on exactly one source pixel. That makes the work trivially
//! row-partitionable: see [`map_pixels`] and [`map_scalar`].
//!
//! # Example
//!
//! ```rust
//! use imgscale_core::{Pixel, PixelBuffer};
//! use imgscale_ops::channel::{self, Channel};
//!
//! let src = PixelBuffer::filled(4, 4, Pixel::new(200, 10, 30));
//! let red = channel::extract(&src, Channel::Red);
//! assert_eq!(red.get(0, 0), Pixel::gray(200));
//! ```

use crate::parallel::{for_each_band, rows_per_task};
use imgscale_core::{Pixel, PixelBuffer};
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Applies a pure `Pixel -> Pixel` mapping to every pixel.
pub fn map_pixels<F>(src: &PixelBuffer, f: F) -> PixelBuffer
where
    F: Fn(Pixel) -> Pixel + Send + Sync,
{
    let width = src.width() as usize;
    let source = src.pixels();
    let mut dest = PixelBuffer::new(src.width(), src.height());
    for_each_band(&mut dest, rows_per_task(src.height()), |first_row, band| {
        let offset = first_row as usize * width;
        for (out, px) in band.iter_mut().zip(&source[offset..]) {
            *out = f(*px);
        }
    });
    dest
}

/// Applies a scalar mapping and replicates the result into R, G and B.
pub fn map_scalar<F>(src: &PixelBuffer, f: F) -> PixelBuffer
where
    F: Fn(Pixel) -> u8 + Send + Sync,
{
    map_pixels(src, |px| Pixel::gray(f(px)))
}

/// Named per-pixel color views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Red channel as grey.
    Red,
    /// Green channel as grey.
    Green,
    /// Blue channel as grey.
    Blue,
    /// Luminance.
    Y,
    /// Blue-difference chroma.
    U,
    /// Red-difference chroma.
    V,
    /// Analog-normalized blue difference.
    UNorm,
    /// Analog-normalized red difference.
    VNorm,
    /// Hue as grey.
    Hue,
    /// Hue as a saturated color.
    HueColored,
    /// HSL lightness.
    Brightness,
    /// Smallest channel.
    Min,
    /// Largest channel.
    Max,
}

impl Channel {
    /// All channels in catalog order.
    pub const ALL: [Channel; 13] = [
        Channel::Red,
        Channel::Green,
        Channel::Blue,
        Channel::Y,
        Channel::U,
        Channel::V,
        Channel::UNorm,
        Channel::VNorm,
        Channel::Hue,
        Channel::HueColored,
        Channel::Brightness,
        Channel::Min,
        Channel::Max,
    ];

    /// Catalog name.
    pub const fn name(self) -> &'static str {
        match self {
            Channel::Red => "Red",
            Channel::Green => "Green",
            Channel::Blue => "Blue",
            Channel::Y => "Y",
            Channel::U => "U",
            Channel::V => "V",
            Channel::UNorm => "u Normalized",
            Channel::VNorm => "v Normalized",
            Channel::Hue => "Hue",
            Channel::HueColored => "Hue Colored",
            Channel::Brightness => "Brightness",
            Channel::Min => "Min",
            Channel::Max => "Max",
        }
    }

    /// Maps one pixel through this view.
    #[inline]
    pub fn apply(self, px: Pixel) -> Pixel {
        match self {
            Channel::Red => Pixel::gray(px.r()),
            Channel::Green => Pixel::gray(px.g()),
            Channel::Blue => Pixel::gray(px.b()),
            Channel::Y => Pixel::gray(px.y()),
            Channel::U => Pixel::gray(px.u()),
            Channel::V => Pixel::gray(px.v()),
            Channel::UNorm => Pixel::gray(px.u_norm()),
            Channel::VNorm => Pixel::gray(px.v_norm()),
            Channel::Hue => Pixel::gray(px.hue()),
            Channel::HueColored => px.hue_colored(),
            Channel::Brightness => Pixel::gray(px.brightness()),
            Channel::Min => Pixel::gray(px.min()),
            Channel::Max => Pixel::gray(px.max()),
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Builds the view of `src` for `channel`.
pub fn extract(src: &PixelBuffer, channel: Channel) -> PixelBuffer {
    trace!(channel = channel.name(), w = src.width(), h = src.height(), "channel::extract");
    map_pixels(src, |px| channel.apply(px))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PixelBuffer {
        let mut buf = PixelBuffer::new(7, 5);
        for y in 0..5 {
            for x in 0..7 {
                buf.set(x, y, Pixel::new((x * 37) as u8, (y * 51) as u8, ((x + y) * 19) as u8));
            }
        }
        buf
    }

    #[test]
    fn test_red_channel_is_grey_red() {
        let src = sample();
        let out = extract(&src, Channel::Red);
        assert_eq!(out.dimensions(), src.dimensions());
        for (x, y, px) in out.iter() {
            let s = src.get(x as i32, y as i32);
            assert_eq!(px.to_array(), [s.r(), s.r(), s.r()]);
        }
    }

    #[test]
    fn test_every_channel_matches_pointwise() {
        let src = sample();
        for channel in Channel::ALL {
            let out = extract(&src, channel);
            for (x, y, px) in out.iter() {
                assert_eq!(px, channel.apply(src.get(x as i32, y as i32)), "{channel}");
            }
        }
    }

    #[test]
    fn test_map_pixels_does_not_touch_source() {
        let src = sample();
        let before = src.clone();
        let inverted = map_pixels(&src, |px| Pixel::new(255 - px.r(), 255 - px.g(), 255 - px.b()));
        assert_eq!(src, before);
        assert_eq!(inverted.get(0, 0), Pixel::WHITE);
    }

    #[test]
    fn test_map_scalar_replicates() {
        let src = sample();
        let out = map_scalar(&src, |px| px.max());
        assert!(out.pixels().iter().all(|px| px.r() == px.g() && px.g() == px.b()));
    }

    #[test]
    fn test_empty_source() {
        let src = PixelBuffer::new(0, 0);
        assert!(extract(&src, Channel::Hue).is_empty());
    }

    #[test]
    fn test_names_are_unique_case_insensitively() {
        let mut names: Vec<_> = Channel::ALL.iter().map(|c| c.name().to_lowercase()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), Channel::ALL.len());
    }
}
