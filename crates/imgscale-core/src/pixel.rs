//! 8-bit RGB pixel and its derived color views.
//!
//! A [`Pixel`] stores only its three channels. Every derived quantity
//! (luminance, chroma, hue, brightness, min/max) is computed on access.
//!
//! ```
//! use imgscale_core::Pixel;
//!
//! let px = Pixel::new(255, 0, 0);
//! assert_eq!(px.y(), 76);
//! assert_eq!(px.max(), 255);
//! assert_eq!(px.hue(), 0);
//! ```
//!
//! # Derived views
//!
//! | view            | formula                                        |
//! |-----------------|------------------------------------------------|
//! | [`Pixel::y`]    | `0.299 R + 0.587 G + 0.114 B`                  |
//! | [`Pixel::u`]    | `-0.168736 R - 0.331264 G + 0.5 B + 128`       |
//! | [`Pixel::v`]    | `0.5 R - 0.418688 G - 0.081312 B + 128`        |
//! | [`Pixel::u_norm`] | `0.492 (B - Y) + 128`                        |
//! | [`Pixel::v_norm`] | `0.877 (R - Y) + 128`                        |
//! | [`Pixel::hue`]  | HSV hue, `[0, 360)` scaled onto `[0, 256)`     |
//! | [`Pixel::brightness`] | `(min + max) / 2`                        |
//!
//! Scalar results are rounded to nearest and clamped to `0..=255`.

use std::fmt;

// ============================================================================
// Rec.601 Luminance Constants
// ============================================================================

/// Rec.601 luminance coefficient for red channel.
pub const REC601_LUMA_R: f32 = 0.299;

/// Rec.601 luminance coefficient for green channel.
pub const REC601_LUMA_G: f32 = 0.587;

/// Rec.601 luminance coefficient for blue channel.
pub const REC601_LUMA_B: f32 = 0.114;

/// Offset added to signed chroma so it fits an unsigned byte.
const CHROMA_OFFSET: f32 = 128.0;

#[inline]
fn to_u8(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

// ============================================================================
// Pixel
// ============================================================================

/// Immutable 8-bit RGB value.
///
/// `Pixel::default()` is black, which is also what a freshly allocated
/// [`PixelBuffer`](crate::PixelBuffer) contains.
#[repr(C)]
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Pixel {
    r: u8,
    g: u8,
    b: u8,
}

impl Pixel {
    /// Black (0, 0, 0).
    pub const BLACK: Pixel = Pixel::new(0, 0, 0);

    /// White (255, 255, 255).
    pub const WHITE: Pixel = Pixel::new(255, 255, 255);

    /// Create a new pixel from its red, green and blue channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a grey pixel with all three channels set to `v`.
    #[inline]
    pub const fn gray(v: u8) -> Self {
        Self::new(v, v, v)
    }

    /// Red channel.
    #[inline]
    pub const fn r(self) -> u8 {
        self.r
    }

    /// Green channel.
    #[inline]
    pub const fn g(self) -> u8 {
        self.g
    }

    /// Blue channel.
    #[inline]
    pub const fn b(self) -> u8 {
        self.b
    }

    /// Channels as `[r, g, b]`.
    #[inline]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Create from `[r, g, b]`.
    #[inline]
    pub const fn from_array(arr: [u8; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Unrounded Rec.601 luminance in `[0, 255]`.
    #[inline]
    pub fn luminance(self) -> f32 {
        self.r as f32 * REC601_LUMA_R + self.g as f32 * REC601_LUMA_G + self.b as f32 * REC601_LUMA_B
    }

    /// Luminance (Y).
    #[inline]
    pub fn y(self) -> u8 {
        to_u8(self.luminance())
    }

    /// Blue-difference chroma (U / Cb), centered on 128.
    #[inline]
    pub fn u(self) -> u8 {
        to_u8(
            -0.168_736 * self.r as f32 - 0.331_264 * self.g as f32
                + 0.5 * self.b as f32
                + CHROMA_OFFSET,
        )
    }

    /// Red-difference chroma (V / Cr), centered on 128.
    #[inline]
    pub fn v(self) -> u8 {
        to_u8(
            0.5 * self.r as f32 - 0.418_688 * self.g as f32 - 0.081_312 * self.b as f32
                + CHROMA_OFFSET,
        )
    }

    /// Analog-normalized blue difference `0.492 (B - Y)`, centered on 128.
    #[inline]
    pub fn u_norm(self) -> u8 {
        to_u8(0.492 * (self.b as f32 - self.luminance()) + CHROMA_OFFSET)
    }

    /// Analog-normalized red difference `0.877 (R - Y)`, centered on 128.
    #[inline]
    pub fn v_norm(self) -> u8 {
        to_u8(0.877 * (self.r as f32 - self.luminance()) + CHROMA_OFFSET)
    }

    /// HSV hue angle in degrees, `[0, 360)`. Greys have hue 0.
    pub fn hue_degrees(self) -> f32 {
        let max = self.max();
        let min = self.min();
        if max == min {
            return 0.0;
        }
        let delta = (max - min) as f32;
        let (r, g, b) = (self.r as f32, self.g as f32, self.b as f32);
        let h = if max == self.r {
            60.0 * ((g - b) / delta)
        } else if max == self.g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };
        if h < 0.0 { h + 360.0 } else { h }
    }

    /// Hue scaled from degrees onto a full byte (`360°` maps to `256`).
    #[inline]
    pub fn hue(self) -> u8 {
        // truncation keeps 359.x degrees at 255
        (self.hue_degrees() * 256.0 / 360.0) as u8
    }

    /// A fully saturated color encoding this pixel's [`hue`](Self::hue).
    ///
    /// Red fades into green over the first third of the circle, green into
    /// blue over the second and blue back into red over the last.
    pub fn hue_colored(self) -> Pixel {
        let hue = self.hue() as f32 * 360.0 / 256.0;
        let factor = 255.0 / 120.0;
        let r = if hue <= 120.0 {
            255.0 - hue * factor
        } else if hue >= 240.0 {
            (hue - 240.0) * factor
        } else {
            0.0
        };
        let g = if hue <= 120.0 {
            hue * factor
        } else if hue <= 240.0 {
            255.0 - (hue - 120.0) * factor
        } else {
            0.0
        };
        let b = if hue >= 240.0 {
            255.0 - (hue - 240.0) * factor
        } else if hue >= 120.0 {
            (hue - 120.0) * factor
        } else {
            0.0
        };
        Pixel::new(r as u8, g as u8, b as u8)
    }

    /// HSL lightness, the midpoint of [`min`](Self::min) and [`max`](Self::max).
    #[inline]
    pub fn brightness(self) -> u8 {
        ((self.min() as u16 + self.max() as u16 + 1) / 2) as u8
    }

    /// Smallest channel value.
    #[inline]
    pub fn min(self) -> u8 {
        self.r.min(self.g).min(self.b)
    }

    /// Largest channel value.
    #[inline]
    pub fn max(self) -> u8 {
        self.r.max(self.g).max(self.b)
    }

    /// Per-channel mean of two pixels, rounded down.
    #[inline]
    pub fn average(self, other: Pixel) -> Pixel {
        let avg = |a: u8, b: u8| ((a as u16 + b as u16) / 2) as u8;
        Pixel::new(avg(self.r, other.r), avg(self.g, other.g), avg(self.b, other.b))
    }

    /// Per-channel mean of four pixels, rounded down.
    #[inline]
    pub fn average4(a: Pixel, b: Pixel, c: Pixel, d: Pixel) -> Pixel {
        let avg = |w: u8, x: u8, y: u8, z: u8| ((w as u16 + x as u16 + y as u16 + z as u16) / 4) as u8;
        Pixel::new(
            avg(a.r, b.r, c.r, d.r),
            avg(a.g, b.g, c.g, d.g),
            avg(a.b, b.b, c.b, d.b),
        )
    }
}

impl From<[u8; 3]> for Pixel {
    #[inline]
    fn from(arr: [u8; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Pixel> for [u8; 3] {
    #[inline]
    fn from(px: Pixel) -> Self {
        px.to_array()
    }
}

impl fmt::Debug for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pixel")
            .field("r", &self.r)
            .field("g", &self.g)
            .field("b", &self.b)
            .finish()
    }
}

impl fmt::Display for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RGB({}, {}, {})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_pixel_creation() {
        let px = Pixel::new(255, 128, 64);
        assert_eq!(px.r(), 255);
        assert_eq!(px.g(), 128);
        assert_eq!(px.b(), 64);
        assert_eq!(Pixel::default(), Pixel::BLACK);
        assert_eq!(Pixel::gray(7).to_array(), [7, 7, 7]);
    }

    #[test]
    fn test_luminance() {
        assert_eq!(Pixel::WHITE.y(), 255);
        assert_eq!(Pixel::BLACK.y(), 0);
        assert_eq!(Pixel::new(255, 0, 0).y(), 76);
        assert_eq!(Pixel::new(0, 255, 0).y(), 150);
        assert_eq!(Pixel::new(0, 0, 255).y(), 29);
        assert_relative_eq!(Pixel::new(100, 100, 100).luminance(), 100.0, epsilon = 1e-3);
    }

    #[test]
    fn test_chroma_of_grey_is_centered() {
        for v in [0u8, 64, 128, 255] {
            let px = Pixel::gray(v);
            assert_eq!(px.u(), 128);
            assert_eq!(px.v(), 128);
            assert_eq!(px.u_norm(), 128);
            assert_eq!(px.v_norm(), 128);
        }
    }

    #[test]
    fn test_chroma_saturates() {
        let red = Pixel::new(255, 0, 0);
        assert_eq!(red.v(), 255);
        assert_eq!(red.u(), 85);
        let blue = Pixel::new(0, 0, 255);
        assert_eq!(blue.u(), 255);
    }

    #[test]
    fn test_normalized_chroma_on_colors() {
        // 0.492 (B - Y) + 128 and 0.877 (R - Y) + 128
        let blue = Pixel::new(0, 0, 255);
        assert_eq!(blue.u_norm(), 239);
        assert_eq!(blue.v_norm(), 103);

        let red = Pixel::new(255, 0, 0);
        assert_eq!(red.v_norm(), 255);
        assert_eq!(red.u_norm(), 90);

        let green = Pixel::new(0, 255, 0);
        assert_eq!(green.u_norm(), 54);
        assert_eq!(green.v_norm(), 0);

        // unclamped on both sides of the center
        let lilac = Pixel::new(100, 100, 200);
        assert_eq!(lilac.u_norm(), 172);
        assert_eq!(lilac.v_norm(), 118);
        let rose = Pixel::new(200, 100, 100);
        assert_eq!(rose.u_norm(), 113);
        assert_eq!(rose.v_norm(), 189);
    }

    #[test]
    fn test_hue() {
        assert_relative_eq!(Pixel::new(255, 0, 0).hue_degrees(), 0.0);
        assert_relative_eq!(Pixel::new(0, 255, 0).hue_degrees(), 120.0);
        assert_relative_eq!(Pixel::new(0, 0, 255).hue_degrees(), 240.0);
        assert_relative_eq!(Pixel::new(255, 0, 255).hue_degrees(), 300.0);
        assert_eq!(Pixel::new(0, 255, 0).hue(), 85);
        assert_eq!(Pixel::new(0, 0, 255).hue(), 170);
        assert_eq!(Pixel::gray(90).hue(), 0);
    }

    #[test]
    fn test_hue_colored_primary() {
        assert_eq!(Pixel::new(200, 10, 10).hue_colored(), Pixel::new(255, 0, 0));
        let green = Pixel::new(0, 255, 0).hue_colored();
        assert_eq!(green.r(), 0);
        assert!(green.g() >= 250);
        assert_eq!(green.b(), 0);
    }

    #[test]
    fn test_hue_colored_blue_to_red_segment() {
        // hue 300 deg -> byte 213 -> 299.53 deg: red rising, blue falling
        let magenta = Pixel::new(255, 0, 255);
        assert_eq!(magenta.hue(), 213);
        assert_eq!(magenta.hue_colored(), Pixel::new(126, 0, 128));

        // hue 270.1 deg -> byte 192 -> exactly 270 deg
        let violet = Pixel::new(128, 0, 255);
        assert_eq!(violet.hue(), 192);
        assert_eq!(violet.hue_colored(), Pixel::new(63, 0, 191));
    }

    #[test]
    fn test_min_max_brightness() {
        let px = Pixel::new(10, 200, 55);
        assert_eq!(px.min(), 10);
        assert_eq!(px.max(), 200);
        assert_eq!(px.brightness(), 105);
        assert_eq!(Pixel::new(0, 0, 1).brightness(), 1);
    }

    #[test]
    fn test_average() {
        let a = Pixel::new(10, 20, 30);
        let b = Pixel::new(20, 40, 61);
        assert_eq!(a.average(b), Pixel::new(15, 30, 45));
        assert_eq!(Pixel::average4(a, a, b, b), Pixel::new(15, 30, 45));
    }

    #[test]
    fn test_display() {
        assert_eq!(Pixel::new(1, 2, 3).to_string(), "RGB(1, 2, 3)");
    }
}
