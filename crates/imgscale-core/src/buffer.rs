//! Row-major pixel grid.
//!
//! [`PixelBuffer`] owns `width * height` pixels stored top-to-bottom,
//! left-to-right:
//!
//! ```text
//! index = y * width + x
//! ```
//!
//! # Access contract
//!
//! Reads and writes use signed coordinates and never fail:
//!
//! - [`PixelBuffer::get`] clamps both coordinates to the nearest edge, so
//!   neighbor-aware filters can sample past the border without bounds checks.
//! - [`PixelBuffer::set`] drops writes that land outside the grid.
//!
//! Note the asymmetry: a write past the edge followed by a read at the same
//! coordinate returns the edge pixel, not the written value.
//!
//! ```rust
//! use imgscale_core::{Pixel, PixelBuffer};
//!
//! let mut buf = PixelBuffer::new(4, 3);
//! buf.set(3, 2, Pixel::WHITE);
//! assert_eq!(buf.get(100, 100), Pixel::WHITE);
//!
//! buf.set(-1, 0, Pixel::new(1, 2, 3)); // dropped
//! assert_eq!(buf.get(-1, 0), Pixel::BLACK);
//! ```

use crate::{Error, Pixel, Result};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Owned, fixed-size grid of [`Pixel`]s.
///
/// Dimensions are set at construction and never change. `Clone` performs a
/// deep copy; two buffers never share storage.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl PixelBuffer {
    /// Creates a black buffer of the given size.
    ///
    /// Zero width or height yields an empty buffer.
    ///
    /// ```rust
    /// use imgscale_core::{Pixel, PixelBuffer};
    ///
    /// let buf = PixelBuffer::new(320, 200);
    /// assert_eq!(buf.dimensions(), (320, 200));
    /// assert_eq!(buf.get(10, 10), Pixel::BLACK);
    /// ```
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Pixel::BLACK)
    }

    /// Creates a buffer with every pixel set to `pixel`.
    pub fn filled(width: u32, height: u32, pixel: Pixel) -> Self {
        let count = width as usize * height as usize;
        Self {
            width,
            height,
            pixels: vec![pixel; count],
        }
    }

    /// Creates a buffer from row-major pixel data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `pixels.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Pixel>) -> Result<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| Error::invalid_dimensions(width, height, "pixel count overflows"))?;
        if pixels.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} pixels, got {}", expected, pixels.len()),
            ));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Returns the buffer width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the buffer height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Returns `true` if the buffer has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Returns all pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Consumes the buffer, returning its row-major pixels.
    #[inline]
    pub fn into_pixels(self) -> Vec<Pixel> {
        self.pixels
    }

    /// Reads the pixel at `(x, y)`, clamping each coordinate to the grid.
    ///
    /// Reading from an empty buffer returns black.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Pixel {
        if self.is_empty() {
            return Pixel::BLACK;
        }
        let x = (x as i64).clamp(0, self.width as i64 - 1) as usize;
        let y = (y as i64).clamp(0, self.height as i64 - 1) as usize;
        self.pixels[y * self.width as usize + x]
    }

    /// Writes the pixel at `(x, y)` if it lies inside the grid.
    ///
    /// Out-of-range writes are silently ignored.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, pixel: Pixel) {
        if x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height {
            let idx = y as usize * self.width as usize + x as usize;
            self.pixels[idx] = pixel;
        }
    }

    /// Returns row `y` as a slice, or `None` if `y` is outside the grid.
    pub fn row(&self, y: u32) -> Option<&[Pixel]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.width as usize;
        Some(&self.pixels[start..start + self.width as usize])
    }

    /// Splits the storage into mutable chunks of `rows` whole rows each.
    ///
    /// Each chunk is paired with the index of its first row. The last chunk
    /// may be shorter. Chunks are disjoint, so they can be handed to separate
    /// workers.
    pub fn row_chunks_mut(&mut self, rows: usize) -> impl Iterator<Item = (u32, &mut [Pixel])> + '_ {
        let rows = rows.max(1);
        let stride = (self.width as usize * rows).max(1);
        self.pixels
            .chunks_mut(stride)
            .enumerate()
            .map(move |(i, chunk)| ((i * rows) as u32, chunk))
    }

    /// Parallel version of [`row_chunks_mut`](Self::row_chunks_mut).
    #[cfg(feature = "parallel")]
    pub fn par_row_chunks_mut(
        &mut self,
        rows: usize,
    ) -> impl IndexedParallelIterator<Item = (u32, &mut [Pixel])> + '_ {
        let rows = rows.max(1);
        let stride = (self.width as usize * rows).max(1);
        self.pixels
            .par_chunks_mut(stride)
            .enumerate()
            .map(move |(i, chunk)| ((i * rows) as u32, chunk))
    }

    /// Overwrites every pixel with `pixel`.
    pub fn fill(&mut self, pixel: Pixel) {
        #[cfg(feature = "parallel")]
        self.pixels.par_iter_mut().for_each(|px| *px = pixel);

        #[cfg(not(feature = "parallel"))]
        self.pixels.iter_mut().for_each(|px| *px = pixel);
    }

    /// Overwrites every pixel with the color `(r, g, b)`.
    #[inline]
    pub fn fill_rgb(&mut self, r: u8, g: u8, b: u8) {
        self.fill(Pixel::new(r, g, b));
    }

    /// Iterates over all pixels with their coordinates.
    ///
    /// ```rust
    /// use imgscale_core::{Pixel, PixelBuffer};
    ///
    /// let buf = PixelBuffer::filled(3, 2, Pixel::WHITE);
    /// for (_, _, px) in buf.iter() {
    ///     assert_eq!(px, Pixel::WHITE);
    /// }
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32, Pixel)> + '_ {
        let width = self.width.max(1) as usize;
        self.pixels
            .iter()
            .enumerate()
            .map(move |(i, px)| ((i % width) as u32, (i / width) as u32, *px))
    }
}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}
