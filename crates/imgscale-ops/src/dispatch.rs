//! Filter dispatch over a pixel buffer.
//!
//! [`apply`] runs one [`FilterDescriptor`] against a source buffer:
//!
//! 1. allocate the destination at the declared scale,
//! 2. split the source rows into contiguous ranges, one per task,
//! 3. call the transform for every source pixel of every range,
//! 4. join and return the destination.
//!
//! Source pixel `(x, y)` owns the destination block starting at
//! `(x * scale_x, y * scale_y)`. A task owns all destination rows produced
//! by its source rows and receives them as a [`Band`]; writes that fall
//! outside the band are dropped, exactly like an out-of-range
//! [`PixelBuffer::set`].
//!
//! # Example
//!
//! ```rust
//! use imgscale_core::{Pixel, PixelBuffer};
//! use imgscale_ops::{dispatch, FilterDescriptor};
//!
//! let double = FilterDescriptor::scaling("Double", 2, 2, |src, at, out| {
//!     let px = src.get(at.src_x, at.src_y);
//!     for dy in 0..2 {
//!         for dx in 0..2 {
//!             out.set(at.dst_x + dx, at.dst_y + dy, px);
//!         }
//!     }
//! });
//!
//! let src = PixelBuffer::filled(3, 2, Pixel::WHITE);
//! let out = dispatch::apply(&double, &src);
//! assert_eq!(out.dimensions(), (6, 4));
//! assert_eq!(out.get(5, 3), Pixel::WHITE);
//! ```

use crate::channel;
use crate::descriptor::{FilterDescriptor, FilterKind};
use crate::parallel::{for_each_band, rows_per_task};
use imgscale_core::{Pixel, PixelBuffer};
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Where a transform call sits in the source and destination grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Source column.
    pub src_x: i32,
    /// Source row.
    pub src_y: i32,
    /// Destination column of the block's top-left pixel (`src_x * scale_x`).
    pub dst_x: i32,
    /// Destination row of the block's top-left pixel (`src_y * scale_y`).
    pub dst_y: i32,
    /// Horizontal scale factor.
    pub scale_x: u32,
    /// Vertical scale factor.
    pub scale_y: u32,
}

/// Mutable window onto a contiguous run of destination rows.
///
/// Coordinates are absolute destination coordinates. Writes outside the
/// band's rows or the destination width are ignored.
pub struct Band<'a> {
    pixels: &'a mut [Pixel],
    width: u32,
    first_row: u32,
    rows: u32,
}

impl<'a> Band<'a> {
    /// Wraps `pixels`, which hold whole rows of a `width`-wide buffer
    /// starting at `first_row`.
    pub fn new(pixels: &'a mut [Pixel], width: u32, first_row: u32) -> Self {
        let rows = if width == 0 {
            0
        } else {
            (pixels.len() / width as usize) as u32
        };
        Self {
            pixels,
            width,
            first_row,
            rows,
        }
    }

    /// Destination width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// First destination row covered by this band.
    #[inline]
    pub fn first_row(&self) -> u32 {
        self.first_row
    }

    /// Number of rows covered.
    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < self.first_row as i32 {
            return None;
        }
        let (x, row) = (x as u32, (y as u32) - self.first_row);
        if x >= self.width || row >= self.rows {
            return None;
        }
        Some(row as usize * self.width as usize + x as usize)
    }

    /// Writes a destination pixel if `(x, y)` lies inside the band.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, pixel: Pixel) {
        if let Some(idx) = self.index(x, y) {
            self.pixels[idx] = pixel;
        }
    }

    /// Reads back a destination pixel written by this band.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Pixel> {
        self.index(x, y).map(|idx| self.pixels[idx])
    }

    /// Writes a `scale_x * scale_y` block at the placement's destination
    /// origin, taking `cells` in row-major order.
    ///
    /// Missing cells leave their pixels untouched; extra cells are ignored.
    pub fn write_block(&mut self, at: Placement, cells: &[Pixel]) {
        let sx = at.scale_x as usize;
        if sx == 0 {
            return;
        }
        for (i, px) in cells.iter().take(sx * at.scale_y as usize).enumerate() {
            let dx = (i % sx) as i32;
            let dy = (i / sx) as i32;
            self.set(at.dst_x + dx, at.dst_y + dy, *px);
        }
    }
}

/// Applies `filter` to `src`, returning a new buffer.
///
/// The source is never modified. Mapping filters run as a channel view;
/// scaling filters are dispatched across row ranges and joined before
/// returning.
pub fn apply(filter: &FilterDescriptor, src: &PixelBuffer) -> PixelBuffer {
    match filter.kind() {
        FilterKind::Map(f) => {
            debug!(filter = filter.name(), w = src.width(), h = src.height(), "mapping");
            channel::map_pixels(src, |px| f(px))
        }
        FilterKind::Scale(transform) => {
            let (sx, sy) = filter.scale();
            let mut dest = filter.create_destination(src);
            let rows = rows_per_task(src.height());
            debug!(
                filter = filter.name(),
                src_w = src.width(),
                src_h = src.height(),
                dst_w = dest.width(),
                dst_h = dest.height(),
                rows_per_task = rows,
                "scaling"
            );
            if sy == 0 {
                return dest;
            }

            let dest_width = dest.width();
            let src_width = src.width() as i32;
            let src_height = src.height();
            let band_rows = rows * sy as usize;

            for_each_band(&mut dest, band_rows, |first_row, pixels| {
                let mut band = Band::new(pixels, dest_width, first_row);
                let start = first_row / sy;
                let end = (start + rows as u32).min(src_height);
                for src_y in start..end {
                    for src_x in 0..src_width {
                        let at = Placement {
                            src_x,
                            src_y: src_y as i32,
                            dst_x: src_x * sx as i32,
                            dst_y: (src_y * sy) as i32,
                            scale_x: sx,
                            scale_y: sy,
                        };
                        transform(src, at, &mut band);
                    }
                }
            });
            dest
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn identity() -> FilterDescriptor {
        FilterDescriptor::scaling("Identity", 1, 1, |src, at, out| {
            out.set(at.dst_x, at.dst_y, src.get(at.src_x, at.src_y));
        })
    }

    fn nearest(sx: u32, sy: u32) -> FilterDescriptor {
        FilterDescriptor::scaling("Nearest", sx, sy, |src, at, out| {
            let px = src.get(at.src_x, at.src_y);
            let cells = vec![px; (at.scale_x * at.scale_y) as usize];
            out.write_block(at, &cells);
        })
    }

    fn quad() -> PixelBuffer {
        PixelBuffer::from_pixels(
            2,
            2,
            vec![
                Pixel::new(255, 0, 0),
                Pixel::new(0, 255, 0),
                Pixel::new(0, 0, 255),
                Pixel::new(255, 255, 255),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_identity_transform_copies_source() {
        let src = quad();
        let out = apply(&identity(), &src);
        assert_eq!(out, src);
    }

    #[test]
    fn test_scaled_dimensions() {
        let src = PixelBuffer::new(7, 3);
        assert_eq!(apply(&nearest(2, 2), &src).dimensions(), (14, 6));
        assert_eq!(apply(&nearest(2, 4), &src).dimensions(), (14, 12));
        assert_eq!(apply(&nearest(3, 1), &src).dimensions(), (21, 3));
    }

    #[test]
    fn test_nearest_fills_blocks() {
        let src = quad();
        let out = apply(&nearest(3, 2), &src);
        for (x, y, px) in out.iter() {
            assert_eq!(px, src.get(x as i32 / 3, y as i32 / 2));
        }
    }

    #[test]
    fn test_transform_called_once_per_source_pixel() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let filter = FilterDescriptor::scaling("Count", 2, 2, move |_, _, _| {
            counter.fetch_add(1, Ordering::Relaxed);
        });
        let src = PixelBuffer::new(33, 47);
        let _ = apply(&filter, &src);
        assert_eq!(calls.load(Ordering::Relaxed), 33 * 47);
    }

    #[test]
    fn test_placement_coordinates() {
        let filter = FilterDescriptor::scaling("Coords", 2, 3, |_, at, out| {
            assert_eq!(at.dst_x, at.src_x * 2);
            assert_eq!(at.dst_y, at.src_y * 3);
            let tag = Pixel::new(at.src_x as u8, at.src_y as u8, 1);
            out.set(at.dst_x, at.dst_y, tag);
        });
        let out = apply(&filter, &PixelBuffer::new(9, 11));
        assert_eq!(out.get(8 * 2, 10 * 3), Pixel::new(8, 10, 1));
        assert_eq!(out.get(4 * 2, 5 * 3), Pixel::new(4, 5, 1));
        assert_eq!(out.get(1, 1), Pixel::BLACK);
    }

    #[test]
    fn test_writes_outside_band_are_dropped() {
        // every call tries to scribble on row 0 and past the right edge
        let filter = FilterDescriptor::scaling("Stray", 1, 1, |src, at, out| {
            out.set(at.dst_x, at.dst_y, src.get(at.src_x, at.src_y));
            out.set(-1, at.dst_y, Pixel::WHITE);
            out.set(out.width() as i32, at.dst_y, Pixel::WHITE);
        });
        let src = PixelBuffer::new(4, 64);
        let out = apply(&filter, &src);
        assert_eq!(out, src);
    }

    #[test]
    fn test_mapping_filter() {
        let filter = FilterDescriptor::mapping("Swap", |px| Pixel::new(px.b(), px.g(), px.r()));
        let out = apply(&filter, &quad());
        assert_eq!(out.get(0, 0), Pixel::new(0, 0, 255));
        assert_eq!(out.get(0, 1), Pixel::new(255, 0, 0));
    }

    #[test]
    fn test_empty_source() {
        let out = apply(&nearest(2, 2), &PixelBuffer::new(0, 5));
        assert_eq!(out.dimensions(), (0, 10));
        let out = apply(&nearest(2, 2), &PixelBuffer::new(5, 0));
        assert_eq!(out.dimensions(), (10, 0));
    }

    #[test]
    fn test_band_bounds() {
        let mut pixels = vec![Pixel::BLACK; 8];
        let mut band = Band::new(&mut pixels, 4, 10);
        assert_eq!(band.rows(), 2);
        band.set(3, 11, Pixel::WHITE);
        band.set(0, 9, Pixel::WHITE);
        band.set(0, 12, Pixel::WHITE);
        assert_eq!(band.get(3, 11), Some(Pixel::WHITE));
        assert_eq!(band.get(0, 9), None);
        assert_eq!(pixels.iter().filter(|p| **p == Pixel::WHITE).count(), 1);
    }
}
