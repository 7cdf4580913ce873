//! Packed 24-bit raster conversion.
//!
//! The external layout is row-major, top row first. Each row holds `width`
//! pixels of 3 bytes in B, G, R order, followed by padding up to `stride`
//! bytes. The padding of the final row may be omitted; any other length is
//! rejected.
//!
//! Conversion is strictly sequential: one pass, left to right, top to
//! bottom.
//!
//! # Example
//!
//! ```rust
//! use imgscale_io::raster;
//!
//! let buf = raster::from_raster(&[10, 20, 30, 0], 1, 1, 4).unwrap();
//! assert_eq!(buf.get(0, 0).to_array(), [30, 20, 10]);
//!
//! assert_eq!(raster::to_raster(&buf), vec![10, 20, 30, 0]);
//! ```

use crate::{IoError, IoResult};
use imgscale_core::{Pixel, PixelBuffer};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Bytes per pixel.
pub const BYTES_PER_PIXEL: usize = 3;

/// Row alignment used by [`to_raster`].
pub const DEFAULT_ALIGNMENT: usize = 4;

/// Smallest stride of at least `width * 3` bytes that is a multiple of
/// `alignment`. An alignment of 0 or 1 means unpadded rows.
///
/// ```rust
/// use imgscale_io::raster::aligned_stride;
///
/// assert_eq!(aligned_stride(1, 4), 4);
/// assert_eq!(aligned_stride(4, 4), 12);
/// assert_eq!(aligned_stride(5, 1), 15);
/// ```
pub fn aligned_stride(width: u32, alignment: usize) -> usize {
    let row = width as usize * BYTES_PER_PIXEL;
    let align = alignment.max(1);
    row.div_ceil(align) * align
}

fn check_stride(width: u32, stride: usize) -> IoResult<()> {
    let min = width as usize * BYTES_PER_PIXEL;
    if stride < min {
        return Err(IoError::Stride { stride, width, min });
    }
    Ok(())
}

/// Accepted raster lengths for `height` rows: last row unpadded, and every
/// row padded. `None` if the geometry overflows.
fn accepted_lens(width: u32, height: u32, stride: usize) -> Option<(usize, usize)> {
    if height == 0 {
        return Some((0, 0));
    }
    let unpadded = stride
        .checked_mul(height as usize - 1)?
        .checked_add(width as usize * BYTES_PER_PIXEL)?;
    let padded = stride.checked_mul(height as usize)?;
    Some((unpadded, padded))
}

/// Imports a packed BGR raster.
///
/// `bytes` must hold exactly `height` rows: either `stride * height` bytes,
/// or the same without the final row's padding.
///
/// # Errors
///
/// - [`IoError::Stride`] if `stride < width * 3`
/// - [`IoError::Size`] if `bytes` does not match the geometry or the
///   geometry overflows
pub fn from_raster(bytes: &[u8], width: u32, height: u32, stride: usize) -> IoResult<PixelBuffer> {
    check_stride(width, stride)?;
    let size_error = || IoError::Size {
        width,
        height,
        stride,
        actual: bytes.len(),
    };
    let (unpadded, padded) = accepted_lens(width, height, stride).ok_or_else(size_error)?;
    if bytes.len() != unpadded && bytes.len() != padded {
        return Err(size_error());
    }
    let count = (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(size_error)?;
    debug!(width, height, stride, "importing raster");

    let row_bytes = width as usize * BYTES_PER_PIXEL;
    let mut pixels = Vec::with_capacity(count);
    for y in 0..height as usize {
        let start = y * stride;
        for bgr in bytes[start..start + row_bytes].chunks_exact(BYTES_PER_PIXEL) {
            pixels.push(Pixel::new(bgr[2], bgr[1], bgr[0]));
        }
    }
    Ok(PixelBuffer::from_pixels(width, height, pixels)?)
}

fn export(buffer: &PixelBuffer, stride: usize) -> Vec<u8> {
    let (width, height) = buffer.dimensions();
    let row_bytes = width as usize * BYTES_PER_PIXEL;
    let mut out = vec![0u8; stride * height as usize];
    for y in 0..height {
        let Some(row) = buffer.row(y) else { break };
        let start = y as usize * stride;
        for (bgr, px) in out[start..start + row_bytes]
            .chunks_exact_mut(BYTES_PER_PIXEL)
            .zip(row)
        {
            bgr.copy_from_slice(&[px.b(), px.g(), px.r()]);
        }
    }
    out
}

/// Exports to a packed BGR raster with rows padded to
/// [`DEFAULT_ALIGNMENT`] bytes.
pub fn to_raster(buffer: &PixelBuffer) -> Vec<u8> {
    export(buffer, aligned_stride(buffer.width(), DEFAULT_ALIGNMENT))
}

/// Exports to a packed BGR raster with an explicit stride. Padding bytes
/// are zero.
///
/// # Errors
///
/// - [`IoError::Stride`] if `stride < width * 3`
/// - [`IoError::Size`] if the output size overflows
pub fn to_raster_with_stride(buffer: &PixelBuffer, stride: usize) -> IoResult<Vec<u8>> {
    let (width, height) = buffer.dimensions();
    check_stride(width, stride)?;
    if stride.checked_mul(height as usize).is_none() {
        return Err(IoError::Size {
            width,
            height,
            stride,
            actual: 0,
        });
    }
    Ok(export(buffer, stride))
}

/// Reads a headerless raster file.
pub fn read_raw<P: AsRef<Path>>(path: P, width: u32, height: u32, stride: usize) -> IoResult<PixelBuffer> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading raw raster");
    let bytes = std::fs::read(path)?;
    from_raster(&bytes, width, height, stride)
}

/// Writes a headerless raster file with every row padded to `stride`.
pub fn write_raw<P: AsRef<Path>>(path: P, buffer: &PixelBuffer, stride: usize) -> IoResult<()> {
    let path = path.as_ref();
    let bytes = to_raster_with_stride(buffer, stride)?;
    debug!(path = %path.display(), bytes = bytes.len(), "writing raw raster");
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}
