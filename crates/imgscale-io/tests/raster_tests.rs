//! Integration tests for raw raster files.

use imgscale_core::{Pixel, PixelBuffer};
use imgscale_io::{aligned_stride, read_raw, write_raw, IoError};
use tempfile::tempdir;

fn gradient(width: u32, height: u32) -> PixelBuffer {
    let mut buf = PixelBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            buf.set(x as i32, y as i32, Pixel::new(x as u8 * 20, y as u8 * 30, 7));
        }
    }
    buf
}

#[test]
fn raw_file_round_trip_with_padding() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("frame.bgr");
    let src = gradient(5, 3);
    let stride = aligned_stride(5, 4);

    write_raw(&path, &src, stride).unwrap();
    assert_eq!(std::fs::metadata(&path).unwrap().len(), (stride * 3) as u64);

    let back = read_raw(&path, 5, 3, stride).unwrap();
    assert_eq!(back, src);
}

#[test]
fn raw_file_is_bgr() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("one.bgr");
    let src = PixelBuffer::filled(1, 1, Pixel::new(30, 20, 10));
    write_raw(&path, &src, 4).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), vec![10, 20, 30, 0]);
}

#[test]
fn truncated_file_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("short.bgr");
    std::fs::write(&path, [0u8; 20]).unwrap();
    let err = read_raw(&path, 4, 2, 12).unwrap_err();
    assert!(matches!(err, IoError::Size { actual: 20, .. }));
}

#[test]
fn oversized_file_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tall.bgr");
    write_raw(&path, &gradient(4, 3), 12).unwrap();
    // reading back with a smaller height must not crop silently
    let err = read_raw(&path, 4, 2, 12).unwrap_err();
    assert!(matches!(err, IoError::Size { actual: 36, height: 2, .. }));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = read_raw(dir.path().join("nope.bgr"), 1, 1, 3).unwrap_err();
    assert!(matches!(err, IoError::Io(_)));
}
