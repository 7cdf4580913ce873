//! Apply command
//!
//! Reads a raster, runs one filter over it and writes the result.

use crate::ApplyArgs;
use anyhow::{bail, Result};
use imgscale_io::raster::{aligned_stride, DEFAULT_ALIGNMENT};
use tracing::{debug, info};

pub fn run(args: ApplyArgs, verbose: bool) -> Result<()> {
    let src = super::load_raster(&args.input, &args.raster)?;
    debug!(w = src.width(), h = src.height(), "loaded {}", args.input.display());

    let Some(out) = imgscale_ops::filter_image(&src, &args.filter) else {
        bail!("unknown filter: {} (run `imgscale list`)", args.filter);
    };

    let stride = args
        .out_stride
        .unwrap_or_else(|| aligned_stride(out.width(), DEFAULT_ALIGNMENT));
    super::save_raster(&args.output, &out, stride)?;

    info!(filter = %args.filter, "{}x{} -> {}x{}", src.width(), src.height(), out.width(), out.height());
    if verbose {
        println!(
            "{}: {}x{} -> {}x{} (stride {})",
            args.filter,
            src.width(),
            src.height(),
            out.width(),
            out.height(),
            stride
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RasterArgs;
    use imgscale_core::{Pixel, PixelBuffer};
    use tempfile::tempdir;

    fn args(dir: &std::path::Path, filter: &str) -> ApplyArgs {
        ApplyArgs {
            input: dir.join("in.bgr"),
            output: dir.join("out.bgr"),
            raster: RasterArgs {
                width: 3,
                height: 2,
                stride: None,
            },
            filter: filter.to_string(),
            out_stride: None,
        }
    }

    #[test]
    fn test_apply_writes_scaled_raster() {
        let dir = tempdir().unwrap();
        let src = PixelBuffer::filled(3, 2, Pixel::new(9, 8, 7));
        imgscale_io::write_raw(dir.path().join("in.bgr"), &src, 12).unwrap();

        run(args(dir.path(), "normal 2x"), false).unwrap();

        let out = imgscale_io::read_raw(dir.path().join("out.bgr"), 6, 4, 20).unwrap();
        assert!(out.pixels().iter().all(|px| *px == Pixel::new(9, 8, 7)));
    }

    #[test]
    fn test_apply_unknown_filter() {
        let dir = tempdir().unwrap();
        imgscale_io::write_raw(dir.path().join("in.bgr"), &PixelBuffer::new(3, 2), 12).unwrap();
        let err = run(args(dir.path(), "does-not-exist"), false).unwrap_err();
        assert!(err.to_string().contains("unknown filter"));
        assert!(!dir.path().join("out.bgr").exists());
    }
}
