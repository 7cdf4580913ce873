//! Raster info command.
//!
//! Displays dimensions and mean luma/chroma of a raster.

use crate::InfoArgs;
use anyhow::Result;
use imgscale_core::PixelBuffer;
use imgscale_ops::channel::{self, Channel};

/// Mean of a grey channel view.
fn mean(view: &PixelBuffer) -> f64 {
    if view.is_empty() {
        return 0.0;
    }
    let sum: u64 = view.pixels().iter().map(|px| px.r() as u64).sum();
    sum as f64 / view.pixel_count() as f64
}

/// Mean Y, U and V of `image`.
fn yuv_means(image: &PixelBuffer) -> [(Channel, f64); 3] {
    [Channel::Y, Channel::U, Channel::V].map(|ch| (ch, mean(&channel::extract(image, ch))))
}

/// Runs the info command.
pub fn run(args: InfoArgs, verbose: bool) -> Result<()> {
    let image = super::load_raster(&args.input, &args.raster)?;

    println!("{}", args.input.display());
    println!("  Resolution: {}x{}", image.width(), image.height());
    println!("  Pixels:     {}", image.pixel_count());
    if verbose {
        println!("  Stride:     {}", args.raster.stride());
    }
    for (ch, value) in yuv_means(&image) {
        println!("  Mean {:<6}{:.2}", format!("{ch}:"), value);
    }
    Ok(())
}
