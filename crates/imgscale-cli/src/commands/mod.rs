//! CLI command implementations

pub mod apply;
pub mod info;
pub mod list;

use anyhow::{Context, Result};
use imgscale_core::PixelBuffer;
use std::path::Path;

use crate::RasterArgs;

/// Load a headerless raster from path
pub fn load_raster(path: &Path, geometry: &RasterArgs) -> Result<PixelBuffer> {
    imgscale_io::read_raw(path, geometry.width, geometry.height, geometry.stride())
        .with_context(|| format!("Failed to load: {}", path.display()))
}

/// Save a raster to path
pub fn save_raster(path: &Path, buffer: &PixelBuffer, stride: usize) -> Result<()> {
    imgscale_io::write_raw(path, buffer, stride)
        .with_context(|| format!("Failed to save: {}", path.display()))
}
