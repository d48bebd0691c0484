//! 8-bit raster heightmap ingestion.
//!
//! Elevation is taken from the red channel of each pixel and
//! normalized by 255. Grayscale images are the common case (the red
//! channel equals the luma there); color images are accepted and read
//! the same way.

use std::path::Path;

use tracing::debug;

use crate::error::DecodeError;
use crate::grid::HeightmapGrid;

/// Normalization divisor for 8-bit samples.
const U8_SCALE: f32 = u8::MAX as f32;

/// Load a heightmap from a raster image file.
pub fn load_raster(path: &Path) -> Result<HeightmapGrid, DecodeError> {
    let data = std::fs::read(path)?;
    decode_raster(&data)
}

/// Decode raster image bytes into a normalized grid.
pub fn decode_raster(data: &[u8]) -> Result<HeightmapGrid, DecodeError> {
    let img = image::load_from_memory(data)?;
    let width = img.width();
    let height = img.height();
    if width == 0 || height == 0 {
        return Err(DecodeError::ZeroDimension { width, height });
    }

    let rgba = img.to_rgba8();
    let values = rgba
        .pixels()
        .map(|pixel| pixel.0[0] as f32 / U8_SCALE)
        .collect();

    debug!(width, height, "decoded raster heightmap");
    Ok(HeightmapGrid::from_parts(width, height, values))
}
