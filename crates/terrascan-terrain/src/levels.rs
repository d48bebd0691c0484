//! Level planning: evenly spaced thresholds over the observed range.

use terrascan_core::constants::HIGHLIGHT_LEVEL_COUNT;

use crate::error::TerrainError;
use crate::grid::HeightmapGrid;

/// Derive `level_count` evenly spaced thresholds spanning the grid's
/// observed [min, max], inclusive on both ends, ascending.
///
/// A flat grid collapses to a single level at the flat value whatever
/// the requested count — spacing is undefined when the range is zero.
/// A count of 1 likewise returns just the minimum.
pub fn plan_levels(grid: &HeightmapGrid, level_count: usize) -> Result<Vec<f32>, TerrainError> {
    if level_count < 1 {
        return Err(TerrainError::InvalidLevelCount {
            requested: level_count,
        });
    }

    let (min, max) = grid.value_range();
    if max == min || level_count == 1 {
        return Ok(vec![min]);
    }

    let range = max - min;
    let last = (level_count - 1) as f32;
    Ok((0..level_count)
        .map(|i| min + (i as f32 / last) * range)
        .collect())
}

/// Sparse emphasized thresholds for the highlight contour pass.
pub fn plan_highlight_levels(grid: &HeightmapGrid) -> Result<Vec<f32>, TerrainError> {
    plan_levels(grid, HIGHLIGHT_LEVEL_COUNT)
}
