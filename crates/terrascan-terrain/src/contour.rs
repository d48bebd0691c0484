//! Contour extraction: iso-elevation crossing points from a heightmap.
//!
//! Walks the grid cells to find where the surface crosses each
//! threshold and emits interpolated crossing points in fractional grid
//! coordinates. Points are not stitched into polylines; connecting
//! them into visible lines is the consuming renderer's concern.

use serde::{Deserialize, Serialize};
use terrascan_core::constants::MIN_CONTOUR_RESOLUTION;
use terrascan_core::types::{ElevationLevel, GridPoint, PhysicalScale};

use crate::error::TerrainError;
use crate::grid::HeightmapGrid;

/// Crossing points for a single threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelContour {
    pub level: ElevationLevel,
    /// Interpolated crossing points in cell scan order. Empty when the
    /// threshold lies outside the grid's value range.
    pub points: Vec<GridPoint>,
}

/// Extraction result: one entry per requested threshold, input order.
/// Produced fresh on every call; there is no incremental update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContourSet {
    pub levels: Vec<LevelContour>,
}

impl ContourSet {
    /// Total crossing points across all levels.
    pub fn point_count(&self) -> usize {
        self.levels.iter().map(|entry| entry.points.len()).sum()
    }

    /// Annotate every level with its physical elevation under `scale`.
    pub fn scaled(mut self, scale: &PhysicalScale) -> Self {
        for entry in &mut self.levels {
            entry.level = entry.level.scaled(scale);
        }
        self
    }
}

/// Extract iso-elevation crossing points for each threshold in `levels`.
///
/// Cells are scanned row-major, and only the two forward edges of each
/// cell's top-left sample are tested — right along the row and down
/// along the column — so an edge shared by neighboring cells is
/// visited exactly once. A crossing exists when one endpoint is at or
/// below the threshold and the other is above it; a sample exactly at
/// the threshold counts as below. The crossing position is linearly
/// interpolated along the edge.
///
/// Thresholds outside the grid's observed range are not an error; they
/// produce empty point lists. Output is fully deterministic: levels in
/// input order, points in scan order, horizontal edge before vertical.
pub fn extract_contours(grid: &HeightmapGrid, levels: &[f32]) -> Result<ContourSet, TerrainError> {
    let width = grid.width();
    let height = grid.height();
    if width < MIN_CONTOUR_RESOLUTION || height < MIN_CONTOUR_RESOLUTION {
        return Err(TerrainError::InsufficientResolution { width, height });
    }

    let levels = levels
        .iter()
        .map(|&level| LevelContour {
            level: ElevationLevel::new(level),
            points: scan_level(grid, level),
        })
        .collect();

    Ok(ContourSet { levels })
}

/// Crossing points for one threshold over the whole grid.
fn scan_level(grid: &HeightmapGrid, level: f32) -> Vec<GridPoint> {
    let width = grid.width();
    let height = grid.height();
    let mut points = Vec::new();

    for y in 0..height - 1 {
        for x in 0..width - 1 {
            let origin = grid.value_at(x, y);
            let right = grid.value_at(x + 1, y);
            let down = grid.value_at(x, y + 1);

            if let Some(t) = edge_crossing(origin, right, level) {
                points.push(GridPoint::new(x as f32 + t, y as f32));
            }
            if let Some(t) = edge_crossing(origin, down, level) {
                points.push(GridPoint::new(x as f32, y as f32 + t));
            }
        }
    }

    points
}

/// Fractional crossing position along an edge, if the edge straddles
/// `level`. Values equal to the threshold classify as below, so an
/// edge with equal endpoints never straddles and the division cannot
/// hit a zero denominator.
fn edge_crossing(v0: f32, v1: f32, level: f32) -> Option<f32> {
    let below0 = v0 <= level;
    let below1 = v1 <= level;
    if below0 == below1 {
        return None;
    }
    Some((level - v0) / (v1 - v0))
}
