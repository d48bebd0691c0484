//! Display-ready elevation statistics in physical units.

use serde::{Deserialize, Serialize};
use terrascan_core::types::PhysicalScale;

use crate::grid::HeightmapGrid;

/// Elevation statistics scaled to physical units.
///
/// Values carry full precision; rounding for display happens only in
/// [`TerrainStats::summary`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TerrainStats {
    pub min_elevation_m: f64,
    pub max_elevation_m: f64,
    pub elevation_range_m: f64,
    /// East-west extent echoed from the scale (km).
    pub map_width_km: f64,
    /// North-south extent echoed from the scale (km).
    pub map_height_km: f64,
}

/// Compute elevation statistics for `grid` under `scale`.
///
/// Normalized samples map to meters via `max_elevation_km * 1000`.
/// Infallible: a constructed grid always has at least one sample.
pub fn compute_stats(grid: &HeightmapGrid, scale: &PhysicalScale) -> TerrainStats {
    let (min, max) = grid.value_range();
    let max_elevation = scale.max_elevation_m();
    let min_elevation_m = min as f64 * max_elevation;
    let max_elevation_m = max as f64 * max_elevation;

    TerrainStats {
        min_elevation_m,
        max_elevation_m,
        elevation_range_m: max_elevation_m - min_elevation_m,
        map_width_km: scale.width_km,
        map_height_km: scale.height_km,
    }
}

impl TerrainStats {
    /// Multi-line scan report block for display overlays.
    pub fn summary(&self, width: u32, height: u32) -> String {
        format!(
            "MAX ELEVATION: {:.1}m\n\
             MIN ELEVATION: {:.1}m\n\
             ELEVATION RANGE: {:.1}m\n\
             MAP SIZE: {:.2}x{:.2} km\n\
             RESOLUTION: {width}x{height}",
            self.max_elevation_m,
            self.min_elevation_m,
            self.elevation_range_m,
            self.map_width_km,
            self.map_height_km,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_scaling() {
        let grid = HeightmapGrid::new(2, 2, vec![0.1, 0.9, 0.5, 0.5]).unwrap();
        let scale = PhysicalScale::new(12.0, 8.0, 5.0);
        let stats = compute_stats(&grid, &scale);

        assert!(
            (stats.min_elevation_m - 500.0).abs() < 1e-3,
            "0.1 of 5km should be 500m, got {}",
            stats.min_elevation_m
        );
        assert!(
            (stats.max_elevation_m - 4500.0).abs() < 1e-3,
            "0.9 of 5km should be 4500m, got {}",
            stats.max_elevation_m
        );
        assert!(
            (stats.elevation_range_m - 4000.0).abs() < 1e-3,
            "range should be 4000m, got {}",
            stats.elevation_range_m
        );
        assert_eq!(stats.map_width_km, 12.0);
        assert_eq!(stats.map_height_km, 8.0);
    }

    #[test]
    fn test_flat_grid_has_zero_range() {
        let grid = HeightmapGrid::new(2, 2, vec![0.4; 4]).unwrap();
        let stats = compute_stats(&grid, &PhysicalScale::new(1.0, 1.0, 2.0));
        assert_eq!(stats.min_elevation_m, stats.max_elevation_m);
        assert_eq!(stats.elevation_range_m, 0.0);
    }

    #[test]
    fn test_summary_formatting() {
        let grid = HeightmapGrid::new(2, 2, vec![0.0, 1.0, 0.5, 0.5]).unwrap();
        let stats = compute_stats(&grid, &PhysicalScale::new(10.61, 10.61, 1.33));
        let report = stats.summary(500, 500);

        assert_eq!(
            report,
            "MAX ELEVATION: 1330.0m\n\
             MIN ELEVATION: 0.0m\n\
             ELEVATION RANGE: 1330.0m\n\
             MAP SIZE: 10.61x10.61 km\n\
             RESOLUTION: 500x500"
        );
    }
}
