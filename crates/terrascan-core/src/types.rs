//! Fundamental geometric and scale types.

use serde::{Deserialize, Serialize};

use crate::constants::METERS_PER_KM;

/// Fractional coordinate on a heightmap grid.
/// x runs left-to-right in [0, width-1], y top-to-bottom in [0, height-1].
/// Crossing points land between samples, hence the fractional parts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GridPoint {
    pub x: f32,
    pub y: f32,
}

impl GridPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A single contour threshold in the grid's normalized [0,1] value space,
/// optionally paired with its physical elevation once a scale is known.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElevationLevel {
    /// Threshold in normalized value space.
    pub normalized: f32,
    /// Physical elevation in meters, when a scale has been applied.
    pub meters: Option<f64>,
}

impl ElevationLevel {
    /// A bare threshold with no physical pairing.
    pub fn new(normalized: f32) -> Self {
        Self {
            normalized,
            meters: None,
        }
    }

    /// Pair the threshold with its physical elevation under `scale`.
    pub fn scaled(self, scale: &PhysicalScale) -> Self {
        Self {
            meters: Some(self.normalized as f64 * scale.max_elevation_m()),
            ..self
        }
    }
}

/// Physical map scale, user-entered in kilometers.
///
/// Grid values are normalized to [0,1]; a sample's physical elevation
/// is its normalized value times `max_elevation_km * 1000`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalScale {
    /// East-west map extent (km).
    pub width_km: f64,
    /// North-south map extent (km).
    pub height_km: f64,
    /// Elevation represented by a normalized value of 1.0 (km).
    pub max_elevation_km: f64,
}

impl PhysicalScale {
    pub fn new(width_km: f64, height_km: f64, max_elevation_km: f64) -> Self {
        Self {
            width_km,
            height_km,
            max_elevation_km,
        }
    }

    /// Elevation represented by a normalized value of 1.0, in meters.
    pub fn max_elevation_m(&self) -> f64 {
        self.max_elevation_km * METERS_PER_KM
    }
}

impl Default for PhysicalScale {
    /// Scale of the reference map the original survey shipped with.
    fn default() -> Self {
        Self {
            width_km: 10.61,
            height_km: 10.61,
            max_elevation_km: 1.33,
        }
    }
}
