//! Cross-module pipeline tests: source → levels → contours → stats.

use terrascan_core::types::PhysicalScale;

use crate::contour::extract_contours;
use crate::levels::{plan_highlight_levels, plan_levels};
use crate::raw16::{decode_raw16, encode_raw16};
use crate::stats::compute_stats;
use crate::synth::TerrainSynth;

#[test]
fn test_synthetic_pipeline() {
    let grid = TerrainSynth::new(1234).generate(48, 48).unwrap();

    let levels = plan_levels(&grid, 10).unwrap();
    assert_eq!(levels.len(), 10);

    let contours = extract_contours(&grid, &levels).unwrap();
    assert_eq!(contours.levels.len(), 10);
    assert!(
        contours.point_count() > 0,
        "fBm terrain should cross interior levels somewhere"
    );

    // The last planned level equals the grid maximum, and no sample is
    // strictly above it, so it can never produce a crossing.
    let max_level = contours.levels.last().unwrap();
    assert!(
        max_level.points.is_empty(),
        "no sample is strictly above the grid maximum"
    );
}

#[test]
fn test_raw16_reload_reproduces_contours() {
    let grid = TerrainSynth::new(77).generate(32, 32).unwrap();
    let levels = plan_levels(&grid, 5).unwrap();
    let before = extract_contours(&grid, &levels).unwrap();

    // Round-trip through the wire format. Quantization moves each
    // sample by at most half a u16 step, so re-plan levels against the
    // reloaded grid rather than reusing the originals.
    let reloaded = decode_raw16(&encode_raw16(&grid)).unwrap();
    let levels2 = plan_levels(&reloaded, 5).unwrap();
    let after = extract_contours(&reloaded, &levels2).unwrap();

    assert_eq!(before.levels.len(), after.levels.len());
    for (a, b) in before.levels.iter().zip(after.levels.iter()) {
        assert!(
            (a.level.normalized - b.level.normalized).abs() < 2.0 / 65535.0,
            "levels should survive quantization: {} vs {}",
            a.level.normalized,
            b.level.normalized
        );
    }
}

#[test]
fn test_flat_grid_end_to_end() {
    // 3x3 all-0.2 grid: one planned level, no crossings anywhere.
    let grid = crate::grid::HeightmapGrid::new(3, 3, vec![0.2; 9]).unwrap();

    let levels = plan_levels(&grid, 5).unwrap();
    assert_eq!(levels, vec![0.2]);

    let contours = extract_contours(&grid, &levels).unwrap();
    assert_eq!(contours.levels.len(), 1);
    assert!(contours.levels[0].points.is_empty());

    let highlights = plan_highlight_levels(&grid).unwrap();
    assert_eq!(highlights, vec![0.2]);
}

#[test]
fn test_stats_and_scaled_contours_agree() {
    let grid = TerrainSynth::new(9).generate(24, 24).unwrap();
    let scale = PhysicalScale::new(10.0, 10.0, 2.5);

    let stats = compute_stats(&grid, &scale);
    let levels = plan_levels(&grid, 3).unwrap();
    let contours = extract_contours(&grid, &levels).unwrap().scaled(&scale);

    // The lowest planned level is the grid minimum; scaled, it must
    // match the stats' minimum elevation.
    let lowest = contours.levels[0].level.meters.unwrap();
    assert!(
        (lowest - stats.min_elevation_m).abs() < 1e-3,
        "lowest level {lowest}m vs stats min {}m",
        stats.min_elevation_m
    );

    let highest = contours.levels[2].level.meters.unwrap();
    assert!(
        (highest - stats.max_elevation_m).abs() < 1e-3,
        "highest level {highest}m vs stats max {}m",
        stats.max_elevation_m
    );
}
