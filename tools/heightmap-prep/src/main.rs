//! heightmap-prep: heightmap conversion, synthesis, and contour export.
//!
//! Usage:
//!   heightmap-prep convert --input terrain.png --output terrain.r16
//!   heightmap-prep synthetic --size 256 --seed 42 --output synth.r16
//!   heightmap-prep contours --input terrain.r16 --levels 20 --output contours.json
//!   heightmap-prep stats --input terrain.r16 --scale 10.61,10.61,1.33

use std::path::{Path, PathBuf};
use std::process;

use rand::Rng;
use serde::Serialize;

use terrascan_core::config::ColorScheme;
use terrascan_core::constants::{DEFAULT_CONTOUR_LEVELS, DEFAULT_SYNTH_SIZE};
use terrascan_core::types::PhysicalScale;
use terrascan_terrain::contour::{extract_contours, ContourSet};
use terrascan_terrain::grid::HeightmapGrid;
use terrascan_terrain::levels::{plan_highlight_levels, plan_levels};
use terrascan_terrain::raster::load_raster;
use terrascan_terrain::raw16::{load_raw16, write_raw16};
use terrascan_terrain::stats::{compute_stats, TerrainStats};
use terrascan_terrain::synth::TerrainSynth;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "convert" => cmd_convert(&args[2..]),
        "synthetic" => cmd_synthetic(&args[2..]),
        "contours" => cmd_contours(&args[2..]),
        "stats" => cmd_stats(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "heightmap-prep: TERRASCAN heightmap preprocessing tool\n\
         \n\
         Commands:\n\
         \n\
         convert   Convert an 8-bit raster heightmap to raw16\n\
         \n\
           --input <path>     Raster image to convert (PNG)\n\
           --output <path>    Output raw16 file path\n\
         \n\
         synthetic Generate fractal terrain and write it as raw16\n\
         \n\
           --size <N>         Grid side length (default: 256)\n\
           --seed <S>         Noise seed (default: random)\n\
           --output <path>    Output raw16 file path\n\
         \n\
         contours  Extract contour crossing points as JSON\n\
         \n\
           --input <path>     Heightmap (.r16/.raw16 or raster image)\n\
           --levels <N>       Number of contour levels (default: 20)\n\
           --scale <w,h,e>    Map scale in km: width,height,max-elevation\n\
           --scheme <name>    Color scheme: sci-fi, cyberpunk, military\n\
           --output <path>    Output JSON path (default: stdout)\n\
         \n\
         stats     Print the elevation scan report\n\
         \n\
           --input <path>     Heightmap (.r16/.raw16 or raster image)\n\
           --scale <w,h,e>    Map scale in km: width,height,max-elevation\n\
         \n\
         Examples:\n\
         \n\
           heightmap-prep synthetic --size 256 --seed 7 --output synth.r16\n\
           heightmap-prep contours --input synth.r16 --levels 20 --output contours.json\n"
    );
}

// --- Argument helpers ---

fn parse_value(args: &[String], flag: &str) -> Option<String> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
    }
    None
}

fn parse_path(args: &[String], flag: &str) -> Option<PathBuf> {
    parse_value(args, flag).map(PathBuf::from)
}

fn parse_number<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> T {
    match parse_value(args, flag) {
        Some(raw) => match raw.parse() {
            Ok(n) => n,
            Err(_) => {
                eprintln!("Error: invalid value for {flag}: {raw}");
                process::exit(1);
            }
        },
        None => default,
    }
}

fn parse_scale(args: &[String]) -> PhysicalScale {
    let Some(raw) = parse_value(args, "--scale") else {
        return PhysicalScale::default();
    };
    let parts: Vec<&str> = raw.split(',').collect();
    if parts.len() == 3 {
        if let (Ok(w), Ok(h), Ok(e)) = (parts[0].parse(), parts[1].parse(), parts[2].parse()) {
            return PhysicalScale::new(w, h, e);
        }
    }
    eprintln!("Error: --scale expects <width_km>,<height_km>,<max_elevation_km>");
    process::exit(1);
}

fn require_path(args: &[String], flag: &str) -> PathBuf {
    match parse_path(args, flag) {
        Some(p) => p,
        None => {
            eprintln!("Error: {flag} <path> is required");
            process::exit(1);
        }
    }
}

/// Load a heightmap, picking the decoder from the file extension.
fn load_grid(path: &Path) -> HeightmapGrid {
    let is_raw16 = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("r16") | Some("raw16") | Some("raw")
    );

    let result = if is_raw16 {
        load_raw16(path)
    } else {
        load_raster(path)
    };

    match result {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Error loading heightmap {}: {e}", path.display());
            process::exit(1);
        }
    }
}

// --- Convert command ---

fn cmd_convert(args: &[String]) {
    let input = require_path(args, "--input");
    let output = require_path(args, "--output");

    eprintln!("Loading raster {}...", input.display());
    let grid = match load_raster(&input) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error loading raster: {e}");
            process::exit(1);
        }
    };

    let (min, max) = grid.value_range();
    eprintln!(
        "Loaded: {}×{} grid, normalized range {min:.4}..{max:.4}",
        grid.width(),
        grid.height(),
    );

    eprintln!("Writing raw16 to {}...", output.display());
    match write_raw16(&grid, &output) {
        Ok(()) => {
            let file_size = std::fs::metadata(&output).map(|m| m.len()).unwrap_or(0);
            eprintln!("Done! Output: {} ({} bytes)", output.display(), file_size);
        }
        Err(e) => {
            eprintln!("Error writing raw16: {e}");
            process::exit(1);
        }
    }
}

// --- Synthetic command ---

fn cmd_synthetic(args: &[String]) {
    let size: u32 = parse_number(args, "--size", DEFAULT_SYNTH_SIZE);
    let seed: u32 = match parse_value(args, "--seed") {
        Some(raw) => match raw.parse() {
            Ok(s) => s,
            Err(_) => {
                eprintln!("Error: invalid value for --seed: {raw}");
                process::exit(1);
            }
        },
        None => rand::thread_rng().gen(),
    };
    let output = match parse_path(args, "--output") {
        Some(p) => p,
        None => PathBuf::from("terrain_synth.r16"),
    };

    eprintln!("Generating {size}×{size} fractal terrain (seed {seed})...");
    let grid = match TerrainSynth::new(seed).generate(size, size) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error generating terrain: {e}");
            process::exit(1);
        }
    };

    eprintln!("Writing raw16 to {}...", output.display());
    match write_raw16(&grid, &output) {
        Ok(()) => {
            let file_size = std::fs::metadata(&output).map(|m| m.len()).unwrap_or(0);
            eprintln!("Done! Output: {} ({} bytes)", output.display(), file_size);
        }
        Err(e) => {
            eprintln!("Error writing raw16: {e}");
            process::exit(1);
        }
    }
}

// --- Contours command ---

/// Render-ready contour export for the display layer.
#[derive(Serialize)]
struct ContourDocument {
    width: u32,
    height: u32,
    scheme: ColorScheme,
    stats: TerrainStats,
    /// Dense contour pass.
    contours: ContourSet,
    /// Sparse emphasized pass.
    highlights: ContourSet,
}

fn cmd_contours(args: &[String]) {
    let input = require_path(args, "--input");
    let level_count: usize = parse_number(args, "--levels", DEFAULT_CONTOUR_LEVELS);
    let scale = parse_scale(args);
    let scheme = match parse_value(args, "--scheme") {
        Some(name) => match ColorScheme::preset(&name) {
            Some(s) => s,
            None => {
                eprintln!("Error: unknown color scheme: {name}");
                process::exit(1);
            }
        },
        None => ColorScheme::default(),
    };

    let grid = load_grid(&input);
    eprintln!("Loaded: {}×{} grid", grid.width(), grid.height());

    let levels = match plan_levels(&grid, level_count) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error planning levels: {e}");
            process::exit(1);
        }
    };

    let contours = match extract_contours(&grid, &levels) {
        Ok(set) => set.scaled(&scale),
        Err(e) => {
            eprintln!("Error extracting contours: {e}");
            process::exit(1);
        }
    };

    let highlight_levels = match plan_highlight_levels(&grid) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error planning highlight levels: {e}");
            process::exit(1);
        }
    };
    let highlights = match extract_contours(&grid, &highlight_levels) {
        Ok(set) => set.scaled(&scale),
        Err(e) => {
            eprintln!("Error extracting highlight contours: {e}");
            process::exit(1);
        }
    };

    eprintln!(
        "Extracted {} crossing points across {} levels (+{} highlight levels)",
        contours.point_count(),
        contours.levels.len(),
        highlights.levels.len(),
    );

    let document = ContourDocument {
        width: grid.width(),
        height: grid.height(),
        scheme,
        stats: compute_stats(&grid, &scale),
        contours,
        highlights,
    };

    let json = match serde_json::to_string_pretty(&document) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing contours: {e}");
            process::exit(1);
        }
    };

    match parse_path(args, "--output") {
        Some(path) => match std::fs::write(&path, json) {
            Ok(()) => eprintln!("Done! Output: {}", path.display()),
            Err(e) => {
                eprintln!("Error writing {}: {e}", path.display());
                process::exit(1);
            }
        },
        None => println!("{json}"),
    }
}

// --- Stats command ---

fn cmd_stats(args: &[String]) {
    let input = require_path(args, "--input");
    let scale = parse_scale(args);

    let grid = load_grid(&input);
    let stats = compute_stats(&grid, &scale);
    println!("{}", stats.summary(grid.width(), grid.height()));
}
