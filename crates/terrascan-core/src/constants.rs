//! Analysis constants and tuning parameters.

/// Meters per kilometer.
pub const METERS_PER_KM: f64 = 1000.0;

// --- Contouring ---

/// Default number of contour levels when the caller does not choose one.
pub const DEFAULT_CONTOUR_LEVELS: usize = 20;

/// Number of emphasized levels in the sparse highlight contour pass.
pub const HIGHLIGHT_LEVEL_COUNT: usize = 5;

/// Minimum grid side length required for contour extraction.
/// A single row or column has no interior edges to test.
pub const MIN_CONTOUR_RESOLUTION: u32 = 2;

// --- Synthetic terrain ---

/// Default synthetic grid side length.
pub const DEFAULT_SYNTH_SIZE: u32 = 256;

/// Default number of fBm octaves for synthetic terrain.
pub const DEFAULT_SYNTH_OCTAVES: u32 = 5;

/// Default base spatial frequency for synthetic terrain.
/// Chosen so a 256-square grid spans a few large landforms.
pub const DEFAULT_SYNTH_FREQUENCY: f64 = 1.0 / 96.0;

/// Default frequency multiplier between octaves.
pub const DEFAULT_SYNTH_LACUNARITY: f64 = 2.0;

/// Default amplitude falloff between octaves.
pub const DEFAULT_SYNTH_PERSISTENCE: f64 = 0.5;
