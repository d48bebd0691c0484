//! Synthetic fractal terrain generation.
//!
//! Seeded Perlin fBm normalized to [0,1], for demos and for exercising
//! the contour pipeline without survey data. Identical seed and
//! dimensions always reproduce the identical grid.

use noise::{NoiseFn, Perlin};
use tracing::debug;

use terrascan_core::constants::{
    DEFAULT_SYNTH_FREQUENCY, DEFAULT_SYNTH_LACUNARITY, DEFAULT_SYNTH_OCTAVES,
    DEFAULT_SYNTH_PERSISTENCE,
};

use crate::error::TerrainError;
use crate::grid::HeightmapGrid;

/// Fractal terrain generator.
///
/// Multiple octaves of Perlin noise give terrain both large landforms
/// and small-scale variation.
#[derive(Debug, Clone)]
pub struct TerrainSynth {
    perlin: Perlin,
    /// Number of noise octaves.
    octaves: u32,
    /// Base spatial frequency (grid cells per noise cycle, inverted).
    frequency: f64,
    /// Frequency multiplier between octaves.
    lacunarity: f64,
    /// Amplitude falloff between octaves.
    persistence: f64,
}

impl TerrainSynth {
    /// Generator with default fBm settings for the given seed.
    pub fn new(seed: u32) -> Self {
        Self {
            perlin: Perlin::new(seed),
            octaves: DEFAULT_SYNTH_OCTAVES,
            frequency: DEFAULT_SYNTH_FREQUENCY,
            lacunarity: DEFAULT_SYNTH_LACUNARITY,
            persistence: DEFAULT_SYNTH_PERSISTENCE,
        }
    }

    /// Sets the number of octaves.
    pub fn with_octaves(mut self, octaves: u32) -> Self {
        self.octaves = octaves.max(1);
        self
    }

    /// Sets the base spatial frequency.
    pub fn with_frequency(mut self, frequency: f64) -> Self {
        self.frequency = frequency;
        self
    }

    /// Sets the frequency multiplier between octaves.
    pub fn with_lacunarity(mut self, lacunarity: f64) -> Self {
        self.lacunarity = lacunarity;
        self
    }

    /// Sets the amplitude falloff between octaves.
    pub fn with_persistence(mut self, persistence: f64) -> Self {
        self.persistence = persistence;
        self
    }

    /// Generate a `width`×`height` normalized heightmap.
    pub fn generate(&self, width: u32, height: u32) -> Result<HeightmapGrid, TerrainError> {
        if width == 0 || height == 0 {
            return Err(TerrainError::InsufficientResolution { width, height });
        }

        let sample_count = width as usize * height as usize;
        let mut raw = Vec::with_capacity(sample_count);
        for y in 0..height {
            for x in 0..width {
                raw.push(self.fbm(x as f64, y as f64));
            }
        }

        debug!(width, height, octaves = self.octaves, "generated fBm terrain");
        Ok(HeightmapGrid::from_parts(width, height, normalize(&raw)))
    }

    /// Fractal Brownian motion: accumulate octaves of Perlin noise,
    /// normalized by the total amplitude so the result stays in [-1,1].
    fn fbm(&self, x: f64, y: f64) -> f64 {
        let mut total = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = self.frequency;
        let mut max_amplitude = 0.0;

        for _ in 0..self.octaves {
            total += self.perlin.get([x * frequency, y * frequency]) * amplitude;
            max_amplitude += amplitude;
            amplitude *= self.persistence;
            frequency *= self.lacunarity;
        }

        total / max_amplitude
    }
}

/// Min/max-normalize raw noise into [0,1] f32 samples.
/// A flat field maps to all zeros rather than dividing by zero.
fn normalize(raw: &[f64]) -> Vec<f32> {
    let mut min = raw[0];
    let mut max = raw[0];
    for &v in &raw[1..] {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }

    let range = max - min;
    if range == 0.0 {
        return vec![0.0; raw.len()];
    }
    raw.iter().map(|&v| ((v - min) / range) as f32).collect()
}
