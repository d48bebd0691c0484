//! Raw 16-bit heightmap format loader and writer.
//!
//! Byte layout: width (u32 LE), height (u32 LE), then width*height
//! samples of u16 LE. Samples normalize to [0,1] by dividing by 65535.
//! Total size must be exactly `8 + width*height*2`; anything else is a
//! decode failure.

use std::io;
use std::path::Path;

use tracing::debug;

use crate::error::DecodeError;
use crate::grid::HeightmapGrid;

/// Header size in bytes: u32 width + u32 height.
const HEADER_SIZE: usize = 8;

/// Normalization divisor for 16-bit samples.
const U16_SCALE: f32 = u16::MAX as f32;

/// Load a heightmap from a raw16 file.
pub fn load_raw16(path: &Path) -> Result<HeightmapGrid, DecodeError> {
    let data = std::fs::read(path)?;
    decode_raw16(&data)
}

/// Decode a raw16 byte buffer.
pub fn decode_raw16(data: &[u8]) -> Result<HeightmapGrid, DecodeError> {
    if data.len() < HEADER_SIZE {
        return Err(DecodeError::TruncatedHeader { len: data.len() });
    }

    let width = u32::from_le_bytes(data[0..4].try_into().unwrap());
    let height = u32::from_le_bytes(data[4..8].try_into().unwrap());

    if width == 0 || height == 0 {
        return Err(DecodeError::ZeroDimension { width, height });
    }

    let sample_count = width as usize * height as usize;
    let expected = HEADER_SIZE + sample_count * 2;
    if data.len() != expected {
        return Err(DecodeError::PayloadSizeMismatch {
            expected,
            actual: data.len(),
        });
    }

    let mut values = Vec::with_capacity(sample_count);
    for i in 0..sample_count {
        let offset = HEADER_SIZE + i * 2;
        let raw = u16::from_le_bytes([data[offset], data[offset + 1]]);
        values.push(raw as f32 / U16_SCALE);
    }

    debug!(width, height, "decoded raw16 heightmap");
    Ok(HeightmapGrid::from_parts(width, height, values))
}

/// Serialize a grid to raw16 bytes, quantizing each sample to u16.
pub fn encode_raw16(grid: &HeightmapGrid) -> Vec<u8> {
    let mut buf = Vec::with_capacity(HEADER_SIZE + grid.sample_count() * 2);
    buf.extend_from_slice(&grid.width().to_le_bytes());
    buf.extend_from_slice(&grid.height().to_le_bytes());

    for &v in grid.values() {
        let quantized = (v.clamp(0.0, 1.0) * U16_SCALE).round() as u16;
        buf.extend_from_slice(&quantized.to_le_bytes());
    }

    buf
}

/// Write a grid to a raw16 file.
pub fn write_raw16(grid: &HeightmapGrid, path: &Path) -> io::Result<()> {
    std::fs::write(path, encode_raw16(grid))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hand-assemble a raw16 buffer from u16 samples.
    fn raw16_bytes(width: u32, height: u32, samples: &[u16]) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(&width.to_le_bytes());
        data.extend_from_slice(&height.to_le_bytes());
        for &s in samples {
            data.extend_from_slice(&s.to_le_bytes());
        }
        data
    }

    #[test]
    fn test_decode_normalizes_by_u16_max() {
        let data = raw16_bytes(2, 2, &[0, u16::MAX, 32768, 16384]);
        let grid = decode_raw16(&data).expect("valid raw16");

        assert_eq!(grid.width(), 2);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.value_at(0, 0), 0.0);
        assert_eq!(grid.value_at(1, 0), 1.0);
        assert!((grid.value_at(0, 1) - 32768.0 / 65535.0).abs() < 1e-7);
    }

    #[test]
    fn test_roundtrip() {
        let samples: Vec<u16> = vec![0, 1, 500, 65535, 12345, 40000];
        let data = raw16_bytes(3, 2, &samples);
        let grid = decode_raw16(&data).expect("valid raw16");

        let encoded = encode_raw16(&grid);
        assert_eq!(
            encoded, data,
            "decode then encode must reproduce the original bytes"
        );
    }

    #[test]
    fn test_truncated_header() {
        let result = decode_raw16(&[1, 0, 0]);
        assert!(matches!(
            result,
            Err(DecodeError::TruncatedHeader { len: 3 })
        ));
    }

    #[test]
    fn test_payload_size_mismatch() {
        // Header declares 2x2 (8 samples bytes) but carries only 3 samples.
        let mut data = raw16_bytes(2, 2, &[0, 1, 2]);
        assert!(matches!(
            decode_raw16(&data),
            Err(DecodeError::PayloadSizeMismatch {
                expected: 16,
                actual: 14,
            })
        ));

        // Oversized payloads fail the same way.
        data.extend_from_slice(&[0; 6]);
        assert!(matches!(
            decode_raw16(&data),
            Err(DecodeError::PayloadSizeMismatch {
                expected: 16,
                actual: 20,
            })
        ));
    }

    #[test]
    fn test_zero_dimension_header() {
        let data = raw16_bytes(0, 4, &[]);
        assert!(matches!(
            decode_raw16(&data),
            Err(DecodeError::ZeroDimension {
                width: 0,
                height: 4,
            })
        ));
    }
}
