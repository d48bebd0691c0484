//! Error taxonomy for terrain analysis and heightmap ingestion.

use thiserror::Error;

/// Failures reported by the terrain analysis core.
///
/// Nothing here is transient; the core never retries. Callers are
/// responsible for surfacing these to a user-facing layer.
#[derive(Debug, Error)]
pub enum TerrainError {
    /// Grid too small (or degenerate) for the requested operation.
    /// Contouring needs at least 2×2 samples to form a cell.
    #[error("grid resolution {width}x{height} is too small to contour")]
    InsufficientResolution { width: u32, height: u32 },

    /// A non-positive contour level count was requested.
    #[error("invalid contour level count {requested} (must be at least 1)")]
    InvalidLevelCount { requested: usize },

    /// A heightmap source could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Failures while decoding a heightmap source.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Raw16 buffer shorter than its 8-byte dimension header.
    #[error("raw16 header truncated: {len} bytes (need 8)")]
    TruncatedHeader { len: usize },

    /// Raw16 buffer length disagrees with the header dimensions.
    #[error("raw16 size mismatch: expected {expected} bytes, got {actual}")]
    PayloadSizeMismatch { expected: usize, actual: usize },

    /// Sample buffer length disagrees with the declared dimensions.
    #[error("sample count mismatch: expected {expected}, got {actual}")]
    SampleCountMismatch { expected: usize, actual: usize },

    /// A source declared a zero-sized grid.
    #[error("degenerate grid dimensions {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },

    /// The raster image could not be decoded.
    #[error("image decode failed: {0}")]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
