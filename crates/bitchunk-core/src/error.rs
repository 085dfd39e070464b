//! Error types for bitchunk-core
//!
//! The core operates on validated in-memory data, so the error surface is
//! deliberately narrow: construction errors for the data model and contract
//! violations rejected by the encoder. Scanning and segmentation have no
//! error path at all.

use thiserror::Error;

/// bitchunk-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid raster dimensions
    #[error("invalid raster dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Coordinate outside the raster bounds
    #[error("coordinate ({x}, {y}) out of bounds for {width}x{height} raster")]
    CoordinateOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Range with start past end
    #[error("invalid range: start {start} > end {end}")]
    InvalidRange { start: u32, end: u32 },

    /// Bounding box extends past the raster it is applied to
    #[error("box extends to ({x}, {y}), outside {width}x{height} raster")]
    BoxOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

/// Result type alias for bitchunk-core operations
pub type Result<T> = std::result::Result<T, Error>;
