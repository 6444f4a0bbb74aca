//! Error type for the tessera-core public API.
//!
//! Every fallible operation in the crate returns [`MosaicError`]. Callers
//! that only care about the broad failure class can match on
//! [`MosaicError::kind()`].

use thiserror::Error;

/// Broad classification of a [`MosaicError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Tile size or working region geometry cannot produce an exact tiling.
    InvalidConfiguration,
    /// The pixel data or a sample set handed to the engine is unusable.
    InvalidInput,
}

/// Errors produced while planning or rendering a mosaic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MosaicError {
    /// Tile side length of zero.
    #[error("tile size must be greater than zero")]
    ZeroTileSize,

    /// Working region with a side length of zero.
    #[error("working region must be at least one pixel wide")]
    EmptyRegion,

    /// Tiles would leave an uncovered strip along the region edge.
    #[error("tile size {tile_size} does not evenly divide working region side {side}")]
    IndivisibleTile {
        /// Working region side length
        side: u32,
        /// Requested tile side length
        tile_size: u32,
    },

    /// Averaging was requested over zero colors.
    #[error("cannot average an empty color sample")]
    EmptySample,

    /// A pixel lookup fell outside the buffer.
    #[error("pixel ({x}, {y}) is outside the {width}x{height} buffer")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Raw pixel data does not match the declared dimensions.
    #[error("buffer length mismatch: expected {expected} bytes, got {actual}")]
    BufferShape {
        /// Byte length implied by `width * height * 4`
        expected: usize,
        /// Byte length actually supplied
        actual: usize,
    },

    /// `width * height * 4` does not fit in `usize`.
    #[error("buffer dimensions {width}x{height} overflow")]
    Overflow { width: u32, height: u32 },

    /// Requested working region is larger than the input allows.
    #[error("working region side {side} does not fit in {width}x{height} input")]
    RegionOutOfBounds { side: u32, width: u32, height: u32 },
}

impl MosaicError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            MosaicError::ZeroTileSize
            | MosaicError::EmptyRegion
            | MosaicError::IndivisibleTile { .. } => ErrorKind::InvalidConfiguration,
            MosaicError::EmptySample
            | MosaicError::OutOfBounds { .. }
            | MosaicError::BufferShape { .. }
            | MosaicError::Overflow { .. }
            | MosaicError::RegionOutOfBounds { .. } => ErrorKind::InvalidInput,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MosaicError>;
