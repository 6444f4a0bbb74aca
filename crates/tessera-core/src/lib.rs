//! tessera-core: mosaic rendering with quadratic-mean tile colors
//!
//! This library turns a decoded RGBA image into a mosaic: a square working
//! region is split into equal square tiles and every pixel of a tile is
//! replaced by the tile's RMS-averaged color. It knows nothing about files
//! or image formats; callers hand it pixels through [`PixelSource`] and get
//! an [`RgbaBuffer`] back.
//!
//! # Quick Start
//!
//! ```
//! use tessera_core::{Color, Mosaic, PixelSource, RgbaBuffer};
//!
//! let input = RgbaBuffer::filled(8, 6, Color::from_u8(200, 120, 40, 255)).unwrap();
//!
//! let output = Mosaic::new(3).render(&input).unwrap();
//!
//! // The working square is the smaller input dimension
//! assert_eq!(output.width(), 6);
//! assert_eq!(output.height(), 6);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! PixelSource (input, width x height)
//!     |
//!     v
//! WorkingRegion::locate     (side = min(width, height), Anchor policy)
//!     |
//!     v
//! plan_tiles(side, size)    (column-major tiles, side % size == 0)
//!     |
//!     v
//! per tile, in parallel:
//!     sample every point -> RmsAccumulator -> Color
//!     |
//!     v
//! RgbaBuffer (side x side)  (each row filled from its tiles' colors)
//! ```
//!
//! # Why RMS
//!
//! A tile color is `floor(sqrt(sum(c²) / n))` per channel rather than the
//! arithmetic mean. Squaring weights bright samples more heavily, so small
//! highlights survive averaging instead of being washed into the
//! surrounding darker pixels. The computation is pure integer arithmetic:
//! the same samples always produce the same color regardless of order or
//! thread count.
//!
//! # Errors
//!
//! All operations return [`MosaicError`]. [`MosaicError::kind()`] sorts
//! failures into [`ErrorKind::InvalidConfiguration`] (tile size and region
//! do not tile exactly) and [`ErrorKind::InvalidInput`] (bad buffers, empty
//! samples, out-of-range reads). A failed render never returns a partially
//! filled buffer.

pub mod aggregate;
pub mod buffer;
pub mod color;
pub mod error;
pub mod plan;
pub mod region;
pub mod render;


pub use aggregate::{average_color, RmsAccumulator};
pub use buffer::{PixelSource, RgbaBuffer};
pub use color::{Color, Point};
pub use error::{ErrorKind, MosaicError, Result};
pub use plan::{plan_tiles, Tile, TilePlan};
pub use region::{Anchor, WorkingRegion};
pub use render::{render, Mosaic, MosaicReport};
