//! Tile planning.
//!
//! [`plan_tiles`] splits a square working region of side `side` into
//! `(side / tile_size)²` square tiles. The sequence walks down each column
//! of tiles before moving one tile to the right:
//!
//! ```text
//! side = 6, tile_size = 2
//!
//!   x:  0   2   4
//! y=0 [ 0 ][ 3 ][ 6 ]
//! y=2 [ 1 ][ 4 ][ 7 ]
//! y=4 [ 2 ][ 5 ][ 8 ]
//! ```
//!
//! The tile size must divide the side exactly. A remainder would leave a
//! strip of the region that no tile covers, so it is rejected with
//! [`MosaicError::IndivisibleTile`] rather than rendered partially.

use crate::color::Point;
use crate::error::{MosaicError, Result};

/// A square block of pixel coordinates.
///
/// Covers `{(x, y) : origin.x <= x < origin.x + size, origin.y <= y < origin.y + size}`.
/// Tiles describe coordinates only; they hold no pixel data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    /// Top-left corner.
    pub origin: Point,
    /// Side length in pixels.
    pub size: u32,
}

impl Tile {
    #[inline]
    pub const fn new(origin: Point, size: u32) -> Self {
        Self { origin, size }
    }

    /// Number of pixels covered.
    #[inline]
    pub fn area(&self) -> u64 {
        u64::from(self.size) * u64::from(self.size)
    }

    /// Whether `point` lies inside this tile.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.origin.x
            && point.x - self.origin.x < self.size
            && point.y >= self.origin.y
            && point.y - self.origin.y < self.size
    }

    /// Every point of the tile, column by column.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let Tile { origin, size } = *self;
        (0..size).flat_map(move |dx| {
            (0..size).map(move |dy| Point::new(origin.x + dx, origin.y + dy))
        })
    }
}

/// An ordered, exact tiling of a square working region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilePlan {
    side: u32,
    tile_size: u32,
    tiles: Vec<Tile>,
}

impl TilePlan {
    /// Working region side length.
    #[inline]
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Tile side length.
    #[inline]
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Tiles along one edge of the region.
    #[inline]
    pub fn tiles_per_side(&self) -> u32 {
        self.side / self.tile_size
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tiles in planning order.
    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tile> {
        self.tiles.iter()
    }

    /// Position in [`tiles()`](Self::tiles) of the tile containing `point`.
    ///
    /// Returns `None` for points outside the working region.
    #[inline]
    pub fn tile_index_of(&self, point: Point) -> Option<usize> {
        if point.x >= self.side || point.y >= self.side {
            return None;
        }
        let column = (point.x / self.tile_size) as usize;
        let row = (point.y / self.tile_size) as usize;
        Some(column * self.tiles_per_side() as usize + row)
    }
}

impl<'a> IntoIterator for &'a TilePlan {
    type Item = &'a Tile;
    type IntoIter = std::slice::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}

/// Plan the tiles covering a `side x side` region.
///
/// # Errors
///
/// - [`MosaicError::ZeroTileSize`] when `tile_size == 0`
/// - [`MosaicError::EmptyRegion`] when `side == 0`
/// - [`MosaicError::IndivisibleTile`] when `side % tile_size != 0`
///   (this includes `tile_size > side`)
///
/// # Example
///
/// ```
/// use tessera_core::{plan_tiles, Point};
///
/// let plan = plan_tiles(4, 2).unwrap();
/// let origins: Vec<Point> = plan.iter().map(|t| t.origin).collect();
///
/// assert_eq!(
///     origins,
///     vec![Point::new(0, 0), Point::new(0, 2), Point::new(2, 0), Point::new(2, 2)]
/// );
/// ```
pub fn plan_tiles(side: u32, tile_size: u32) -> Result<TilePlan> {
    if tile_size == 0 {
        return Err(MosaicError::ZeroTileSize);
    }
    if side == 0 {
        return Err(MosaicError::EmptyRegion);
    }
    if side % tile_size != 0 {
        return Err(MosaicError::IndivisibleTile { side, tile_size });
    }

    let per_side = (side / tile_size) as usize;
    let tile_count = per_side * per_side;
    let mut tiles = Vec::with_capacity(tile_count);

    let mut offset_x = 0;
    let mut offset_y = 0;
    for count in 0..tile_count {
        if count != 0 {
            if offset_y + tile_size == side {
                offset_x += tile_size;
                offset_y = 0;
            } else {
                offset_y += tile_size;
            }
        }
        tiles.push(Tile::new(Point::new(offset_x, offset_y), tile_size));
    }

    Ok(TilePlan {
        side,
        tile_size,
        tiles,
    })
}
