//! Mosaic builder -- the primary entry point for the crate.
//!
//! [`Mosaic`] combines region placement, tile planning and RMS averaging
//! into one reusable configuration. [`render`] is the plain-function form
//! for callers that already know the working side length.

use rayon::prelude::*;

use crate::aggregate::RmsAccumulator;
use crate::buffer::{PixelSource, RgbaBuffer, BYTES_PER_PIXEL};
use crate::color::{Color, Point};
use crate::error::Result;
use crate::plan::{plan_tiles, Tile, TilePlan};
use crate::region::{Anchor, WorkingRegion};

/// Mosaic renderer configuration.
///
/// # Design
///
/// - Constructor requires the tile size; everything else has a default
/// - Configuration methods consume and return `self`
/// - [`render()`](Self::render) takes `&self`, so one `Mosaic` can process
///   any number of images
/// - Parallel and sequential rendering produce byte-identical output
///
/// # Example
///
/// ```
/// use tessera_core::{Anchor, Color, Mosaic, PixelSource, Point, RgbaBuffer};
///
/// let input = RgbaBuffer::filled(6, 4, Color::from_u8(40, 80, 120, 255)).unwrap();
///
/// let output = Mosaic::new(2)
///     .anchor(Anchor::Centered)
///     .render(&input)
///     .unwrap();
///
/// assert_eq!(output.width(), 4);
/// assert_eq!(output.height(), 4);
/// assert_eq!(output.get(Point::new(3, 3)).unwrap(), Color::from_u8(40, 80, 120, 255));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mosaic {
    tile_size: u32,
    anchor: Anchor,
    side: Option<u32>,
    parallel: bool,
}

/// Geometry of a completed render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MosaicReport {
    /// Where the working square sat in the input.
    pub region: WorkingRegion,
    /// Tile side length.
    pub tile_size: u32,
    /// Number of tiles averaged.
    pub tile_count: usize,
}

impl Mosaic {
    /// Create a renderer for square tiles of `tile_size` pixels.
    ///
    /// Defaults: top-left anchor, side = smaller input dimension, parallel.
    pub fn new(tile_size: u32) -> Self {
        Self {
            tile_size,
            anchor: Anchor::default(),
            side: None,
            parallel: true,
        }
    }

    /// Set where the working square sits in the input.
    #[inline]
    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Constrain the working square to `side` pixels instead of the
    /// input's smaller dimension.
    #[inline]
    pub fn side(mut self, side: u32) -> Self {
        self.side = Some(side);
        self
    }

    /// Enable or disable rayon-based tile processing.
    #[inline]
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    #[inline]
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Render `input` into a new `side x side` buffer.
    ///
    /// # Errors
    ///
    /// Fails before any output is produced if the region cannot be placed,
    /// the tile size does not divide the side, or a pixel read fails.
    pub fn render<S>(&self, input: &S) -> Result<RgbaBuffer>
    where
        S: PixelSource + Sync + ?Sized,
    {
        self.render_with_report(input).map(|(output, _)| output)
    }

    /// Like [`render()`](Self::render), also returning the geometry used.
    pub fn render_with_report<S>(&self, input: &S) -> Result<(RgbaBuffer, MosaicReport)>
    where
        S: PixelSource + Sync + ?Sized,
    {
        let region = WorkingRegion::locate(input.width(), input.height(), self.side, self.anchor)?;
        let plan = plan_tiles(region.side, self.tile_size)?;

        let colors: Vec<Color> = if self.parallel {
            plan.tiles()
                .par_iter()
                .map(|tile| tile_color(input, &region, tile))
                .collect::<Result<_>>()?
        } else {
            plan.iter()
                .map(|tile| tile_color(input, &region, tile))
                .collect::<Result<_>>()?
        };

        let mut output = RgbaBuffer::new(region.side, region.side)?;
        fill_tiles(&mut output, &plan, &colors, self.parallel);

        let report = MosaicReport {
            region,
            tile_size: self.tile_size,
            tile_count: plan.len(),
        };
        Ok((output, report))
    }
}

/// Render the top-left `side x side` square of `input` with `tile_size` tiles.
///
/// # Example
///
/// ```
/// use tessera_core::{render, Color, PixelSource, Point, RgbaBuffer};
///
/// let mut input = RgbaBuffer::filled(4, 4, Color::from_u8(10, 10, 10, 255)).unwrap();
/// input.set(Point::new(3, 3), Color::from_u8(0, 0, 0, 255)).unwrap();
///
/// let output = render(&input, 4, 2).unwrap();
/// assert_eq!(output.get(Point::new(2, 2)).unwrap(), Color::new(8, 8, 8, 255));
/// assert_eq!(output.get(Point::new(0, 0)).unwrap(), Color::new(10, 10, 10, 255));
/// ```
pub fn render<S>(input: &S, side: u32, tile_size: u32) -> Result<RgbaBuffer>
where
    S: PixelSource + Sync + ?Sized,
{
    Mosaic::new(tile_size).side(side).render(input)
}

/// RMS color of every input pixel under `tile`.
fn tile_color<S>(input: &S, region: &WorkingRegion, tile: &Tile) -> Result<Color>
where
    S: PixelSource + ?Sized,
{
    let mut acc = RmsAccumulator::new();
    for point in tile.points() {
        acc.push(input.get(region.to_source(point))?);
    }
    acc.finish()
}

/// Write each tile's color over its extent. Rows are disjoint slices, so
/// the parallel path needs no synchronization.
fn fill_tiles(output: &mut RgbaBuffer, plan: &TilePlan, colors: &[Color], parallel: bool) {
    let row_len = output.row_len();
    let fill_row = |(y, row): (usize, &mut [u8])| {
        for (x, pixel) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
            if let Some(index) = plan.tile_index_of(Point::new(x as u32, y as u32)) {
                pixel.copy_from_slice(&colors[index].to_bytes());
            }
        }
    };

    if parallel {
        output
            .data_mut()
            .par_chunks_mut(row_len)
            .enumerate()
            .for_each(fill_row);
    } else {
        output
            .data_mut()
            .chunks_mut(row_len)
            .enumerate()
            .for_each(fill_row);
    }
}
