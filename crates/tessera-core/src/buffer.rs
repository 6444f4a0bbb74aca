//! Pixel access for the mosaic engine.
//!
//! The renderer reads through the [`PixelSource`] trait so it can work over
//! any decoded image representation. [`RgbaBuffer`] is the owned RGBA8
//! implementation used for renderer output and for most callers' input.

use crate::color::{Color, Point};
use crate::error::{MosaicError, Result};

/// Bytes per RGBA8 pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// Read-only access to a rectangular grid of colors.
///
/// Implementations must return [`MosaicError::OutOfBounds`] for any point
/// outside `[0, width) x [0, height)`.
pub trait PixelSource {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Color at `point`.
    fn get(&self, point: Point) -> Result<Color>;
}

/// Owned RGBA8 pixel buffer in row-major order.
///
/// # Example
///
/// ```
/// use tessera_core::{Color, PixelSource, Point, RgbaBuffer};
///
/// let mut buffer = RgbaBuffer::new(2, 2).unwrap();
/// buffer.set(Point::new(1, 0), Color::from_u8(9, 8, 7, 255)).unwrap();
///
/// assert_eq!(buffer.get(Point::new(1, 0)).unwrap(), Color::from_u8(9, 8, 7, 255));
/// assert_eq!(buffer.as_raw().len(), 2 * 2 * 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RgbaBuffer {
    /// Allocate a fully transparent black buffer.
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::Overflow`] when the byte length does not fit
    /// in `usize`.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = required_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    /// Allocate a buffer with every pixel set to `color`.
    pub fn filled(width: u32, height: u32, color: Color) -> Result<Self> {
        let mut buffer = Self::new(width, height)?;
        let bytes = color.to_bytes();
        for pixel in buffer.data.chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel.copy_from_slice(&bytes);
        }
        Ok(buffer)
    }

    /// Wrap existing row-major RGBA8 bytes.
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::BufferShape`] when `data.len()` is not exactly
    /// `width * height * 4`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = required_len(width, height)?;
        if data.len() != expected {
            return Err(MosaicError::BufferShape {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Raw RGBA8 bytes.
    #[inline]
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer, returning its RGBA8 bytes.
    #[inline]
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Write `color` at `point`.
    pub fn set(&mut self, point: Point, color: Color) -> Result<()> {
        let offset = self.offset(point)?;
        self.data[offset..offset + BYTES_PER_PIXEL].copy_from_slice(&color.to_bytes());
        Ok(())
    }

    /// Mutable access for row-wise filling by the renderer.
    #[inline]
    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Byte length of one row.
    #[inline]
    pub(crate) fn row_len(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    fn offset(&self, point: Point) -> Result<usize> {
        if point.x >= self.width || point.y >= self.height {
            return Err(MosaicError::OutOfBounds {
                x: point.x,
                y: point.y,
                width: self.width,
                height: self.height,
            });
        }
        Ok((point.y as usize * self.width as usize + point.x as usize) * BYTES_PER_PIXEL)
    }
}

impl PixelSource for RgbaBuffer {
    #[inline]
    fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn get(&self, point: Point) -> Result<Color> {
        let offset = self.offset(point)?;
        let px = &self.data[offset..offset + BYTES_PER_PIXEL];
        Ok(Color::from_u8(px[0], px[1], px[2], px[3]))
    }
}

fn required_len(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(BYTES_PER_PIXEL))
        .ok_or(MosaicError::Overflow { width, height })
}
