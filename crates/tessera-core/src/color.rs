//! Color and coordinate value types.
//!
//! [`Color`] carries 8-bit channel intensities in a wider integer so the
//! aggregator can square and sum them without intermediate casts.
//! [`Point`] addresses a pixel inside a buffer.

use std::fmt;

/// An RGBA color.
///
/// Channels hold 8-bit intensities (0..=255) stored as `u32`. The wider
/// storage type lets [`RmsAccumulator`](crate::RmsAccumulator) square a
/// channel directly into its `u64` running sum.
///
/// # Example
///
/// ```
/// use tessera_core::Color;
///
/// let c = Color::from_u8(10, 20, 30, 255);
/// assert_eq!(c.to_bytes(), [10, 20, 30, 255]);
/// assert_eq!(c.to_string(), "[10, 20, 30, 255]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    /// Red channel (0..=255)
    pub r: u32,
    /// Green channel (0..=255)
    pub g: u32,
    /// Blue channel (0..=255)
    pub b: u32,
    /// Alpha channel (0..=255)
    pub a: u32,
}

impl Color {
    /// Create a color from widened channel values.
    #[inline]
    pub const fn new(r: u32, g: u32, b: u32, a: u32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from 8-bit channel values.
    #[inline]
    pub const fn from_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(r as u32, g as u32, b as u32, a as u32)
    }

    /// Create a color from an `[R, G, B, A]` byte array.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::from_u8(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Convert to an `[R, G, B, A]` byte array.
    ///
    /// Channels above 255 saturate.
    #[inline]
    pub fn to_bytes(self) -> [u8; 4] {
        self.channels().map(|c| c.min(u8::MAX as u32) as u8)
    }

    /// Channels in `[r, g, b, a]` order.
    #[inline]
    pub const fn channels(self) -> [u32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Color {
    fn from(bytes: [u8; 4]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}, {}]", self.r, self.g, self.b, self.a)
    }
}

/// A pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// Column, growing rightwards from 0.
    pub x: u32,
    /// Row, growing downwards from 0.
    pub y: u32,
}

impl Point {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Point = Point::new(0, 0);

    #[inline]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Offset this point by `by`.
    #[inline]
    pub const fn translate(self, by: Point) -> Self {
        Self::new(self.x + by.x, self.y + by.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
