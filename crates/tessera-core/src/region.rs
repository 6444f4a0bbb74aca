//! Working region placement.
//!
//! The mosaic only covers a square part of the input. Its side defaults to
//! the input's smaller dimension; [`Anchor`] decides where the square sits.

use crate::color::Point;
use crate::error::{MosaicError, Result};

/// Placement of the working square inside the input image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Anchor {
    /// Square starts at the input's top-left corner (default).
    #[default]
    TopLeft,
    /// Square is centered; odd leftovers round towards the top-left.
    Centered,
}

/// A square sub-area of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkingRegion {
    /// Top-left corner in input coordinates.
    pub origin: Point,
    /// Side length in pixels.
    pub side: u32,
}

impl WorkingRegion {
    /// Place the working square inside a `width x height` input.
    ///
    /// `side` of `None` selects `min(width, height)`.
    ///
    /// # Errors
    ///
    /// - [`MosaicError::EmptyRegion`] if the resulting side is zero
    /// - [`MosaicError::RegionOutOfBounds`] if an explicit `side` exceeds
    ///   the input's smaller dimension
    ///
    /// # Example
    ///
    /// ```
    /// use tessera_core::{Anchor, Point, WorkingRegion};
    ///
    /// let region = WorkingRegion::locate(10, 6, None, Anchor::Centered).unwrap();
    /// assert_eq!(region.side, 6);
    /// assert_eq!(region.origin, Point::new(2, 0));
    /// ```
    pub fn locate(width: u32, height: u32, side: Option<u32>, anchor: Anchor) -> Result<Self> {
        let fit = width.min(height);
        let side = side.unwrap_or(fit);
        if side == 0 {
            return Err(MosaicError::EmptyRegion);
        }
        if side > fit {
            return Err(MosaicError::RegionOutOfBounds {
                side,
                width,
                height,
            });
        }

        let origin = match anchor {
            Anchor::TopLeft => Point::ORIGIN,
            Anchor::Centered => Point::new((width - side) / 2, (height - side) / 2),
        };
        Ok(Self { origin, side })
    }

    /// Map a region-local point to input coordinates.
    #[inline]
    pub fn to_source(&self, local: Point) -> Point {
        local.translate(self.origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_left_uses_smaller_dimension() {
        let region = WorkingRegion::locate(600, 400, None, Anchor::TopLeft).unwrap();
        assert_eq!(region.side, 400);
        assert_eq!(region.origin, Point::ORIGIN);
    }

    #[test]
    fn test_centered_on_tall_input() {
        let region = WorkingRegion::locate(4, 9, None, Anchor::Centered).unwrap();
        assert_eq!(region.side, 4);
        // (9 - 4) / 2 = 2
        assert_eq!(region.origin, Point::new(0, 2));
    }

    #[test]
    fn test_explicit_side() {
        let region = WorkingRegion::locate(10, 10, Some(4), Anchor::Centered).unwrap();
        assert_eq!(region.side, 4);
        assert_eq!(region.origin, Point::new(3, 3));
    }

    #[test]
    fn test_explicit_side_too_large() {
        assert_eq!(
            WorkingRegion::locate(10, 6, Some(8), Anchor::TopLeft).unwrap_err(),
            MosaicError::RegionOutOfBounds {
                side: 8,
                width: 10,
                height: 6
            }
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(
            WorkingRegion::locate(0, 5, None, Anchor::TopLeft).unwrap_err(),
            MosaicError::EmptyRegion
        );
    }

    #[test]
    fn test_to_source() {
        let region = WorkingRegion {
            origin: Point::new(5, 1),
            side: 3,
        };
        assert_eq!(region.to_source(Point::new(2, 2)), Point::new(7, 3));
    }
}
