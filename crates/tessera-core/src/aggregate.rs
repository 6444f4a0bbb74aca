//! Quadratic-mean (RMS) color aggregation.
//!
//! Each channel is averaged independently as `floor(sqrt(sum(c²) / n))`.
//! The mean of squares uses integer division before the square root, so
//! results are exact integers and independent of sample order.
//!
//! Running sums are `u64`. With 8-bit channels one sample adds at most
//! `255² = 65025`, so a sum stays in range for any tile of up to
//! `u64::MAX / 65025` (about 2.8e14) pixels.

use crate::color::Color;
use crate::error::{MosaicError, Result};

/// Streaming RMS accumulator.
///
/// Pushing samples one at a time produces exactly the same result as
/// [`average_color`] over the same colors, without collecting them first.
///
/// # Example
///
/// ```
/// use tessera_core::{Color, RmsAccumulator};
///
/// let mut acc = RmsAccumulator::new();
/// acc.push(Color::from_u8(10, 10, 10, 255));
/// acc.push(Color::from_u8(0, 0, 0, 255));
///
/// // sqrt((100 + 0) / 2) = sqrt(50) -> 7
/// assert_eq!(acc.finish().unwrap(), Color::new(7, 7, 7, 255));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RmsAccumulator {
    sums: [u64; 4],
    count: u64,
}

impl RmsAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one sample.
    #[inline]
    pub fn push(&mut self, color: Color) {
        for (sum, channel) in self.sums.iter_mut().zip(color.channels()) {
            let channel = u64::from(channel);
            *sum += channel * channel;
        }
        self.count += 1;
    }

    /// Number of samples pushed so far.
    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// RMS color of the samples pushed so far.
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::EmptySample`] if nothing was pushed.
    pub fn finish(&self) -> Result<Color> {
        if self.count == 0 {
            return Err(MosaicError::EmptySample);
        }
        let [r, g, b, a] = self.sums.map(|sum| (sum / self.count).isqrt() as u32);
        Ok(Color::new(r, g, b, a))
    }
}

impl Extend<Color> for RmsAccumulator {
    fn extend<I: IntoIterator<Item = Color>>(&mut self, iter: I) {
        for color in iter {
            self.push(color);
        }
    }
}

impl FromIterator<Color> for RmsAccumulator {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        let mut acc = Self::new();
        acc.extend(iter);
        acc
    }
}

/// Quadratic-mean color of `colors`.
///
/// Brighter samples pull the result up more than a plain arithmetic mean
/// would, which keeps highlights visible in the averaged tile.
///
/// # Errors
///
/// Returns [`MosaicError::EmptySample`] when `colors` is empty.
///
/// # Example
///
/// ```
/// use tessera_core::{average_color, Color};
///
/// let grey = Color::from_u8(10, 10, 10, 255);
/// let black = Color::from_u8(0, 0, 0, 255);
///
/// // sqrt((3 * 100 + 0) / 4) = sqrt(75) -> 8
/// let avg = average_color(&[grey, grey, grey, black]).unwrap();
/// assert_eq!(avg, Color::new(8, 8, 8, 255));
/// ```
pub fn average_color(colors: &[Color]) -> Result<Color> {
    colors.iter().copied().collect::<RmsAccumulator>().finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_color_is_identity() {
        let c = Color::from_u8(17, 200, 3, 128);
        assert_eq!(average_color(&[c]).unwrap(), c);
    }

    #[test]
    fn test_empty_sample_fails() {
        assert_eq!(average_color(&[]).unwrap_err(), MosaicError::EmptySample);
        assert_eq!(
            RmsAccumulator::new().finish().unwrap_err(),
            MosaicError::EmptySample
        );
    }

    #[test]
    fn test_rms_exceeds_arithmetic_mean() {
        // Arithmetic mean of 0 and 200 is 100; RMS is sqrt(20000) = 141
        let avg = average_color(&[
            Color::from_u8(0, 0, 0, 0),
            Color::from_u8(200, 200, 200, 200),
        ])
        .unwrap();
        assert_eq!(avg, Color::new(141, 141, 141, 141));
    }

    #[test]
    fn test_mean_of_squares_is_floored_before_sqrt() {
        // (1 + 0 + 0) / 3 = 0 under integer division
        let avg = average_color(&[
            Color::from_u8(1, 0, 0, 0),
            Color::from_u8(0, 0, 0, 0),
            Color::from_u8(0, 0, 0, 0),
        ])
        .unwrap();
        assert_eq!(avg.r, 0);
    }

    #[test]
    fn test_channels_are_independent() {
        let avg = average_color(&[
            Color::from_u8(255, 0, 0, 255),
            Color::from_u8(255, 0, 0, 255),
        ])
        .unwrap();
        assert_eq!(avg, Color::new(255, 0, 0, 255));
    }

    #[test]
    fn test_max_channels_over_large_sample() {
        // A 1024x1024 tile of white must not overflow the accumulator
        let mut acc = RmsAccumulator::new();
        for _ in 0..1024 * 1024 {
            acc.push(Color::from_u8(255, 255, 255, 255));
        }
        assert_eq!(acc.count(), 1024 * 1024);
        assert_eq!(acc.finish().unwrap(), Color::new(255, 255, 255, 255));
    }

    #[test]
    fn test_accumulator_matches_slice_average() {
        let colors: Vec<Color> = (0..50u32)
            .map(|i| Color::new(i * 5 % 256, i * 11 % 256, i * 3 % 256, 255 - i))
            .collect();
        let acc: RmsAccumulator = colors.iter().copied().collect();
        assert_eq!(acc.finish().unwrap(), average_color(&colors).unwrap());
    }

    #[test]
    fn test_extend_continues_accumulating() {
        let mut acc = RmsAccumulator::new();
        acc.push(Color::from_u8(10, 10, 10, 10));
        acc.extend([Color::from_u8(10, 10, 10, 10); 3]);
        assert_eq!(acc.count(), 4);
        assert_eq!(acc.finish().unwrap(), Color::new(10, 10, 10, 10));
    }
}
