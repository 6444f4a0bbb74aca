//! Test fixtures and constants.

use tessera_core::{Color, Point, RgbaBuffer};

/// Colors used across scenarios
pub mod colors {
    use tessera_core::Color;

    pub const GRAY_10: Color = Color::new(10, 10, 10, 255);
    pub const BLACK: Color = Color::new(0, 0, 0, 255);
    pub const WHITE: Color = Color::new(255, 255, 255, 255);
    pub const RED: Color = Color::new(255, 0, 0, 255);
}

/// The 4x4 scenario: flat gray with one black pixel in the bottom-right corner
pub fn gray_with_black_corner() -> RgbaBuffer {
    let mut buffer = RgbaBuffer::filled(4, 4, colors::GRAY_10).unwrap();
    buffer.set(Point::new(3, 3), colors::BLACK).unwrap();
    buffer
}

/// Image split into a left and right half of different colors
pub fn two_halves(width: u32, height: u32, left: Color, right: Color) -> RgbaBuffer {
    let mut buffer = RgbaBuffer::filled(width, height, left).unwrap();
    for y in 0..height {
        for x in width / 2..width {
            buffer.set(Point::new(x, y), right).unwrap();
        }
    }
    buffer
}

/// Wide image with a bright band along the right edge
pub fn wide_with_right_band(width: u32, height: u32, band: u32) -> RgbaBuffer {
    let mut buffer = RgbaBuffer::filled(width, height, colors::BLACK).unwrap();
    for y in 0..height {
        for x in width - band..width {
            buffer.set(Point::new(x, y), colors::WHITE).unwrap();
        }
    }
    buffer
}

/// Minimal config file contents
pub fn config_yaml(tile_size: u32, format: &str) -> String {
    format!("tile_size: {tile_size}\nformat: {format}\n")
}
