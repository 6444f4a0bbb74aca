//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use tessera_core::{Color, PixelSource, Point, RgbaBuffer};

/// Assert bytes start with the PNG signature
pub fn assert_png(bytes: &[u8]) {
    assert!(
        bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
}

/// Assert bytes start with a JPEG SOI marker
pub fn assert_jpeg(bytes: &[u8]) {
    assert!(
        bytes.starts_with(&[0xFF, 0xD8, 0xFF]),
        "Expected JPEG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..3.min(bytes.len())]
    );
}

/// Assert a square output of the given side
pub fn assert_square(buffer: &RgbaBuffer, side: u32) {
    assert_eq!(
        (buffer.width(), buffer.height()),
        (side, side),
        "Expected a {side}x{side} mosaic"
    );
}

/// Assert every pixel of the `size` block at `origin` has `expected`
pub fn assert_block(buffer: &RgbaBuffer, origin: Point, size: u32, expected: Color) {
    for dx in 0..size {
        for dy in 0..size {
            let point = Point::new(origin.x + dx, origin.y + dy);
            assert_eq!(
                buffer.get(point).unwrap(),
                expected,
                "Pixel {point} of block at {origin}"
            );
        }
    }
}
