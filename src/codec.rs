//! Conversion between compressed image files and [`RgbaBuffer`]s.
//!
//! Decoding accepts any format the `image` crate was built with (JPEG and
//! PNG) and always yields RGBA8. JPEG output drops the alpha channel; PNG
//! output keeps it.

use crate::error::PipelineError;
use crate::models::OutputFormat;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use std::io::Cursor;
use tessera_core::buffer::BYTES_PER_PIXEL;
use tessera_core::{PixelSource, RgbaBuffer};

/// Decode an encoded image into an RGBA buffer
pub fn decode(bytes: &[u8]) -> Result<RgbaBuffer, PipelineError> {
    let image =
        image::load_from_memory(bytes).map_err(|e| PipelineError::Decode(e.to_string()))?;
    let rgba = image.into_rgba8();
    let (width, height) = rgba.dimensions();
    tracing::debug!(width, height, "Decoded image");

    Ok(RgbaBuffer::from_raw(width, height, rgba.into_raw())?)
}

/// Encode `buffer` in the requested format
pub fn encode(buffer: &RgbaBuffer, format: OutputFormat) -> Result<Vec<u8>, PipelineError> {
    let (width, height) = (buffer.width(), buffer.height());
    let mut out = Cursor::new(Vec::new());

    match format {
        OutputFormat::Jpeg { quality } => {
            let rgb = strip_alpha(buffer.as_raw());
            JpegEncoder::new_with_quality(&mut out, quality)
                .write_image(&rgb, width, height, ExtendedColorType::Rgb8)
                .map_err(|e| PipelineError::Encode(e.to_string()))?;
        }
        OutputFormat::Png => {
            PngEncoder::new(&mut out)
                .write_image(buffer.as_raw(), width, height, ExtendedColorType::Rgba8)
                .map_err(|e| PipelineError::Encode(e.to_string()))?;
        }
    }

    let bytes = out.into_inner();
    tracing::debug!(?format, size = bytes.len(), "Encoded image");
    Ok(bytes)
}

fn strip_alpha(rgba: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(rgba.len() / BYTES_PER_PIXEL * 3);
    for pixel in rgba.chunks_exact(BYTES_PER_PIXEL) {
        rgb.extend_from_slice(&pixel[..3]);
    }
    rgb
}
