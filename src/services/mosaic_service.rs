use crate::codec;
use crate::error::PipelineError;
use crate::models::{MosaicConfig, OutputFormat};
use crate::services::storage::ImageStore;
use std::path::Path;
use std::time::{Duration, Instant};
use tessera_core::{Mosaic, MosaicReport, PixelSource};

/// Outcome of one completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Input dimensions as decoded
    pub input_width: u32,
    pub input_height: u32,
    /// Geometry used for the mosaic
    pub report: MosaicReport,
    pub format: OutputFormat,
    /// Size of the encoded output
    pub bytes_written: usize,
    pub elapsed: Duration,
}

/// Encoded mosaic plus what was learned producing it
#[derive(Debug, Clone)]
pub struct RenderedImage {
    pub bytes: Vec<u8>,
    pub input_width: u32,
    pub input_height: u32,
    pub report: MosaicReport,
}

/// Read, decode, render, encode and write one image
pub struct MosaicService<S: ImageStore> {
    store: S,
    config: MosaicConfig,
    mosaic: Mosaic,
}

impl<S: ImageStore> MosaicService<S> {
    pub fn new(store: S, config: MosaicConfig) -> Self {
        let mosaic = config.mosaic();
        Self {
            store,
            config,
            mosaic,
        }
    }

    pub fn config(&self) -> &MosaicConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Render the image at `input` into a mosaic written to `output`.
    ///
    /// Nothing is written unless every stage succeeds.
    pub fn run(&self, input: &Path, output: &Path) -> Result<RunSummary, PipelineError> {
        let started = Instant::now();

        // Resolve the format first so a bad output name fails before any work
        let format = self.config.output_format(output)?;

        let source = self.store.read(input)?;
        let rendered = self.render_bytes(&source, format)?;

        self.store.write(output, &rendered.bytes)?;

        let elapsed = started.elapsed();
        tracing::info!(
            input = %input.display(),
            output = %output.display(),
            size_bytes = rendered.bytes.len(),
            elapsed_ms = elapsed.as_millis() as u64,
            "Mosaic written"
        );

        Ok(RunSummary {
            input_width: rendered.input_width,
            input_height: rendered.input_height,
            report: rendered.report,
            format,
            bytes_written: rendered.bytes.len(),
            elapsed,
        })
    }

    /// Decode `source`, render it and encode the result without touching
    /// storage.
    pub fn render_bytes(
        &self,
        source: &[u8],
        format: OutputFormat,
    ) -> Result<RenderedImage, PipelineError> {
        let stage = Instant::now();
        let image = codec::decode(source)?;
        let (width, height) = (image.width(), image.height());
        tracing::info!(
            width,
            height,
            elapsed_ms = stage.elapsed().as_millis() as u64,
            "Decoded input"
        );

        let stage = Instant::now();
        let (mosaic, report) = self.mosaic.render_with_report(&image)?;
        tracing::info!(
            side = report.region.side,
            origin = %report.region.origin,
            tile_size = report.tile_size,
            tiles = report.tile_count,
            elapsed_ms = stage.elapsed().as_millis() as u64,
            "Rendered mosaic"
        );

        let stage = Instant::now();
        let bytes = codec::encode(&mosaic, format)?;
        tracing::debug!(
            format = format.extension(),
            elapsed_ms = stage.elapsed().as_millis() as u64,
            "Encoded output"
        );

        Ok(RenderedImage {
            bytes,
            input_width: width,
            input_height: height,
            report,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::storage::MemoryStore;
    use pretty_assertions::assert_eq;
    use tessera_core::{Color, Point, RgbaBuffer};

    fn png_input(width: u32, height: u32, color: Color) -> Vec<u8> {
        let buffer = RgbaBuffer::filled(width, height, color).unwrap();
        codec::encode(&buffer, OutputFormat::Png).unwrap()
    }

    fn service(tile_size: u32) -> MosaicService<MemoryStore> {
        let config = MosaicConfig {
            tile_size,
            ..MosaicConfig::default()
        };
        MosaicService::new(MemoryStore::new(), config)
    }

    #[test]
    fn test_run_writes_output() {
        let service = service(2);
        let color = Color::from_u8(30, 60, 90, 255);
        service.store().insert("in.png", png_input(6, 4, color));

        let summary = service
            .run(Path::new("in.png"), Path::new("out.png"))
            .unwrap();

        assert_eq!((summary.input_width, summary.input_height), (6, 4));
        assert_eq!(summary.report.region.side, 4);
        assert_eq!(summary.report.tile_count, 4);
        assert_eq!(summary.format, OutputFormat::Png);

        let written = service.store().read(Path::new("out.png")).unwrap();
        assert_eq!(written.len(), summary.bytes_written);
        let output = codec::decode(&written).unwrap();
        assert_eq!((output.width(), output.height()), (4, 4));
        assert_eq!(output.get(Point::new(3, 3)).unwrap(), color);
    }

    #[test]
    fn test_indivisible_tile_writes_nothing() {
        let service = service(3);
        service
            .store()
            .insert("in.png", png_input(4, 4, Color::from_u8(1, 2, 3, 255)));

        let err = service
            .run(Path::new("in.png"), Path::new("out.png"))
            .unwrap_err();

        assert!(err.is_configuration());
        assert!(!service.store().contains(Path::new("out.png")));
    }

    #[test]
    fn test_bad_input_writes_nothing() {
        let service = service(1);
        service.store().insert("in.png", b"not a png".to_vec());

        let err = service
            .run(Path::new("in.png"), Path::new("out.png"))
            .unwrap_err();

        assert!(matches!(err, PipelineError::Decode(_)));
        assert!(!service.store().contains(Path::new("out.png")));
    }

    #[test]
    fn test_missing_input() {
        let service = service(1);
        let err = service
            .run(Path::new("missing.png"), Path::new("out.png"))
            .unwrap_err();
        assert!(matches!(err, PipelineError::Io(_)));
    }

    #[test]
    fn test_unknown_output_extension_fails_early() {
        let service = service(1);
        // Input is never read, so a missing input does not matter here
        let err = service
            .run(Path::new("missing.png"), Path::new("out.tiff"))
            .unwrap_err();
        assert!(matches!(err, PipelineError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_render_bytes_jpeg() {
        let service = service(4);
        let source = png_input(8, 8, Color::from_u8(200, 200, 200, 255));

        let rendered = service
            .render_bytes(&source, OutputFormat::Jpeg { quality: 75 })
            .unwrap();

        assert_eq!((rendered.input_width, rendered.input_height), (8, 8));
        assert_eq!(rendered.report.tile_count, 4);
        assert_eq!(&rendered.bytes[..2], &[0xFF, 0xD8]);
    }
}
