use tessera_core::{ErrorKind, MosaicError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Mosaic error: {0}")]
    Mosaic(#[from] MosaicError),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Encode error: {0}")]
    Encode(String),

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PipelineError {
    /// Whether the failure comes from the requested settings rather than
    /// from the image or the filesystem.
    pub fn is_configuration(&self) -> bool {
        match self {
            PipelineError::Mosaic(e) => e.kind() == ErrorKind::InvalidConfiguration,
            PipelineError::UnsupportedFormat(_) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_error_decode() {
        let error = PipelineError::Decode("unexpected end of file".to_string());
        assert_eq!(error.to_string(), "Decode error: unexpected end of file");
    }

    #[test]
    fn test_pipeline_error_encode() {
        let error = PipelineError::Encode("buffer too small".to_string());
        assert_eq!(error.to_string(), "Encode error: buffer too small");
    }

    #[test]
    fn test_pipeline_error_unsupported_format() {
        let error = PipelineError::UnsupportedFormat("out.gif".to_string());
        assert_eq!(error.to_string(), "Unsupported output format: out.gif");
    }

    #[test]
    fn test_pipeline_error_from_mosaic() {
        let error: PipelineError = MosaicError::IndivisibleTile {
            side: 5,
            tile_size: 2,
        }
        .into();
        assert_eq!(
            error.to_string(),
            "Mosaic error: tile size 2 does not evenly divide working region side 5"
        );
        assert!(error.is_configuration());
    }

    #[test]
    fn test_pipeline_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: PipelineError = io_error.into();
        assert_eq!(error.to_string(), "IO error: file not found");
        assert!(!error.is_configuration());
    }

    #[test]
    fn test_input_errors_are_not_configuration() {
        let error: PipelineError = MosaicError::EmptySample.into();
        assert!(!error.is_configuration());
        assert!(!PipelineError::Decode("bad".into()).is_configuration());
    }
}
