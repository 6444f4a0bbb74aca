use crate::error::PipelineError;
use serde::Deserialize;
use std::path::Path;

/// Default JPEG quality, matching the stock encoder settings
pub const DEFAULT_JPEG_QUALITY: u8 = 75;

/// Encoded form of the rendered mosaic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Jpeg { quality: u8 },
    Png,
}

/// Format name as written in config files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatName {
    #[serde(alias = "jpg")]
    Jpeg,
    Png,
}

impl OutputFormat {
    pub fn from_name(name: FormatName, jpeg_quality: u8) -> Self {
        match name {
            FormatName::Jpeg => Self::Jpeg {
                quality: jpeg_quality,
            },
            FormatName::Png => Self::Png,
        }
    }

    /// Infer the format from a file extension (case-insensitive)
    pub fn from_path(path: &Path, jpeg_quality: u8) -> Result<Self, PipelineError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("jpg" | "jpeg") => Ok(Self::Jpeg {
                quality: jpeg_quality,
            }),
            Some("png") => Ok(Self::Png),
            _ => Err(PipelineError::UnsupportedFormat(path.display().to_string())),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Jpeg { .. } => "jpg",
            Self::Png => "png",
        }
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Jpeg {
            quality: DEFAULT_JPEG_QUALITY,
        }
    }
}
