use crate::error::PipelineError;
use crate::models::output_format::{FormatName, OutputFormat, DEFAULT_JPEG_QUALITY};
use serde::Deserialize;
use std::path::Path;
use tessera_core::{Anchor, Mosaic};
use thiserror::Error;

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "TESSERA_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Mosaic settings loaded from a YAML file
///
/// ```yaml
/// tile_size: 20
/// anchor: centered
/// parallel: true
/// jpeg_quality: 90
/// format: png
/// ```
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct MosaicConfig {
    /// Tile side length in pixels
    #[serde(default = "default_tile_size")]
    pub tile_size: u32,

    /// Where the working square sits in the input
    #[serde(default)]
    pub anchor: Anchor,

    /// Working square side; the input's smaller dimension when unset
    #[serde(default)]
    pub side: Option<u32>,

    /// Average tiles on the rayon thread pool
    #[serde(default = "default_parallel")]
    pub parallel: bool,

    /// JPEG quality, 1-100
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,

    /// Output format; inferred from the output extension when unset
    #[serde(default)]
    pub format: Option<FormatName>,
}

fn default_tile_size() -> u32 {
    100
}

fn default_parallel() -> bool {
    true
}

fn default_jpeg_quality() -> u8 {
    DEFAULT_JPEG_QUALITY
}

impl MosaicConfig {
    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_yaml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            tile_size = config.tile_size,
            anchor = ?config.anchor,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Load `path` if given, otherwise fall back to defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                tracing::debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        // An empty document is a valid "all defaults" config
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that can never produce a mosaic
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tile_size == 0 {
            return Err(ConfigError::Invalid("tile_size must be at least 1".into()));
        }
        if self.side == Some(0) {
            return Err(ConfigError::Invalid("side must be at least 1".into()));
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(ConfigError::Invalid(format!(
                "jpeg_quality must be between 1 and 100, got {}",
                self.jpeg_quality
            )));
        }
        Ok(())
    }

    /// Renderer for these settings
    pub fn mosaic(&self) -> Mosaic {
        let mosaic = Mosaic::new(self.tile_size)
            .anchor(self.anchor)
            .parallel(self.parallel);
        match self.side {
            Some(side) => mosaic.side(side),
            None => mosaic,
        }
    }

    /// Output encoding for `output`: the configured format, else the
    /// file extension
    pub fn output_format(&self, output: &Path) -> Result<OutputFormat, PipelineError> {
        match self.format {
            Some(name) => Ok(OutputFormat::from_name(name, self.jpeg_quality)),
            None => OutputFormat::from_path(output, self.jpeg_quality),
        }
    }
}

impl Default for MosaicConfig {
    fn default() -> Self {
        Self {
            tile_size: default_tile_size(),
            anchor: Anchor::default(),
            side: None,
            parallel: default_parallel(),
            jpeg_quality: default_jpeg_quality(),
            format: None,
        }
    }
}
