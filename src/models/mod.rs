pub mod config;
pub mod output_format;

pub use config::{ConfigError, MosaicConfig, CONFIG_ENV};
pub use output_format::{FormatName, OutputFormat, DEFAULT_JPEG_QUALITY};
