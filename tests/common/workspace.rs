//! Temporary directory with helpers for image files.

use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tessera::codec;
use tessera::models::OutputFormat;
use tessera_core::RgbaBuffer;

/// A scratch directory that is removed when dropped
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Encode `buffer` as PNG and store it under `name`
    pub fn write_png(&self, name: &str, buffer: &RgbaBuffer) -> PathBuf {
        let bytes = codec::encode(buffer, OutputFormat::Png).expect("Failed to encode PNG");
        self.write_bytes(name, &bytes)
    }

    pub fn write_bytes(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, bytes).expect("Failed to write fixture");
        path
    }

    pub fn write_text(&self, name: &str, text: &str) -> PathBuf {
        self.write_bytes(name, text.as_bytes())
    }

    /// Decode the image stored under `name`
    pub fn read_image(&self, name: &str) -> RgbaBuffer {
        let bytes = std::fs::read(self.path(name)).expect("Failed to read output");
        codec::decode(&bytes).expect("Failed to decode output")
    }

    pub fn exists(&self, name: &str) -> bool {
        self.path(name).exists()
    }

    /// Names of all files in the workspace, sorted
    pub fn file_names(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.root())
            .expect("Failed to list temp dir")
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}
