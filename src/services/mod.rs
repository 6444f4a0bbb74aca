pub mod mosaic_service;
pub mod storage;

pub use mosaic_service::{MosaicService, RenderedImage, RunSummary};
pub use storage::{FsStore, ImageStore, MemoryStore};
