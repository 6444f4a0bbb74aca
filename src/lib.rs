//! Tessera - RMS-averaged square-tile mosaics
//!
//! File, codec and configuration layer around `tessera-core`.
//! This library exposes modules for the CLI and integration testing.

pub mod codec;
pub mod error;
pub mod models;
pub mod services;
