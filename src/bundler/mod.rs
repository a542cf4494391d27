//! PyInstaller packaging pipeline.
//!
//! This module turns the `brigadier` entry-point script into a distributable
//! zip holding a single-file Windows executable.
//!
//! # Overview
//!
//! The [`Bundler`]:
//! 1. Refuses to run on hosts other than Windows
//! 2. Reads the product version from the `VERSION` file
//! 3. Reuses or downloads the pinned PyInstaller source archive
//! 4. Extracts it and runs `python -m PyInstaller -F ...`
//! 5. Zips the executable as `<product>-<version>/<product>.exe`
//! 6. Computes the SHA-1 of the zip and removes scratch directories
//!
//! # Example
//!
//! ```no_run
//! use brigadier_bundler::bundler::{Bundler, SettingsBuilder};
//!
//! # async fn example() -> brigadier_bundler::bundler::Result<()> {
//! let settings = SettingsBuilder::new().work_dir(".").build()?;
//! let artifact = Bundler::new(settings).bundle().await?;
//!
//! println!("Built and archived to {}.", artifact.path.display());
//! println!("SHA1: {}", artifact.checksum);
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`builder`] - [`Bundler`] orchestrator, checksums, interpreter detection
//! - [`error`] - Error type and context helpers
//! - [`platform`] - Host guard and the PyInstaller steps
//! - [`settings`] - [`Settings`] and [`SettingsBuilder`]
//! - [`utils`] - Filesystem and HTTP helpers

pub mod builder;
pub mod error;
pub mod platform;
pub mod settings;
pub mod utils;

use std::path::PathBuf;

pub use builder::{Bundler, calculate_sha1};
pub use error::{Error, Result};
pub use platform::windows::pyinstaller::{HttpDownloader, ToolsetDownloader};
pub use settings::{Settings, SettingsBuilder, ToolsetSettings};

/// Result of a successful packaging run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundledArtifact {
    /// Path of the `<product>-<version>.zip` archive.
    pub path: PathBuf,
    /// Version read from the `VERSION` file.
    pub version: String,
    /// Archive size in bytes.
    pub size: u64,
    /// Lowercase hex SHA-1 of the archive bytes.
    pub checksum: String,
}
