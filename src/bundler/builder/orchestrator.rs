//! Main bundler orchestration and coordination.
//!
//! This module provides the [`Bundler`] orchestrator that runs the packaging
//! steps in order and cleans up after a successful run.

use crate::bundler::{
    BundledArtifact, Result, Settings,
    error::ErrorExt,
    platform::{
        host,
        windows::pyinstaller::{self, HttpDownloader, ToolsetDownloader},
    },
    utils::fs,
};
use std::path::Path;

use super::{archive::create_distribution_zip, checksum::calculate_sha1};

/// Main bundler orchestrator.
///
/// Runs the pipeline strictly in sequence. Any error aborts the run before
/// cleanup, so scratch directories from a failed run stay on disk for
/// inspection and are replaced by the next run.
///
/// # Examples
///
/// ```no_run
/// use brigadier_bundler::bundler::{Bundler, Settings};
///
/// # async fn example(settings: Settings) -> brigadier_bundler::bundler::Result<()> {
/// let artifact = Bundler::new(settings).bundle().await?;
/// println!("SHA1: {}", artifact.checksum);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Bundler<D = HttpDownloader> {
    settings: Settings,
    downloader: D,
}

impl Bundler {
    /// Creates a bundler that downloads PyInstaller over HTTP.
    pub fn new(settings: Settings) -> Self {
        Self::with_downloader(settings, HttpDownloader)
    }
}

impl<D: ToolsetDownloader> Bundler<D> {
    /// Creates a bundler with a custom archive downloader.
    pub fn with_downloader(settings: Settings, downloader: D) -> Self {
        Self {
            settings,
            downloader,
        }
    }

    /// Returns a reference to the bundler settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Builds, archives and checksums the executable.
    ///
    /// # Process
    ///
    /// 1. Reject hosts other than Windows (no filesystem or network access)
    /// 2. Read `VERSION`
    /// 3. Acquire and extract PyInstaller, then build the executable
    /// 4. Zip it as `<product>-<version>/<product>.exe`
    /// 5. Compute the SHA-1 of the zip
    /// 6. Remove scratch directories and `logdict*` files
    ///
    /// # Returns
    ///
    /// The [`BundledArtifact`] describing the zip.
    pub async fn bundle(&self) -> Result<BundledArtifact> {
        host::ensure_supported_host(&self.settings)?;

        let version = read_version(&self.settings.version_file()).await?;
        let build = pyinstaller::bundle_project(&self.settings, &version, &self.downloader).await?;

        log::info!("Compressing to zip file...");
        let archive_path = self.settings.output_archive_path(&version);
        create_distribution_zip(
            &build.exe_path,
            &archive_path,
            &self.settings.archive_entry_name(&version),
        )
        .await?;

        let checksum = calculate_sha1(&archive_path).await?;
        let size = tokio::fs::metadata(&archive_path)
            .await
            .fs_context("reading artifact metadata", &archive_path)?
            .len();

        log::info!("Cleaning up...");
        self.cleanup(&[
            build.dist_dir.as_path(),
            self.settings.build_dir().as_path(),
            build.toolset_root.as_path(),
        ])
        .await?;

        Ok(BundledArtifact {
            path: archive_path,
            version,
            size,
            checksum,
        })
    }

    /// Removes scratch directories that exist and PyInstaller's log files.
    async fn cleanup(&self, dirs: &[&Path]) -> Result<()> {
        for dir in dirs {
            if fs::remove_dir_all(dir).await? {
                log::debug!("Removed {}", dir.display());
            }
        }

        let removed =
            fs::remove_files_with_prefix(self.settings.work_dir(), self.settings.log_file_prefix())
                .await?;
        for path in removed {
            log::debug!("Removed {}", path.display());
        }

        Ok(())
    }
}

/// Reads and trims the version string.
///
/// A missing file is a fatal I/O error; an empty version is rejected.
pub async fn read_version(path: &Path) -> Result<String> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .fs_context("reading version file", path)?;

    let version = contents.trim();
    if version.is_empty() {
        crate::bail!("version file is empty: {}", path.display());
    }

    Ok(version.to_string())
}
