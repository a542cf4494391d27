//! Single-file Windows executables via PyInstaller.
//!
//! # Module Organization
//!
//! - `toolset` - PyInstaller archive caching, download and extraction
//! - `build` - `python -m PyInstaller` execution

mod build;
mod toolset;

pub use build::{pyinstaller_args, run_pyinstaller};
pub use toolset::{
    HttpDownloader, ToolsetDownloader, ensure_toolset_archive, extract_toolset, is_valid_archive,
    top_level_dir,
};

use crate::bundler::{builder::tool_detection, error::Result, settings::Settings};
use std::path::PathBuf;

/// Paths produced by a PyInstaller run.
#[derive(Debug, Clone)]
pub struct PyInstallerBuild {
    /// The built `<product>.exe`.
    pub exe_path: PathBuf,
    /// Distribution directory holding the executable.
    pub dist_dir: PathBuf,
    /// Extracted PyInstaller source tree.
    pub toolset_root: PathBuf,
}

/// Builds the product as a single-file executable.
///
/// # Process
///
/// 1. Reuse the cached PyInstaller archive or download it
/// 2. Extract it into the work directory
/// 3. Run `python -m PyInstaller -F` from the extracted root
///
/// Scratch directories are left in place; removing them is the caller's job.
pub async fn bundle_project<D: ToolsetDownloader>(
    settings: &Settings,
    version: &str,
    downloader: &D,
) -> Result<PyInstallerBuild> {
    let archive_path = ensure_toolset_archive(settings, downloader).await?;
    let toolset_root = extract_toolset(&archive_path, settings.work_dir()).await?;

    let python = tool_detection::resolve_python(settings).await?;
    let dist_dir = settings.dist_dir(version);

    log::info!("Building version {}...", version);
    run_pyinstaller(
        &python,
        &toolset_root,
        &dist_dir,
        settings.product_name(),
        &settings.entry_script(),
    )
    .await?;

    Ok(PyInstallerBuild {
        exe_path: dist_dir.join(settings.exe_name()),
        dist_dir,
        toolset_root,
    })
}
