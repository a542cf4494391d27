//! PyInstaller toolset acquisition.
//!
//! Keeps the pinned source archive cached in the work directory, replaces it
//! when it is not a readable zip, and extracts it for the build step.

use crate::bundler::{
    error::{Context, Error, ErrorExt, Result},
    settings::Settings,
    utils::http,
};
use std::{
    ffi::OsStr,
    future::Future,
    path::{Component, Path, PathBuf},
};

/// Fetches the PyInstaller source archive.
///
/// The pipeline calls [`ToolsetDownloader::download`] at most once per run.
pub trait ToolsetDownloader {
    /// Returns the archive bytes served at `url`.
    fn download(&self, url: &str) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

/// Downloader backed by [`http::download`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpDownloader;

impl ToolsetDownloader for HttpDownloader {
    async fn download(&self, url: &str) -> Result<Vec<u8>> {
        http::download(url).await
    }
}

/// Ensures a valid PyInstaller archive exists at the cache path.
///
/// An existing file is reused when it opens as a zip. Otherwise it is
/// overwritten by a fresh download. Returns the cache path.
pub async fn ensure_toolset_archive<D: ToolsetDownloader>(
    settings: &Settings,
    downloader: &D,
) -> Result<PathBuf> {
    let archive_path = settings.toolset_archive_path();

    let exists = tokio::fs::try_exists(&archive_path)
        .await
        .fs_context("checking PyInstaller archive", &archive_path)?;

    let need_download = if exists {
        log::info!("PyInstaller zipfile found.");
        if is_valid_archive(&archive_path).await? {
            false
        } else {
            log::warn!("Zipfile is corrupt.");
            true
        }
    } else {
        true
    };

    if need_download {
        log::info!("Downloading PyInstaller...");
        let data = downloader.download(&settings.toolset().url()).await?;
        tokio::fs::write(&archive_path, data)
            .await
            .fs_context("writing PyInstaller archive", &archive_path)?;
    } else {
        log::debug!("Reusing cached archive {}", archive_path.display());
    }

    Ok(archive_path)
}

/// Checks whether the file at `path` opens as a zip archive.
///
/// Failing to open the file at all is an error; failing to parse it is `false`.
pub async fn is_valid_archive(path: &Path) -> Result<bool> {
    let path = path.to_path_buf();
    tokio::task::spawn_blocking(move || -> Result<bool> {
        let file = std::fs::File::open(&path).fs_context("opening PyInstaller archive", &path)?;
        match zip::ZipArchive::new(file) {
            Ok(_) => Ok(true),
            Err(e) => {
                log::debug!("{} is not a valid zip: {}", path.display(), e);
                Ok(false)
            }
        }
    })
    .await
    .context("archive validation task panicked")?
}

/// Top-level directory of a sanitized archive entry path.
///
/// `pyinstaller-6.10.0/setup.py` yields `pyinstaller-6.10.0`. Paths that start
/// with `.`, `..`, a root or a prefix yield `None`.
pub fn top_level_dir(entry: &Path) -> Option<&OsStr> {
    match entry.components().next()? {
        Component::Normal(name) => Some(name),
        _ => None,
    }
}

/// Extracts the archive into `dest` and returns the extracted root directory.
///
/// The root is the top-level directory of the archive's first entry and is
/// always a direct child of `dest`. A stale copy of that directory is removed
/// first so every run starts clean.
pub async fn extract_toolset(archive_path: &Path, dest: &Path) -> Result<PathBuf> {
    let archive_path = archive_path.to_path_buf();
    let dest = dest.to_path_buf();

    let root = tokio::task::spawn_blocking(move || -> Result<PathBuf> {
        let file = std::fs::File::open(&archive_path)
            .fs_context("opening PyInstaller archive", &archive_path)?;
        let mut archive = zip::ZipArchive::new(file)?;
        if archive.is_empty() {
            return Err(Error::EmptyArchive(archive_path));
        }

        let (entry, root_name) = {
            let first = archive.by_index(0)?;
            let root_name = first
                .enclosed_name()
                .as_deref()
                .and_then(top_level_dir)
                .map(OsStr::to_os_string);
            (first.name().to_string(), root_name)
        };
        let Some(root_name) = root_name else {
            return Err(Error::UnsafeArchiveRoot {
                archive: archive_path,
                entry,
            });
        };
        let root = dest.join(root_name);

        if root.is_dir() {
            log::debug!("Removing stale extraction {}", root.display());
            std::fs::remove_dir_all(&root).fs_context("removing stale PyInstaller root", &root)?;
        }

        log::debug!("Extracting {} into {}", archive_path.display(), dest.display());
        archive.extract(&dest)?;
        Ok(root)
    })
    .await
    .context("archive extraction task panicked")??;

    if !tokio::fs::metadata(&root)
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false)
    {
        return Err(Error::ToolsetRootMissing(root));
    }

    Ok(root)
}
