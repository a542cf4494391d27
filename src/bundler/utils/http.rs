//! HTTP utilities for downloading bundler tools.

use crate::bundler::error::Result;

/// Downloads a file from a URL.
///
/// Returns the response body. Non-success status codes are errors; there is
/// no retry and no timeout.
///
/// Used by:
/// - PyInstaller source archive acquisition
pub async fn download(url: &str) -> Result<Vec<u8>> {
    log::info!("Downloading {}", url);

    let response = reqwest::get(url).await?.error_for_status()?;
    let bytes = response.bytes().await?;

    log::debug!("Downloaded {} bytes from {}", bytes.len(), url);
    Ok(bytes.to_vec())
}
