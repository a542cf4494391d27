//! Artifact checksum calculation.
//!
//! Distribution channels verify the zip with a SHA-1 digest, so that is the
//! only algorithm computed here.

use crate::bundler::{Result, error::ErrorExt};
use sha1::{Digest, Sha1};
use tokio::io::AsyncReadExt;

/// Calculates the SHA-1 checksum of a file.
///
/// Reads in 8KB chunks. The digest covers the raw bytes only, so identical
/// content always yields the same checksum.
///
/// # Returns
///
/// * `Ok(String)` - Lowercase hex SHA-1 (40 characters)
/// * `Err` - If the file cannot be read
pub async fn calculate_sha1(file_path: &std::path::Path) -> Result<String> {
    let mut file = tokio::fs::File::open(file_path)
        .await
        .fs_context("opening file for hashing", file_path)?;
    let mut hasher = Sha1::new();
    let mut buffer = vec![0u8; 8192];

    loop {
        let n = file
            .read(&mut buffer)
            .await
            .fs_context("reading file for hash calculation", file_path)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(hex::encode(hasher.finalize()))
}
