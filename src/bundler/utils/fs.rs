//! File system utilities for bundling.
//!
//! Idempotent removal helpers used by the cleanup step.

use crate::bundler::error::{ErrorExt, Result};
use std::{
    io,
    path::{Path, PathBuf},
};
use tokio::fs;

/// Removes the directory and its contents if it exists.
///
/// Returns whether anything was removed.
pub async fn remove_dir_all(path: &Path) -> Result<bool> {
    match fs::remove_dir_all(path).await {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e).fs_context("removing directory", path),
    }
}

/// Removes every regular file directly inside `dir` whose name starts with `prefix`.
///
/// Subdirectories are neither descended into nor removed. Returns the removed paths.
pub async fn remove_files_with_prefix(dir: &Path, prefix: &str) -> Result<Vec<PathBuf>> {
    let dir = dir.to_path_buf();
    let prefix = prefix.to_string();

    let matches = tokio::task::spawn_blocking(move || -> Result<Vec<PathBuf>> {
        let mut matches = Vec::new();
        for entry in walkdir::WalkDir::new(&dir).min_depth(1).max_depth(1) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            if entry.file_name().to_string_lossy().starts_with(&prefix) {
                matches.push(entry.into_path());
            }
        }
        Ok(matches)
    })
    .await
    .map_err(|e| {
        crate::bundler::Error::GenericError(format!("Directory scan task panicked: {}", e))
    })??;

    for path in &matches {
        fs::remove_file(path)
            .await
            .fs_context("removing log file", path)?;
    }

    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn remove_dir_all_ignores_missing() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(!remove_dir_all(&tmp.path().join("absent")).await.unwrap());
    }

    #[tokio::test]
    async fn remove_dir_all_removes_tree() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a/b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(nested.join("f"), b"x").unwrap();

        assert!(remove_dir_all(&tmp.path().join("a")).await.unwrap());
        assert!(!tmp.path().join("a").exists());
    }

    #[tokio::test]
    async fn prefix_removal_only_touches_matching_top_level_files() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        std::fs::write(root.join("logdict3.12.final.0-1.log"), b"").unwrap();
        std::fs::write(root.join("logdict"), b"").unwrap();
        std::fs::write(root.join("keep.log"), b"").unwrap();
        std::fs::create_dir(root.join("logdict-dir")).unwrap();
        std::fs::create_dir(root.join("sub")).unwrap();
        std::fs::write(root.join("sub/logdict.log"), b"").unwrap();

        let removed = remove_files_with_prefix(root, "logdict").await.unwrap();

        assert_eq!(removed.len(), 2);
        assert!(!root.join("logdict3.12.final.0-1.log").exists());
        assert!(!root.join("logdict").exists());
        assert!(root.join("keep.log").exists());
        assert!(root.join("logdict-dir").is_dir());
        assert!(root.join("sub/logdict.log").exists());
    }
}
