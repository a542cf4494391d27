//! External tool detection and availability checking.
//!
//! Locates the Python interpreter that runs `-m PyInstaller` when none is
//! configured explicitly.

use crate::bundler::{
    error::{Context, Result},
    settings::Settings,
};
use std::{path::PathBuf, sync::LazyLock};

/// Interpreter names tried on `PATH`, in order.
pub const PYTHON_CANDIDATES: &[&str] = &["python", "py", "python3"];

/// First interpreter on `PATH` that answers `--version`.
///
/// Cached result to avoid repeated subprocess calls.
pub static PYTHON: LazyLock<Option<PathBuf>> = LazyLock::new(|| {
    PYTHON_CANDIDATES
        .iter()
        .find_map(|candidate| probe_python(candidate))
});

fn probe_python(candidate: &str) -> Option<PathBuf> {
    let path = match which::which(candidate) {
        Ok(path) => path,
        Err(e) => {
            log::debug!("{} not found in PATH: {}", candidate, e);
            return None;
        }
    };
    log::debug!("Found {} at: {}", candidate, path.display());

    match std::process::Command::new(&path).arg("--version").output() {
        Ok(output) if output.status.success() => {
            // Python 2 printed its version to stderr.
            let version = if output.stdout.is_empty() {
                String::from_utf8_lossy(&output.stderr).into_owned()
            } else {
                String::from_utf8_lossy(&output.stdout).into_owned()
            };
            log::info!("✓ {} available: {}", candidate, version.trim());
            Some(path)
        }
        Ok(output) => {
            log::warn!(
                "{} found at {} but --version check failed (exit code: {:?}). Stderr: {}",
                candidate,
                path.display(),
                output.status.code(),
                String::from_utf8_lossy(&output.stderr)
            );
            None
        }
        Err(e) => {
            log::warn!(
                "{} found at {} but failed to execute: {}. Check file permissions.",
                candidate,
                path.display(),
                e
            );
            None
        }
    }
}

/// Interpreter to run PyInstaller with.
///
/// The configured interpreter wins; otherwise the cached [`PYTHON`] probe is
/// used. The probe spawns processes, so it runs on the blocking pool.
pub async fn resolve_python(settings: &Settings) -> Result<PathBuf> {
    if let Some(python) = settings.python() {
        return Ok(python.to_path_buf());
    }

    let detected = tokio::task::spawn_blocking(|| (*PYTHON).clone())
        .await
        .context("Python detection task panicked")?;

    match detected {
        Some(path) => Ok(path),
        None => crate::bail!(
            "no Python interpreter found (tried {}). Install Python 3.8+ or pass --python",
            PYTHON_CANDIDATES.join(", ")
        ),
    }
}
