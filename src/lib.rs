//! Windows executable packager for brigadier
//!
//! This library builds a single-file `brigadier.exe` with a pinned
//! PyInstaller release, then ships it as `brigadier-<version>.zip` together
//! with the archive's SHA-1 checksum.
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;

// Re-export commonly used types
pub use error::{BundlerError, CliError, Result};
