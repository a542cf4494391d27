//! Error types for bundling operations.
//!
//! Every failure in the packaging pipeline is fatal. The variants here exist so
//! the CLI can print a message that names the failing step and path.

use std::{
    fmt::Display,
    io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Result type alias for bundler operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while packaging the executable.
#[derive(Error, Debug)]
pub enum Error {
    /// Free-form failure with a descriptive message.
    #[error("{0}")]
    GenericError(String),

    /// Raw I/O failure.
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// Filesystem failure with the operation and path attached.
    #[error("{context} failed for {}: {error}", path.display())]
    Fs {
        /// What was being done, e.g. "reading version file".
        context: &'static str,
        /// Path the operation touched.
        path: PathBuf,
        /// Underlying I/O error.
        error: io::Error,
    },

    /// An external command could not be spawned.
    #[error("failed to run `{command}`: {error}")]
    CommandFailed {
        /// Program that was invoked.
        command: String,
        /// Spawn error.
        error: io::Error,
    },

    /// An external command ran but exited unsuccessfully.
    #[error("`{command}` failed with exit code {}", code.map_or_else(|| "none".to_string(), |c| c.to_string()))]
    BuildFailed {
        /// Program that was invoked.
        command: String,
        /// Exit code, if the process was not killed by a signal.
        code: Option<i32>,
    },

    /// The pipeline was started on a host the packaging tool cannot target.
    #[error("unsupported host `{host}`: this tool builds a {required} executable and must run on {required}")]
    UnsupportedHost {
        /// Host OS reported at runtime.
        host: String,
        /// OS the packaging tool requires.
        required: &'static str,
    },

    /// Extraction finished but the expected top-level directory is missing.
    #[error("PyInstaller root not found: {}", .0.display())]
    ToolsetRootMissing(PathBuf),

    /// The archive's first entry does not name a directory inside the destination.
    #[error("unsafe PyInstaller root in {}: first entry {entry:?}", archive.display())]
    UnsafeArchiveRoot {
        /// Archive being extracted.
        archive: PathBuf,
        /// Raw name of the first entry.
        entry: String,
    },

    /// The dependency archive has no entries to derive a root directory from.
    #[error("archive has no entries: {}", .0.display())]
    EmptyArchive(PathBuf),

    /// Zip reading or writing failed.
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// HTTP transfer failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Directory traversal failed.
    #[error("directory walk error: {0}")]
    Walkdir(#[from] walkdir::Error),
}

/// Attaches operation and path context to I/O results.
pub trait ErrorExt<T> {
    /// Converts an I/O error into [`Error::Fs`].
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.as_ref().to_path_buf(),
            error,
        })
    }
}

/// Converts `Option` and foreign `Result` values into bundler errors with a message.
pub trait Context<T> {
    /// Wraps the failure in [`Error::GenericError`] prefixed with `context`.
    fn context<C: Display>(self, context: C) -> Result<T>;
}

impl<T> Context<T> for Option<T> {
    fn context<C: Display>(self, context: C) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(context.to_string()))
    }
}

impl<T, E: Display> Context<T> for std::result::Result<T, E> {
    fn context<C: Display>(self, context: C) -> Result<T> {
        self.map_err(|e| Error::GenericError(format!("{context}: {e}")))
    }
}

/// Returns early with an [`Error::GenericError`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::bundler::Error::GenericError(format!($($arg)*)))
    };
}
