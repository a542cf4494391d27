//! Configuration structures for the packaging pipeline.
//!
//! All paths the pipeline touches are derived from a single work directory,
//! so a [`Settings`] value fully describes one run.

mod builder;
mod core;
mod package;
mod toolset;

pub use builder::SettingsBuilder;
pub use core::Settings;
pub use package::PackageSettings;
pub use toolset::{
    DEFAULT_ARCHIVE_NAME, DEFAULT_PYINSTALLER_URL_TEMPLATE, DEFAULT_PYINSTALLER_VERSION,
    ToolsetSettings,
};

/// Product packaged by default.
pub const DEFAULT_PRODUCT_NAME: &str = "brigadier";

/// Name of the file holding the product version.
pub const VERSION_FILE_NAME: &str = "VERSION";

/// Scratch directory PyInstaller leaves behind.
pub const BUILD_DIR_NAME: &str = "build";

/// Prefix of the log files PyInstaller drops into the work directory.
pub const LOG_FILE_PREFIX: &str = "logdict";

/// The only host OS PyInstaller can produce Windows executables on.
pub const REQUIRED_HOST_OS: &str = "windows";
