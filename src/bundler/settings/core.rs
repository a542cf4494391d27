//! Core Settings struct and implementations.

use super::{BUILD_DIR_NAME, LOG_FILE_PREFIX, PackageSettings, ToolsetSettings, VERSION_FILE_NAME};
use std::path::{Path, PathBuf};

/// Main settings for a packaging run.
///
/// Constructed via [`SettingsBuilder`](super::SettingsBuilder). Every path is
/// resolved against the absolute work directory.
///
/// # Examples
///
/// ```no_run
/// use brigadier_bundler::bundler::SettingsBuilder;
///
/// # fn example() -> brigadier_bundler::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .work_dir("/src/brigadier")
///     .python("C:/Python312/python.exe")
///     .build()?;
///
/// assert_eq!(settings.product_name(), "brigadier");
/// assert_eq!(
///     settings.output_archive_path("1.2.3"),
///     std::path::Path::new("/src/brigadier/brigadier-1.2.3.zip"),
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Settings {
    /// Product metadata.
    package: PackageSettings,

    /// PyInstaller source and cache location.
    toolset: ToolsetSettings,

    /// Absolute directory all inputs are read from and outputs written to.
    work_dir: PathBuf,

    /// Interpreter that runs `-m PyInstaller`.
    ///
    /// None means discover one on `PATH`.
    python: Option<PathBuf>,

    /// Host OS the run believes it is on (e.g. "windows", "linux").
    host_os: String,
}

impl Settings {
    pub(super) fn new(
        package: PackageSettings,
        toolset: ToolsetSettings,
        work_dir: PathBuf,
        python: Option<PathBuf>,
        host_os: String,
    ) -> Self {
        Self {
            package,
            toolset,
            work_dir,
            python,
            host_os,
        }
    }

    /// Returns the product name.
    pub fn product_name(&self) -> &str {
        &self.package.product_name
    }

    /// Returns the work directory.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Returns the PyInstaller settings.
    pub fn toolset(&self) -> &ToolsetSettings {
        &self.toolset
    }

    /// Returns the configured interpreter, if any.
    pub fn python(&self) -> Option<&Path> {
        self.python.as_deref()
    }

    /// Returns the host OS name.
    pub fn host_os(&self) -> &str {
        &self.host_os
    }

    /// Path of the `VERSION` file.
    pub fn version_file(&self) -> PathBuf {
        self.work_dir.join(VERSION_FILE_NAME)
    }

    /// Path of the entry-point script passed to PyInstaller.
    pub fn entry_script(&self) -> PathBuf {
        match &self.package.entry_script {
            Some(path) => self.work_dir.join(path),
            None => self.work_dir.join(self.product_name()),
        }
    }

    /// Path of the cached PyInstaller archive.
    pub fn toolset_archive_path(&self) -> PathBuf {
        self.work_dir.join(&self.toolset.archive_name)
    }

    /// `<product>-<version>`, used for the distribution directory, the
    /// archive name and the directory inside the archive.
    pub fn versioned_name(&self, version: &str) -> String {
        format!("{}-{}", self.product_name(), version)
    }

    /// File name of the built executable.
    pub fn exe_name(&self) -> String {
        format!("{}.exe", self.product_name())
    }

    /// Directory PyInstaller writes the executable into (`--distpath`).
    pub fn dist_dir(&self, version: &str) -> PathBuf {
        self.work_dir.join(self.versioned_name(version))
    }

    /// PyInstaller's build scratch directory.
    pub fn build_dir(&self) -> PathBuf {
        self.work_dir.join(BUILD_DIR_NAME)
    }

    /// Path of the deliverable `<product>-<version>.zip`.
    pub fn output_archive_path(&self, version: &str) -> PathBuf {
        self.work_dir
            .join(format!("{}.zip", self.versioned_name(version)))
    }

    /// Entry name of the executable inside the output archive.
    ///
    /// Always uses `/` separators regardless of host.
    pub fn archive_entry_name(&self, version: &str) -> String {
        format!("{}/{}", self.versioned_name(version), self.exe_name())
    }

    /// Prefix of PyInstaller log files removed during cleanup.
    pub fn log_file_prefix(&self) -> &'static str {
        LOG_FILE_PREFIX
    }
}
