//! Builder for constructing Settings.

use super::{PackageSettings, Settings, ToolsetSettings};
use crate::bundler::error::ErrorExt;
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// Builder for constructing [`Settings`].
///
/// # Examples
///
/// ```no_run
/// use brigadier_bundler::bundler::{SettingsBuilder, ToolsetSettings};
///
/// # fn example() -> brigadier_bundler::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .work_dir(".")
///     .toolset(ToolsetSettings {
///         version: "6.10.0".into(),
///         ..Default::default()
///     })
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    work_dir: Option<PathBuf>,
    package: PackageSettings,
    toolset: ToolsetSettings,
    python: Option<PathBuf>,
    host_os: Option<String>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the work directory holding `VERSION` and the entry script.
    ///
    /// Default: the current directory
    pub fn work_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.work_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the product name.
    pub fn product_name(mut self, name: impl Into<String>) -> Self {
        self.package.product_name = name.into();
        self
    }

    /// Sets the entry-point script, relative to the work directory.
    ///
    /// Default: `<work_dir>/<product_name>`
    pub fn entry_script<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.package.entry_script = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets PyInstaller source settings.
    pub fn toolset(mut self, toolset: ToolsetSettings) -> Self {
        self.toolset = toolset;
        self
    }

    /// Sets the interpreter used to run PyInstaller.
    ///
    /// Default: discovered on `PATH`
    pub fn python<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.python = Some(path.as_ref().to_path_buf());
        self
    }

    /// Overrides the detected host OS.
    ///
    /// Default: `std::env::consts::OS`
    pub fn host_os(mut self, os: impl Into<String>) -> Self {
        self.host_os = Some(os.into());
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the product name is empty, the toolset version is
    /// empty, or the work directory cannot be made absolute.
    pub fn build(self) -> crate::bundler::Result<Settings> {
        let product_name = self.package.product_name.trim();
        if product_name.is_empty() || product_name.contains(['/', '\\']) {
            crate::bail!("invalid product name: {:?}", self.package.product_name);
        }
        if self.toolset.version.trim().is_empty() {
            crate::bail!("PyInstaller version must not be empty");
        }
        if !self.toolset.url_template.contains("{version}") {
            crate::bail!("PyInstaller URL template must contain {{version}}");
        }

        let work_dir = self.work_dir.unwrap_or_else(|| PathBuf::from("."));
        let work_dir = work_dir
            .absolutize()
            .fs_context("resolving work directory", &work_dir)?
            .into_owned();

        let host_os = self
            .host_os
            .unwrap_or_else(|| std::env::consts::OS.to_string());

        Ok(Settings::new(
            self.package,
            self.toolset,
            work_dir,
            self.python,
            host_os,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_derive_from_work_dir() {
        let settings = SettingsBuilder::new()
            .work_dir("/tmp/brig")
            .build()
            .unwrap();

        let root = Path::new("/tmp/brig");
        assert_eq!(settings.version_file(), root.join("VERSION"));
        assert_eq!(settings.entry_script(), root.join("brigadier"));
        assert_eq!(settings.toolset_archive_path(), root.join("pyinstaller.zip"));
        assert_eq!(settings.dist_dir("2.0"), root.join("brigadier-2.0"));
        assert_eq!(settings.build_dir(), root.join("build"));
        assert_eq!(settings.output_archive_path("2.0"), root.join("brigadier-2.0.zip"));
        assert_eq!(settings.archive_entry_name("2.0"), "brigadier-2.0/brigadier.exe");
    }

    #[test]
    fn entry_script_overrides_product_default() {
        let settings = SettingsBuilder::new()
            .work_dir("/tmp/brig")
            .entry_script("scripts/brigadier.py")
            .build()
            .unwrap();

        assert_eq!(settings.entry_script(), Path::new("/tmp/brig/scripts/brigadier.py"));
        assert_eq!(settings.exe_name(), "brigadier.exe");
    }

    #[test]
    fn relative_work_dir_is_absolutized() {
        let settings = SettingsBuilder::new().work_dir("sub").build().unwrap();
        assert!(settings.work_dir().is_absolute());
        assert!(settings.work_dir().ends_with("sub"));
    }

    #[test]
    fn rejects_empty_product_name() {
        assert!(SettingsBuilder::new().product_name("  ").build().is_err());
    }

    #[test]
    fn rejects_template_without_placeholder() {
        let result = SettingsBuilder::new()
            .toolset(ToolsetSettings {
                url_template: "https://example.invalid/pyinstaller.zip".into(),
                ..Default::default()
            })
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn host_os_defaults_to_current() {
        let settings = SettingsBuilder::new().build().unwrap();
        assert_eq!(settings.host_os(), std::env::consts::OS);
    }
}
