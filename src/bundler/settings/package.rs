//! Product metadata.

use std::path::PathBuf;

/// Product metadata.
///
/// # Examples
///
/// ```no_run
/// use brigadier_bundler::bundler::settings::PackageSettings;
///
/// let settings = PackageSettings {
///     product_name: "brigadier".into(),
///     entry_script: None,
/// };
/// ```
#[derive(Debug, Clone)]
pub struct PackageSettings {
    /// Product name.
    ///
    /// Used as PyInstaller's `--name`, as the executable stem and as the
    /// prefix of the output archive (`<product>-<version>.zip`).
    pub product_name: String,

    /// Entry-point script handed to PyInstaller.
    ///
    /// Default: None (`<work_dir>/<product_name>`)
    pub entry_script: Option<PathBuf>,
}

impl Default for PackageSettings {
    fn default() -> Self {
        Self {
            product_name: super::DEFAULT_PRODUCT_NAME.to_string(),
            entry_script: None,
        }
    }
}
