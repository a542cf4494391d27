//! Pinned PyInstaller source archive.

/// PyInstaller release downloaded when no valid cache exists.
pub const DEFAULT_PYINSTALLER_VERSION: &str = "6.10.0";

/// Source archive URL; `{version}` is replaced with the pinned version.
pub const DEFAULT_PYINSTALLER_URL_TEMPLATE: &str =
    "https://github.com/pyinstaller/pyinstaller/archive/refs/tags/v{version}.zip";

/// File name of the cached archive inside the work directory.
pub const DEFAULT_ARCHIVE_NAME: &str = "pyinstaller.zip";

/// Where the packaging tool comes from and where it is cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolsetSettings {
    /// PyInstaller release tag without the leading `v`.
    pub version: String,

    /// URL template containing a `{version}` placeholder.
    pub url_template: String,

    /// Cache file name, relative to the work directory.
    pub archive_name: String,
}

impl Default for ToolsetSettings {
    fn default() -> Self {
        Self {
            version: DEFAULT_PYINSTALLER_VERSION.to_string(),
            url_template: DEFAULT_PYINSTALLER_URL_TEMPLATE.to_string(),
            archive_name: DEFAULT_ARCHIVE_NAME.to_string(),
        }
    }
}

impl ToolsetSettings {
    /// Download URL for the pinned version.
    pub fn url(&self) -> String {
        self.url_template.replace("{version}", &self.version)
    }
}
