//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap, with environment
//! variable fallbacks for CI use.

use crate::bundler::{
    Result as BundleResult, Settings, SettingsBuilder, ToolsetSettings,
    settings::{DEFAULT_PRODUCT_NAME, DEFAULT_PYINSTALLER_VERSION},
};
use clap::Parser;
use std::path::PathBuf;

/// Windows executable packager for brigadier
#[derive(Parser, Debug)]
#[command(
    name = "brigadier_bundler",
    version,
    about = "Builds a standalone Windows executable of brigadier with PyInstaller",
    long_about = "Builds a single-file brigadier.exe with a pinned PyInstaller release and archives it.

Reads VERSION and the brigadier script from the work directory, downloads PyInstaller
(cached as pyinstaller.zip), writes brigadier-<version>.zip and prints its SHA-1.

Usage:
  brigadier_bundler
  brigadier_bundler --work-dir C:\\src\\brigadier --python C:\\Python312\\python.exe

Must run on Windows. Exit code 0 = archive guaranteed to exist in the work directory."
)]
pub struct Args {
    /// Directory containing VERSION and the entry-point script
    #[arg(
        short = 'C',
        long,
        value_name = "DIR",
        env = "BRIGADIER_WORK_DIR",
        default_value = "."
    )]
    pub work_dir: PathBuf,

    /// Python interpreter used to run PyInstaller (default: first of python, py, python3 on PATH)
    #[arg(long, value_name = "PATH", env = "BRIGADIER_PYTHON")]
    pub python: Option<PathBuf>,

    /// PyInstaller release to download
    #[arg(
        long,
        value_name = "VERSION",
        env = "BRIGADIER_PYINSTALLER_VERSION",
        default_value = DEFAULT_PYINSTALLER_VERSION
    )]
    pub pyinstaller_version: String,

    /// Product name, used for the executable and archive names
    #[arg(long, value_name = "NAME", default_value = DEFAULT_PRODUCT_NAME)]
    pub product_name: String,

    /// Entry-point script, relative to the work directory (default: the product name)
    #[arg(long, value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// Show detail lines and debug logs
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress progress output (the final report is always printed)
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.product_name.trim().is_empty() {
            return Err("Product name cannot be empty".to_string());
        }

        if self.pyinstaller_version.trim().is_empty() {
            return Err("PyInstaller version cannot be empty".to_string());
        }

        if self
            .pyinstaller_version
            .chars()
            .any(|c| c == '/' || c.is_whitespace())
        {
            return Err(format!(
                "Invalid PyInstaller version: {}",
                self.pyinstaller_version
            ));
        }

        Ok(())
    }

    /// Bundler settings described by these arguments
    pub fn settings(&self) -> BundleResult<Settings> {
        let mut builder = SettingsBuilder::new()
            .work_dir(&self.work_dir)
            .product_name(self.product_name.trim())
            .toolset(ToolsetSettings {
                version: self.pyinstaller_version.trim().to_string(),
                ..Default::default()
            });

        if let Some(python) = &self.python {
            builder = builder.python(python);
        }
        if let Some(script) = &self.script {
            builder = builder.entry_script(script);
        }

        builder.build()
    }

    /// Default log filter when `RUST_LOG` is unset
    pub fn log_filter(&self) -> &'static str {
        if self.quiet {
            "warn"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for terminal output
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        let output = super::OutputManager::new(args.verbose, args.quiet);

        Self { output }
    }
}

impl RuntimeConfig {
    /// Get a reference to the output manager
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }

    /// Print verbose message if in verbose mode
    pub fn verbose_println(&self, message: &str) -> std::io::Result<()> {
        self.output.verbose(message)
    }

    /// Print success message if not in quiet mode
    pub fn success(&self, message: &str) -> std::io::Result<()> {
        self.output.success(message)
    }

    /// Print section header
    pub fn section(&self, title: &str) -> std::io::Result<()> {
        self.output.section(title)
    }
}
