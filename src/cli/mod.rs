//! Command line interface for the brigadier bundler.
//!
//! This module wires parsed arguments into [`Bundler`](crate::bundler::Bundler)
//! and reports the result.

mod args;
mod output;

pub use args::{Args, RuntimeConfig};
pub use output::OutputManager;

use crate::{
    bundler::{self, BundledArtifact, Bundler, ToolsetDownloader},
    error::{CliError, Result},
};
use anyhow::Context as _;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    init_logging(&args);
    run_with_args(&args).await
}

/// Initialize logging; `--quiet` drops the pipeline's info-level progress lines
fn init_logging(args: &Args) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_filter()))
        .init();
}

/// Execute a packaging run for already-parsed arguments
pub async fn run_with_args(args: &Args) -> Result<i32> {
    let settings = prepare(args)?;
    execute(args, Bundler::new(settings)).await
}

/// Validate arguments and build settings
fn prepare(args: &Args) -> Result<bundler::Settings> {
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;
    Ok(args.settings()?)
}

/// Run the bundler and print the report
pub async fn execute<D: ToolsetDownloader>(args: &Args, packager: Bundler<D>) -> Result<i32> {
    let config = RuntimeConfig::from(args);
    let settings = packager.settings();

    config.section(&format!("Packaging {} for Windows", settings.product_name()))?;
    config.verbose_println(&format!("Work directory: {}", settings.work_dir().display()))?;
    config.verbose_println(&format!("PyInstaller: {}", settings.toolset().url()))?;

    match packager.bundle().await {
        Ok(artifact) => {
            report(&config, &artifact).context("failed to print build report")?;
            Ok(0)
        }
        Err(bundler::Error::UnsupportedHost { host, .. }) => {
            let out = config.output();
            out.error("This tool builds a Windows exe and must be run on Windows.")?;
            out.error("On Mac/Linux, push to GitHub and use Actions to build on Windows.")?;
            log::debug!("Refused to run on host {}", host);
            Ok(1)
        }
        Err(e) => Err(e.into()),
    }
}

fn report(config: &RuntimeConfig, artifact: &BundledArtifact) -> std::io::Result<()> {
    config.success(&format!(
        "Packaged version {} ({} bytes)",
        artifact.version, artifact.size
    ))?;

    let out = config.output();
    out.report(&format!("Built and archived to {}.", artifact.path.display()))?;
    out.report(&format!("SHA1: {}", artifact.checksum))
}
