//! Host platform guard.

use crate::bundler::{
    error::{Error, Result},
    settings::{REQUIRED_HOST_OS, Settings},
};

/// Fails unless the run targets the host PyInstaller can build for.
///
/// Performs no filesystem or network access.
pub fn ensure_supported_host(settings: &Settings) -> Result<()> {
    if settings.host_os() == REQUIRED_HOST_OS {
        return Ok(());
    }

    log::debug!(
        "Host OS {} does not match required {}",
        settings.host_os(),
        REQUIRED_HOST_OS
    );
    Err(Error::UnsupportedHost {
        host: settings.host_os().to_string(),
        required: REQUIRED_HOST_OS,
    })
}
