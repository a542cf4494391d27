//! Platform-specific packaging steps.
//!
//! PyInstaller only emits executables for the OS it runs on, so the Windows
//! module is reached only after [`host::ensure_supported_host`] passes.

pub mod host;
pub mod windows;
