//! Windows executable packaging.
//!
//! # Supported Formats
//!
//! - **Single-file executable (.exe)**: via [`pyinstaller`], zipped for distribution
//!
//! # Build Requirements
//!
//! | Format | Required Tools | Download |
//! |--------|----------------|----------|
//! | .exe (PyInstaller) | Python 3.8+ on Windows | PyInstaller source auto-downloaded |

pub mod pyinstaller;
