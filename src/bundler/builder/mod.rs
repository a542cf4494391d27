//! Packaging orchestration.
//!
//! This module provides the [`Bundler`] orchestrator that runs the
//! PyInstaller pipeline end to end.
//!
//! # Module Organization
//!
//! - [`archive`] - Distribution zip creation
//! - [`checksum`] - SHA-1 calculation for the distribution zip
//! - [`orchestrator`] - Main [`Bundler`] struct
//! - [`tool_detection`] - Python interpreter discovery

pub mod archive;
pub mod checksum;
pub mod orchestrator;
pub mod tool_detection;

pub use checksum::calculate_sha1;
pub use orchestrator::Bundler;
