//! Filesystem and HTTP helpers shared by the packaging steps.

pub mod fs;
pub mod http;
