//! Brigadier Bundler - Windows executable packager.
//!
//! This binary builds a single-file brigadier.exe with PyInstaller and
//! archives it as a versioned zip with a SHA-1 checksum.

use std::process;

#[tokio::main]
async fn main() {
    // Run CLI and get exit code
    let exit_code = match brigadier_bundler::cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    };

    process::exit(exit_code);
}
