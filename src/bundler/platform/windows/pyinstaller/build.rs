//! PyInstaller build execution.
//!
//! Runs `python -m PyInstaller` to turn the entry-point script into a
//! single-file executable.

use crate::bundler::error::{Error, Result};
use std::{ffi::OsString, path::Path};

/// Arguments passed to the interpreter.
///
/// `-m PyInstaller -F --distpath <dist_dir> --name <product> <entry_script>`
pub fn pyinstaller_args(dist_dir: &Path, product_name: &str, entry_script: &Path) -> Vec<OsString> {
    vec![
        "-m".into(),
        "PyInstaller".into(),
        "-F".into(),
        "--distpath".into(),
        dist_dir.as_os_str().to_owned(),
        "--name".into(),
        product_name.into(),
        entry_script.as_os_str().to_owned(),
    ]
}

/// Run PyInstaller from the extracted source tree.
///
/// Output streams are inherited so the tool's own diagnostics reach the
/// console. There is no timeout.
///
/// # Arguments
/// - `python` - Interpreter that runs `-m PyInstaller`
/// - `toolset_root` - Extracted PyInstaller tree, used as working directory
/// - `dist_dir` - Directory the executable is written to
/// - `product_name` - Executable name without extension
/// - `entry_script` - Script to package
pub async fn run_pyinstaller(
    python: &Path,
    toolset_root: &Path,
    dist_dir: &Path,
    product_name: &str,
    entry_script: &Path,
) -> Result<()> {
    let command = python.display().to_string();
    log::debug!(
        "Running {} -m PyInstaller in {}",
        command,
        toolset_root.display()
    );

    let status = tokio::process::Command::new(python)
        .args(pyinstaller_args(dist_dir, product_name, entry_script))
        .current_dir(toolset_root)
        .status()
        .await
        .map_err(|error| Error::CommandFailed {
            command: command.clone(),
            error,
        })?;

    if !status.success() {
        return Err(Error::BuildFailed {
            command,
            code: status.code(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn args_follow_single_file_layout() {
        let args = pyinstaller_args(
            Path::new("/w/brigadier-1.0"),
            "brigadier",
            Path::new("/w/brigadier"),
        );
        let expected: Vec<OsString> = [
            "-m",
            "PyInstaller",
            "-F",
            "--distpath",
            "/w/brigadier-1.0",
            "--name",
            "brigadier",
            "/w/brigadier",
        ]
        .iter()
        .map(OsString::from)
        .collect();
        assert_eq!(args, expected);
    }

    #[tokio::test]
    async fn missing_interpreter_is_a_command_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let err = run_pyinstaller(
            &PathBuf::from("definitely-not-a-python-binary"),
            tmp.path(),
            &tmp.path().join("dist"),
            "brigadier",
            &tmp.path().join("brigadier"),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, Error::CommandFailed { .. }));
    }
}
