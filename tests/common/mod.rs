//! Shared fixtures for packaging pipeline tests

#![allow(dead_code)]

use brigadier_bundler::bundler::{Error, Result, Settings, SettingsBuilder, ToolsetDownloader};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Top-level directory of the fake PyInstaller source archive
pub const TOOLSET_ROOT: &str = "pyinstaller-6.10.0";

/// Downloader that serves fixed bytes and counts requests
pub struct CountingDownloader {
    body: Vec<u8>,
    calls: AtomicUsize,
    urls: std::sync::Mutex<Vec<String>>,
}

impl CountingDownloader {
    pub fn new(body: Vec<u8>) -> Self {
        Self {
            body,
            calls: AtomicUsize::new(0),
            urls: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

impl ToolsetDownloader for &CountingDownloader {
    async fn download(&self, url: &str) -> Result<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.urls.lock().unwrap().push(url.to_string());
        Ok(self.body.clone())
    }
}

/// Downloader whose every request fails like an unreachable host
#[derive(Default)]
pub struct FailingDownloader {
    calls: AtomicUsize,
}

impl FailingDownloader {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ToolsetDownloader for &FailingDownloader {
    async fn download(&self, url: &str) -> Result<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(Error::GenericError(format!("connection refused: {url}")))
    }
}

/// Build a zip in memory from (name, contents) pairs; names ending in `/` become directories
pub fn zip_bytes(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
    let options = zip::write::SimpleFileOptions::default();
    for (name, data) in entries {
        if name.ends_with('/') {
            writer.add_directory(*name, options).unwrap();
        } else {
            writer.start_file(*name, options).unwrap();
            writer.write_all(data.as_bytes()).unwrap();
        }
    }
    writer.finish().unwrap().into_inner()
}

/// Zip laid out like the PyInstaller source release
pub fn toolset_zip() -> Vec<u8> {
    let root_dir = format!("{TOOLSET_ROOT}/");
    let setup = format!("{TOOLSET_ROOT}/setup.py");
    let main = format!("{TOOLSET_ROOT}/PyInstaller/__main__.py");
    zip_bytes(&[
        (root_dir.as_str(), ""),
        (setup.as_str(), "from setuptools import setup\n"),
        (main.as_str(), "run()\n"),
    ])
}

/// Work directory seeded with VERSION and the entry-point script
pub fn work_dir(version: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    seed_work_dir(dir.path(), version);
    dir
}

/// Write VERSION and the entry-point script into an existing directory
pub fn seed_work_dir(dir: &Path, version: &str) {
    std::fs::write(dir.join("VERSION"), format!("{version}\n")).unwrap();
    std::fs::write(
        dir.join("brigadier"),
        "#!/usr/bin/env python\nprint('brigadier')\n",
    )
    .unwrap();
}

/// Fake interpreter that mimics `python -m PyInstaller -F --distpath D --name N S`
///
/// It checks the argument layout and working directory, writes `D/N.exe`,
/// leaves a `build/` directory and a `logdict*` file next to `D`, and records
/// that it ran in `<tools>/ran`.
#[cfg(unix)]
pub fn fake_python(tools: &Path) -> PathBuf {
    write_script(
        tools,
        "python-ok",
        r#"#!/bin/sh
touch "$(dirname "$0")/ran"
[ "$1" = "-m" ] && [ "$2" = "PyInstaller" ] && [ "$3" = "-F" ] || exit 3
[ "$4" = "--distpath" ] && [ "$6" = "--name" ] || exit 3
[ -f "$8" ] || exit 4
[ -f setup.py ] || exit 5
mkdir -p "$5" "$5/../build/$7"
printf 'MZ-%s' "$7" > "$5/$7.exe"
touch "$5/../logdict3.12.4.final.0-1.log" "$5/../logdict-extra"
"#,
    )
}

/// Fake interpreter that always fails like a broken PyInstaller run
#[cfg(unix)]
pub fn failing_python(tools: &Path) -> PathBuf {
    write_script(
        tools,
        "python-fail",
        "#!/bin/sh\ntouch \"$(dirname \"$0\")/ran\"\nmkdir -p \"$5/../build\"\nexit 2\n",
    )
}

#[cfg(unix)]
fn write_script(tools: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = tools.join(name);
    std::fs::write(&path, body).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Settings for a Windows run in `work` using `python`
pub fn settings(work: &Path, python: &Path) -> Settings {
    SettingsBuilder::new()
        .work_dir(work)
        .python(python)
        .host_os("windows")
        .build()
        .unwrap()
}

/// Sorted names of the entries directly inside `dir`
pub fn listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
