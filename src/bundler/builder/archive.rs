//! Distribution zip creation.
//!
//! The archive layout `<product>-<version>/<product>.exe` is what downstream
//! distribution channels unpack, so it must not change.

use crate::bundler::error::{Context, Error, ErrorExt, Result};
use chrono::{Datelike, Local, Timelike};
use std::{fs::Metadata, path::Path};
use zip::{CompressionMethod, DateTime, ZipWriter, write::SimpleFileOptions};

/// Writes a new zip at `zip_path` holding `exe_path` as its only entry.
///
/// The entry keeps the executable's modification time. An existing file at
/// `zip_path` is truncated.
pub async fn create_distribution_zip(
    exe_path: &Path,
    zip_path: &Path,
    entry_name: &str,
) -> Result<()> {
    let exe_path = exe_path.to_path_buf();
    let zip_path = zip_path.to_path_buf();
    let entry_name = entry_name.to_string();

    tokio::task::spawn_blocking(move || -> Result<()> {
        let metadata = match std::fs::metadata(&exe_path) {
            Ok(m) if m.is_file() => m,
            _ => {
                return Err(Error::GenericError(format!(
                    "built executable not found: {}",
                    exe_path.display()
                )));
            }
        };

        let mut source =
            std::fs::File::open(&exe_path).fs_context("opening built executable", &exe_path)?;
        let target =
            std::fs::File::create(&zip_path).fs_context("creating distribution zip", &zip_path)?;

        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .large_file(metadata.len() >= u64::from(u32::MAX))
            .last_modified_time(modified_timestamp(&metadata));

        let mut writer = ZipWriter::new(target);
        writer.start_file(entry_name.as_str(), options)?;
        std::io::copy(&mut source, &mut writer).fs_context("writing distribution zip", &zip_path)?;
        writer.finish()?;

        log::debug!("Wrote {} to {}", entry_name, zip_path.display());
        Ok(())
    })
    .await
    .context("zip task panicked")?
}

/// Local-time DOS timestamp of the file's mtime.
///
/// Times the format cannot hold (before 1980, after 2107) fall back to the
/// DOS epoch.
fn modified_timestamp(metadata: &Metadata) -> DateTime {
    let Ok(modified) = metadata.modified() else {
        return DateTime::default();
    };
    let local = chrono::DateTime::<Local>::from(modified);
    u16::try_from(local.year())
        .ok()
        .and_then(|year| {
            DateTime::from_date_and_time(
                year,
                local.month() as u8,
                local.day() as u8,
                local.hour() as u8,
                local.minute() as u8,
                local.second() as u8,
            )
            .ok()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[tokio::test]
    async fn zip_holds_exactly_the_executable() {
        let tmp = tempfile::tempdir().unwrap();
        let exe = tmp.path().join("brigadier.exe");
        std::fs::write(&exe, b"MZ\x90\x00fake-executable").unwrap();
        let zip_path = tmp.path().join("brigadier-1.0.zip");

        create_distribution_zip(&exe, &zip_path, "brigadier-1.0/brigadier.exe")
            .await
            .unwrap();

        let mut archive = zip::ZipArchive::new(std::fs::File::open(&zip_path).unwrap()).unwrap();
        assert_eq!(archive.len(), 1);
        let mut entry = archive.by_index(0).unwrap();
        assert_eq!(entry.name(), "brigadier-1.0/brigadier.exe");
        let mut contents = Vec::new();
        entry.read_to_end(&mut contents).unwrap();
        assert_eq!(contents, b"MZ\x90\x00fake-executable");
    }

    #[tokio::test]
    async fn entry_keeps_executable_mtime() {
        use chrono::TimeZone;

        let tmp = tempfile::tempdir().unwrap();
        let exe = tmp.path().join("brigadier.exe");
        std::fs::write(&exe, b"MZ").unwrap();
        let built_at = Local.with_ymd_and_hms(2021, 6, 15, 10, 20, 30).single().unwrap();
        std::fs::File::options()
            .write(true)
            .open(&exe)
            .unwrap()
            .set_modified(built_at.into())
            .unwrap();
        let zip_path = tmp.path().join("brigadier-1.0.zip");

        create_distribution_zip(&exe, &zip_path, "brigadier-1.0/brigadier.exe")
            .await
            .unwrap();

        let mut archive = zip::ZipArchive::new(std::fs::File::open(&zip_path).unwrap()).unwrap();
        let entry = archive.by_index(0).unwrap();
        let stamp: Option<DateTime> = entry.last_modified().into();
        let stamp = stamp.unwrap();
        assert_eq!((stamp.year(), stamp.month(), stamp.day()), (2021, 6, 15));
        assert_eq!((stamp.hour(), stamp.minute(), stamp.second()), (10, 20, 30));
    }

    #[tokio::test]
    async fn existing_zip_is_replaced_not_appended() {
        let tmp = tempfile::tempdir().unwrap();
        let exe = tmp.path().join("brigadier.exe");
        std::fs::write(&exe, b"new").unwrap();
        let zip_path = tmp.path().join("brigadier-1.0.zip");
        std::fs::write(&zip_path, vec![0u8; 4096]).unwrap();

        create_distribution_zip(&exe, &zip_path, "brigadier-1.0/brigadier.exe")
            .await
            .unwrap();

        let archive = zip::ZipArchive::new(std::fs::File::open(&zip_path).unwrap()).unwrap();
        assert_eq!(archive.len(), 1);
    }

    #[tokio::test]
    async fn missing_executable_fails_without_creating_zip() {
        let tmp = tempfile::tempdir().unwrap();
        let zip_path = tmp.path().join("brigadier-1.0.zip");

        let result = create_distribution_zip(
            &tmp.path().join("brigadier.exe"),
            &zip_path,
            "brigadier-1.0/brigadier.exe",
        )
        .await;

        assert!(result.is_err());
        assert!(!zip_path.exists());
    }
}
