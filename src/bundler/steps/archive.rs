//! Archive step - zips the output directory (production only).
//!
//! The archive is written next to the output directory as
//! `<browser>.<extension>`, where the extension depends on the target
//! browser. Entries are added in sorted path order so the archive is
//! deterministic for identical inputs.

use crate::bundler::error::Error;
use crate::bundler::{Result, Settings};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use zip::{CompressionMethod, write::SimpleFileOptions};

/// Deflate level matching the original packaging configuration.
const COMPRESSION_LEVEL: i64 = 6;

pub async fn run(settings: &Settings) -> Result<Vec<PathBuf>> {
    let out_dir = settings.out_dir();
    let archive_path = settings.archive_path();

    let src = out_dir.clone();
    let dest = archive_path.clone();

    tokio::task::spawn_blocking(move || write_archive(&src, &dest))
        .await
        .map_err(|e| Error::GenericError(format!("Archive task panicked: {}", e)))??;

    log::info!("Created archive: {}", archive_path.display());
    Ok(vec![archive_path])
}

fn write_archive(src: &Path, dest: &Path) -> Result<()> {
    let mut entries: Vec<_> = walkdir::WalkDir::new(src)
        .follow_links(false)
        .into_iter()
        .collect::<std::result::Result<_, _>>()?;

    // Sort by path for deterministic ordering
    entries.sort_by_key(|e| e.path().to_path_buf());

    let file = std::fs::File::create(dest)?;
    let mut writer = zip::ZipWriter::new(file);
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(COMPRESSION_LEVEL));

    let mut buffer = vec![0u8; 8192];

    for entry in entries {
        let rel_path = entry.path().strip_prefix(src)?;
        if rel_path.as_os_str().is_empty() {
            continue;
        }

        // Zip entry names always use forward slashes
        let name = rel_path
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        if entry.file_type().is_dir() {
            writer.add_directory(name, options)?;
        } else {
            writer.start_file(name, options)?;
            let mut reader = std::fs::File::open(entry.path())?;
            loop {
                let n = reader.read(&mut buffer)?;
                if n == 0 {
                    break;
                }
                writer.write_all(&buffer[..n])?;
            }
        }
    }

    writer.finish()?;
    Ok(())
}
