//! Clean step - removes previous build output.

use crate::bundler::{Result, Settings, utils::fs};
use std::path::PathBuf;

/// Removes the previous per-browser output directory and any stale
/// archive for the selected browser, then recreates the output directory.
///
/// Idempotent: missing paths are not errors.
pub async fn run(settings: &Settings) -> Result<Vec<PathBuf>> {
    let out_dir = settings.out_dir();
    let archive = settings.archive_path();

    log::debug!("Cleaning {}", out_dir.display());
    fs::remove_dir_all(&out_dir).await?;

    log::debug!("Cleaning {}", archive.display());
    fs::remove_file(&archive).await?;

    fs::create_dir_all(&out_dir, false).await?;

    Ok(Vec::new())
}
