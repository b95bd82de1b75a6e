//! Scripts step - bundles script entries via the external bundler.
//!
//! Bundling and transpilation are not implemented here. Each entry is
//! handed to the esbuild executable, which writes
//! `js/<name>.bundle.js` (plus a sourcemap) into the output directory.
//! The build mode and target browser are defined into the bundled code
//! as `process.env.NODE_ENV` and `process.env.TARGET_BROWSER`.

use crate::bail;
use crate::bundler::error::ErrorExt;
use crate::bundler::{Result, Settings, builder::find_esbuild};
use std::path::PathBuf;

/// Bundles every script entry.
///
/// # Errors
///
/// Fails when the external bundler is not installed, when an entry file
/// is missing, or when the bundler exits non-zero. The bundler's own
/// diagnostics go straight to stderr.
pub async fn run(settings: &Settings) -> Result<Vec<PathBuf>> {
    if settings.entries().is_empty() {
        return Ok(Vec::new());
    }

    let esbuild = find_esbuild()?;
    let mut emitted = Vec::with_capacity(settings.entries().len());

    for entry in settings.entries() {
        if !entry.source.exists() {
            bail!(
                "Entry file for '{}' does not exist: {}",
                entry.name,
                entry.source.display()
            );
        }

        let out_path = settings.bundle_path(&entry.name);
        if let Some(parent) = out_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .fs_context("creating bundle directory", parent)?;
        }

        log::info!("Bundling entry '{}'", entry.name);

        let status = tokio::process::Command::new(&esbuild)
            .current_dir(settings.root())
            .arg(&entry.source)
            .arg("--bundle")
            .arg(format!("--outfile={}", out_path.display()))
            .arg("--sourcemap")
            .arg(format!(
                "--define:process.env.NODE_ENV=\"{}\"",
                settings.mode()
            ))
            .arg(format!(
                "--define:process.env.TARGET_BROWSER=\"{}\"",
                settings.browser()
            ))
            .status()
            .await
            .map_err(|e| {
                crate::bundler::Error::GenericError(format!("Failed to execute esbuild: {}", e))
            })?;

        if !status.success() {
            bail!(
                "esbuild failed for entry '{}' with exit code: {:?}",
                entry.name,
                status.code()
            );
        }

        emitted.push(out_path);
    }

    Ok(emitted)
}
