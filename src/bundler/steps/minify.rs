//! Minify step - production-only in-place minification.
//!
//! Minification is delegated to the external bundler, re-invoked in
//! minify mode over every emitted script bundle and extracted
//! stylesheet.

use crate::bail;
use crate::bundler::{Result, Settings, builder::find_esbuild};
use std::path::{Path, PathBuf};

pub async fn run(settings: &Settings) -> Result<Vec<PathBuf>> {
    let mut targets = Vec::new();

    for entry in settings.entries() {
        let bundle = settings.bundle_path(&entry.name);
        if bundle.exists() {
            targets.push(bundle);
        }
        let css = settings.css_path(&entry.name);
        if css.exists() {
            targets.push(css);
        }
    }

    if targets.is_empty() {
        return Ok(Vec::new());
    }

    let esbuild = find_esbuild()?;

    for target in &targets {
        minify_in_place(&esbuild, target).await?;
    }

    log::info!("Minified {} files", targets.len());
    Ok(Vec::new())
}

async fn minify_in_place(esbuild: &Path, target: &Path) -> Result<()> {
    let status = tokio::process::Command::new(esbuild)
        .arg(target)
        .arg("--minify")
        .arg("--allow-overwrite")
        .arg(format!("--outfile={}", target.display()))
        .status()
        .await
        .map_err(|e| {
            crate::bundler::Error::GenericError(format!("Failed to execute esbuild: {}", e))
        })?;

    if !status.success() {
        bail!(
            "esbuild minify failed for {} with exit code: {:?}",
            target.display(),
            status.code()
        );
    }

    Ok(())
}
