//! Styles step - relocates per-entry stylesheets.
//!
//! When an entry imports CSS, the bundler emits a sibling
//! `js/<name>.bundle.css` next to the script bundle. This step moves
//! those files to `css/<name>.css` so pages can link them by bundle
//! name.

use crate::bundler::{Result, Settings, utils::fs};
use std::path::PathBuf;

pub async fn run(settings: &Settings) -> Result<Vec<PathBuf>> {
    let mut emitted = Vec::new();

    for entry in settings.entries() {
        let sidecar = settings
            .out_dir()
            .join("js")
            .join(format!("{}.bundle.css", entry.name));

        if !sidecar.exists() {
            continue;
        }

        let dest = settings.css_path(&entry.name);
        fs::copy_file(&sidecar, &dest).await?;
        fs::remove_file(&sidecar).await?;

        // The sourcemap, if any, moves along with the stylesheet.
        let sidecar_map = sidecar.with_extension("css.map");
        if sidecar_map.exists() {
            fs::copy_file(&sidecar_map, &dest.with_extension("css.map")).await?;
            fs::remove_file(&sidecar_map).await?;
        }

        log::debug!("Extracted stylesheet for '{}'", entry.name);
        emitted.push(dest);
    }

    Ok(emitted)
}
