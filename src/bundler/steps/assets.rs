//! Assets step - copies static files into the output directory.
//!
//! Each copy pattern names a file, a directory tree, or a glob pattern
//! relative to the project root. Directory trees are copied recursively;
//! glob matches land flat under the destination.

use crate::bail;
use crate::bundler::error::Context;
use crate::bundler::{Result, Settings, utils::fs};
use std::path::{Path, PathBuf};

pub async fn run(settings: &Settings) -> Result<Vec<PathBuf>> {
    let out_dir = settings.out_dir();
    let mut emitted = Vec::new();

    for pattern in settings.copy_patterns() {
        let from = settings.root().join(&pattern.from);
        let dest_base = if pattern.to == "." {
            out_dir.clone()
        } else {
            out_dir.join(&pattern.to)
        };

        if from.is_dir() {
            fs::copy_dir(&from, &dest_base).await?;
            emitted.push(dest_base);
        } else if from.is_file() {
            let dest = file_dest(&from, &dest_base)?;
            fs::copy_file(&from, &dest).await?;
            emitted.push(dest);
        } else if is_glob(&pattern.from) {
            let glob_pattern = from.to_string_lossy().to_string();
            let matches =
                glob::glob(&glob_pattern).context("invalid glob pattern in copy declaration")?;

            let mut matched = 0usize;
            for path in matches {
                let path = path.context("unreadable glob match")?;
                if path.is_file() {
                    let dest = file_dest(&path, &dest_base)?;
                    fs::copy_file(&path, &dest).await?;
                    emitted.push(dest);
                    matched += 1;
                }
            }

            if matched == 0 {
                log::warn!("Copy pattern matched nothing: {}", pattern.from);
            }
        } else {
            bail!("Copy source does not exist: {}", from.display());
        }
    }

    Ok(emitted)
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

fn file_dest(from: &Path, dest_base: &Path) -> Result<PathBuf> {
    let name = from.file_name().context("copy source has no file name")?;
    Ok(dest_base.join(name))
}
