//! Command line interface for the extension packager.
//!
//! Parses env-backed arguments, loads package metadata, assembles the
//! pipeline settings, and runs one build.

mod args;
mod output;

pub use args::Args;
pub use output::OutputManager;

use crate::bundler::{Bundler, SettingsBuilder, TargetBrowser, builder::HAS_ESBUILD};
use crate::error::{CliError, Result};
use crate::metadata;
use std::str::FromStr;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();

    if let Err(reason) = args.validate() {
        return Err(CliError::InvalidArguments { reason }.into());
    }

    let output = OutputManager::new(true, false);

    let browser = TargetBrowser::parse(&args.browser);
    let mode = crate::bundler::BuildMode::from_str(&args.mode)
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    let package = metadata::load_metadata(&args.root.join("package.json"))?;

    output.section(&format!(
        "Packaging {} {} for {} ({})",
        package.name, package.version, browser, mode
    ));

    if !*HAS_ESBUILD {
        output.warn("esbuild not found on PATH - script bundling will fail");
    }

    let settings = SettingsBuilder::new()
        .root(&args.root)
        .browser(browser)
        .mode(mode)
        .src_dir(args.src_dir.as_str())
        .views_dir(args.views_dir.as_str())
        .dest_dir(args.dest_dir.as_str())
        .package_settings(package.into())
        .build()?;

    let bundler = Bundler::new(settings)?;
    let report = bundler.bundle().await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        output.success(&format!("Built into {}", report.out_dir.display()));
        output.indent(&format!("built at {}", report.built_at.to_rfc3339()));
        output.indent(&format!("{} files emitted", report.emitted));

        for artifact in &report.artifacts {
            output.success(&format!("Created archive {}", artifact.path.display()));
            output.indent(&format!("size {} bytes", artifact.size));
            output.indent(&format!("sha256 {}", artifact.checksum));
        }
    }

    Ok(0)
}
