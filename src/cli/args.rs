//! Command line argument parsing and validation.

use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

use crate::bundler::BuildMode;

/// Multi-browser web extension packager
#[derive(Parser, Debug)]
#[command(
    name = "wext_bundler",
    version,
    about = "Multi-browser web extension packager",
    long_about = "Packages a web extension project for a target browser.

Reads entry points, views, and assets from the conventional project layout,
bundles scripts through esbuild, resolves the vendor-prefixed manifest, and
writes a loadable extension directory. Production builds are additionally
minified and archived.

Usage:
  wext_bundler --browser firefox --mode production
  TARGET_BROWSER=opera NODE_ENV=production wext_bundler
  wext_bundler --root ./my-extension --json

Exit code 0 = the output directory (and, in production, the archive) exists."
)]
pub struct Args {
    /// Project root containing package.json, the source directory, and views
    #[arg(short = 'r', long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Target browser: chrome, firefox, opera, or any other identifier
    #[arg(
        short,
        long,
        value_name = "BROWSER",
        env = "TARGET_BROWSER",
        default_value = "chrome"
    )]
    pub browser: String,

    /// Build mode: development or production
    #[arg(
        short,
        long,
        value_name = "MODE",
        env = "NODE_ENV",
        default_value = "development"
    )]
    pub mode: String,

    /// Source directory name, relative to the root
    #[arg(long, value_name = "DIR", default_value = "src")]
    pub src_dir: String,

    /// Views directory name, relative to the root
    #[arg(long, value_name = "DIR", default_value = "views")]
    pub views_dir: String,

    /// Destination root name, relative to the root
    #[arg(long, value_name = "DIR", default_value = "extension")]
    pub dest_dir: String,

    /// Print the build report as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    ///
    /// The target browser is deliberately not validated: unrecognized
    /// identifiers fall back to the default packaging behavior.
    pub fn validate(&self) -> Result<(), String> {
        if self.browser.trim().is_empty() {
            return Err("Target browser cannot be empty".to_string());
        }

        BuildMode::from_str(&self.mode)?;

        Ok(())
    }
}
