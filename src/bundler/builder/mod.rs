//! Build orchestration and coordination.
//!
//! This module provides the main [`Bundler`] orchestrator that assembles
//! the step plan from settings and executes it to produce a loadable
//! extension directory and, in production, a compressed archive.
//!
//! # Overview
//!
//! The bundler:
//! 1. Reads configuration from [`Settings`](crate::bundler::Settings)
//! 2. Assembles the ordered step plan for the build mode
//! 3. Executes each pipeline step in order
//! 4. Calculates checksums and metadata for produced artifacts
//! 5. Returns a [`BuildReport`]
//!
//! # Example
//!
//! ```no_run
//! use wext_bundler::bundler::{Bundler, SettingsBuilder, PackageSettings};
//!
//! # async fn example() -> wext_bundler::bundler::Result<()> {
//! let settings = SettingsBuilder::new()
//!     .root(".")
//!     .package_settings(PackageSettings {
//!         name: "my-extension".into(),
//!         version: "1.0.0".into(),
//!         ..Default::default()
//!     })
//!     .build()?;
//!
//! let bundler = Bundler::new(settings)?;
//! let report = bundler.bundle().await?;
//!
//! println!("Built into {}", report.out_dir.display());
//! for artifact in &report.artifacts {
//!     println!("Created: {} ({} bytes)", artifact.path.display(), artifact.size);
//!     println!("SHA256: {}", artifact.checksum);
//! }
//! # Ok(())
//! # }
//! ```

mod checksum;
mod orchestrator;
mod tool_detection;

pub use checksum::calculate_sha256;
pub use orchestrator::{BuildReport, BundledArtifact, Bundler};
pub use tool_detection::{HAS_ESBUILD, find_esbuild};
