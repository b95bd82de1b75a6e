//! Main pipeline orchestration and coordination.
//!
//! This module provides the [`Bundler`] orchestrator that assembles the
//! ordered step plan from the build mode and executes it.

use crate::bundler::{
    Result, Settings,
    steps::{self, ReloadStep, StepKind},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

use super::checksum::calculate_sha256;

/// A produced artifact with metadata.
#[derive(Clone, Debug, Serialize)]
pub struct BundledArtifact {
    /// Path of the artifact on disk.
    pub path: PathBuf,

    /// Size in bytes.
    pub size: u64,

    /// Hex-encoded SHA-256 checksum.
    pub checksum: String,
}

/// Summary of a completed build.
#[derive(Clone, Debug, Serialize)]
pub struct BuildReport {
    /// When the build finished.
    pub built_at: DateTime<Utc>,

    /// Browser the extension was packaged for.
    pub browser: crate::bundler::TargetBrowser,

    /// Build mode the pipeline ran in.
    pub mode: crate::bundler::BuildMode,

    /// Per-browser output directory.
    pub out_dir: PathBuf,

    /// Number of files emitted into the output directory.
    pub emitted: usize,

    /// Archives produced (production builds only).
    pub artifacts: Vec<BundledArtifact>,
}

/// Main pipeline orchestrator.
///
/// Executes the packaging steps in order for the selected target browser
/// and build mode. Development builds end with a live-reload
/// notification; production builds append minification and archiving.
///
/// # Examples
///
/// ```no_run
/// use wext_bundler::bundler::{Bundler, Settings};
///
/// # async fn example(settings: Settings) -> wext_bundler::bundler::Result<()> {
/// let bundler = Bundler::new(settings)?;
/// let report = bundler.bundle().await?;
/// println!("Emitted {} files", report.emitted);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Bundler {
    settings: Settings,
}

impl Bundler {
    /// Creates a new bundler with the given settings.
    pub fn new(settings: Settings) -> Result<Self> {
        Ok(Self { settings })
    }

    /// Returns a reference to the bundler settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Assembles the ordered step plan for the configured build mode.
    ///
    /// The plan always contains the clean, manifest, scripts, pages,
    /// styles, assets, and reload slots, in that order. Production mode
    /// appends minification and archiving. The reload slot is always
    /// present; whether it does anything is resolved by
    /// [`ReloadStep::for_settings`].
    pub fn step_plan(&self) -> Vec<StepKind> {
        let mut plan = vec![
            StepKind::Clean,
            StepKind::Manifest,
            StepKind::Scripts,
            StepKind::Styles,
            StepKind::Pages,
            StepKind::Assets,
            StepKind::Reload,
        ];

        if self.settings.mode().is_production() {
            plan.push(StepKind::Minify);
            plan.push(StepKind::Archive);
        }

        plan
    }

    /// Executes the step plan and returns a build report.
    ///
    /// Steps run strictly in plan order. Any step error aborts the build;
    /// nothing is retried or recovered.
    pub async fn bundle(&self) -> Result<BuildReport> {
        let mut emitted = 0usize;
        let mut artifacts = Vec::new();

        for step in self.step_plan() {
            log::info!("Running step: {step}");

            let paths = match step {
                StepKind::Clean => steps::clean::run(&self.settings).await?,
                StepKind::Manifest => steps::manifest::run(&self.settings).await?,
                StepKind::Scripts => steps::scripts::run(&self.settings).await?,
                StepKind::Styles => steps::styles::run(&self.settings).await?,
                StepKind::Pages => steps::pages::run(&self.settings).await?,
                StepKind::Assets => steps::assets::run(&self.settings).await?,
                StepKind::Reload => {
                    ReloadStep::for_settings(&self.settings).notify().await?;
                    Vec::new()
                }
                StepKind::Minify => steps::minify::run(&self.settings).await?,
                StepKind::Archive => {
                    let paths = steps::archive::run(&self.settings).await?;

                    // Calculate artifact metadata
                    for path in &paths {
                        let metadata = tokio::fs::metadata(path).await?;
                        let checksum = calculate_sha256(path).await?;
                        artifacts.push(BundledArtifact {
                            path: path.clone(),
                            size: metadata.len(),
                            checksum,
                        });
                    }

                    paths
                }
            };

            emitted += paths.len();
        }

        Ok(BuildReport {
            built_at: Utc::now(),
            browser: self.settings.browser().clone(),
            mode: self.settings.mode(),
            out_dir: self.settings.out_dir(),
            emitted,
            artifacts,
        })
    }
}
