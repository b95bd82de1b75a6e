//! Multi-browser extension packaging pipeline.
//!
//! The pipeline reads its configuration from [`Settings`], assembles an
//! ordered step plan for the selected build mode, and executes it:
//! clean, manifest resolution, script bundling, stylesheet extraction,
//! page templating, asset copying, live-reload notification, and, in
//! production, minification and archiving.

pub mod builder;
pub mod error;
pub mod settings;
pub mod steps;
pub mod utils;

// Re-export commonly used types
pub use builder::{BuildReport, BundledArtifact, Bundler};
pub use error::{Error, Result};
pub use settings::{
    BuildMode, BundleEntry, CopyPattern, PackageSettings, PageSettings, Settings, SettingsBuilder,
    TargetBrowser,
};
pub use steps::{ReloadStep, StepKind};
