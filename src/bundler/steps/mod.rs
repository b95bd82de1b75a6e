//! Pipeline steps.
//!
//! Each step is a module with a `run` function taking the build
//! [`Settings`](crate::bundler::Settings) and returning the paths it
//! emitted into the output directory. The orchestrator dispatches over
//! [`StepKind`] in plan order.

pub mod archive;
pub mod assets;
pub mod clean;
pub mod manifest;
pub mod minify;
pub mod pages;
pub mod reload;
pub mod scripts;
pub mod styles;

pub use reload::ReloadStep;

use std::fmt;

/// Identifies one slot in the step plan.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StepKind {
    /// Remove the previous output directory and stale archive
    Clean,
    /// Resolve and emit the extension manifest
    Manifest,
    /// Bundle script entries via the external bundler
    Scripts,
    /// Relocate per-entry stylesheets into css/
    Styles,
    /// Render and emit HTML pages with injected tags
    Pages,
    /// Copy static assets
    Assets,
    /// Notify the live-reload listener (development only does anything)
    Reload,
    /// Minify emitted bundles and stylesheets (production only)
    Minify,
    /// Zip the output directory (production only)
    Archive,
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Clean => "clean",
            Self::Manifest => "manifest",
            Self::Scripts => "scripts",
            Self::Styles => "styles",
            Self::Pages => "pages",
            Self::Assets => "assets",
            Self::Reload => "reload",
            Self::Minify => "minify",
            Self::Archive => "archive",
        };
        f.write_str(name)
    }
}
