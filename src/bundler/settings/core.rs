//! Core Settings struct and implementations.

use super::{BuildMode, BundleEntry, CopyPattern, PackageSettings, PageSettings, TargetBrowser};
use std::path::{Path, PathBuf};

/// Main settings for packaging operations.
///
/// Central configuration for the pipeline, constructed via
/// [`SettingsBuilder`](super::SettingsBuilder). Contains package metadata,
/// the selected target browser and build mode, and the resolved project
/// layout. All paths are absolute once built.
///
/// # Examples
///
/// ```no_run
/// use wext_bundler::bundler::{SettingsBuilder, PackageSettings, TargetBrowser, BuildMode};
///
/// # fn example() -> wext_bundler::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .root(".")
///     .browser(TargetBrowser::Firefox)
///     .mode(BuildMode::Production)
///     .package_settings(PackageSettings {
///         name: "my-extension".into(),
///         version: "1.0.0".into(),
///         ..Default::default()
///     })
///     .build()?;
/// assert!(settings.out_dir().ends_with("extension/firefox"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Settings {
    /// Package metadata.
    package: PackageSettings,

    /// Browser the extension is packaged for.
    browser: TargetBrowser,

    /// Development or production.
    mode: BuildMode,

    /// Absolute project root.
    root: PathBuf,

    /// Source directory holding entries, the manifest, and assets.
    source_dir: PathBuf,

    /// Directory holding HTML page templates.
    views_dir: PathBuf,

    /// Destination root. The per-browser output directory lives below it.
    dest_dir: PathBuf,

    /// Extension manifest source file.
    manifest: PathBuf,

    /// Script entry points.
    entries: Vec<BundleEntry>,

    /// HTML pages to emit.
    pages: Vec<PageSettings>,

    /// Static-asset copy declarations.
    copy_patterns: Vec<CopyPattern>,
}

impl Settings {
    /// Returns the package metadata.
    pub fn package(&self) -> &PackageSettings {
        &self.package
    }

    /// Returns the extension name.
    pub fn product_name(&self) -> &str {
        &self.package.name
    }

    /// Returns the version string.
    pub fn version_string(&self) -> &str {
        &self.package.version
    }

    /// Returns the selected target browser.
    pub fn browser(&self) -> &TargetBrowser {
        &self.browser
    }

    /// Returns the build mode.
    pub fn mode(&self) -> BuildMode {
        self.mode
    }

    /// Returns the absolute project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the source directory.
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Returns the views directory.
    pub fn views_dir(&self) -> &Path {
        &self.views_dir
    }

    /// Returns the destination root.
    pub fn dest_dir(&self) -> &Path {
        &self.dest_dir
    }

    /// Returns the per-browser output directory.
    ///
    /// Always the destination root joined with the browser name.
    pub fn out_dir(&self) -> PathBuf {
        self.dest_dir.join(self.browser.name())
    }

    /// Returns the path of the production archive.
    ///
    /// `<dest>/<browser>.<extension>` where the extension depends on the
    /// target browser (`zip` unless the browser has its own format).
    pub fn archive_path(&self) -> PathBuf {
        self.dest_dir.join(format!(
            "{}.{}",
            self.browser.name(),
            self.browser.archive_extension()
        ))
    }

    /// Returns the development reload port for the selected browser.
    pub fn reload_port(&self) -> Option<u16> {
        self.browser.reload_port()
    }

    /// Returns the extension manifest source file.
    pub fn manifest(&self) -> &Path {
        &self.manifest
    }

    /// Returns the script entry points.
    pub fn entries(&self) -> &[BundleEntry] {
        &self.entries
    }

    /// Returns the HTML pages to emit.
    pub fn pages(&self) -> &[PageSettings] {
        &self.pages
    }

    /// Returns the static-asset copy declarations.
    pub fn copy_patterns(&self) -> &[CopyPattern] {
        &self.copy_patterns
    }

    /// Returns the output path of a script bundle.
    pub fn bundle_path(&self, name: &str) -> PathBuf {
        self.out_dir().join("js").join(format!("{name}.bundle.js"))
    }

    /// Returns the output path of a per-bundle stylesheet.
    pub fn css_path(&self, name: &str) -> PathBuf {
        self.out_dir().join("css").join(format!("{name}.css"))
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    #[allow(clippy::too_many_arguments)]
    pub(super) fn new(
        package: PackageSettings,
        browser: TargetBrowser,
        mode: BuildMode,
        root: PathBuf,
        source_dir: PathBuf,
        views_dir: PathBuf,
        dest_dir: PathBuf,
        manifest: PathBuf,
        entries: Vec<BundleEntry>,
        pages: Vec<PageSettings>,
        copy_patterns: Vec<CopyPattern>,
    ) -> Self {
        Self {
            package,
            browser,
            mode,
            root,
            source_dir,
            views_dir,
            dest_dir,
            manifest,
            entries,
            pages,
            copy_patterns,
        }
    }
}
