//! Builder for constructing Settings.

use super::{
    BuildMode, BundleEntry, CopyPattern, PackageSettings, PageSettings, Settings, TargetBrowser,
};
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// Builder for constructing [`Settings`].
///
/// Provides a fluent API for building pipeline settings with validation.
/// Directory names are resolved against the project root at build time,
/// and the conventional extension layout is filled in for anything not
/// declared explicitly.
///
/// # Examples
///
/// ```no_run
/// use wext_bundler::bundler::{SettingsBuilder, PackageSettings, TargetBrowser};
///
/// # fn example() -> wext_bundler::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .root("my-extension")
///     .browser(TargetBrowser::parse("firefox"))
///     .package_settings(PackageSettings {
///         name: "my-extension".into(),
///         version: "1.0.0".into(),
///         ..Default::default()
///     })
///     .build()?;
/// # Ok(())
/// # }
/// ```
///
/// # See Also
///
/// - [`Settings`] - The built settings struct
#[derive(Default)]
pub struct SettingsBuilder {
    root: Option<PathBuf>,
    package_settings: Option<PackageSettings>,
    browser: TargetBrowser,
    mode: BuildMode,
    src_dir: Option<String>,
    views_dir: Option<String>,
    dest_dir: Option<String>,
    entries: Option<Vec<BundleEntry>>,
    pages: Option<Vec<PageSettings>>,
    copy_patterns: Option<Vec<CopyPattern>>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the project root directory.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn root<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets package metadata.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn package_settings(mut self, settings: PackageSettings) -> Self {
        self.package_settings = Some(settings);
        self
    }

    /// Sets the target browser.
    ///
    /// Default: chrome
    pub fn browser(mut self, browser: TargetBrowser) -> Self {
        self.browser = browser;
        self
    }

    /// Sets the build mode.
    ///
    /// Default: development
    pub fn mode(mut self, mode: BuildMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the source directory name, relative to the root.
    ///
    /// Default: "src"
    pub fn src_dir(mut self, dir: impl Into<String>) -> Self {
        self.src_dir = Some(dir.into());
        self
    }

    /// Sets the views directory name, relative to the root.
    ///
    /// Default: "views"
    pub fn views_dir(mut self, dir: impl Into<String>) -> Self {
        self.views_dir = Some(dir.into());
        self
    }

    /// Sets the destination root name, relative to the root.
    ///
    /// Default: "extension"
    pub fn dest_dir(mut self, dir: impl Into<String>) -> Self {
        self.dest_dir = Some(dir.into());
        self
    }

    /// Replaces the conventional script entries.
    pub fn entries(mut self, entries: Vec<BundleEntry>) -> Self {
        self.entries = Some(entries);
        self
    }

    /// Replaces the conventional pages.
    pub fn pages(mut self, pages: Vec<PageSettings>) -> Self {
        self.pages = Some(pages);
        self
    }

    /// Replaces the conventional copy patterns.
    pub fn copy_patterns(mut self, patterns: Vec<CopyPattern>) -> Self {
        self.copy_patterns = Some(patterns);
        self
    }

    /// Builds the settings.
    ///
    /// Absolutizes the project root and fills in the conventional layout
    /// for entries, pages, and copy patterns that were not declared.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing:
    /// - `root`
    /// - `package_settings`
    pub fn build(self) -> crate::bundler::Result<Settings> {
        use crate::bundler::error::Context;

        let root = self.root.context("root is required")?;
        let root = root
            .absolutize()
            .context("failed to absolutize project root")?
            .to_path_buf();

        let src_name = self.src_dir.as_deref().unwrap_or("src").to_string();
        let source_dir = root.join(&src_name);
        let views_dir = root.join(self.views_dir.as_deref().unwrap_or("views"));
        let dest_dir = root.join(self.dest_dir.as_deref().unwrap_or("extension"));

        let manifest = source_dir.join("manifest.json");

        let entries = self.entries.unwrap_or_else(|| {
            vec![
                BundleEntry::new("background", source_dir.join("Background").join("index.js")),
                BundleEntry::new(
                    "contentScript",
                    source_dir.join("ContentScript").join("index.js"),
                ),
                BundleEntry::new("popup", source_dir.join("Popup").join("index.js")),
            ]
        });

        let pages = self.pages.unwrap_or_else(|| {
            vec![
                PageSettings::new(
                    views_dir.join("popup.html"),
                    "popup.html",
                    vec!["popup".to_string()],
                ),
                PageSettings::new(
                    views_dir.join("background.html"),
                    "background.html",
                    vec!["background".to_string()],
                ),
            ]
        });

        let copy_patterns = self.copy_patterns.unwrap_or_else(|| {
            vec![
                CopyPattern::new(format!("{src_name}/assets"), "assets"),
                CopyPattern::new(format!("{src_name}/style.css"), "."),
            ]
        });

        Ok(Settings::new(
            self.package_settings
                .context("package_settings is required")?,
            self.browser,
            self.mode,
            root,
            source_dir,
            views_dir,
            dest_dir,
            manifest,
            entries,
            pages,
            copy_patterns,
        ))
    }
}
