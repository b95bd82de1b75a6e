//! Package metadata and configuration.

/// Package metadata consumed by the pipeline.
///
/// Contains the extension project information used across packaging
/// steps. This typically maps from the project's `package.json`.
///
/// # Examples
///
/// ```
/// use wext_bundler::bundler::PackageSettings;
///
/// let settings = PackageSettings {
///     name: "my-extension".into(),
///     version: "1.0.0".into(),
///     description: "An awesome extension".into(),
///     homepage: Some("https://example.com".into()),
///     author: Some("Author Name <email@example.com>".into()),
/// };
/// ```
#[derive(Debug, Clone, Default)]
pub struct PackageSettings {
    /// Extension name as published.
    ///
    /// Usually derived from `package.json` `name`.
    pub name: String,

    /// Version string in semantic versioning format.
    ///
    /// Injected into the generated extension manifest.
    /// Example: "1.0.0", "0.2.3-beta.1"
    pub version: String,

    /// Brief description of the extension.
    pub description: String,

    /// Homepage URL for the extension.
    ///
    /// Default: None
    pub homepage: Option<String>,

    /// Package author.
    ///
    /// Format: "Name <email@example.com>"
    ///
    /// Default: None
    pub author: Option<String>,
}
