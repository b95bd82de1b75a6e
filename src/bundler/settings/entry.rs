//! Entry, page, and copy declarations.

use std::path::PathBuf;

/// A named script entry point.
///
/// Each entry is handed to the external bundler and produces one output
/// bundle at `js/<name>.bundle.js` under the output directory.
#[derive(Clone, Debug)]
pub struct BundleEntry {
    /// Logical bundle name (e.g. "background", "contentScript", "popup").
    pub name: String,

    /// Source file the bundler starts from, relative to the project root.
    pub source: PathBuf,
}

impl BundleEntry {
    /// Creates a new script entry.
    pub fn new(name: impl Into<String>, source: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }
}

/// An HTML page emitted into the output directory.
///
/// The template is rendered and the listed chunks are injected as
/// `<script>` tags before the closing body tag.
#[derive(Clone, Debug)]
pub struct PageSettings {
    /// Template file, relative to the project root.
    pub template: PathBuf,

    /// Output filename relative to the output directory.
    pub filename: String,

    /// Logical bundle names whose tags are injected into the page.
    pub chunks: Vec<String>,
}

impl PageSettings {
    /// Creates a new page declaration.
    pub fn new(
        template: impl Into<PathBuf>,
        filename: impl Into<String>,
        chunks: Vec<String>,
    ) -> Self {
        Self {
            template: template.into(),
            filename: filename.into(),
            chunks,
        }
    }
}

/// A static-asset copy declaration.
///
/// `from` is resolved relative to the project root and may name a file,
/// a directory tree, or a glob pattern. `to` is relative to the output
/// directory; `"."` copies into the output root.
#[derive(Clone, Debug)]
pub struct CopyPattern {
    /// Source file, directory, or glob pattern.
    pub from: String,

    /// Destination path relative to the output directory.
    pub to: String,
}

impl CopyPattern {
    /// Creates a new copy pattern.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}
