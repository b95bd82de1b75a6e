//! Target browser types and lookups.

use std::fmt;

/// Browser runtime the packaged extension is built for.
///
/// Determines the output directory name, the archive file extension, and
/// the development reload port. Parsing is a total function: identifiers
/// that are not recognized are preserved as [`TargetBrowser::Other`] and
/// fall back to the documented defaults (`zip` archive, no reload port).
///
/// # Examples
///
/// ```
/// use wext_bundler::bundler::TargetBrowser;
///
/// let browser = TargetBrowser::parse("firefox");
/// assert_eq!(browser.archive_extension(), "xpi");
/// assert_eq!(browser.reload_port(), Some(9091));
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TargetBrowser {
    /// Chromium-based Chrome - packaged as plain zip
    Chrome,
    /// Firefox - packaged as xpi
    Firefox,
    /// Opera - packaged as crx
    Opera,
    /// Any other browser identifier, kept verbatim
    Other(String),
}

impl TargetBrowser {
    /// Parses a browser identifier.
    ///
    /// Never fails: unrecognized identifiers become [`TargetBrowser::Other`].
    /// Matching is case-insensitive.
    pub fn parse(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "chrome" => Self::Chrome,
            "firefox" => Self::Firefox,
            "opera" => Self::Opera,
            _ => Self::Other(name.to_string()),
        }
    }

    /// Returns the identifier used for output paths.
    pub fn name(&self) -> &str {
        match self {
            Self::Chrome => "chrome",
            Self::Firefox => "firefox",
            Self::Opera => "opera",
            Self::Other(name) => name,
        }
    }

    /// Returns the file extension of the production archive.
    ///
    /// `crx` for opera, `xpi` for firefox, `zip` for everything else.
    pub fn archive_extension(&self) -> &'static str {
        match self {
            Self::Opera => "crx",
            Self::Firefox => "xpi",
            _ => "zip",
        }
    }

    /// Returns the development reload port, if this browser has one.
    pub fn reload_port(&self) -> Option<u16> {
        match self {
            Self::Chrome => Some(9090),
            Self::Firefox => Some(9091),
            _ => None,
        }
    }
}

impl Default for TargetBrowser {
    fn default() -> Self {
        Self::Chrome
    }
}

impl fmt::Display for TargetBrowser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl serde::Serialize for TargetBrowser {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archive_extension_lookup() {
        assert_eq!(TargetBrowser::parse("opera").archive_extension(), "crx");
        assert_eq!(TargetBrowser::parse("firefox").archive_extension(), "xpi");
        assert_eq!(TargetBrowser::parse("chrome").archive_extension(), "zip");
        assert_eq!(TargetBrowser::parse("vivaldi").archive_extension(), "zip");
    }

    #[test]
    fn reload_port_lookup() {
        assert_eq!(TargetBrowser::Chrome.reload_port(), Some(9090));
        assert_eq!(TargetBrowser::Firefox.reload_port(), Some(9091));
        assert_eq!(TargetBrowser::Opera.reload_port(), None);
        assert_eq!(TargetBrowser::parse("edge").reload_port(), None);
    }

    #[test]
    fn parse_is_total_and_case_insensitive() {
        assert_eq!(TargetBrowser::parse("Firefox"), TargetBrowser::Firefox);
        assert_eq!(
            TargetBrowser::parse("edge"),
            TargetBrowser::Other("edge".to_string())
        );
        assert_eq!(TargetBrowser::parse("edge").name(), "edge");
    }
}
