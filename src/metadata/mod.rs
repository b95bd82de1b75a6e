//! Metadata discovery from the project's package.json.

use crate::bundler::PackageSettings;
use crate::error::{BundlerError, CliError, Result};
use std::path::Path;

/// Package metadata extracted from package.json.
#[derive(Debug, Clone)]
pub struct PackageMetadata {
    /// Package name
    pub name: String,

    /// Package version (e.g. "0.1.0"), validated as semver
    pub version: String,

    /// Package description
    pub description: String,

    /// Package author if specified
    pub author: Option<String>,

    /// Homepage URL if specified
    pub homepage: Option<String>,
}

impl From<PackageMetadata> for PackageSettings {
    fn from(metadata: PackageMetadata) -> Self {
        Self {
            name: metadata.name,
            version: metadata.version,
            description: metadata.description,
            author: metadata.author,
            homepage: metadata.homepage,
        }
    }
}

/// Load package metadata from package.json (single read + parse).
///
/// `name` and `version` are required; the version must parse as semver
/// because it is injected verbatim into the extension manifest.
/// Everything else defaults.
pub fn load_metadata(package_json_path: &Path) -> Result<PackageMetadata> {
    let raw = std::fs::read_to_string(package_json_path).map_err(|e| {
        BundlerError::Cli(CliError::ExecutionFailed {
            command: "read_package_json".to_string(),
            reason: format!("Failed to read {}: {}", package_json_path.display(), e),
        })
    })?;

    let value: serde_json::Value = serde_json::from_str(&raw).map_err(|e| {
        BundlerError::Cli(CliError::ExecutionFailed {
            command: "parse_package_json".to_string(),
            reason: format!("Failed to parse package.json: {}", e),
        })
    })?;

    let name = value
        .get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| {
            BundlerError::Cli(CliError::InvalidArguments {
                reason: "Missing 'name' in package.json".to_string(),
            })
        })?
        .to_string();

    let version = value
        .get("version")
        .and_then(|v| v.as_str())
        .ok_or_else(|| {
            BundlerError::Cli(CliError::InvalidArguments {
                reason: "Missing 'version' in package.json".to_string(),
            })
        })?
        .to_string();

    // The manifest version must be valid semver
    semver::Version::parse(&version).map_err(|e| {
        BundlerError::Cli(CliError::InvalidArguments {
            reason: format!("Invalid version '{}' in package.json: {}", version, e),
        })
    })?;

    Ok(PackageMetadata {
        name,
        version,
        description: value
            .get("description")
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_string(),
        author: value
            .get("author")
            .and_then(|v| v.as_str())
            .map(String::from),
        homepage: value
            .get("homepage")
            .and_then(|v| v.as_str())
            .map(String::from),
    })
}
