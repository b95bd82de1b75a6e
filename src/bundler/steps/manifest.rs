//! Manifest step - resolves the extension manifest for the target browser.
//!
//! The source manifest may carry vendor-prefixed keys of the form
//! `__chrome__key` or `__firefox|opera__key`. A prefixed key is kept,
//! with the prefix stripped, when the target browser appears in the
//! vendor list, and dropped otherwise. Resolution applies recursively
//! through nested objects and arrays. The manifest entry never produces
//! a script bundle; it only emits `manifest.json` at the output root.

use crate::bundler::error::ErrorExt;
use crate::bundler::{Result, Settings};
use serde_json::Value;
use std::path::PathBuf;

/// Reads the source manifest, resolves vendor keys for the target
/// browser, overwrites `version` with the package version, and writes
/// `manifest.json` into the output directory.
pub async fn run(settings: &Settings) -> Result<Vec<PathBuf>> {
    let manifest_path = settings.manifest();
    let raw = tokio::fs::read_to_string(manifest_path)
        .await
        .fs_context("reading manifest", manifest_path)?;

    let value: Value = serde_json::from_str(&raw)?;
    let mut resolved = resolve_vendor_keys(value, settings.browser().name());

    if let Some(obj) = resolved.as_object_mut() {
        obj.insert(
            "version".to_string(),
            Value::String(settings.version_string().to_string()),
        );
    }

    let out_path = settings.out_dir().join("manifest.json");
    if let Some(parent) = out_path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .fs_context("creating output directory", parent)?;
    }

    let mut rendered = serde_json::to_string_pretty(&resolved)?;
    rendered.push('\n');
    tokio::fs::write(&out_path, rendered)
        .await
        .fs_context("writing manifest", &out_path)?;

    log::debug!(
        "Resolved manifest for {} -> {}",
        settings.browser(),
        out_path.display()
    );

    Ok(vec![out_path])
}

/// Outcome of matching one manifest key against the target browser.
enum KeyResolution {
    /// Not a vendor key, keep as-is
    Plain,
    /// Vendor key listing the target browser, keep under the stripped name
    Keep(String),
    /// Vendor key for other browsers, drop
    Drop,
}

/// Browser names recognized in vendor prefixes.
const VENDORS: [&str; 5] = ["chrome", "firefox", "opera", "edge", "safari"];

fn resolve_key(key: &str, browser: &str) -> KeyResolution {
    let Some(rest) = key.strip_prefix("__") else {
        return KeyResolution::Plain;
    };
    let Some((vendors, name)) = rest.split_once("__") else {
        return KeyResolution::Plain;
    };

    // Only a pipe-separated list of recognized vendors forms a prefix.
    // Anything else (e.g. "__MSG_extName__" i18n placeholders) is a
    // plain key.
    let mut listed = vendors.split('|').map(str::trim);
    if !listed.clone().all(|v| VENDORS.contains(&v)) || name.is_empty() {
        return KeyResolution::Plain;
    }

    if listed.any(|v| v == browser) {
        KeyResolution::Keep(name.to_string())
    } else {
        KeyResolution::Drop
    }
}

/// Recursively resolves vendor-prefixed keys for the given browser.
fn resolve_vendor_keys(value: Value, browser: &str) -> Value {
    match value {
        Value::Object(map) => {
            let mut out = serde_json::Map::new();
            for (key, val) in map {
                match resolve_key(&key, browser) {
                    KeyResolution::Plain => {
                        out.insert(key, resolve_vendor_keys(val, browser));
                    }
                    KeyResolution::Keep(name) => {
                        out.insert(name, resolve_vendor_keys(val, browser));
                    }
                    KeyResolution::Drop => {}
                }
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| resolve_vendor_keys(item, browser))
                .collect(),
        ),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keeps_matching_vendor_keys_with_prefix_stripped() {
        let input = json!({
            "name": "demo",
            "__chrome__minimum_chrome_version": "80",
            "__firefox__browser_specific_settings": { "gecko": { "id": "demo@example.com" } }
        });

        let resolved = resolve_vendor_keys(input, "chrome");
        assert_eq!(resolved["minimum_chrome_version"], "80");
        assert!(resolved.get("browser_specific_settings").is_none());
        assert!(resolved.get("__chrome__minimum_chrome_version").is_none());
    }

    #[test]
    fn vendor_lists_match_any_listed_browser() {
        let input = json!({ "__chrome|opera__key": 1, "__firefox__key": 2 });

        let chrome = resolve_vendor_keys(input.clone(), "opera");
        assert_eq!(chrome["key"], 1);

        let firefox = resolve_vendor_keys(input, "firefox");
        assert_eq!(firefox["key"], 2);
    }

    #[test]
    fn resolves_nested_objects_and_arrays() {
        let input = json!({
            "background": { "__chrome__service_worker": "js/background.bundle.js" },
            "permissions": [ { "__firefox__origins": ["<all_urls>"] } ]
        });

        let resolved = resolve_vendor_keys(input, "chrome");
        assert_eq!(
            resolved["background"]["service_worker"],
            "js/background.bundle.js"
        );
        assert_eq!(resolved["permissions"][0], json!({}));
    }

    #[test]
    fn non_vendor_double_underscore_keys_are_plain() {
        let input = json!({ "__MSG_extName__": "localized" });
        let resolved = resolve_vendor_keys(input.clone(), "chrome");
        assert_eq!(resolved, input);
    }
}
