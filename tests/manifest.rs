//! Manifest resolution against the fixture project.

mod common;

use common::{fixture_project, fixture_settings};
use tempfile::TempDir;
use wext_bundler::bundler::steps;
use wext_bundler::bundler::{BuildMode, TargetBrowser};

#[tokio::test]
async fn chrome_manifest_keeps_chrome_keys_and_package_version() {
    let tmp = TempDir::new().unwrap();
    fixture_project(tmp.path());
    let settings = fixture_settings(tmp.path(), TargetBrowser::Chrome, BuildMode::Development);

    let emitted = steps::manifest::run(&settings).await.unwrap();
    assert_eq!(emitted, vec![settings.out_dir().join("manifest.json")]);

    let raw = std::fs::read_to_string(&emitted[0]).unwrap();
    let manifest: serde_json::Value = serde_json::from_str(&raw).unwrap();

    // Version comes from package.json, not the source manifest
    assert_eq!(manifest["version"], "1.2.3");

    // Chrome vendor key is kept with the prefix stripped
    assert_eq!(manifest["minimum_chrome_version"], "100");

    // Firefox vendor key is dropped entirely
    assert!(manifest.get("browser_specific_settings").is_none());
    assert!(manifest.get("__firefox__browser_specific_settings").is_none());
}

#[tokio::test]
async fn firefox_manifest_keeps_firefox_keys() {
    let tmp = TempDir::new().unwrap();
    fixture_project(tmp.path());
    let settings = fixture_settings(tmp.path(), TargetBrowser::Firefox, BuildMode::Development);

    let emitted = steps::manifest::run(&settings).await.unwrap();
    let raw = std::fs::read_to_string(&emitted[0]).unwrap();
    let manifest: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(
        manifest["browser_specific_settings"]["gecko"]["id"],
        "demo@example.com"
    );
    assert!(manifest.get("minimum_chrome_version").is_none());
}

#[tokio::test]
async fn missing_manifest_is_an_error() {
    let tmp = TempDir::new().unwrap();
    // No fixture files written
    let settings = fixture_settings(tmp.path(), TargetBrowser::Chrome, BuildMode::Development);

    assert!(steps::manifest::run(&settings).await.is_err());
}
