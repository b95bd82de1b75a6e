//! Pages, assets, and clean steps over the fixture project.

mod common;

use common::{fixture_project, fixture_settings, write_file};
use tempfile::TempDir;
use wext_bundler::bundler::steps;
use wext_bundler::bundler::{BuildMode, TargetBrowser};

#[tokio::test]
async fn pages_render_templates_and_inject_chunk_tags() {
    let tmp = TempDir::new().unwrap();
    fixture_project(tmp.path());
    let settings = fixture_settings(tmp.path(), TargetBrowser::Chrome, BuildMode::Development);

    // A pre-existing bundle gets a cache-busting query
    write_file(
        &settings.bundle_path("popup"),
        "console.log('popup bundle');\n",
    );

    let emitted = steps::pages::run(&settings).await.unwrap();
    assert_eq!(emitted.len(), 2);

    let popup = std::fs::read_to_string(settings.out_dir().join("popup.html")).unwrap();
    assert!(popup.contains("<title>demo-extension</title>"));
    assert!(popup.contains("<p>1.2.3</p>"));
    assert!(popup.contains("<script src=\"js/popup.bundle.js?v="));

    // Tags land before the closing body tag
    let script_idx = popup.find("<script").unwrap();
    let body_idx = popup.find("</body>").unwrap();
    assert!(script_idx < body_idx);

    // No background bundle on disk: tag without query
    let background = std::fs::read_to_string(settings.out_dir().join("background.html")).unwrap();
    assert!(background.contains("<script src=\"js/background.bundle.js\"></script>"));
}

#[tokio::test]
async fn assets_copy_patterns_cover_trees_and_single_files() {
    let tmp = TempDir::new().unwrap();
    fixture_project(tmp.path());
    let settings = fixture_settings(tmp.path(), TargetBrowser::Chrome, BuildMode::Development);

    steps::assets::run(&settings).await.unwrap();

    assert!(settings.out_dir().join("assets").join("icon.svg").is_file());
    assert!(settings.out_dir().join("style.css").is_file());
}

#[tokio::test]
async fn missing_copy_source_is_an_error() {
    let tmp = TempDir::new().unwrap();
    // package.json only; src/assets and src/style.css are absent
    write_file(&tmp.path().join("package.json"), "{}");
    let settings = fixture_settings(tmp.path(), TargetBrowser::Chrome, BuildMode::Development);

    assert!(steps::assets::run(&settings).await.is_err());
}

#[tokio::test]
async fn styles_relocate_bundler_emitted_css() {
    let tmp = TempDir::new().unwrap();
    fixture_project(tmp.path());

    // The styles step walks the entry list, so keep the conventional entries
    let settings = wext_bundler::bundler::SettingsBuilder::new()
        .root(tmp.path())
        .package_settings(common::fixture_package())
        .build()
        .unwrap();

    write_file(
        &settings.out_dir().join("js").join("popup.bundle.css"),
        "body{}",
    );

    let emitted = steps::styles::run(&settings).await.unwrap();
    assert_eq!(emitted, vec![settings.css_path("popup")]);
    assert!(settings.css_path("popup").is_file());
    assert!(
        !settings
            .out_dir()
            .join("js")
            .join("popup.bundle.css")
            .exists()
    );
}

#[tokio::test]
async fn clean_removes_previous_output_and_stale_archive() {
    let tmp = TempDir::new().unwrap();
    fixture_project(tmp.path());
    let settings = fixture_settings(tmp.path(), TargetBrowser::Firefox, BuildMode::Production);

    write_file(&settings.out_dir().join("leftover.txt"), "old");
    write_file(&settings.archive_path(), "stale archive");

    steps::clean::run(&settings).await.unwrap();

    assert!(settings.out_dir().is_dir());
    assert!(!settings.out_dir().join("leftover.txt").exists());
    assert!(!settings.archive_path().exists());
}
