//! Shared helpers for integration tests.
//!
//! Builds a minimal extension project fixture in a temporary directory
//! and constructs settings pointing at it.

use std::fs;
use std::path::Path;

use wext_bundler::bundler::{
    BuildMode, PackageSettings, Settings, SettingsBuilder, TargetBrowser,
};

/// Writes a file, creating parent directories as needed.
pub fn write_file(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create fixture directory");
    }
    fs::write(path, contents).expect("write fixture file");
}

/// Lays out a minimal extension project under `root`.
///
/// The fixture has no script entries on disk; tests that exercise the
/// full pipeline override the entry list so the external bundler is not
/// required.
pub fn fixture_project(root: &Path) {
    write_file(
        &root.join("package.json"),
        r#"{
  "name": "demo-extension",
  "version": "1.2.3",
  "description": "Demo extension"
}
"#,
    );

    write_file(
        &root.join("src").join("manifest.json"),
        r#"{
  "manifest_version": 3,
  "name": "Demo",
  "version": "0.0.0",
  "__chrome__minimum_chrome_version": "100",
  "__firefox__browser_specific_settings": {
    "gecko": { "id": "demo@example.com" }
  }
}
"#,
    );

    write_file(
        &root.join("views").join("popup.html"),
        "<html><head><title>{{name}}</title></head><body><p>{{version}}</p></body></html>\n",
    );
    write_file(
        &root.join("views").join("background.html"),
        "<html><head></head><body></body></html>\n",
    );

    write_file(&root.join("src").join("style.css"), "body { margin: 0; }\n");
    write_file(
        &root.join("src").join("assets").join("icon.svg"),
        "<svg xmlns=\"http://www.w3.org/2000/svg\"/>\n",
    );
}

/// Package metadata matching the fixture's package.json.
pub fn fixture_package() -> PackageSettings {
    PackageSettings {
        name: "demo-extension".into(),
        version: "1.2.3".into(),
        description: "Demo extension".into(),
        ..Default::default()
    }
}

/// Settings over the fixture with no script entries.
pub fn fixture_settings(root: &Path, browser: TargetBrowser, mode: BuildMode) -> Settings {
    SettingsBuilder::new()
        .root(root)
        .browser(browser)
        .mode(mode)
        .package_settings(fixture_package())
        .entries(Vec::new())
        .build()
        .expect("build fixture settings")
}
