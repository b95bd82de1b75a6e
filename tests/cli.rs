//! Binary argument handling.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_describes_the_packager() {
    Command::cargo_bin("wext_bundler")
        .unwrap()
        .env_remove("NODE_ENV")
        .env_remove("TARGET_BROWSER")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("web extension packager"));
}

#[test]
fn invalid_build_mode_is_rejected() {
    let tmp = tempfile::TempDir::new().unwrap();

    Command::cargo_bin("wext_bundler")
        .unwrap()
        .env_remove("NODE_ENV")
        .env_remove("TARGET_BROWSER")
        .args(["--root", tmp.path().to_str().unwrap(), "--mode", "staging"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid build mode: staging"));
}

#[test]
fn missing_package_json_is_reported() {
    let tmp = tempfile::TempDir::new().unwrap();

    Command::cargo_bin("wext_bundler")
        .unwrap()
        .env_remove("NODE_ENV")
        .env_remove("TARGET_BROWSER")
        .args(["--root", tmp.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("package.json"));
}

#[test]
fn browser_identifiers_are_never_rejected() {
    let tmp = tempfile::TempDir::new().unwrap();

    // Unrecognized browser still proceeds past argument validation;
    // the failure is the missing package.json, not the browser name.
    Command::cargo_bin("wext_bundler")
        .unwrap()
        .env_remove("NODE_ENV")
        .env_remove("TARGET_BROWSER")
        .args([
            "--root",
            tmp.path().to_str().unwrap(),
            "--browser",
            "netscape",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("package.json"));
}
