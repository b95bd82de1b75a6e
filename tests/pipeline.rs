//! Step plan assembly and the reload slot.

mod common;

use common::{fixture_project, fixture_settings};
use tempfile::TempDir;
use tokio::io::AsyncReadExt;
use wext_bundler::bundler::{BuildMode, Bundler, ReloadStep, StepKind, TargetBrowser};

#[test]
fn development_plan_has_reload_but_no_minify_or_archive() {
    let tmp = TempDir::new().unwrap();
    let settings = fixture_settings(tmp.path(), TargetBrowser::Chrome, BuildMode::Development);
    let bundler = Bundler::new(settings).unwrap();

    let plan = bundler.step_plan();
    assert_eq!(
        plan,
        vec![
            StepKind::Clean,
            StepKind::Manifest,
            StepKind::Scripts,
            StepKind::Styles,
            StepKind::Pages,
            StepKind::Assets,
            StepKind::Reload,
        ]
    );
}

#[test]
fn production_plan_appends_minify_and_archive() {
    let tmp = TempDir::new().unwrap();
    let settings = fixture_settings(tmp.path(), TargetBrowser::Firefox, BuildMode::Production);
    let bundler = Bundler::new(settings).unwrap();

    let plan = bundler.step_plan();
    assert!(plan.contains(&StepKind::Reload));
    assert_eq!(
        &plan[plan.len() - 2..],
        &[StepKind::Minify, StepKind::Archive]
    );
}

#[test]
fn reload_slot_is_active_only_in_development_with_a_port() {
    let tmp = TempDir::new().unwrap();

    let dev = fixture_settings(tmp.path(), TargetBrowser::Chrome, BuildMode::Development);
    assert_eq!(
        ReloadStep::for_settings(&dev),
        ReloadStep::Active { port: 9090 }
    );

    let prod = fixture_settings(tmp.path(), TargetBrowser::Chrome, BuildMode::Production);
    assert_eq!(ReloadStep::for_settings(&prod), ReloadStep::Inert);
    assert!(!ReloadStep::for_settings(&prod).is_active());

    let portless = fixture_settings(
        tmp.path(),
        TargetBrowser::parse("vivaldi"),
        BuildMode::Development,
    );
    assert_eq!(ReloadStep::for_settings(&portless), ReloadStep::Inert);
}

#[tokio::test]
async fn active_reload_notifies_a_listener() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    let server = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut buf = Vec::new();
        stream.read_to_end(&mut buf).await.unwrap();
        String::from_utf8(buf).unwrap()
    });

    ReloadStep::Active { port }.notify().await.unwrap();

    let received = server.await.unwrap();
    assert!(received.contains("\"type\":\"reload\""));
}

#[tokio::test]
async fn reload_without_listener_is_not_an_error() {
    // Port 1 is essentially guaranteed to refuse connections
    ReloadStep::Active { port: 1 }.notify().await.unwrap();
    ReloadStep::Inert.notify().await.unwrap();
}

#[tokio::test]
async fn development_build_emits_extension_without_archive() {
    let tmp = TempDir::new().unwrap();
    fixture_project(tmp.path());

    let settings = fixture_settings(tmp.path(), TargetBrowser::Chrome, BuildMode::Development);
    let report = Bundler::new(settings).unwrap().bundle().await.unwrap();

    assert!(report.out_dir.join("manifest.json").is_file());
    assert!(report.out_dir.join("popup.html").is_file());
    assert!(report.out_dir.join("style.css").is_file());
    assert!(report.out_dir.join("assets").join("icon.svg").is_file());
    assert!(report.artifacts.is_empty());
    assert!(!tmp.path().join("extension").join("chrome.zip").exists());
}
