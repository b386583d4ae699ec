//! End-to-end CLI tests for the mod-downloader binary.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_binary_help_displays_usage() {
    let mut cmd = Command::cargo_bin("mod-downloader").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Resolve and download"));
}

#[test]
fn test_binary_version_displays_version() {
    let mut cmd = Command::cargo_bin("mod-downloader").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mod-downloader"));
}

#[test]
fn test_binary_invalid_flag_returns_error() {
    let mut cmd = Command::cargo_bin("mod-downloader").unwrap();
    cmd.arg("--invalid-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_binary_missing_manifest_fails_before_creating_dirs() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("downloads");

    let mut cmd = Command::cargo_bin("mod-downloader").unwrap();
    cmd.arg("--manifest")
        .arg(temp.path().join("absent.json"))
        .arg("--output-dir")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not find manifest"));

    assert!(!output.exists());
}

#[test]
fn test_binary_empty_game_version_fails() {
    let temp = TempDir::new().unwrap();
    let manifest = temp.path().join("data.json");
    std::fs::write(&manifest, "{}").unwrap();

    let mut cmd = Command::cargo_bin("mod-downloader").unwrap();
    cmd.arg("--manifest")
        .arg(&manifest)
        .arg("--game-version")
        .arg("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("game version"));
}

#[tokio::test]
async fn test_binary_full_run_prints_summary_and_exits_zero() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/project/sodium/version"))
        .and(query_param("game_versions", r#"["1.21.10"]"#))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"files": [{"url": format!("{}/cdn/sodium.jar", server.uri()), "filename": "sodium.jar"}]}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/cdn/sodium.jar"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"jar".to_vec()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/project/gone/version"))
        .and(query_param_is_missing("game_versions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/project/gone/version"))
        .and(query_param("game_versions", r#"["1.21.10"]"#))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let manifest = temp.path().join("data.json");
    std::fs::write(
        &manifest,
        json!({
            "serverSettings": [{"label": "Type", "value": "Fabric"}],
            "modCategories": [{
                "title": "Core",
                "mods": [
                    {"name": "Sodium", "url": "https://modrinth.com/mod/sodium"},
                    {"name": "Gone Mod", "url": "https://modrinth.com/mod/gone"},
                    {"name": "JEI", "url": "https://www.curseforge.com/minecraft/mc-mods/jei"}
                ]
            }]
        })
        .to_string(),
    )
    .unwrap();
    let output = temp.path().join("downloads");
    let fallback = output.join("outdated-mods");

    let mut cmd = Command::cargo_bin("mod-downloader").unwrap();
    cmd.arg("--manifest")
        .arg(&manifest)
        .arg("--output-dir")
        .arg(&output)
        .arg("--fallback-dir")
        .arg(&fallback)
        .arg("--api-base-url")
        .arg(server.uri())
        .arg("-q")
        .assert()
        .success()
        .stdout(predicate::str::contains("Download Complete."))
        .stdout(predicate::str::contains(" - Gone Mod"))
        .stdout(predicate::str::contains("JEI").not());

    assert_eq!(std::fs::read(output.join("sodium.jar")).unwrap(), b"jar");
    assert!(fallback.is_dir());
}
