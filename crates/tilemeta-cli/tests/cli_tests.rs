//! Integration tests for tilemeta-cli.
//!
//! Note: Tests use `unwrap`/`expect` which is acceptable in test code.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;
use tilemeta_core::test_utils::ZipTestBuilder;
use tilemeta_core::test_utils::write_test_package;

const VALID_YAML: &str = "---\nproduct_version: 1.8.14\nname: some-product\n";

fn tilemeta_cmd() -> Command {
    cargo_bin_cmd!("tilemeta")
}

fn package(entries: &[(&str, &str)]) -> (TempDir, PathBuf) {
    let temp = TempDir::new().expect("failed to create temp dir");
    let path = write_test_package(temp.path(), "some-product.pivotal", entries);
    (temp, path)
}

#[test]
fn test_version_flag() {
    tilemeta_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tilemeta"));
}

#[test]
fn test_help_flag() {
    tilemeta_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Command-line utility"));
}

#[test]
fn test_inspect_help() {
    tilemeta_cmd()
        .arg("inspect")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Show the product name and version"));
}

#[test]
fn test_inspect_prints_name_and_version() {
    let (_temp, path) = package(&[
        ("releases/cf.tgz", "release"),
        ("metadata/some-product.yml", VALID_YAML),
    ]);

    tilemeta_cmd()
        .arg("inspect")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("some-product 1.8.14"));
}

#[test]
fn test_inspect_verbose_shows_metadata_path() {
    let (_temp, path) = package(&[("metadata/some-product.yml", VALID_YAML)]);

    tilemeta_cmd()
        .arg("--verbose")
        .arg("inspect")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("metadata/some-product.yml"));
}

#[test]
fn test_inspect_raw_prints_document() {
    let (_temp, path) = package(&[("metadata/some-product.yml", VALID_YAML)]);

    tilemeta_cmd()
        .arg("inspect")
        .arg("--raw")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(VALID_YAML));
}

#[test]
fn test_inspect_quiet_prints_nothing() {
    let (_temp, path) = package(&[("metadata/some-product.yml", VALID_YAML)]);

    tilemeta_cmd()
        .arg("--quiet")
        .arg("inspect")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_inspect_json_output() {
    let (_temp, path) = package(&[("metadata/some-product.yml", VALID_YAML)]);

    let output = tilemeta_cmd()
        .arg("--json")
        .arg("inspect")
        .arg(&path)
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["operation"], "inspect");
    assert_eq!(json["status"], "success");
    assert_eq!(json["data"]["name"], "some-product");
    assert_eq!(json["data"]["version"], "1.8.14");
    assert!(json["data"].get("raw").is_none());
}

#[test]
fn test_inspect_missing_package() {
    let temp = TempDir::new().unwrap();

    tilemeta_cmd()
        .arg("inspect")
        .arg(temp.path().join("fake-file"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot open package"))
        .stderr(predicate::str::contains("HINT"));
}

#[test]
fn test_inspect_no_metadata_file() {
    let (_temp, path) = package(&[("some-product.yml", VALID_YAML)]);

    tilemeta_cmd()
        .arg("inspect")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "no metadata file was found in provided .pivotal",
        ));
}

#[test]
fn test_inspect_missing_fields() {
    let (_temp, path) = package(&[("metadata/some-product.yml", "foo: bar")]);

    tilemeta_cmd()
        .arg("inspect")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "could not extract product metadata: could not find product details in metadata file",
        ));
}

#[test]
fn test_inspect_json_error() {
    let (_temp, path) = package(&[("metadata/some-product.yml", "%%%")]);

    let output = tilemeta_cmd()
        .arg("--json")
        .arg("inspect")
        .arg(&path)
        .output()
        .unwrap();

    assert!(!output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], "error");
    assert!(
        json["error"]
            .as_str()
            .unwrap()
            .contains("could not extract product metadata:")
    );
}

#[test]
fn test_inspect_strict_rejects_ambiguous_package() {
    let (_temp, path) = package(&[
        ("metadata/a.yml", "name: a\nproduct_version: 1.0"),
        ("metadata/b.yml", "name: b\nproduct_version: 2.0"),
    ]);

    tilemeta_cmd()
        .arg("inspect")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("a 1.0"));

    tilemeta_cmd()
        .arg("inspect")
        .arg("--strict")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("2 metadata files"));
}

#[test]
fn test_inspect_metadata_size_limit() {
    let (_temp, path) = package(&[("metadata/some-product.yml", VALID_YAML)]);

    tilemeta_cmd()
        .arg("inspect")
        .arg("--max-metadata-size")
        .arg("16")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("quota exceeded"));
}

#[test]
fn test_inspect_compression_ratio_override() {
    let temp = TempDir::new().unwrap();
    let mut document = String::from("name: dense\nproduct_version: 3.10\n");
    document.push_str(&"#".repeat(200_000));
    let data = ZipTestBuilder::new()
        .add_deflated_file("metadata/dense.yml", document.as_bytes())
        .build();
    let path = temp.path().join("dense.pivotal");
    std::fs::write(&path, data).unwrap();

    tilemeta_cmd()
        .arg("inspect")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("metadata/dense.yml"))
        .stderr(predicate::str::contains("--max-compression-ratio"));

    tilemeta_cmd()
        .arg("inspect")
        .arg("--max-compression-ratio")
        .arg("100000")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("dense 3.10"));
}

#[test]
fn test_completion_bash() {
    tilemeta_cmd()
        .arg("completion")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("tilemeta"));
}
