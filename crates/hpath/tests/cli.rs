//! End-to-end tests driving the `hpath` binary.

#![allow(missing_docs, clippy::tests_outside_test_module)]

use std::fs;

use assert_cmd::Command;
use image::GenericImageView;

#[test]
fn render_writes_a_png() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = dir.path().join("curve.png");

    Command::cargo_bin("hpath")
        .expect("binary")
        .args(["render", "--size", "64", "3"])
        .arg(&output)
        .assert()
        .success();

    let image = image::open(&output).expect("readable png");
    assert_eq!(image.dimensions(), (64, 64));
}

#[test]
fn trace_writes_a_gif() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = dir.path().join("curve.gif");

    Command::cargo_bin("hpath")
        .expect("binary")
        .args(["trace", "--size", "32", "--frames", "4", "2"])
        .arg(&output)
        .assert()
        .success();

    let metadata = fs::metadata(&output).expect("gif exists");
    assert!(metadata.len() > 0, "gif output is empty");
}

#[test]
fn info_reports_geometry() {
    let assert = Command::cargo_bin("hpath")
        .expect("binary")
        .args(["info", "3"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(stdout.contains("8x8 grid"), "unexpected output: {stdout}");
    assert!(stdout.contains("64 points"), "unexpected output: {stdout}");
}

#[test]
fn rejects_out_of_range_orders() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = dir.path().join("curve.png");

    Command::cargo_bin("hpath")
        .expect("binary")
        .args(["render", "0"])
        .arg(&output)
        .assert()
        .failure();

    Command::cargo_bin("hpath")
        .expect("binary")
        .args(["render", "16"])
        .arg(&output)
        .assert()
        .failure();
}
