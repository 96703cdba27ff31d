//! End-to-end tests for the cutout binary.

use assert_cmd::Command;
use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn cutout(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("cutout").unwrap();
    cmd.current_dir(dir).env_remove("CUTOUT_CONFIG").env_remove("RUST_LOG");
    cmd
}

fn two_pixel(dir: &Path, name: &str) -> PathBuf {
    let mut img = RgbaImage::new(2, 1);
    img.put_pixel(0, 0, Rgba([255, 255, 255, 255]));
    img.put_pixel(1, 0, Rgba([0, 0, 0, 255]));
    let path = dir.join(name);
    img.save_with_format(&path, ImageFormat::Png).unwrap();
    path
}

fn pixels(path: &Path) -> Vec<Rgba<u8>> {
    image::open(path).unwrap().to_rgba8().pixels().copied().collect()
}

#[test]
fn test_removes_background_to_output() {
    let dir = TempDir::new().unwrap();
    let input = two_pixel(dir.path(), "in.png");
    let output = dir.path().join("out.png");

    cutout(dir.path())
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved transparent image to"))
        .stdout(predicate::str::contains("1 pixel cleared"));

    assert_eq!(pixels(&output), vec![Rgba([255, 255, 255, 0]), Rgba([0, 0, 0, 255])]);
    assert_eq!(pixels(&input)[0], Rgba([255, 255, 255, 255]));
}

#[test]
fn test_default_invocation_overwrites_zen_circle() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("public")).unwrap();
    let path = two_pixel(&dir.path().join("public"), "zen-circle.png");

    cutout(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("public/zen-circle.png"));

    assert_eq!(pixels(&path)[0], Rgba([255, 255, 255, 0]));
}

#[test]
fn test_boundary_pixels() {
    let dir = TempDir::new().unwrap();
    let mut img = RgbImage::new(2, 1);
    img.put_pixel(0, 0, Rgb([220, 220, 220]));
    img.put_pixel(1, 0, Rgb([221, 221, 221]));
    let path = dir.path().join("grey.png");
    img.save_with_format(&path, ImageFormat::Png).unwrap();

    cutout(dir.path()).arg(&path).assert().success();

    let decoded = image::open(&path).unwrap();
    assert!(decoded.color().has_alpha());
    assert_eq!(decoded.to_rgba8().pixels().copied().collect::<Vec<_>>(), vec![
        Rgba([220, 220, 220, 255]),
        Rgba([255, 255, 255, 0]),
    ]);
}

#[test]
fn test_threshold_flag() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("grey.png");
    RgbaImage::from_pixel(1, 1, Rgba([210, 210, 210, 255]))
        .save_with_format(&path, ImageFormat::Png)
        .unwrap();

    cutout(dir.path()).arg(&path).args(["-t", "200"]).assert().success();

    assert_eq!(pixels(&path), vec![Rgba([255, 255, 255, 0])]);
}

#[test]
fn test_config_file_threshold() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("grey.png");
    RgbaImage::from_pixel(1, 1, Rgba([210, 210, 210, 255]))
        .save_with_format(&path, ImageFormat::Png)
        .unwrap();
    std::fs::write(dir.path().join(".cutout.toml"), "[background]\nthreshold = 200\n").unwrap();

    cutout(dir.path()).arg("grey.png").assert().success();

    assert_eq!(pixels(&path), vec![Rgba([255, 255, 255, 0])]);
}

#[test]
fn test_json_report() {
    let dir = TempDir::new().unwrap();
    let input = two_pixel(dir.path(), "in.png");

    let assert = cutout(dir.path()).arg(&input).arg("--json").assert().success();
    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();

    assert_eq!(report["width"], 2);
    assert_eq!(report["height"], 1);
    assert_eq!(report["total_pixels"], 2);
    assert_eq!(report["cleared_pixels"], 1);
}

#[test]
fn test_missing_input_fails() {
    let dir = TempDir::new().unwrap();

    cutout(dir.path())
        .arg("missing.png")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to decode missing.png"));
}

#[test]
fn test_unwritable_output_fails() {
    let dir = TempDir::new().unwrap();
    let input = two_pixel(dir.path(), "in.png");

    cutout(dir.path())
        .arg(&input)
        .args(["-o", "no-such-dir/out.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to write"));
}

#[test]
fn test_bad_config_fails() {
    let dir = TempDir::new().unwrap();
    let input = two_pixel(dir.path(), "in.png");
    std::fs::write(dir.path().join("cutout.toml"), "[background\n").unwrap();

    cutout(dir.path())
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}
