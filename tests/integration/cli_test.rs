//! Integration tests for the command-line surface.

use predicates::prelude::*;

use crate::helpers::{three_by_two, Sandbox};

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_exits_0_and_shows_usage() {
    Sandbox::new()
        .pixterm()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("<IMAGE>"))
        .stdout(predicate::str::contains("--width"))
        .stdout(predicate::str::contains("--mode"))
        .stdout(predicate::str::contains("threshold"));
}

#[test]
fn version_shows_package_version() {
    Sandbox::new()
        .pixterm()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn completions_are_printed_without_an_image() {
    Sandbox::new()
        .pixterm()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pixterm"));
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn no_arguments_shows_usage_error() {
    Sandbox::new()
        .pixterm()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("required"))
        .stderr(predicate::str::contains("<IMAGE>"));
}

#[test]
fn unknown_mode_is_rejected_before_loading() {
    // The image does not exist: the mode error must win.
    Sandbox::new()
        .pixterm()
        .args(["missing.png", "--mode", "sepia"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("sepia"));
}

#[test]
fn malformed_width_is_rejected() {
    for width in ["0", "abc", "10.5", "%"] {
        Sandbox::new()
            .pixterm()
            .args(["missing.png", "--width", width])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Invalid width"));
    }
}

#[test]
fn nonexistent_file_exits_1_with_helpful_error() {
    Sandbox::new()
        .pixterm()
        .arg("nonexistent.png")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("File not found"))
        .stderr(predicate::str::contains("nonexistent.png"));
}

#[test]
fn undecodable_file_exits_1() {
    let sandbox = Sandbox::new();
    let path = sandbox.path().join("notes.png");
    std::fs::write(&path, "plain text").unwrap();

    sandbox
        .pixterm()
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to decode image"));
}

#[test]
fn single_column_width_is_an_invalid_dimension() {
    let sandbox = Sandbox::new();
    let image = sandbox.write_png("grid.png", &three_by_two());

    sandbox
        .pixterm()
        .args([image.as_str(), "--width", "1"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("too small"));
}

#[test]
fn tiny_percentage_is_an_invalid_dimension() {
    let sandbox = Sandbox::new();
    let image = sandbox.write_png("grid.png", &three_by_two());

    // 1% of 80 columns floors to 0 columns
    sandbox
        .pixterm()
        .args([image.as_str(), "--width", "1%"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("too small"));
}

#[test]
fn huge_widths_are_rejected_before_resampling() {
    let sandbox = Sandbox::new();
    let image = sandbox.write_png("grid.png", &three_by_two());

    for width in ["200000", "4294967295", "4294967295%"] {
        sandbox
            .pixterm()
            .args([image.as_str(), "--width", width])
            .assert()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("too large"))
            .stderr(predicate::str::contains("pixel limit"))
            .stderr(predicate::str::contains("panicked").not());
    }
}

// ============================================================================
// Logging Tests
// ============================================================================

#[test]
fn verbose_logs_go_to_stderr_only() {
    let sandbox = Sandbox::new();
    let image = sandbox.write_png("grid.png", &three_by_two());

    let output = sandbox
        .pixterm()
        .args([image.as_str(), "--width", "6", "-vv"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Resolved render settings"), "{stderr}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Resolved render settings"));
}
