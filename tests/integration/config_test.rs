//! Integration tests for the config file layer.

use predicates::prelude::*;

use crate::helpers::{cell_count, frame_lines, three_by_two, Sandbox};

#[test]
fn config_file_sets_defaults() {
    let sandbox = Sandbox::new();
    sandbox.write_config("width = 6\nmode = \"blacken\"\ncolor = \"256\"\n");
    let image = sandbox.write_png("grid.png", &three_by_two());

    let output = sandbox
        .pixterm()
        .env("COLORTERM", "truecolor")
        .arg(&image)
        .output()
        .unwrap();

    assert!(output.status.success());
    let lines = frame_lines(&output.stdout);
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|line| cell_count(line) == 3));
    assert_eq!(
        lines[1],
        "\x1b[48;5;232m  \x1b[48;5;232m  \x1b[48;5;255m  \x1b[0m"
    );
}

#[test]
fn flags_override_config_file() {
    let sandbox = Sandbox::new();
    sandbox.write_config("width = \"10%\"\nmode = \"blacken\"\n");
    let image = sandbox.write_png("grid.png", &three_by_two());

    let output = sandbox
        .pixterm()
        .args([image.as_str(), "--width", "6", "--mode", "threshold"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let lines = frame_lines(&output.stdout);
    assert_eq!(
        lines[1],
        "\x1b[48;5;232m  \x1b[0m  \x1b[48;5;255m  \x1b[0m"
    );
}

#[test]
fn invalid_mode_in_config_fails_before_loading_image() {
    let sandbox = Sandbox::new();
    sandbox.write_config("mode = \"grayscale\"\n");

    sandbox
        .pixterm()
        .arg("does-not-exist.png")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid transparency mode 'grayscale'"))
        .stderr(predicate::str::contains("File not found").not());
}

#[test]
fn malformed_config_file_is_reported_with_its_path() {
    let sandbox = Sandbox::new();
    sandbox.write_config("width = [\n");
    let image = sandbox.write_png("grid.png", &three_by_two());

    sandbox
        .pixterm()
        .arg(&image)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse config file"))
        .stderr(predicate::str::contains("config.toml"));
}
