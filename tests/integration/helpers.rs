//! Shared helpers for integration tests.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use image::{Rgba, RgbaImage};
use tempfile::TempDir;

pub const RESET: &str = "\x1b[0m";

/// A temp directory holding fixtures and an (initially absent) config file.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.path().join("config.toml")
    }

    pub fn write_config(&self, content: &str) {
        std::fs::write(self.config_path(), content).expect("Failed to write config");
    }

    /// Save `image` as a PNG in the sandbox and return its path as a string.
    pub fn write_png(&self, name: &str, image: &RgbaImage) -> String {
        let path = self.path().join(name);
        image.save(&path).expect("Failed to write PNG fixture");
        path.to_string_lossy().into_owned()
    }

    /// pixterm with a clean, deterministic environment.
    pub fn pixterm(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_pixterm"));
        cmd.env_remove("COLORTERM")
            .env_remove("RUST_LOG")
            .env("COLUMNS", "80")
            .env("PIXTERM_CONFIG", self.config_path());
        cmd
    }
}

/// 3x2 image: red, green, blue on top; black, transparent, white below.
pub fn three_by_two() -> RgbaImage {
    let pixels = [
        [255, 0, 0, 255],
        [0, 255, 0, 255],
        [0, 0, 255, 255],
        [0, 0, 0, 255],
        [10, 10, 10, 0],
        [255, 255, 255, 255],
    ];
    RgbaImage::from_fn(3, 2, |x, y| Rgba(pixels[(y * 3 + x) as usize]))
}

/// Frame rows without the blank lines around them.
pub fn frame_lines(stdout: &[u8]) -> Vec<String> {
    let text = String::from_utf8_lossy(stdout);
    assert!(text.starts_with('\n'), "frame should start with a blank line");
    assert!(text.ends_with("\n\n"), "frame should end with a blank line");
    text.trim_matches('\n').lines().map(str::to_string).collect()
}

/// Number of color codes in a rendered row, excluding the final reset.
pub fn cell_count(line: &str) -> usize {
    line.strip_suffix(RESET)
        .expect("row should end with a reset")
        .matches("\x1b[")
        .count()
}
