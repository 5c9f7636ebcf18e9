//! Build script for pixterm.
//!
//! Sets `PIXTERM_BUILD_DATE` for `--version`. Dev builds also get
//! `VERGEN_GIT_SHA`; `--features release` leaves the hash out.

use std::process::Command;

const UNKNOWN: &str = "unknown";

/// Build date as YYYY-MM-DD, or "unknown" where `date` is unavailable (Windows).
fn build_date() -> String {
    Command::new("date")
        .arg("+%Y-%m-%d")
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

#[cfg(not(feature = "release"))]
fn emit_git_sha() {
    use vergen_gitcl::{Emitter, GitclBuilder};

    let emitted = GitclBuilder::default()
        .sha(true)
        .build()
        .map_err(describe)
        .and_then(|git| {
            Emitter::default()
                .add_instructions(&git)
                .and_then(|emitter| emitter.emit())
                .map_err(describe)
        });

    // Source tarballs have no .git directory.
    if let Err(e) = emitted {
        println!("cargo:warning=git SHA unavailable: {}", e);
        println!("cargo:rustc-env=VERGEN_GIT_SHA={}", UNKNOWN);
    }
}

#[cfg(not(feature = "release"))]
fn describe<E: std::fmt::Display>(e: E) -> String {
    e.to_string()
}

fn main() {
    println!("cargo:rustc-env=PIXTERM_BUILD_DATE={}", build_date());

    #[cfg(not(feature = "release"))]
    emit_git_sha();
}
