//! Terminal width discovery.

use std::env;

use terminal_size::{terminal_size, Width};

/// Columns assumed when nothing else reports a width.
pub const FALLBACK_COLUMNS: u32 = 80;

/// Environment variable that overrides the detected width.
pub const COLUMNS_VAR: &str = "COLUMNS";

/// Width of the output terminal in columns.
///
/// Checks `COLUMNS` first, then asks the OS about stdout, then falls back
/// to 80 columns.
pub fn columns() -> u32 {
    resolve_columns(env::var(COLUMNS_VAR).ok().as_deref(), || {
        terminal_size().map(|(Width(w), _)| u32::from(w))
    })
}

/// Width resolution with the environment and OS query injected.
pub fn resolve_columns(env_columns: Option<&str>, query: impl FnOnce() -> Option<u32>) -> u32 {
    if let Some(cols) = env_columns.and_then(|v| v.trim().parse::<u32>().ok()) {
        if cols > 0 {
            tracing::debug!(columns = cols, "Using terminal width from {}", COLUMNS_VAR);
            return cols;
        }
    }

    match query().filter(|&cols| cols > 0) {
        Some(cols) => {
            tracing::debug!(columns = cols, "Detected terminal width");
            cols
        }
        None => {
            tracing::warn!(
                "Could not detect terminal width, assuming {} columns",
                FALLBACK_COLUMNS
            );
            FALLBACK_COLUMNS
        }
    }
}
