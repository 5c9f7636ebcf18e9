//! Terminal color capability detection.

use std::env;

/// Environment variable terminals use to advertise 24-bit color.
pub const COLORTERM_VAR: &str = "COLORTERM";

/// What the output terminal can display, resolved once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TerminalCapability {
    true_color: bool,
}

impl TerminalCapability {
    pub const fn new(true_color: bool) -> Self {
        Self { true_color }
    }

    /// Read `COLORTERM` from the process environment.
    pub fn detect() -> Self {
        let value = env::var(COLORTERM_VAR).ok();
        let capability = Self::from_colorterm(value.as_deref());
        tracing::debug!(
            colorterm = value.as_deref().unwrap_or(""),
            true_color = capability.true_color,
            "Detected terminal color capability"
        );
        capability
    }

    /// Interpret a `COLORTERM` value (`truecolor` or `24bit`).
    pub fn from_colorterm(value: Option<&str>) -> Self {
        let true_color = value.map(str::trim).is_some_and(|v| {
            v.eq_ignore_ascii_case("truecolor") || v.eq_ignore_ascii_case("24bit")
        });
        Self::new(true_color)
    }

    pub fn true_color(&self) -> bool {
        self.true_color
    }
}
