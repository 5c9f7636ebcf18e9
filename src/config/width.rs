//! Desired render width.

use std::fmt;
use std::str::FromStr;

use super::error::ConfigError;

/// How many terminal columns the image should span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidthSpec {
    /// An absolute column count.
    Columns(u32),
    /// A percentage of the terminal width.
    Percent(u32),
    /// The whole terminal width.
    #[default]
    Terminal,
}

impl WidthSpec {
    /// Turn the spec into a column count, querying the terminal only when needed.
    pub fn resolve(&self, terminal_columns: impl FnOnce() -> u32) -> u32 {
        match *self {
            Self::Columns(cols) => cols,
            Self::Percent(pct) => {
                let cols = u64::from(terminal_columns()) * u64::from(pct) / 100;
                u32::try_from(cols).unwrap_or(u32::MAX)
            }
            Self::Terminal => terminal_columns(),
        }
    }
}

impl FromStr for WidthSpec {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| ConfigError::InvalidWidth {
            value: s.to_string(),
            reason,
        };

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(invalid("expected a column count or a percentage"));
        }

        let (digits, percent) = match trimmed.strip_suffix('%') {
            Some(digits) => (digits.trim_end(), true),
            None => (trimmed, false),
        };

        let value: u32 = digits
            .parse()
            .map_err(|_| invalid("expected a positive whole number, optionally followed by '%'"))?;
        if value == 0 {
            return Err(invalid("must be greater than zero"));
        }

        Ok(if percent {
            Self::Percent(value)
        } else {
            Self::Columns(value)
        })
    }
}

impl fmt::Display for WidthSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Columns(cols) => write!(f, "{}", cols),
            Self::Percent(pct) => write!(f, "{}%", pct),
            Self::Terminal => f.write_str("terminal"),
        }
    }
}
