//! Terminal environment discovery.
//!
//! Resolves the facts about the output terminal that the renderer needs:
//! whether it accepts 24-bit color and how many columns it has.
//! Both are looked up once at startup and passed down as plain values.

mod capability;
mod size;

pub use capability::{TerminalCapability, COLORTERM_VAR};
pub use size::{columns, resolve_columns, COLUMNS_VAR, FALLBACK_COLUMNS};
