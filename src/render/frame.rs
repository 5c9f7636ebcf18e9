//! Frame rendering.
//!
//! Walks a pixel matrix row by row and turns every pixel into a background
//! color code followed by two filler columns.

use std::fmt;
use std::io::{self, Write};

use super::ansi::{encode, ColorCode};
use super::composite::composite;
use super::matrix::PixelMatrix;
use super::resize::COLUMNS_PER_PIXEL;
use super::types::TransparencyMode;
use crate::terminal::TerminalCapability;

/// Characters printed after each color code.
pub const FILLER: &str = "  ";

/// Immutable per-run render settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    pub mode: TransparencyMode,
    pub capability: TerminalCapability,
}

impl RenderOptions {
    pub fn new(mode: TransparencyMode, capability: TerminalCapability) -> Self {
        Self { mode, capability }
    }
}

/// Rendered output: one string per pixel row, each ending in a reset code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFrame {
    lines: Vec<String>,
}

impl RenderedFrame {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Write the frame as laid out by its `Display` impl, then flush.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self)?;
        out.flush()
    }
}

/// A blank line, every row, then another blank line.
impl fmt::Display for RenderedFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        writeln!(f)
    }
}

/// Render every row of `matrix`, top to bottom.
pub fn render_frame(matrix: &PixelMatrix, options: RenderOptions) -> RenderedFrame {
    // Worst case per pixel: "\x1b[48;2;255;255;255m" plus filler.
    let line_capacity = matrix.width() as usize * (19 + COLUMNS_PER_PIXEL as usize) + 4;
    let lines = matrix
        .rows()
        .map(|row| {
            let mut line = String::with_capacity(line_capacity);
            for &pixel in row {
                encode(composite(pixel, options.mode), options.capability).push_to(&mut line);
                line.push_str(FILLER);
            }
            ColorCode::Reset.push_to(&mut line);
            line
        })
        .collect();

    RenderedFrame { lines }
}
