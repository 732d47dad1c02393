//! Terminal preview of a framebuffer.
//!
//! Each character cell averages the block of pixels it covers, so one-pixel
//! lines still show up after downscaling.

use crate::framebuffer::Framebuffer;
use std::fmt::Write as FmtWrite;

/// Terminal rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminalMode {
    /// ASCII grayscale characters (widest compatibility)
    #[default]
    Ascii,
    /// Background-colored cells with ANSI 24-bit color
    AnsiTrueColor,
}

/// Terminal encoder configuration.
#[derive(Debug, Clone)]
pub struct TerminalEncoder {
    mode: TerminalMode,
    width: u32,
}

impl Default for TerminalEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalEncoder {
    /// ASCII grayscale ramp from dark to light (10 levels).
    const ASCII_RAMP: &'static [char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

    /// Width/height ratio of a monospace character cell.
    const CHAR_ASPECT: f32 = 2.0;

    /// Create an ASCII encoder 80 columns wide.
    #[must_use]
    pub fn new() -> Self {
        Self { mode: TerminalMode::default(), width: 80 }
    }

    /// Set the rendering mode.
    #[must_use]
    pub fn mode(mut self, mode: TerminalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the target width in characters.
    #[must_use]
    pub fn width(mut self, width: u32) -> Self {
        self.width = width.max(1);
        self
    }

    /// Render a framebuffer to a string, one line per character row.
    #[must_use]
    pub fn render(&self, fb: &Framebuffer) -> String {
        let cols = self.width.min(fb.width());
        let aspect = fb.width() as f32 / fb.height() as f32;
        let rows = ((cols as f32 / aspect / Self::CHAR_ASPECT).round() as u32).clamp(1, fb.height());

        let mut output = String::with_capacity((cols as usize + 1) * rows as usize);
        for row in 0..rows {
            for col in 0..cols {
                let (r, g, b) = Self::cell_average(fb, col, row, cols, rows);
                match self.mode {
                    TerminalMode::Ascii => {
                        // Rec. 709 luminance coefficients
                        let luma = (0.2126 * r + 0.7152 * g + 0.0722 * b) / 255.0;
                        let idx = (luma * (Self::ASCII_RAMP.len() - 1) as f32).round() as usize;
                        output.push(Self::ASCII_RAMP[idx.min(Self::ASCII_RAMP.len() - 1)]);
                    }
                    TerminalMode::AnsiTrueColor => {
                        let _ = write!(output, "\x1b[48;2;{};{};{}m ", r as u8, g as u8, b as u8);
                    }
                }
            }
            if self.mode == TerminalMode::AnsiTrueColor {
                output.push_str("\x1b[0m");
            }
            output.push('\n');
        }
        output
    }

    /// Mean RGB of the pixels under character cell `(col, row)`.
    fn cell_average(fb: &Framebuffer, col: u32, row: u32, cols: u32, rows: u32) -> (f32, f32, f32) {
        let span = |i: u32, n: u32, extent: u32| {
            let start = (u64::from(i) * u64::from(extent) / u64::from(n)) as u32;
            let end = ((u64::from(i) + 1) * u64::from(extent) / u64::from(n)) as u32;
            start..end.max(start + 1)
        };

        let (mut sum, mut count) = ((0.0, 0.0, 0.0), 0.0);
        for y in span(row, rows, fb.height()) {
            for x in span(col, cols, fb.width()) {
                if let Some(p) = fb.get_pixel(x, y) {
                    sum.0 += f32::from(p.r);
                    sum.1 += f32::from(p.g);
                    sum.2 += f32::from(p.b);
                    count += 1.0;
                }
            }
        }

        if count > 0.0 {
            (sum.0 / count, sum.1 / count, sum.2 / count)
        } else {
            (0.0, 0.0, 0.0)
        }
    }
}
