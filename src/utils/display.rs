//! Display and output formatting utilities

use crate::config::DisplayConfig;
use crate::game_of_life::{Cell, Grid};
use itertools::Itertools;

/// Turns grids into terminal frames
#[derive(Debug, Clone)]
pub struct GridRenderer {
    alive_glyph: String,
    dead_glyph: String,
    terminal_height: usize,
}

impl GridRenderer {
    /// Create a renderer, coloring glyphs only if the terminal supports it
    pub fn new(config: &DisplayConfig) -> Self {
        Self::with_color(config, config.color && ColorOutput::supports_color())
    }

    pub fn with_color(config: &DisplayConfig, color: bool) -> Self {
        let glyph = |ch: char, color_code: Color| {
            if color {
                ColorOutput::paint(&ch.to_string(), color_code)
            } else {
                ch.to_string()
            }
        };

        Self {
            alive_glyph: glyph(config.alive_glyph, Color::BrightBlue),
            dead_glyph: glyph(config.dead_glyph, Color::BrightGreen),
            terminal_height: config.terminal_height,
        }
    }

    fn glyph(&self, cell: Cell) -> &str {
        match cell {
            Cell::Alive => &self.alive_glyph,
            Cell::Dead => &self.dead_glyph,
        }
    }

    /// Render a grid as one frame
    ///
    /// Leading and trailing blank rows are dropped, then the frame is padded
    /// with empty lines until it is at least `terminal_height` lines tall.
    pub fn render(&self, grid: &Grid) -> String {
        let body = grid
            .rows()
            .iter()
            .map(|row| row.iter().map(|&cell| self.glyph(cell)).collect::<String>())
            .join("\n");

        let mut frame = body.trim_matches('\n').to_string();
        let mut lines = frame.split('\n').count();
        while lines < self.terminal_height {
            frame.push('\n');
            lines += 1;
        }

        frame
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            Self::paint(text, color)
        } else {
            text.to_string()
        }
    }

    /// Wrap text in ANSI color codes unconditionally
    pub fn paint(text: &str, color: Color) -> String {
        format!("\x1b[{}m{}\x1b[0m", color.code(), text)
    }

    /// Check if terminal supports color
    pub fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Green,
    BrightGreen,
    BrightBlue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Green => 32,
            Color::BrightGreen => 92,
            Color::BrightBlue => 94,
        }
    }
}
