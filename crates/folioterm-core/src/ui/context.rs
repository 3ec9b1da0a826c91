//! Theme-aware drawing context.
//!
//! Both widgets render through `DrawContext`, which pairs a
//! `&mut dyn TermBackend` with the active theme and knows the glyph grid
//! metrics derived from the theme's font scale.

use crate::backend::{Color, GLYPH_HEIGHT, GLYPH_WIDTH, TermBackend};
use crate::error::Result;
use crate::theme::Theme;

/// Drawing context wrapping a backend and theme.
pub struct DrawContext<'a> {
    pub backend: &'a mut dyn TermBackend,
    pub theme: &'a Theme,
}

impl<'a> DrawContext<'a> {
    pub fn new(backend: &'a mut dyn TermBackend, theme: &'a Theme) -> Self {
        Self { backend, theme }
    }

    /// Width of one character cell in pixels.
    pub fn cell_width(&self) -> i32 {
        (GLYPH_WIDTH * self.theme.font_scale) as i32
    }

    /// Height of one text row in pixels, including the line gap.
    pub fn cell_height(&self) -> i32 {
        (GLYPH_HEIGHT * self.theme.font_scale) as i32 + self.theme.line_gap
    }

    /// Font size handed to the backend (glyph height times scale).
    pub fn font_size(&self) -> u16 {
        (GLYPH_HEIGHT * self.theme.font_scale) as u16
    }

    /// Draw a text run at the grid font size.
    pub fn text(&mut self, text: &str, x: i32, y: i32, color: Color) -> Result<()> {
        self.backend.draw_text(text, x, y, self.font_size(), color)
    }

    /// Measure a text run at the grid font size.
    pub fn measure(&self, text: &str) -> u32 {
        self.backend.measure_text(text, self.font_size())
    }
}
