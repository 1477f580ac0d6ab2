//! Built-in bitmap font.
//!
//! Uses the Spleen 12x24 PSF2 font, drawn at an integer scale derived from
//! the requested point size. Characters Spleen lacks are drawn as a hollow
//! box filling one cell.

use image::Rgb;
use spleen_font::{PSF2Font, FONT_12X24};

use crate::canvas::Canvas;
use crate::error::OgImageError;

/// Native cell width of the built-in font.
pub const CELL_WIDTH: u32 = 12;

/// Native cell height of the built-in font.
pub const CELL_HEIGHT: u32 = 24;

/// Built-in font at an integer scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinFont {
    scale: u32,
}

impl BuiltinFont {
    /// Pick the largest integer scale whose cell height does not exceed
    /// `point_size`, never below 1.
    pub fn for_point_size(point_size: f32) -> Self {
        let scale = (point_size / CELL_HEIGHT as f32).floor();
        let scale = if scale.is_finite() && scale >= 1.0 {
            scale as u32
        } else {
            1
        };
        Self { scale }
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn cell_width(&self) -> u32 {
        CELL_WIDTH * self.scale
    }

    pub fn cell_height(&self) -> u32 {
        CELL_HEIGHT * self.scale
    }

    /// Width of `text`: one cell per character.
    pub fn measure(&self, text: &str) -> i32 {
        (text.chars().count() as u32 * self.cell_width()) as i32
    }

    /// Draw `text` with the top-left of the first cell at `(x, y)`.
    pub fn draw(
        &self,
        canvas: &mut Canvas,
        x: i32,
        y: i32,
        text: &str,
        color: Rgb<u8>,
    ) -> Result<(), OgImageError> {
        let mut font = PSF2Font::new(FONT_12X24)
            .map_err(|_| OgImageError::Font("built-in font data is invalid".to_string()))?;
        let s = self.scale as i32;
        let mut cursor_x = x;

        for ch in text.chars() {
            let utf8 = ch.to_string();
            if let Some(glyph) = font.glyph_for_utf8(utf8.as_bytes()) {
                for (row_y, row) in glyph.enumerate() {
                    for (col_x, on) in row.enumerate() {
                        if on {
                            let px = cursor_x + col_x as i32 * s;
                            let py = y + row_y as i32 * s;
                            canvas.fill_rect(px, py, px + s - 1, py + s - 1, color);
                        }
                    }
                }
            } else {
                self.draw_box(canvas, cursor_x, y, color);
            }
            cursor_x += self.cell_width() as i32;
        }

        Ok(())
    }

    /// Hollow box outline of one cell, stroke one scaled pixel wide.
    fn draw_box(&self, canvas: &mut Canvas, x: i32, y: i32, color: Rgb<u8>) {
        let s = self.scale as i32;
        let right = x + self.cell_width() as i32 - 1;
        let bottom = y + self.cell_height() as i32 - 1;

        canvas.fill_rect(x, y, right, y + s - 1, color);
        canvas.fill_rect(x, bottom - s + 1, right, bottom, color);
        canvas.fill_rect(x, y, x + s - 1, bottom, color);
        canvas.fill_rect(right - s + 1, y, right, bottom, color);
    }
}
