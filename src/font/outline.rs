//! Outline (TrueType/OpenType) font rendering.
//!
//! Lays text out on a single line with kerning and composites anti-aliased
//! coverage onto the canvas using ab_glyph.

use ab_glyph::{Font, FontArc, Glyph, PxScale, ScaleFont, point};
use image::Rgb;

use crate::canvas::Canvas;

/// An outline font scaled to a point size.
#[derive(Debug, Clone)]
pub struct OutlineFont {
    font: FontArc,
    scale: PxScale,
}

impl OutlineFont {
    /// Scale `font` so its em square is `point_size` pixels tall.
    pub fn new(font: FontArc, point_size: f32) -> Self {
        let scale = font
            .pt_to_px_scale(point_size)
            .unwrap_or_else(|| PxScale::from(point_size));
        Self { font, scale }
    }

    /// Position glyphs for `text` with the line's ascender at `y = 0`.
    fn layout(&self, text: &str) -> Vec<Glyph> {
        let scaled = self.font.as_scaled(self.scale);
        let ascent = scaled.ascent();

        let mut glyphs = Vec::new();
        let mut caret_x = 0.0f32;
        let mut previous = None;

        for ch in text.chars() {
            let glyph_id = scaled.glyph_id(ch);
            if let Some(prev) = previous {
                caret_x += scaled.kern(prev, glyph_id);
            }
            glyphs.push(glyph_id.with_scale_and_position(self.scale, point(caret_x, ascent)));
            caret_x += scaled.h_advance(glyph_id);
            previous = Some(glyph_id);
        }

        glyphs
    }

    /// Horizontal extent of the inked pixels, 0 when nothing is inked.
    pub fn measure(&self, text: &str) -> i32 {
        self.ink_bounds(text).map_or(0, |(min_x, max_x)| max_x - min_x)
    }

    /// Left and right (exclusive) ink edges relative to the pen origin.
    pub fn ink_bounds(&self, text: &str) -> Option<(i32, i32)> {
        let mut min_x = f32::INFINITY;
        let mut max_x = f32::NEG_INFINITY;

        for glyph in self.layout(text) {
            if let Some(outlined) = self.font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                min_x = min_x.min(bounds.min.x);
                max_x = max_x.max(bounds.max.x);
            }
        }

        if min_x > max_x {
            return None;
        }
        Some((min_x.floor() as i32, max_x.ceil() as i32))
    }

    /// Draw `text` with the pen origin at `x` and the ascender line at `y`.
    pub fn draw(&self, canvas: &mut Canvas, x: i32, y: i32, text: &str, color: Rgb<u8>) {
        for glyph in self.layout(text) {
            if let Some(outlined) = self.font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                let origin_x = x + bounds.min.x as i32;
                let origin_y = y + bounds.min.y as i32;
                outlined.draw(|px, py, coverage| {
                    canvas.blend(origin_x + px as i32, origin_y + py as i32, color, coverage);
                });
            }
        }
    }
}
