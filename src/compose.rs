//! # Card Composer
//!
//! Builds the preview card and writes it to disk.
//!
//! ## Pipeline
//!
//! ```text
//! allocate canvas → resolve fonts → measure & center → bars → text → PNG
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use og_image::compose::{self, FontSources};
//! use std::path::Path;
//!
//! let report = compose::generate(
//!     Path::new("og-image.png"),
//!     &FontSources::SYSTEM,
//!     &mut std::io::stderr(),
//! )?;
//! println!("{}x{}", report.width, report.height);
//! # Ok::<(), og_image::OgImageError>(())
//! ```

use image::Rgb;
use log::debug;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::canvas::Canvas;
use crate::config::{
    APP_NAME, BATAK_TEXT, CardConfig, SCRIPT_FALLBACK_WARNING, SCRIPT_FONT_CANDIDATES, TAGLINE,
    TEXT_FONT_CANDIDATES,
};
use crate::error::OgImageError;
use crate::font::{self, FallbackNotice, FontHandle};

/// A card-sized canvas filled with the background color.
pub fn allocate_canvas(config: &CardConfig) -> Canvas {
    Canvas::new(config.width, config.height, config.background)
}

/// Horizontal offset that centers `text_width` on `canvas_width`.
///
/// Floor division, no clamping: text wider than the canvas gets a negative
/// offset and is drawn partially off-canvas.
pub fn compute_centered_x(text_width: i32, canvas_width: i32) -> i32 {
    (canvas_width - text_width).div_euclid(2)
}

/// Rendered width of `text` in `font`.
pub fn measure_text(text: &str, font: &FontHandle) -> i32 {
    font.measure_text(text)
}

/// Fill the inclusive rectangle `(x0, y0)..=(x1, y1)`.
pub fn draw_bar(canvas: &mut Canvas, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb<u8>) {
    canvas.fill_rect(x0, y0, x1, y1, color);
}

/// Composite `text` at top-left anchor `(x, y)`.
pub fn draw_text(
    canvas: &mut Canvas,
    x: i32,
    y: i32,
    text: &str,
    font: &FontHandle,
    color: Rgb<u8>,
) -> Result<(), OgImageError> {
    font.draw_text(canvas, x, y, text, color)
}

/// A line of text; its x position is derived when drawn.
#[derive(Debug, Clone)]
pub struct StyledText {
    pub content: &'static str,
    pub font: FontHandle,
    pub color: Rgb<u8>,
    pub y: i32,
}

impl StyledText {
    pub fn centered_x(&self, canvas_width: u32) -> i32 {
        let width = measure_text(self.content, &self.font);
        let x = compute_centered_x(width, canvas_width as i32);
        debug!("{:?}: width {} → x {}", self.content, width, x);
        x
    }
}

/// Solid accent rectangle with inclusive corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecorativeBar {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
    pub color: Rgb<u8>,
}

impl DecorativeBar {
    /// A horizontal bar at `y`, inset `config.bar_margin` from both sides.
    pub fn at(config: &CardConfig, y: i32) -> Self {
        Self {
            x0: config.bar_margin,
            y0: y,
            x1: config.width as i32 - config.bar_margin,
            y1: y + config.bar_thickness,
            color: config.accent,
        }
    }
}

/// Candidate font files for each font group.
#[derive(Debug, Clone, Copy)]
pub struct FontSources<'a> {
    /// Decorative script sample
    pub script: &'a [&'a str],
    /// Title and tagline, resolved together
    pub text: &'a [&'a str],
}

impl FontSources<'static> {
    /// The fixed system font locations.
    pub const SYSTEM: FontSources<'static> = FontSources {
        script: SCRIPT_FONT_CANDIDATES,
        text: TEXT_FONT_CANDIDATES,
    };
}

/// The three resolved font handles.
#[derive(Debug, Clone)]
pub struct CardFonts {
    pub script: FontHandle,
    pub title: FontHandle,
    pub tagline: FontHandle,
}

impl CardFonts {
    /// Resolve the script font (warns on fallback) and the title/tagline
    /// pair (falls back together, silently).
    pub fn resolve(sources: &FontSources<'_>, config: &CardConfig, diag: &mut dyn Write) -> Self {
        let script = font::resolve_font(
            sources.script,
            config.script_size,
            FallbackNotice::Warn(SCRIPT_FALLBACK_WARNING),
            diag,
        );
        let [title, tagline] = font::resolve_font_family(
            sources.text,
            [config.title_size, config.tagline_size],
            FallbackNotice::Silent,
            diag,
        );
        debug!(
            "Fonts resolved: script builtin={}, title builtin={}",
            script.is_builtin(),
            title.is_builtin()
        );
        Self {
            script,
            title,
            tagline,
        }
    }

    /// All three slots on the built-in font.
    pub fn builtin(config: &CardConfig) -> Self {
        Self {
            script: FontHandle::builtin(config.script_size),
            title: FontHandle::builtin(config.title_size),
            tagline: FontHandle::builtin(config.tagline_size),
        }
    }
}

/// The Write Toba card: two bars bracketing three centered lines.
#[derive(Debug, Clone)]
pub struct Card {
    bars: [DecorativeBar; 2],
    texts: [StyledText; 3],
}

impl Card {
    pub fn new(config: CardConfig, fonts: CardFonts) -> Self {
        let line = |content: &'static str, font: FontHandle, y: i32| StyledText {
            content,
            font,
            color: config.text_color,
            y,
        };
        Self {
            bars: [
                DecorativeBar::at(&config, config.bar_top_y),
                DecorativeBar::at(&config, config.bar_bottom_y),
            ],
            texts: [
                line(BATAK_TEXT, fonts.script, config.script_y),
                line(APP_NAME, fonts.title, config.title_y),
                line(TAGLINE, fonts.tagline, config.tagline_y),
            ],
        }
    }

    pub fn bars(&self) -> &[DecorativeBar] {
        &self.bars
    }

    pub fn texts(&self) -> &[StyledText] {
        &self.texts
    }

    /// Draw the bars, then the centered lines, onto `canvas`.
    ///
    /// Lines are centered on the canvas width, not the configured width.
    pub fn draw(&self, canvas: &mut Canvas) -> Result<(), OgImageError> {
        let positions: Vec<i32> = self
            .texts
            .iter()
            .map(|text| text.centered_x(canvas.width()))
            .collect();

        for bar in &self.bars {
            draw_bar(canvas, bar.x0, bar.y0, bar.x1, bar.y1, bar.color);
        }

        for (text, x) in self.texts.iter().zip(positions) {
            draw_text(canvas, x, text.y, text.content, &text.font, text.color)?;
        }

        Ok(())
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Run the whole pipeline and write the card to `output`.
///
/// Font fallback diagnostics go to `diag`. Any drawing or write failure is
/// returned; the output file may then be missing, stale or partial.
pub fn generate(
    output: &Path,
    sources: &FontSources<'_>,
    diag: &mut dyn Write,
) -> Result<Report, OgImageError> {
    let config = CardConfig::WRITE_TOBA;
    let mut canvas = allocate_canvas(&config);
    let fonts = CardFonts::resolve(sources, &config, diag);
    Card::new(config, fonts).draw(&mut canvas)?;

    canvas.save(output)?;
    debug!("Wrote {}", output.display());

    Ok(Report {
        path: output.to_path_buf(),
        width: canvas.width(),
        height: canvas.height(),
    })
}
