//! # Fonts
//!
//! Font loading with layered fallback, text measurement and glyph drawing.
//!
//! ## Resolution
//!
//! ```text
//! candidate 1 → candidate 2 → ... → built-in Spleen bitmap font
//!   (first that reads and parses wins)
//! ```
//!
//! A slot that exhausts its candidates falls back to [`BuiltinFont`] and,
//! depending on its [`FallbackNotice`], writes a warning line to the
//! diagnostic stream.
//!
//! ## Example
//!
//! ```
//! use og_image::font::{self, FallbackNotice};
//!
//! let mut diag = Vec::new();
//! let handle = font::resolve_font(
//!     &["/nonexistent/font.ttf"],
//!     40.0,
//!     FallbackNotice::Warn("font missing"),
//!     &mut diag,
//! );
//! assert!(handle.is_builtin());
//! assert_eq!(diag, b"font missing\n");
//! ```

mod builtin;
mod outline;

pub use builtin::{BuiltinFont, CELL_HEIGHT, CELL_WIDTH};
pub use outline::OutlineFont;

use ab_glyph::{FontArc, FontVec};
use image::Rgb;
use log::debug;
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::canvas::Canvas;
use crate::error::OgImageError;

/// What to tell the diagnostic stream when a slot falls back to the built-in font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackNotice<'a> {
    /// Write this line.
    Warn(&'a str),
    /// Fall back without a word.
    Silent,
}

/// A font resolved at a specific point size.
#[derive(Debug, Clone)]
pub enum FontHandle {
    Outline(OutlineFont),
    Builtin(BuiltinFont),
}

impl FontHandle {
    pub fn outline(font: FontArc, point_size: f32) -> Self {
        FontHandle::Outline(OutlineFont::new(font, point_size))
    }

    pub fn builtin(point_size: f32) -> Self {
        FontHandle::Builtin(BuiltinFont::for_point_size(point_size))
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, FontHandle::Builtin(_))
    }

    /// Rendered width of `text` in pixels.
    pub fn measure_text(&self, text: &str) -> i32 {
        match self {
            FontHandle::Outline(font) => font.measure(text),
            FontHandle::Builtin(font) => font.measure(text),
        }
    }

    /// Draw `text` anchored at its top-left corner `(x, y)`.
    pub fn draw_text(
        &self,
        canvas: &mut Canvas,
        x: i32,
        y: i32,
        text: &str,
        color: Rgb<u8>,
    ) -> Result<(), OgImageError> {
        match self {
            FontHandle::Outline(font) => {
                font.draw(canvas, x, y, text, color);
                Ok(())
            }
            FontHandle::Builtin(font) => font.draw(canvas, x, y, text, color),
        }
    }
}

/// Read and parse a font file. Collections (`.ttc`) use their first face.
pub fn load_font_file(path: &Path) -> Result<FontArc, OgImageError> {
    let data = fs::read(path)
        .map_err(|e| OgImageError::Font(format!("{}: {}", path.display(), e)))?;
    let font = FontVec::try_from_vec_and_index(data, 0)
        .map_err(|e| OgImageError::Font(format!("{}: {}", path.display(), e)))?;
    Ok(FontArc::new(font))
}

/// First candidate that loads, in order.
fn load_first<P: AsRef<Path>>(candidates: &[P]) -> Option<FontArc> {
    candidates.iter().find_map(|path| {
        let path = path.as_ref();
        match load_font_file(path) {
            Ok(font) => {
                debug!("Loaded font {}", path.display());
                Some(font)
            }
            Err(e) => {
                debug!("Skipping font candidate: {}", e);
                None
            }
        }
    })
}

fn notify(notice: FallbackNotice<'_>, diag: &mut dyn Write) {
    if let FallbackNotice::Warn(message) = notice {
        // Diagnostics are best effort
        let _ = writeln!(diag, "{}", message);
    }
}

/// Resolve a single font slot.
///
/// Tries `candidates` in order and returns the first that loads. When none
/// do, returns the built-in font and reports `notice` to `diag`.
pub fn resolve_font<P: AsRef<Path>>(
    candidates: &[P],
    point_size: f32,
    notice: FallbackNotice<'_>,
    diag: &mut dyn Write,
) -> FontHandle {
    match load_first(candidates) {
        Some(font) => FontHandle::outline(font, point_size),
        None => {
            debug!("No font candidate loaded, using built-in font at {}pt", point_size);
            notify(notice, diag);
            FontHandle::builtin(point_size)
        }
    }
}

/// Resolve several slots that share one candidate list.
///
/// The family falls back atomically: either every size uses the loaded
/// font, or every size uses the built-in font. `notice` is reported at most
/// once.
pub fn resolve_font_family<P: AsRef<Path>, const N: usize>(
    candidates: &[P],
    point_sizes: [f32; N],
    notice: FallbackNotice<'_>,
    diag: &mut dyn Write,
) -> [FontHandle; N] {
    match load_first(candidates) {
        Some(font) => point_sizes.map(|size| FontHandle::outline(font.clone(), size)),
        None => {
            debug!("No font candidate loaded, family uses built-in font");
            notify(notice, diag);
            point_sizes.map(FontHandle::builtin)
        }
    }
}

/// A scalable font commonly present on Linux and macOS hosts.
///
/// Tests that need an outline font call this and return early when it is
/// `None`; the skip is reported on stderr so it shows up with `--nocapture`.
#[cfg(test)]
pub(crate) fn system_font(test: &str) -> Option<&'static str> {
    let found = [
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/System/Library/Fonts/Helvetica.ttc",
    ]
    .into_iter()
    .find(|p| Path::new(p).exists());
    if found.is_none() {
        eprintln!("skipping {}: no system outline font found", test);
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    const MISSING: &[&str] = &["/nonexistent/a.ttf", "/nonexistent/b.ttf"];

    #[test]
    fn test_missing_candidates_warn() {
        let mut diag = Vec::new();
        let handle = resolve_font(MISSING, 180.0, FallbackNotice::Warn("careful"), &mut diag);
        assert!(handle.is_builtin());
        assert_eq!(String::from_utf8(diag).unwrap(), "careful\n");
    }

    #[test]
    fn test_missing_candidates_silent() {
        let mut diag = Vec::new();
        let handle = resolve_font(MISSING, 80.0, FallbackNotice::Silent, &mut diag);
        assert!(handle.is_builtin());
        assert!(diag.is_empty());
    }

    #[test]
    fn test_empty_candidate_list_falls_back() {
        let mut diag = Vec::new();
        let none: &[&str] = &[];
        let handle = resolve_font(none, 40.0, FallbackNotice::Silent, &mut diag);
        assert!(handle.is_builtin());
    }

    #[test]
    fn test_family_falls_back_together() {
        let mut diag = Vec::new();
        let [title, tagline] =
            resolve_font_family(MISSING, [80.0, 40.0], FallbackNotice::Silent, &mut diag);
        assert!(title.is_builtin());
        assert!(tagline.is_builtin());
        assert!(diag.is_empty());
    }

    #[test]
    fn test_family_warns_once() {
        let mut diag = Vec::new();
        let _ = resolve_font_family(
            MISSING,
            [80.0, 40.0, 20.0],
            FallbackNotice::Warn("w"),
            &mut diag,
        );
        assert_eq!(diag, b"w\n");
    }

    #[test]
    fn test_invalid_font_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let bogus = dir.path().join("bogus.ttf");
        fs::write(&bogus, b"definitely not a font").unwrap();

        assert!(matches!(load_font_file(&bogus), Err(OgImageError::Font(_))));

        let mut diag = Vec::new();
        let handle = resolve_font(&[bogus], 40.0, FallbackNotice::Silent, &mut diag);
        assert!(handle.is_builtin());
    }

    #[test]
    fn test_builtin_measure_matches_cells() {
        let handle = FontHandle::builtin(80.0);
        assert_eq!(handle.measure_text("Write Toba"), 10 * 36);
    }

    #[test]
    fn test_outline_font_when_available() {
        let Some(path) = system_font("test_outline_font_when_available") else {
            return;
        };
        let mut diag = Vec::new();
        let candidates = ["/nonexistent/first.ttf", path];
        let handle = resolve_font(&candidates, 40.0, FallbackNotice::Warn("w"), &mut diag);
        assert!(!handle.is_builtin());
        assert!(diag.is_empty());

        let short = handle.measure_text("Toba");
        let long = handle.measure_text("Write Toba");
        assert!(short > 0);
        assert!(long > short);
        assert_eq!(handle.measure_text(""), 0);
        assert_eq!(handle.measure_text("   "), 0);
    }

    #[test]
    fn test_outline_draw_is_antialiased() {
        let Some(path) = system_font("test_outline_draw_is_antialiased") else {
            return;
        };
        let font = load_font_file(Path::new(path)).unwrap();
        let handle = FontHandle::outline(font, 48.0);
        let black = Rgb([0, 0, 0]);
        let mut canvas = Canvas::new(300, 80, black);
        handle
            .draw_text(&mut canvas, 10, 10, "Smooth", Rgb([255, 255, 255]))
            .unwrap();

        let pixels: Vec<_> = canvas.as_image().pixels().map(|p| p.0[0]).collect();
        assert!(pixels.iter().any(|&v| v > 200));
        assert!(pixels.iter().any(|&v| v > 10 && v < 245));
    }
}
