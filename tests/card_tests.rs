//! # Card Tests
//!
//! End-to-end checks of the generation pipeline through the library API.
//!
//! Font candidates are pointed at paths that never exist, so every run
//! uses the built-in font and the output is independent of the host.

use og_image::compose::{self, FontSources};
use og_image::config::{CardConfig, SCRIPT_FALLBACK_WARNING};
use og_image::OgImageError;
use pretty_assertions::assert_eq;
use std::fs;

/// Font sources that never resolve
const NO_FONTS: FontSources<'static> = FontSources {
    script: &["/nonexistent/Arial Unicode.ttf", "/nonexistent/Fallback.ttf"],
    text: &["/nonexistent/Helvetica.ttc"],
};

// ============================================================================
// OUTPUT FILE
// ============================================================================

#[test]
fn test_output_is_1200x630_rgb_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("og-image.png");

    let report = compose::generate(&path, &NO_FONTS, &mut Vec::new()).unwrap();
    assert_eq!((report.width, report.height), (1200, 630));

    let bytes = fs::read(&path).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

    let decoded = image::load_from_memory(&bytes).unwrap();
    assert_eq!(decoded.color(), image::ColorType::Rgb8);
    assert_eq!((decoded.width(), decoded.height()), (1200, 630));
}

#[test]
fn test_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("og-image.png");
    fs::write(&path, b"stale").unwrap();

    compose::generate(&path, &NO_FONTS, &mut Vec::new()).unwrap();

    let decoded = image::open(&path).unwrap();
    assert_eq!(decoded.width(), 1200);
}

#[test]
fn test_runs_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.png");
    let second = dir.path().join("second.png");

    compose::generate(&first, &NO_FONTS, &mut Vec::new()).unwrap();
    compose::generate(&second, &NO_FONTS, &mut Vec::new()).unwrap();

    assert!(fs::read(&first).unwrap() == fs::read(&second).unwrap());
}

#[test]
fn test_card_colors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("og-image.png");
    compose::generate(&path, &NO_FONTS, &mut Vec::new()).unwrap();

    let config = CardConfig::WRITE_TOBA;
    let img = image::open(&path).unwrap().to_rgb8();
    assert_eq!(*img.get_pixel(10, 10), config.background);
    assert_eq!(*img.get_pixel(600, 102), config.accent);
    assert_eq!(*img.get_pixel(600, 552), config.accent);
    assert!(img.pixels().any(|p| *p == config.text_color));
}

// ============================================================================
// FONT FALLBACK
// ============================================================================

#[test]
fn test_script_fallback_warns_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("og-image.png");
    let mut diag = Vec::new();

    compose::generate(&path, &NO_FONTS, &mut diag).unwrap();

    // Title/tagline fallback is silent; only the script slot speaks
    assert_eq!(
        String::from_utf8(diag).unwrap(),
        format!("{}\n", SCRIPT_FALLBACK_WARNING)
    );
    assert!(path.exists());
}

#[test]
fn test_text_fallback_alone_is_silent() {
    let Some(font) = system_font() else {
        eprintln!("skipping test_text_fallback_alone_is_silent: no system outline font found");
        return;
    };
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("og-image.png");
    let mut diag = Vec::new();

    // Script font resolves, title/tagline do not
    let script = [font];
    let sources = FontSources {
        script: &script,
        text: NO_FONTS.text,
    };
    compose::generate(&path, &sources, &mut diag).unwrap();

    assert!(diag.is_empty());
    assert!(path.exists());
}

/// A scalable font commonly present on Linux and macOS hosts.
fn system_font() -> Option<&'static str> {
    [
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/System/Library/Fonts/Helvetica.ttc",
    ]
    .into_iter()
    .find(|p| std::path::Path::new(p).exists())
}

// ============================================================================
// FAILURES
// ============================================================================

#[test]
fn test_missing_directory_fails_with_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("og-image.png");

    let err = compose::generate(&path, &NO_FONTS, &mut Vec::new()).unwrap_err();
    assert!(matches!(err, OgImageError::Write { .. }));
    assert!(!path.exists());
}

#[test]
fn test_directory_in_the_way_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("og-image.png");
    fs::create_dir(&path).unwrap();

    let err = compose::generate(&path, &NO_FONTS, &mut Vec::new()).unwrap_err();
    // The message names the file it could not write
    let message = err.to_string();
    assert!(message.starts_with(&format!("{}: ", path.display())), "{message}");
}
