//! # Card Configuration
//!
//! Fixed layout, palette and content for the Write Toba preview card.
//!
//! ## Layout
//!
//! ```text
//! ┌──────────────────────── 1200 ────────────────────────┐
//! │                                                      │
//! │        ████████████ bar y=100..104 ████████████      │
//! │                                                      │
//! │               ᯅ ᯖ ᯂ᯲ ᯖᯬ ᯅ        y=150  (180pt)       │ 630
//! │                                                      │
//! │                 Write Toba      y=380  (80pt)        │
//! │            Learn Batak Toba Script  y=480 (40pt)     │
//! │        ████████████ bar y=550..554 ████████████      │
//! │                                                      │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```
//! use og_image::config::CardConfig;
//!
//! let config = CardConfig::WRITE_TOBA;
//! println!("Card: {}x{} pixels", config.width, config.height);
//! ```

use image::Rgb;

/// Output file, relative to the current working directory.
pub const OUTPUT_PATH: &str = "og-image.png";

/// Decorative Batak Toba script sample.
pub const BATAK_TEXT: &str = "ᯅ ᯖ ᯂ᯲ ᯖᯬ ᯅ";

/// Application name.
pub const APP_NAME: &str = "Write Toba";

pub const TAGLINE: &str = "Learn Batak Toba Script";

/// Fonts that may cover the Batak Unicode block, in priority order.
pub const SCRIPT_FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/Supplemental/Arial Unicode.ttf",
    "/Library/Fonts/Arial Unicode.ttf",
];

/// Shared by the title and the tagline.
pub const TEXT_FONT_CANDIDATES: &[&str] = &["/System/Library/Fonts/Helvetica.ttc"];

/// Diagnostic printed when the script font falls back to the built-in font.
pub const SCRIPT_FALLBACK_WARNING: &str =
    "Warning: Using default font. Batak characters may not display correctly.";

/// # Card Configuration
///
/// Geometry and palette of the preview card.
///
/// ## Vertical Rhythm
///
/// - **bar_top_y**: upper accent bar, above the script sample
/// - **script_y / title_y / tagline_y**: top of each text line
/// - **bar_bottom_y**: lower accent bar, below the tagline
///
/// Bars span `bar_margin ..= width - bar_margin` and are
/// `bar_thickness + 1` pixels tall (inclusive corners).
#[derive(Debug, Clone, Copy)]
pub struct CardConfig {
    /// Canvas width in pixels
    pub width: u32,

    /// Canvas height in pixels
    pub height: u32,

    pub background: Rgb<u8>,
    pub text_color: Rgb<u8>,
    pub accent: Rgb<u8>,

    /// Point sizes (em square in pixels)
    pub script_size: f32,
    pub title_size: f32,
    pub tagline_size: f32,

    pub script_y: i32,
    pub title_y: i32,
    pub tagline_y: i32,

    pub bar_top_y: i32,
    pub bar_bottom_y: i32,
    pub bar_margin: i32,
    pub bar_thickness: i32,
}

impl CardConfig {
    /// # Write Toba Card
    ///
    /// 1200×630, Facebook's recommended Open Graph size.
    ///
    /// | Property | Value |
    /// |----------|-------|
    /// | Background | `#1a1f36` (dark blue) |
    /// | Text | `#ffffff` |
    /// | Accent | `#4f46e5` (indigo) |
    pub const WRITE_TOBA: CardConfig = CardConfig {
        width: 1200,
        height: 630,
        background: Rgb([0x1a, 0x1f, 0x36]),
        text_color: Rgb([0xff, 0xff, 0xff]),
        accent: Rgb([0x4f, 0x46, 0xe5]),
        script_size: 180.0,
        title_size: 80.0,
        tagline_size: 40.0,
        script_y: 150,
        title_y: 380,
        tagline_y: 480,
        bar_top_y: 100,
        bar_bottom_y: 550,
        bar_margin: 300,
        bar_thickness: 4,
    };
}
