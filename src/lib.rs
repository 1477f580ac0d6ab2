//! # og-image - Open Graph Card Generator
//!
//! Renders the Write Toba social preview card: a line of Batak Toba script,
//! the application name and a tagline, centered on a 1200×630 canvas between
//! two accent bars, written as `og-image.png`.
//!
//! ## Quick Start
//!
//! ```no_run
//! use og_image::compose::{self, FontSources};
//! use std::path::Path;
//!
//! let report = compose::generate(
//!     Path::new(og_image::config::OUTPUT_PATH),
//!     &FontSources::SYSTEM,
//!     &mut std::io::stderr(),
//! )?;
//! println!("Successfully created {}", report.path.display());
//!
//! # Ok::<(), og_image::error::OgImageError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Card geometry, palette, text and font locations |
//! | [`canvas`] | RGB pixel buffer and PNG output |
//! | [`font`] | Font fallback resolution, measurement and drawing |
//! | [`compose`] | Centering, card layout and the generation pipeline |
//! | [`error`] | Error types |
//!
//! ## Fonts
//!
//! Outline fonts are looked up at fixed macOS system locations. On hosts
//! without them the card is drawn with the built-in Spleen bitmap font, and
//! a warning is printed because Batak glyphs then render as boxes.

pub mod canvas;
pub mod compose;
pub mod config;
pub mod error;
pub mod font;

// Re-exports for convenience
pub use canvas::Canvas;
pub use config::CardConfig;
pub use error::OgImageError;
