//! # Canvas
//!
//! RGB pixel buffer the card is composed on, plus PNG output.
//!
//! Coordinates are signed so that centered content wider than the canvas can
//! start left of the origin; anything outside the buffer is clipped.

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder, Rgb, RgbImage};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::OgImageError;

/// In-memory RGB8 pixel buffer.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Allocate a canvas with every pixel set to `background`.
    pub fn new(width: u32, height: u32, background: Rgb<u8>) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, background),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Read a pixel, `None` outside the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb<u8>> {
        let (x, y) = self.index(x, y)?;
        Some(*self.image.get_pixel(x, y))
    }

    pub fn as_image(&self) -> &RgbImage {
        &self.image
    }

    fn index(&self, x: i32, y: i32) -> Option<(u32, u32)> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.image.width() || y >= self.image.height() {
            return None;
        }
        Some((x, y))
    }

    /// Fill the rectangle with inclusive corners `(x0, y0)` and `(x1, y1)`.
    ///
    /// Corners may be given in any order. The rectangle is clipped to the canvas.
    pub fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb<u8>) {
        let (left, right) = (x0.min(x1).max(0), x0.max(x1));
        let (top, bottom) = (y0.min(y1).max(0), y0.max(y1));
        let right = right.min(self.image.width() as i32 - 1);
        let bottom = bottom.min(self.image.height() as i32 - 1);

        for y in top..=bottom {
            for x in left..=right {
                self.image.put_pixel(x as u32, y as u32, color);
            }
        }
    }

    /// Composite `color` over the existing pixel with the given coverage (0.0..=1.0).
    pub fn blend(&mut self, x: i32, y: i32, color: Rgb<u8>, coverage: f32) {
        let Some((x, y)) = self.index(x, y) else {
            return;
        };
        let coverage = coverage.clamp(0.0, 1.0);
        if coverage <= 0.0 {
            return;
        }
        let dst = self.image.get_pixel_mut(x, y);
        for (d, s) in dst.0.iter_mut().zip(color.0) {
            let mixed = *d as f32 + (s as f32 - *d as f32) * coverage;
            *d = mixed.round() as u8;
        }
    }

    /// Encode as an optimized PNG into `writer`.
    ///
    /// Uses best compression with adaptive row filtering. The encoder writes
    /// no timestamps, so identical canvases always produce identical bytes.
    pub fn write_png<W: Write>(&self, writer: W) -> Result<(), OgImageError> {
        let encoder =
            PngEncoder::new_with_quality(writer, CompressionType::Best, FilterType::Adaptive);
        encoder
            .write_image(
                self.image.as_raw(),
                self.image.width(),
                self.image.height(),
                ExtendedColorType::Rgb8,
            )
            .map_err(|e: image::ImageError| OgImageError::Image(e.to_string()))
    }

    /// Encode to PNG bytes.
    pub fn to_png(&self) -> Result<Vec<u8>, OgImageError> {
        let mut png_bytes = Vec::new();
        self.write_png(&mut png_bytes)?;
        Ok(png_bytes)
    }

    /// Encode and write the canvas to `path`, overwriting any existing file.
    ///
    /// The file is written in place. A failure part-way through leaves
    /// whatever was already written on disk.
    pub fn save(&self, path: &Path) -> Result<(), OgImageError> {
        let write_error = |source| OgImageError::Write {
            path: path.to_path_buf(),
            source,
        };
        let mut writer = BufWriter::new(File::create(path).map_err(write_error)?);
        self.write_png(&mut writer)?;
        writer.flush().map_err(write_error)?;
        Ok(())
    }
}
