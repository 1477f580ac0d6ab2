//! # Error Types
//!
//! This module defines error types used throughout the og-image crate.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for og-image operations
#[derive(Debug, Error)]
pub enum OgImageError {
    /// A font candidate could not be read or parsed
    #[error("Font error: {0}")]
    Font(String),

    /// Image encoding error
    #[error("Image error: {0}")]
    Image(String),

    /// The output file could not be created or written
    #[error("{}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
