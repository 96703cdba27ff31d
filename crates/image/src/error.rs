//! Error types for the image crate.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for image operations.
pub type Result<T> = std::result::Result<T, ImageError>;

/// Errors that can occur while removing a background.
#[derive(Debug, Error)]
pub enum ImageError {
    /// Input missing, unreadable, or not a decodable image
    #[error("Failed to decode {}: {source}", path.display())]
    Decode {
        /// Input path
        path: PathBuf,
        /// Underlying codec or IO error
        #[source]
        source: image::ImageError,
    },

    /// In-memory data is not a decodable image
    #[error("Invalid image data: {0}")]
    InvalidData(#[source] image::ImageError),

    /// PNG encoding failed
    #[error("PNG encoding error: {0}")]
    Encode(#[source] image::ImageError),

    /// Output could not be created or overwritten
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        /// Output path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
}
