//! File-level background removal.

use crate::background::{clear_background, RemovalOptions};
use crate::encode::encode_png;
use crate::{ImageError, Result};
use image::io::Reader as ImageReader;
use image::DynamicImage;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Summary of a completed removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemovalReport {
    /// Source image path
    pub input: PathBuf,
    /// Written PNG path
    pub output: PathBuf,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Total pixel count
    pub total_pixels: u64,
    /// Pixels replaced with the transparent value
    pub cleared_pixels: u64,
    /// Size of the written PNG
    pub output_bytes: u64,
}

impl RemovalReport {
    /// Fraction of pixels that were cleared, in `[0.0, 1.0]`.
    pub fn cleared_ratio(&self) -> f64 {
        if self.total_pixels == 0 {
            return 0.0;
        }
        self.cleared_pixels as f64 / self.total_pixels as f64
    }
}

/// Decode an image file, sniffing the format from its content.
fn open_image(path: &Path) -> Result<DynamicImage> {
    let decode = || -> image::ImageResult<DynamicImage> {
        ImageReader::open(path)?.with_guessed_format()?.decode()
    };
    decode().map_err(|source| ImageError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Make the near-white background of an image file transparent.
///
/// Decodes `input_path`, clears every background pixel and writes the result
/// to `output_path` as PNG. The output is always PNG regardless of its
/// extension. An existing file at `output_path` is overwritten, including
/// `input_path` itself when both paths are the same.
///
/// Nothing is cleaned up on failure; a failed write may leave a partial file.
pub fn remove_white_background(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    options: &RemovalOptions,
) -> Result<RemovalReport> {
    let input_path = input_path.as_ref();
    let output_path = output_path.as_ref();

    let img = open_image(input_path)?;
    let color = img.color();
    let mut rgba = img.into_rgba8();
    let (width, height) = rgba.dimensions();
    tracing::debug!(
        path = %input_path.display(),
        width,
        height,
        color = ?color,
        "Decoded image"
    );

    let cleared_pixels = clear_background(&mut rgba, options);
    tracing::debug!(cleared_pixels, threshold = options.threshold, "Cleared background");

    let bytes = encode_png(&rgba)?;
    std::fs::write(output_path, &bytes).map_err(|source| ImageError::Write {
        path: output_path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %output_path.display(), "Saved transparent image");

    Ok(RemovalReport {
        input: input_path.to_path_buf(),
        output: output_path.to_path_buf(),
        width,
        height,
        total_pixels: u64::from(width) * u64::from(height),
        cleared_pixels,
        output_bytes: bytes.len() as u64,
    })
}
