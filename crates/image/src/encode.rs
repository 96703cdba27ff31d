//! PNG encoding and the in-memory removal path.

use crate::background::{remove_background, RemovalOptions};
use crate::{ImageError, Result};
use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, RgbaImage};

/// Encode an RGBA buffer as PNG bytes.
///
/// The output always carries an alpha channel, whatever the source format was.
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    PngEncoder::new(&mut buffer)
        .write_image(img.as_raw(), img.width(), img.height(), ColorType::Rgba8)
        .map_err(ImageError::Encode)?;
    Ok(buffer)
}

/// Remove the background from encoded image bytes.
///
/// # Arguments
/// * `data` - Image file data in any enabled format
/// * `options` - Removal options
///
/// # Returns
/// PNG bytes with background pixels made transparent
pub fn remove_background_bytes(data: &[u8], options: &RemovalOptions) -> Result<Vec<u8>> {
    let img = image::load_from_memory(data).map_err(ImageError::InvalidData)?;
    encode_png(&remove_background(&img, options))
}
