//! Near-white background classification.
//!
//! A pixel is background when each of its red, green and blue channels is
//! strictly above the threshold. Alpha is ignored for classification. Every
//! background pixel becomes [`TRANSPARENT`]; everything else passes through
//! untouched, alpha included.

use image::{DynamicImage, Rgba, RgbaImage};

/// Default per-channel threshold.
pub const DEFAULT_THRESHOLD: u8 = 220;

/// Value written over every background pixel: white RGB with zero alpha.
pub const TRANSPARENT: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Options for background removal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemovalOptions {
    /// Channels must be strictly greater than this to count as background
    pub threshold: u8,
}

impl Default for RemovalOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl RemovalOptions {
    /// Options with a custom threshold.
    pub fn with_threshold(threshold: u8) -> Self {
        Self { threshold }
    }
}

/// Check whether a pixel is near-white background.
///
/// # Example
/// ```
/// use cutout_image::is_background;
/// use image::Rgba;
///
/// assert!(is_background(&Rgba([255, 255, 221, 255]), 220));
/// assert!(!is_background(&Rgba([255, 255, 220, 255]), 220));
/// ```
#[inline]
pub fn is_background(pixel: &Rgba<u8>, threshold: u8) -> bool {
    let Rgba([r, g, b, _]) = *pixel;
    r > threshold && g > threshold && b > threshold
}

#[inline]
fn clear_pixel(pixel: &mut Rgba<u8>, threshold: u8) -> bool {
    if is_background(pixel, threshold) {
        *pixel = TRANSPARENT;
        true
    } else {
        false
    }
}

/// Replace every background pixel with [`TRANSPARENT`] in place.
///
/// Returns the number of pixels classified as background.
#[cfg(not(feature = "parallel"))]
pub fn clear_background(img: &mut RgbaImage, options: &RemovalOptions) -> u64 {
    let threshold = options.threshold;
    img.pixels_mut()
        .map(|pixel| clear_pixel(pixel, threshold))
        .filter(|&cleared| cleared)
        .count() as u64
}

/// Replace every background pixel with [`TRANSPARENT`] in place.
///
/// Returns the number of pixels classified as background.
#[cfg(feature = "parallel")]
pub fn clear_background(img: &mut RgbaImage, options: &RemovalOptions) -> u64 {
    use image::Pixel;
    use rayon::prelude::*;

    let threshold = options.threshold;
    let row_len = img.width() as usize * 4;
    if row_len == 0 {
        return 0;
    }

    let raw: &mut [u8] = img;
    raw.par_chunks_mut(row_len)
        .map(|row| {
            row.chunks_exact_mut(4)
                .map(|channels| clear_pixel(Rgba::from_slice_mut(channels), threshold))
                .filter(|&cleared| cleared)
                .count() as u64
        })
        .sum()
}

/// Normalize an image to RGBA8 and clear its background.
///
/// Sources without alpha get alpha = 255 before classification.
pub fn remove_background(img: &DynamicImage, options: &RemovalOptions) -> RgbaImage {
    let mut rgba = img.to_rgba8();
    clear_background(&mut rgba, options);
    rgba
}
