//! Near-white background removal.
//!
//! This crate provides:
//! - Per-pixel near-white classification with a configurable threshold
//! - In-place background clearing on RGBA buffers
//! - PNG encoding with an alpha channel
//! - A file-to-file pipeline returning a [`RemovalReport`]

#![warn(missing_docs)]

mod background;
mod encode;
mod error;
mod process;

pub use background::{
    clear_background, is_background, remove_background, RemovalOptions, DEFAULT_THRESHOLD,
    TRANSPARENT,
};
pub use encode::{encode_png, remove_background_bytes};
pub use error::{ImageError, Result};
pub use process::{remove_white_background, RemovalReport};
