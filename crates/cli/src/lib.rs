//! CLI utilities for the cutout tool
//!
//! Provides shared terminal output:
//! - Status messages
//! - Size and count formatting

#![warn(missing_docs)]

pub mod output;
