//! Grayscale conversion
//!
//! This module implements the flat-average grayscale transform and the
//! batch converter that applies it to every image in a directory.

mod transform;
mod converter;
mod report;
#[cfg(test)]
mod tests;

pub use transform::{grayscale_in_place, to_grayscale, average_rgb};
pub use converter::{GrayscaleConverter, DEFAULT_EXTENSION};
pub use report::{ConversionOutcome, ConversionReport};
