//! Per-pixel grayscale transform

use image::{DynamicImage, RgbaImage};

/// Bytes per RGBA8 pixel
pub const CHANNELS: usize = 4;

/// Truncated arithmetic mean of three channel values
///
/// No gamma handling and no luminance weighting.
pub fn average_rgb(r: u8, g: u8, b: u8) -> u8 {
    ((r as u16 + g as u16 + b as u16) / 3) as u8
}

/// Replaces R, G and B of every pixel with their average, leaving alpha alone
///
/// The buffer holds interleaved RGBA samples. A trailing partial pixel is
/// left untouched.
pub fn grayscale_in_place(pixels: &mut [u8]) {
    for px in pixels.chunks_exact_mut(CHANNELS) {
        let avg = average_rgb(px[0], px[1], px[2]);
        px[0] = avg;
        px[1] = avg;
        px[2] = avg;
    }
}

/// Converts a decoded image to RGBA8 and applies the grayscale transform
pub fn to_grayscale(image: &DynamicImage) -> RgbaImage {
    let mut rgba = image.to_rgba8();
    grayscale_in_place(&mut rgba);
    rgba
}
