//! Pixel classification
//!
//! Every pixel is reduced to one of two classes before any geometric work
//! happens: [`PixelClass::Ink`] (content, rendered black on output) or
//! [`PixelClass::Background`] (empty space, rendered white). Color input is
//! accepted but carries no special meaning; only opacity and summed
//! brightness matter.

use crate::raster::Rgba;

/// Alpha values below this are treated as fully transparent, and transparent
/// pixels are always background. Half of the channel range.
pub const OPACITY_THRESHOLD: u32 = 0x8000;

/// A pixel whose r+g+b sum exceeds this is brighter than mid-gray averaged
/// over three channels and classifies as background. 1.5x the single-channel
/// maximum.
///
/// Downstream byte arrays are exact against this value; do not tune it.
pub const BRIGHTNESS_THRESHOLD: u32 = 3 * 0x7FFF;

/// Binary pixel class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelClass {
    /// Foreground content, rendered black
    Ink,
    /// Empty space (including transparency), rendered white
    Background,
}

/// Classify a pixel as ink or background.
///
/// Pure and total: every pixel value maps deterministically to exactly one
/// class.
///
/// # Examples
///
/// ```
/// use bitchunk_core::{PixelClass, Rgba, classify};
///
/// assert_eq!(classify(Rgba::BLACK), PixelClass::Ink);
/// assert_eq!(classify(Rgba::WHITE), PixelClass::Background);
/// assert_eq!(classify(Rgba::TRANSPARENT), PixelClass::Background);
/// ```
#[inline]
pub fn classify(pixel: Rgba) -> PixelClass {
    if (pixel.a as u32) < OPACITY_THRESHOLD {
        return PixelClass::Background;
    }
    let brightness = pixel.r as u32 + pixel.g as u32 + pixel.b as u32;
    if brightness > BRIGHTNESS_THRESHOLD {
        PixelClass::Background
    } else {
        PixelClass::Ink
    }
}
