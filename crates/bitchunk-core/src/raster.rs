//! Raster - the source image container
//!
//! A `Raster` is an immutable rectangular grid of RGBA pixels with 16-bit
//! channels. Decoders with 8-bit samples scale them up so that 0xFF maps to
//! 0xFFFF, which keeps the classification thresholds independent of the
//! source bit depth.
//!
//! # Ownership model
//!
//! `Raster` uses `Arc` for cheap cloning (shared ownership). To fill in
//! pixel data, convert to `RasterMut` via [`Raster::try_into_mut`] or
//! [`Raster::to_mut`], then convert back with `Into<Raster>`. The
//! segmentation and packing passes only ever read a `Raster`, so a pixel
//! observed by one pass is guaranteed to classify identically in the other.

use crate::error::{Error, Result};
use std::sync::Arc;

/// One pixel sample: red, green, blue, and alpha, each in `0..=65535`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u16,
    pub g: u16,
    pub b: u16,
    pub a: u16,
}

impl Rgba {
    /// Maximum value of a single channel.
    pub const CHANNEL_MAX: u16 = u16::MAX;

    /// Fully opaque black.
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, Self::CHANNEL_MAX);

    /// Fully opaque white.
    pub const WHITE: Rgba = Rgba::new(
        Self::CHANNEL_MAX,
        Self::CHANNEL_MAX,
        Self::CHANNEL_MAX,
        Self::CHANNEL_MAX,
    );

    /// Fully transparent black.
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    /// Create a pixel from 16-bit channel values.
    #[inline]
    pub const fn new(r: u16, g: u16, b: u16, a: u16) -> Self {
        Rgba { r, g, b, a }
    }

    /// Create a pixel from 8-bit channel values.
    ///
    /// Each channel is scaled by 257 so that 0x00 maps to 0x0000 and 0xFF
    /// maps to 0xFFFF.
    #[inline]
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba {
            r: r as u16 * 257,
            g: g as u16 * 257,
            b: b as u16 * 257,
            a: a as u16 * 257,
        }
    }

    /// Create an opaque gray pixel from an 8-bit luminance value.
    #[inline]
    pub const fn from_gray8(v: u8) -> Self {
        Self::from_rgba8(v, v, v, 0xFF)
    }

    /// Create an opaque gray pixel from a 16-bit luminance value.
    #[inline]
    pub const fn from_gray16(v: u16) -> Self {
        Rgba {
            r: v,
            g: v,
            b: v,
            a: Self::CHANNEL_MAX,
        }
    }
}

/// Internal raster data
#[derive(Debug)]
struct RasterData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Pixel data in row-major order, `height * width` entries
    pixels: Vec<Rgba>,
}

impl RasterData {
    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }
}

/// Raster - immutable source image
///
/// # Examples
///
/// ```
/// use bitchunk_core::Raster;
///
/// let raster = Raster::new(64, 48).unwrap();
/// assert_eq!(raster.width(), 64);
/// assert_eq!(raster.height(), 48);
/// ```
#[derive(Debug, Clone)]
pub struct Raster {
    inner: Arc<RasterData>,
}

impl Raster {
    /// Create a new raster with every pixel fully transparent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let pixels = vec![Rgba::TRANSPARENT; (width as usize) * (height as usize)];
        Ok(Raster {
            inner: Arc::new(RasterData {
                width,
                height,
                pixels,
            }),
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the pixel at (x, y).
    ///
    /// Returns `None` if the coordinate is out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        Some(self.inner.pixels[self.inner.index(x, y)])
    }

    /// Get the pixel at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`. Callers are expected to
    /// stay within the raster bounds; going outside them is a programming
    /// error, not a recoverable condition.
    #[inline]
    pub fn pixel_unchecked(&self, x: u32, y: u32) -> Rgba {
        assert!(
            x < self.inner.width && y < self.inner.height,
            "pixel ({}, {}) out of bounds for {}x{} raster",
            x,
            y,
            self.inner.width,
            self.inner.height
        );
        self.inner.pixels[self.inner.index(x, y)]
    }

    /// Get one row of pixels.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[Rgba] {
        let start = self.inner.index(0, y);
        &self.inner.pixels[start..start + self.inner.width as usize]
    }

    /// Try to get mutable access to the pixel data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<RasterMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(RasterMut { inner: data }),
            Err(arc) => Err(Raster { inner: arc }),
        }
    }

    /// Create a mutable copy of this raster.
    ///
    /// Always allocates an independent copy that can be modified.
    pub fn to_mut(&self) -> RasterMut {
        RasterMut {
            inner: RasterData {
                width: self.inner.width,
                height: self.inner.height,
                pixels: self.inner.pixels.clone(),
            },
        }
    }
}

/// Mutable raster
///
/// Allows pixel data to be filled in, typically by a decoder. Convert back
/// to an immutable [`Raster`] with `Into<Raster>`.
#[derive(Debug)]
pub struct RasterMut {
    inner: RasterData,
}

impl RasterMut {
    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Set the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::CoordinateOutOfBounds`] if the coordinate is
    /// outside the raster.
    pub fn set_pixel(&mut self, x: u32, y: u32, value: Rgba) -> Result<()> {
        if x >= self.inner.width || y >= self.inner.height {
            return Err(Error::CoordinateOutOfBounds {
                x,
                y,
                width: self.inner.width,
                height: self.inner.height,
            });
        }
        let idx = self.inner.index(x, y);
        self.inner.pixels[idx] = value;
        Ok(())
    }

    /// Set the pixel at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, value: Rgba) {
        assert!(
            x < self.inner.width && y < self.inner.height,
            "pixel ({}, {}) out of bounds for {}x{} raster",
            x,
            y,
            self.inner.width,
            self.inner.height
        );
        let idx = self.inner.index(x, y);
        self.inner.pixels[idx] = value;
    }

    /// Set every pixel to the same value.
    pub fn fill(&mut self, value: Rgba) {
        self.inner.pixels.fill(value);
    }
}

impl From<RasterMut> for Raster {
    fn from(raster_mut: RasterMut) -> Self {
        Raster {
            inner: Arc::new(raster_mut.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_from_rgba8_scales_to_full_range() {
        let px = Rgba::from_rgba8(0xFF, 0x00, 0x80, 0xFF);
        assert_eq!(px.r, 0xFFFF);
        assert_eq!(px.g, 0x0000);
        assert_eq!(px.b, 0x80 * 257);
        assert_eq!(px.a, 0xFFFF);
    }

    #[test]
    fn test_raster_creation() {
        let raster = Raster::new(10, 5).unwrap();
        assert_eq!(raster.width(), 10);
        assert_eq!(raster.height(), 5);
        // New rasters are fully transparent
        assert_eq!(raster.pixel(0, 0), Some(Rgba::TRANSPARENT));
        assert_eq!(raster.pixel(9, 4), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_raster_creation_invalid() {
        assert!(Raster::new(0, 5).is_err());
        assert!(Raster::new(5, 0).is_err());
    }

    #[test]
    fn test_pixel_bounds() {
        let raster = Raster::new(4, 3).unwrap();
        assert!(raster.pixel(3, 2).is_some());
        assert!(raster.pixel(4, 0).is_none());
        assert!(raster.pixel(0, 3).is_none());
    }

    #[test]
    #[should_panic]
    fn test_pixel_unchecked_panics_out_of_bounds() {
        let raster = Raster::new(4, 3).unwrap();
        raster.pixel_unchecked(4, 0);
    }

    #[test]
    fn test_set_pixel_round_trip() {
        let raster = Raster::new(8, 8).unwrap();
        let mut rm = raster.try_into_mut().unwrap();
        rm.set_pixel(3, 5, Rgba::BLACK).unwrap();
        assert!(rm.set_pixel(8, 0, Rgba::BLACK).is_err());

        let raster: Raster = rm.into();
        assert_eq!(raster.pixel(3, 5), Some(Rgba::BLACK));
        assert_eq!(raster.pixel(3, 4), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_clone_shares_data() {
        let r1 = Raster::new(8, 8).unwrap();
        let r2 = r1.clone();
        assert_eq!(r1.row(0).as_ptr(), r2.row(0).as_ptr());
        // try_into_mut fails while a second reference exists
        assert!(r1.try_into_mut().is_err());
    }

    #[test]
    fn test_to_mut_copies() {
        let r1 = Raster::new(4, 4).unwrap();
        let mut rm = r1.to_mut();
        rm.fill(Rgba::WHITE);
        let r2: Raster = rm.into();
        assert_eq!(r1.pixel(0, 0), Some(Rgba::TRANSPARENT));
        assert_eq!(r2.pixel(0, 0), Some(Rgba::WHITE));
    }
}
