//! Bit-packing encoder
//!
//! Serializes one bounding box into a row-major, one-bit-per-pixel byte
//! buffer. Bits are assembled MSB-first: bit 7 of each byte is the leftmost
//! pixel of that byte's 8-pixel span, and rows are padded up to a whole
//! byte with zero bits. A set bit means ink.
//!
//! # Buffer layout
//!
//! - `row_stride_bytes = ceil(width / 8)`
//! - buffer length is exactly `height * row_stride_bytes`
//! - bits past `width` in the last byte of a row are always zero

use crate::classify::{PixelClass, classify};
use crate::error::{Error, Result};
use crate::range::BoundingBox;
use crate::raster::Raster;

/// A region packed at one bit per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PackedImage {
    /// Width of the region in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the region in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per packed row, `ceil(width / 8)`.
    #[inline]
    pub fn row_stride_bytes(&self) -> usize {
        (self.width as usize).div_ceil(8)
    }

    /// Total buffer length, `height * row_stride_bytes`.
    #[inline]
    pub fn total_bytes(&self) -> usize {
        self.data.len()
    }

    /// The packed bytes, row-major.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The packed bytes of one row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = self.row_stride_bytes();
        &self.data[y as usize * stride..][..stride]
    }

    /// Read back a single bit; `true` means ink.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn bit(&self, x: u32, y: u32) -> bool {
        assert!(
            x < self.width && y < self.height,
            "bit ({}, {}) out of bounds for {}x{} packed image",
            x,
            y,
            self.width,
            self.height
        );
        let byte = self.row(y)[(x / 8) as usize];
        byte & (0x80 >> (x % 8)) != 0
    }
}

/// Pack one bounding box of a raster into a bit-per-pixel buffer.
///
/// Pixels classify through the same [`classify`] function the segmentation
/// passes used, so the packed bits always agree with the scan that produced
/// the box.
///
/// # Errors
///
/// The box is caller-supplied contract data, not input data, so a bad box
/// is rejected rather than clamped:
///
/// - [`Error::InvalidRange`] if either range of the box is inverted
///   (a degenerate, zero-extent box cannot be represented otherwise)
/// - [`Error::BoxOutOfBounds`] if the box extends past the raster
///
/// # Examples
///
/// ```
/// use bitchunk_core::{BoundingBox, IntRange, Raster, Rgba, encode};
///
/// let mut rm = Raster::new(8, 8).unwrap().try_into_mut().unwrap();
/// rm.fill(Rgba::WHITE);
/// rm.set_pixel(1, 1, Rgba::BLACK).unwrap();
/// let raster = rm.into();
///
/// let bbox = BoundingBox::new(
///     IntRange::new(1, 1).unwrap(),
///     IntRange::new(1, 1).unwrap(),
/// );
/// let packed = encode(&raster, &bbox).unwrap();
/// assert_eq!(packed.width(), 1);
/// assert_eq!(packed.data(), &[0b1000_0000]);
/// ```
pub fn encode(raster: &Raster, bbox: &BoundingBox) -> Result<PackedImage> {
    if bbox.rows.start > bbox.rows.end {
        return Err(Error::InvalidRange {
            start: bbox.rows.start,
            end: bbox.rows.end,
        });
    }
    if bbox.cols.start > bbox.cols.end {
        return Err(Error::InvalidRange {
            start: bbox.cols.start,
            end: bbox.cols.end,
        });
    }
    if bbox.cols.end >= raster.width() || bbox.rows.end >= raster.height() {
        return Err(Error::BoxOutOfBounds {
            x: bbox.cols.end,
            y: bbox.rows.end,
            width: raster.width(),
            height: raster.height(),
        });
    }

    let width = bbox.width();
    let height = bbox.height();
    let stride = (width as usize).div_ceil(8);
    let mut data = vec![0u8; height as usize * stride];

    for y in 0..height {
        let src_y = bbox.rows.start + y;
        let row = &mut data[y as usize * stride..][..stride];
        for x in 0..width {
            let src_x = bbox.cols.start + x;
            if classify(raster.pixel_unchecked(src_x, src_y)) == PixelClass::Ink {
                row[(x / 8) as usize] |= 0x80 >> (x % 8);
            }
        }
    }

    Ok(PackedImage {
        width,
        height,
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::IntRange;
    use crate::raster::Rgba;

    fn bbox(r0: u32, r1: u32, c0: u32, c1: u32) -> BoundingBox {
        BoundingBox::new(IntRange::new_unchecked(r0, r1), IntRange::new_unchecked(c0, c1))
    }

    /// 3x3 ink square at rows 2-4, columns 2-4 on a white 10x10 raster.
    fn square_raster() -> Raster {
        let mut rm = Raster::new(10, 10).unwrap().try_into_mut().unwrap();
        rm.fill(Rgba::WHITE);
        for y in 2..=4 {
            for x in 2..=4 {
                rm.set_pixel_unchecked(x, y, Rgba::BLACK);
            }
        }
        rm.into()
    }

    #[test]
    fn test_encode_square() {
        let packed = encode(&square_raster(), &bbox(2, 4, 2, 4)).unwrap();
        assert_eq!(packed.width(), 3);
        assert_eq!(packed.height(), 3);
        assert_eq!(packed.row_stride_bytes(), 1);
        assert_eq!(packed.total_bytes(), 3);
        // Leftmost three bits set, MSB first
        assert_eq!(packed.data(), &[0b1110_0000, 0b1110_0000, 0b1110_0000]);
    }

    #[test]
    fn test_encode_full_raster_box() {
        let packed = encode(&square_raster(), &bbox(0, 9, 0, 9)).unwrap();
        assert_eq!(packed.width(), 10);
        assert_eq!(packed.row_stride_bytes(), 2);
        assert_eq!(packed.total_bytes(), 20);
        // Row 2 has ink at columns 2..=4: 0b00111000 0b00000000
        assert_eq!(packed.row(2), &[0b0011_1000, 0b0000_0000]);
        assert_eq!(packed.row(0), &[0, 0]);
    }

    #[test]
    fn test_bit_accessor() {
        let packed = encode(&square_raster(), &bbox(2, 4, 2, 4)).unwrap();
        assert!(packed.bit(0, 0));
        assert!(packed.bit(2, 2));
        let packed = encode(&square_raster(), &bbox(0, 9, 0, 9)).unwrap();
        assert!(!packed.bit(1, 2));
        assert!(packed.bit(2, 2));
        assert!(packed.bit(4, 4));
        assert!(!packed.bit(5, 4));
    }

    #[test]
    fn test_padding_bits_are_zero() {
        // Full-width ink bar, width 10: last byte of each row must only have
        // its top two bits set.
        let mut rm = Raster::new(10, 2).unwrap().try_into_mut().unwrap();
        rm.fill(Rgba::BLACK);
        let raster: Raster = rm.into();
        let packed = encode(&raster, &bbox(0, 1, 0, 9)).unwrap();
        for y in 0..2 {
            assert_eq!(packed.row(y), &[0xFF, 0b1100_0000]);
        }
    }

    #[test]
    fn test_out_of_bounds_box_rejected() {
        let raster = square_raster();
        assert!(matches!(
            encode(&raster, &bbox(0, 9, 0, 10)),
            Err(Error::BoxOutOfBounds { .. })
        ));
        assert!(matches!(
            encode(&raster, &bbox(0, 10, 0, 9)),
            Err(Error::BoxOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_inverted_box_rejected() {
        let raster = square_raster();
        assert!(matches!(
            encode(&raster, &bbox(4, 2, 2, 4)),
            Err(Error::InvalidRange { .. })
        ));
        assert!(matches!(
            encode(&raster, &bbox(2, 4, 4, 2)),
            Err(Error::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_transparent_pixels_pack_as_zero() {
        // Transparent black inside the box must not set bits.
        let mut rm = Raster::new(4, 1).unwrap().try_into_mut().unwrap();
        rm.set_pixel_unchecked(0, 0, Rgba::BLACK);
        rm.set_pixel_unchecked(1, 0, Rgba::new(0, 0, 0, 0));
        rm.set_pixel_unchecked(2, 0, Rgba::WHITE);
        rm.set_pixel_unchecked(3, 0, Rgba::BLACK);
        let raster: Raster = rm.into();
        let packed = encode(&raster, &bbox(0, 0, 0, 3)).unwrap();
        assert_eq!(packed.data(), &[0b1001_0000]);
    }
}
