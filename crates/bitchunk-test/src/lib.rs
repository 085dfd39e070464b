//! bitchunk-test - shared fixtures for regression tests
//!
//! Builds rasters from ASCII art so tests can state their input geometry
//! inline:
//!
//! ```
//! use bitchunk_test::raster_from_rows;
//!
//! let raster = raster_from_rows(&[
//!     "..##..",
//!     "..##..",
//!     "......",
//! ]);
//! assert_eq!(raster.width(), 6);
//! assert_eq!(raster.height(), 3);
//! ```
//!
//! Legend: `#` is opaque black (ink), `.` is opaque white, a space is fully
//! transparent.

use bitchunk_core::{Raster, Rgba};

/// Build a raster from one string per row.
///
/// # Panics
///
/// Panics if `rows` is empty, any row is empty, rows have differing widths,
/// or a row contains a character outside the legend. Test fixtures are
/// static, so a malformed pattern is a bug in the test itself.
pub fn raster_from_rows(rows: &[&str]) -> Raster {
    assert!(!rows.is_empty(), "raster pattern has no rows");
    let width = rows[0].len() as u32;
    assert!(width > 0, "raster pattern has empty rows");

    let raster = Raster::new(width, rows.len() as u32).expect("pattern dimensions");
    let mut rm = raster.try_into_mut().unwrap();
    for (y, row) in rows.iter().enumerate() {
        assert_eq!(
            row.len() as u32,
            width,
            "raster pattern row {y} has a different width"
        );
        for (x, c) in row.chars().enumerate() {
            let pixel = match c {
                '#' => Rgba::BLACK,
                '.' => Rgba::WHITE,
                ' ' => Rgba::TRANSPARENT,
                other => panic!("unknown raster pattern character {other:?}"),
            };
            rm.set_pixel_unchecked(x as u32, y as u32, pixel);
        }
    }
    rm.into()
}

/// Build an all-white (all-background) raster.
pub fn blank_raster(width: u32, height: u32) -> Raster {
    let raster = Raster::new(width, height).expect("blank raster dimensions");
    let mut rm = raster.try_into_mut().unwrap();
    rm.fill(Rgba::WHITE);
    rm.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitchunk_core::{PixelClass, classify};

    #[test]
    fn test_legend() {
        let raster = raster_from_rows(&["#. "]);
        assert_eq!(classify(raster.pixel(0, 0).unwrap()), PixelClass::Ink);
        assert_eq!(classify(raster.pixel(1, 0).unwrap()), PixelClass::Background);
        assert_eq!(classify(raster.pixel(2, 0).unwrap()), PixelClass::Background);
        assert_eq!(raster.pixel(2, 0).unwrap().a, 0);
    }

    #[test]
    #[should_panic]
    fn test_ragged_rows_rejected() {
        raster_from_rows(&["##", "#"]);
    }

    #[test]
    fn test_blank_raster_is_background() {
        let raster = blank_raster(3, 3);
        assert_eq!(classify(raster.pixel(1, 1).unwrap()), PixelClass::Background);
    }
}
