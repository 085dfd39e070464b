//! Segmentation engine
//!
//! Two projection passes produce the final ordered list of regions: one over
//! the full image rows to find row bands, then one over the columns of each
//! band to split it into individual boxes. Sequence numbers are assigned in
//! discovery order, starting at 1, and are used only for output naming.

use crate::range::BoundingBox;
use crate::raster::Raster;
use crate::scan::{Axis, project};

/// One discovered region with its sequence number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// 1-based position in scan order (row-band-major, column-minor)
    pub number: u32,
    /// Pixel extent of the region
    pub bbox: BoundingBox,
}

/// Split a raster into its disjoint ink regions.
///
/// Returns the regions in scan order: row bands top to bottom, and within
/// each band its column ranges left to right. Numbers run `1..=M` with no
/// gaps; a row band whose column pass finds nothing contributes no segments
/// and does not advance the counter. An all-background raster yields an
/// empty list.
///
/// # Examples
///
/// ```
/// use bitchunk_core::{Raster, segment};
///
/// // A fresh raster is fully transparent, i.e. all background.
/// let raster = Raster::new(10, 10).unwrap();
/// assert!(segment(&raster).is_empty());
/// ```
pub fn segment(raster: &Raster) -> Vec<Segment> {
    let row_bands = project(raster, Axis::Rows, 0..raster.height(), 0..raster.width());

    let mut segments = Vec::new();
    let mut number = 1;
    for band in row_bands {
        let col_ranges = project(
            raster,
            Axis::Columns,
            0..raster.width(),
            band.start..band.end + 1,
        );
        for cols in col_ranges {
            segments.push(Segment {
                number,
                bbox: BoundingBox::new(band, cols),
            });
            number += 1;
        }
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::IntRange;
    use crate::raster::Rgba;

    fn white_raster(width: u32, height: u32) -> crate::raster::RasterMut {
        let mut rm = Raster::new(width, height).unwrap().try_into_mut().unwrap();
        rm.fill(Rgba::WHITE);
        rm
    }

    fn fill_black(rm: &mut crate::raster::RasterMut, x0: u32, y0: u32, x1: u32, y1: u32) {
        for y in y0..=y1 {
            for x in x0..=x1 {
                rm.set_pixel_unchecked(x, y, Rgba::BLACK);
            }
        }
    }

    #[test]
    fn test_all_background() {
        let raster: Raster = white_raster(10, 10).into();
        assert!(segment(&raster).is_empty());
    }

    #[test]
    fn test_single_square() {
        let mut rm = white_raster(10, 10);
        fill_black(&mut rm, 2, 2, 4, 4);
        let segments = segment(&rm.into());
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].number, 1);
        assert_eq!(segments[0].bbox.rows, IntRange::new_unchecked(2, 4));
        assert_eq!(segments[0].bbox.cols, IntRange::new_unchecked(2, 4));
    }

    #[test]
    fn test_two_regions_stacked() {
        let mut rm = white_raster(10, 12);
        fill_black(&mut rm, 1, 1, 3, 3);
        fill_black(&mut rm, 5, 7, 8, 10);
        let segments = segment(&rm.into());
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].number, 1);
        assert_eq!(segments[0].bbox.rows, IntRange::new_unchecked(1, 3));
        assert_eq!(segments[1].number, 2);
        assert_eq!(segments[1].bbox.rows, IntRange::new_unchecked(7, 10));
    }

    #[test]
    fn test_two_regions_side_by_side_share_row_band() {
        let mut rm = white_raster(12, 8);
        fill_black(&mut rm, 1, 2, 3, 5);
        fill_black(&mut rm, 7, 2, 10, 5);
        let segments = segment(&rm.into());
        assert_eq!(segments.len(), 2);
        // Same band, left region first
        assert_eq!(segments[0].bbox.rows, segments[1].bbox.rows);
        assert_eq!(segments[0].bbox.cols, IntRange::new_unchecked(1, 3));
        assert_eq!(segments[1].bbox.cols, IntRange::new_unchecked(7, 10));
    }
}
