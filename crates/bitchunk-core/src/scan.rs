//! Projection scanner
//!
//! Walks a primary axis and groups consecutive non-empty lines into maximal
//! closed bands. A line is empty when every pixel on it (varying over the
//! secondary range) classifies as background. The same implementation
//! serves both passes of segmentation: rows against the full image width,
//! then columns against one row band's vertical span.

use crate::classify::{PixelClass, classify};
use crate::range::IntRange;
use crate::raster::Raster;
use std::ops::Range;

/// Bands at least this long are discarded with a warning. The output format
/// stores width and height in single bytes, so a band of 256 or more lines
/// can never be encoded; a band this size almost always means the image has
/// no background gaps to segment on.
pub const MAX_BAND_LEN: u32 = 256;

/// Scan axis for a projection pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Primary index is a row (y); the secondary range varies x
    Rows,
    /// Primary index is a column (x); the secondary range varies y
    Columns,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Rows => write!(f, "rows"),
            Axis::Columns => write!(f, "columns"),
        }
    }
}

/// Band-building state while walking the primary axis.
///
/// Exactly two states: either no band is open, or a band opened at `start`
/// and is waiting for an empty line (or the end of input) to close it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    NoActiveBand,
    InBand { start: u32 },
}

/// Find the maximal contiguous bands of non-empty lines along one axis.
///
/// Walks every index in `primary` in increasing order and reports each
/// maximal run of lines containing at least one ink pixel as a closed
/// [`IntRange`]. Bands of [`MAX_BAND_LEN`] or more lines are dropped with a
/// warning instead of being reported. An empty `primary` range yields an
/// empty result.
///
/// The returned bands are disjoint and sorted by `start`.
///
/// # Panics
///
/// Panics if `primary` or `secondary` reach outside the raster bounds.
/// Callers construct both ranges from the raster's own dimensions, so an
/// out-of-bounds index is a programming error.
pub fn project(
    raster: &Raster,
    axis: Axis,
    primary: Range<u32>,
    secondary: Range<u32>,
) -> Vec<IntRange> {
    let mut bands = Vec::new();
    let mut state = ScanState::NoActiveBand;

    for i in primary.clone() {
        let empty = line_is_empty(raster, axis, i, &secondary);
        state = match (state, empty) {
            // First non-empty line opens a band.
            (ScanState::NoActiveBand, false) => ScanState::InBand { start: i },
            // An empty line closes the open band at the previous index.
            (ScanState::InBand { start }, true) => {
                close_band(&mut bands, axis, start, i - 1);
                ScanState::NoActiveBand
            }
            // Otherwise nothing changes; an open band keeps its start.
            (state, _) => state,
        };
    }

    // A band still open at the end of input closes at the last valid index.
    if let ScanState::InBand { start } = state {
        close_band(&mut bands, axis, start, primary.end - 1);
    }

    bands
}

/// Record a closed band, unless it trips the length sanity limit.
fn close_band(bands: &mut Vec<IntRange>, axis: Axis, start: u32, end: u32) {
    let band = IntRange::new_unchecked(start, end);
    if band.len() >= MAX_BAND_LEN {
        log::warn!(
            "unbroken band of {axis} from {start} to {end} ({} lines, limit {}), skipping",
            band.len(),
            MAX_BAND_LEN - 1
        );
        return;
    }
    bands.push(band);
}

/// Test whether every pixel on one line classifies as background.
fn line_is_empty(raster: &Raster, axis: Axis, line: u32, secondary: &Range<u32>) -> bool {
    match axis {
        Axis::Rows => secondary
            .clone()
            .all(|x| classify(raster.pixel_unchecked(x, line)) == PixelClass::Background),
        Axis::Columns => secondary
            .clone()
            .all(|y| classify(raster.pixel_unchecked(line, y)) == PixelClass::Background),
    }
}
