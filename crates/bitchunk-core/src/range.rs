//! IntRange and BoundingBox - region coordinates
//!
//! An [`IntRange`] is a closed band of indices along one axis; a
//! [`BoundingBox`] pairs a row band with a column range found inside it.
//! Both are small `Copy` types passed by value.

use crate::error::{Error, Result};

/// A closed range `(start, end)` of indices along one axis, `start <= end`.
///
/// Ranges produced by the same projection scan never overlap and are listed
/// in increasing `start` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntRange {
    /// First index in the band (inclusive)
    pub start: u32,
    /// Last index in the band (inclusive)
    pub end: u32,
}

impl IntRange {
    /// Create a new range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if `start > end`.
    pub fn new(start: u32, end: u32) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidRange { start, end });
        }
        Ok(IntRange { start, end })
    }

    /// Create a range without validation.
    pub const fn new_unchecked(start: u32, end: u32) -> Self {
        IntRange { start, end }
    }

    /// Number of indices covered, `end - start + 1`.
    #[inline]
    pub fn len(&self) -> u32 {
        self.end - self.start + 1
    }

    /// A closed range always covers at least one index.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Check whether an index falls inside the range.
    #[inline]
    pub fn contains(&self, i: u32) -> bool {
        i >= self.start && i <= self.end
    }
}

/// One extracted region: a row band and the column range found within it.
///
/// Both ranges are inclusive on both ends and define the exact pixel extent
/// to encode. Derived data, recomputed each run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    /// Rows covered by the region (inclusive)
    pub rows: IntRange,
    /// Columns covered by the region (inclusive)
    pub cols: IntRange,
}

impl BoundingBox {
    /// Create a bounding box from a row band and a column range.
    pub const fn new(rows: IntRange, cols: IntRange) -> Self {
        BoundingBox { rows, cols }
    }

    /// Width of the region in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.cols.len()
    }

    /// Height of the region in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_validation() {
        assert!(IntRange::new(3, 3).is_ok());
        assert!(IntRange::new(3, 7).is_ok());
        assert!(IntRange::new(7, 3).is_err());
    }

    #[test]
    fn test_range_len() {
        assert_eq!(IntRange::new_unchecked(0, 0).len(), 1);
        assert_eq!(IntRange::new_unchecked(2, 4).len(), 3);
    }

    #[test]
    fn test_range_contains() {
        let r = IntRange::new_unchecked(2, 4);
        assert!(!r.contains(1));
        assert!(r.contains(2));
        assert!(r.contains(4));
        assert!(!r.contains(5));
    }

    #[test]
    fn test_bounding_box_extent() {
        let bbox = BoundingBox::new(
            IntRange::new_unchecked(2, 4),
            IntRange::new_unchecked(10, 12),
        );
        assert_eq!(bbox.width(), 3);
        assert_eq!(bbox.height(), 3);
    }
}
