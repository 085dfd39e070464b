//! bitchunk-core - segmentation and bit-packing engine
//!
//! Splits a rasterized black/white image containing disjoint glyph- or
//! sprite-like regions into individually numbered bounding boxes, and packs
//! each box into a row-major, one-bit-per-pixel byte buffer suitable for
//! embedding in C source or firmware.
//!
//! # Pipeline
//!
//! 1. [`classify`] reduces each pixel to ink or background
//! 2. [`project`] finds maximal bands of non-empty lines along one axis
//! 3. [`segment`] runs a row pass, then a column pass per row band, and
//!    numbers the resulting boxes in scan order
//! 4. [`encode`] packs one box into a [`PackedImage`]
//!
//! The whole computation is synchronous, single-threaded, and reads the
//! source [`Raster`] without modifying it. Decoding the source image and
//! writing the outputs live in `bitchunk-io`.
//!
//! # Example
//!
//! ```
//! use bitchunk_core::{Raster, Rgba, encode, segment};
//!
//! let mut rm = Raster::new(16, 16).unwrap().try_into_mut().unwrap();
//! rm.fill(Rgba::WHITE);
//! for y in 2..=4 {
//!     for x in 2..=4 {
//!         rm.set_pixel(x, y, Rgba::BLACK).unwrap();
//!     }
//! }
//! let raster = rm.into();
//!
//! let segments = segment(&raster);
//! assert_eq!(segments.len(), 1);
//! let packed = encode(&raster, &segments[0].bbox).unwrap();
//! assert_eq!((packed.width(), packed.height()), (3, 3));
//! ```

mod classify;
mod error;
mod pack;
mod range;
mod raster;
mod scan;
mod segment;

pub use classify::{BRIGHTNESS_THRESHOLD, OPACITY_THRESHOLD, PixelClass, classify};
pub use error::{Error, Result};
pub use pack::{PackedImage, encode};
pub use range::{BoundingBox, IntRange};
pub use raster::{Raster, RasterMut, Rgba};
pub use scan::{Axis, MAX_BAND_LEN, project};
pub use segment::{Segment, segment};
