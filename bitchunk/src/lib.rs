//! bitchunk - glyph extraction for 1-bit displays
//!
//! Splits a rasterized black/white image containing disjoint glyph- or
//! sprite-like regions into individually numbered bounding boxes and
//! packs each one as a row-major, MSB-first, one-bit-per-pixel byte
//! array, ready to embed in C source for small displays.
//!
//! # Example
//!
//! ```no_run
//! use bitchunk::{encode, segment};
//! use bitchunk::io::read_image;
//!
//! let raster = read_image("glyphs.png").unwrap();
//! for seg in segment(&raster) {
//!     let packed = encode(&raster, &seg.bbox).unwrap();
//!     println!("image {}: {}x{}", seg.number, packed.width(), packed.height());
//! }
//! ```

// Re-export core types (primary data structures used everywhere)
pub use bitchunk_core::*;

// Re-export the I/O crate as a module to avoid name conflicts
pub use bitchunk_io as io;
