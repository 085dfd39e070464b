//! bitchunk-io - image decoding and output writers
//!
//! Decodes PNG, JPEG, and GIF files into the `bitchunk-core` [`Raster`]
//! and writes the two output artifacts per extracted region: a 1-bit PNG
//! and a C source file with the packed bytes.
//!
//! [`read_image`] sniffs the format from the file's magic number; the
//! file extension is never consulted.

mod csource;
mod error;
mod format;
mod gif;
mod jpeg;
mod png;

pub use csource::write_c_array;
pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};
pub use gif::read_raster_gif;
pub use jpeg::read_raster_jpeg;
pub use png::{read_raster_png, write_packed_png};

use bitchunk_core::Raster;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Read an image from a file path, detecting the format by magic number.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let format = detect_format(&path)?;
    let reader = BufReader::new(File::open(&path)?);
    match format {
        ImageFormat::Png => read_raster_png(reader),
        ImageFormat::Jpeg => read_raster_jpeg(reader),
        ImageFormat::Gif => read_raster_gif(reader),
    }
}
