//! GIF image format support
//!
//! Supports reading single-frame GIF images. Animated GIFs (multiple
//! frames) are not supported.

use crate::{IoError, IoResult};
use bitchunk_core::{Raster, Rgba};
use ::gif::{ColorOutput, DecodeOptions};
use std::io::Read;

/// Read a GIF image into a raster.
///
/// Reads the first frame of a GIF image with the palette resolved to
/// RGBA, so transparent palette entries come through with zero alpha.
/// Animated GIFs (multiple frames) return an error.
pub fn read_raster_gif<R: Read>(reader: R) -> IoResult<Raster> {
    let mut options = DecodeOptions::new();
    options.set_color_output(ColorOutput::RGBA);

    let mut decoder = options
        .read_info(reader)
        .map_err(|e| IoError::DecodeError(format!("GIF decode error: {}", e)))?;

    // Read the first frame
    let frame = decoder
        .read_next_frame()
        .map_err(|e| IoError::DecodeError(format!("GIF frame error: {}", e)))?
        .ok_or_else(|| IoError::InvalidData("no frames in GIF".to_string()))?
        .clone();

    // Check for additional frames (animated GIF)
    if decoder
        .read_next_frame()
        .map_err(|e| IoError::DecodeError(format!("GIF frame error: {}", e)))?
        .is_some()
    {
        return Err(IoError::UnsupportedFormat(
            "animated GIF not supported".to_string(),
        ));
    }

    let width = frame.width as u32;
    let height = frame.height as u32;
    let buffer = &frame.buffer;

    let expected = (width as usize) * (height as usize) * 4;
    if buffer.len() < expected {
        return Err(IoError::InvalidData(format!(
            "GIF frame buffer too short: {} < {}",
            buffer.len(),
            expected
        )));
    }

    let raster = Raster::new(width, height)?;
    let mut rm = raster.try_into_mut().unwrap();

    for y in 0..height {
        for x in 0..width {
            let idx = ((y * width + x) * 4) as usize;
            let pixel = Rgba::from_rgba8(
                buffer[idx],
                buffer[idx + 1],
                buffer[idx + 2],
                buffer[idx + 3],
            );
            rm.set_pixel_unchecked(x, y, pixel);
        }
    }

    Ok(rm.into())
}
