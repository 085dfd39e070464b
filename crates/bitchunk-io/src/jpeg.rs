//! JPEG image format support
//!
//! Reads JPEG images using the `jpeg-decoder` crate. Supports 8- and
//! 16-bit grayscale and 24-bit RGB; CMYK is rejected. JPEG has no alpha
//! channel, so every pixel reads back fully opaque.

use crate::{IoError, IoResult};
use bitchunk_core::{Raster, Rgba};
use jpeg_decoder::{Decoder, PixelFormat};
use std::io::Read;

/// Read a JPEG image into a raster.
pub fn read_raster_jpeg<R: Read>(reader: R) -> IoResult<Raster> {
    let mut decoder = Decoder::new(reader);
    let data = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG header missing after decode".to_string()))?;

    let width = info.width as u32;
    let height = info.height as u32;

    let raster = Raster::new(width, height)?;
    let mut rm = raster.try_into_mut().unwrap();

    match info.pixel_format {
        PixelFormat::L8 => {
            for y in 0..height {
                for x in 0..width {
                    let idx = (y * width + x) as usize;
                    rm.set_pixel_unchecked(x, y, Rgba::from_gray8(data[idx]));
                }
            }
        }
        PixelFormat::L16 => {
            for y in 0..height {
                for x in 0..width {
                    let idx = ((y * width + x) * 2) as usize;
                    let val = ((data[idx] as u16) << 8) | (data[idx + 1] as u16);
                    rm.set_pixel_unchecked(x, y, Rgba::from_gray16(val));
                }
            }
        }
        PixelFormat::RGB24 => {
            for y in 0..height {
                for x in 0..width {
                    let idx = ((y * width + x) * 3) as usize;
                    let pixel =
                        Rgba::from_rgba8(data[idx], data[idx + 1], data[idx + 2], 255);
                    rm.set_pixel_unchecked(x, y, pixel);
                }
            }
        }
        PixelFormat::CMYK32 => {
            return Err(IoError::UnsupportedFormat(
                "CMYK JPEG not supported".to_string(),
            ));
        }
    }

    Ok(rm.into())
}
