//! PNG image format support
//!
//! Reads any PNG color type into a [`Raster`] and writes a packed
//! bi-level image back out as a 1-bit grayscale PNG.

use crate::{IoError, IoResult};
use bitchunk_core::{PackedImage, Raster, Rgba};
use ::png::{BitDepth, ColorType, Decoder, Encoder};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image into a raster.
///
/// Grayscale values are widened to 16-bit channels; palette indices are
/// resolved through the PLTE chunk (and tRNS for per-index alpha).
pub fn read_raster_png<R: BufRead + Seek>(reader: R) -> IoResult<Raster> {
    let decoder = Decoder::new(reader);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;

    match (color_type, bit_depth) {
        (ColorType::Grayscale, _)
        | (ColorType::GrayscaleAlpha, BitDepth::Eight | BitDepth::Sixteen)
        | (ColorType::Rgb, BitDepth::Eight | BitDepth::Sixteen)
        | (ColorType::Rgba, BitDepth::Eight | BitDepth::Sixteen)
        | (ColorType::Indexed, BitDepth::One | BitDepth::Two | BitDepth::Four | BitDepth::Eight) => {}
        _ => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG format: {:?} {:?}",
                color_type, bit_depth
            )));
        }
    }

    // Read image data
    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    // Resolve palette and per-index alpha up front for indexed images
    let (palette, trns) = if color_type == ColorType::Indexed {
        let info = reader.info();
        let palette = info
            .palette
            .as_ref()
            .ok_or_else(|| IoError::InvalidData("indexed PNG has no palette".to_string()))?
            .to_vec();
        let trns = info.trns.as_ref().map(|t| t.to_vec());
        (palette, trns)
    } else {
        (Vec::new(), None)
    };

    let raster = Raster::new(width, height)?;
    let mut rm = raster.try_into_mut().unwrap();

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    let lookup_index = |index: u8| -> IoResult<Rgba> {
        let base = index as usize * 3;
        if base + 2 >= palette.len() {
            return Err(IoError::InvalidData(format!(
                "palette index {} out of range",
                index
            )));
        }
        let alpha = trns
            .as_ref()
            .and_then(|t| t.get(index as usize).copied())
            .unwrap_or(255);
        Ok(Rgba::from_rgba8(
            palette[base],
            palette[base + 1],
            palette[base + 2],
            alpha,
        ))
    };

    match (color_type, bit_depth) {
        (ColorType::Grayscale, BitDepth::One) | (ColorType::Indexed, BitDepth::One) => {
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let byte_idx = row_start + (x / 8) as usize;
                    let bit_idx = 7 - (x % 8);
                    let val = (data[byte_idx] >> bit_idx) & 1;
                    let pixel = if color_type == ColorType::Indexed {
                        lookup_index(val)?
                    } else {
                        Rgba::from_gray16(val as u16 * 0xFFFF)
                    };
                    rm.set_pixel_unchecked(x, y, pixel);
                }
            }
        }
        (ColorType::Grayscale, BitDepth::Two) | (ColorType::Indexed, BitDepth::Two) => {
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let byte_idx = row_start + (x / 4) as usize;
                    let shift = 6 - ((x % 4) * 2);
                    let val = (data[byte_idx] >> shift) & 3;
                    let pixel = if color_type == ColorType::Indexed {
                        lookup_index(val)?
                    } else {
                        Rgba::from_gray16(val as u16 * 0x5555)
                    };
                    rm.set_pixel_unchecked(x, y, pixel);
                }
            }
        }
        (ColorType::Grayscale, BitDepth::Four) | (ColorType::Indexed, BitDepth::Four) => {
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let byte_idx = row_start + (x / 2) as usize;
                    let val = if x % 2 == 0 {
                        (data[byte_idx] >> 4) & 0xF
                    } else {
                        data[byte_idx] & 0xF
                    };
                    let pixel = if color_type == ColorType::Indexed {
                        lookup_index(val)?
                    } else {
                        Rgba::from_gray16(val as u16 * 0x1111)
                    };
                    rm.set_pixel_unchecked(x, y, pixel);
                }
            }
        }
        (ColorType::Grayscale, BitDepth::Eight) | (ColorType::Indexed, BitDepth::Eight) => {
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let val = data[row_start + x as usize];
                    let pixel = if color_type == ColorType::Indexed {
                        lookup_index(val)?
                    } else {
                        Rgba::from_gray8(val)
                    };
                    rm.set_pixel_unchecked(x, y, pixel);
                }
            }
        }
        (ColorType::Grayscale, BitDepth::Sixteen) => {
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let idx = row_start + (x as usize * 2);
                    let val = ((data[idx] as u16) << 8) | (data[idx + 1] as u16);
                    rm.set_pixel_unchecked(x, y, Rgba::from_gray16(val));
                }
            }
        }
        (ColorType::GrayscaleAlpha, _) => {
            let wide = bit_depth == BitDepth::Sixteen;
            let samples = if wide { 4 } else { 2 };
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let idx = row_start + (x as usize * samples);
                    let (g, a) = if wide {
                        (sample16(data, idx), sample16(data, idx + 2))
                    } else {
                        (data[idx] as u16 * 257, data[idx + 1] as u16 * 257)
                    };
                    rm.set_pixel_unchecked(x, y, Rgba::new(g, g, g, a));
                }
            }
        }
        (ColorType::Rgb, _) => {
            let wide = bit_depth == BitDepth::Sixteen;
            let samples = if wide { 6 } else { 3 };
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let idx = row_start + (x as usize * samples);
                    let pixel = if wide {
                        Rgba::new(
                            sample16(data, idx),
                            sample16(data, idx + 2),
                            sample16(data, idx + 4),
                            Rgba::CHANNEL_MAX,
                        )
                    } else {
                        Rgba::from_rgba8(data[idx], data[idx + 1], data[idx + 2], 255)
                    };
                    rm.set_pixel_unchecked(x, y, pixel);
                }
            }
        }
        (ColorType::Rgba, _) => {
            let wide = bit_depth == BitDepth::Sixteen;
            let samples = if wide { 8 } else { 4 };
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let idx = row_start + (x as usize * samples);
                    let pixel = if wide {
                        Rgba::new(
                            sample16(data, idx),
                            sample16(data, idx + 2),
                            sample16(data, idx + 4),
                            sample16(data, idx + 6),
                        )
                    } else {
                        Rgba::from_rgba8(
                            data[idx],
                            data[idx + 1],
                            data[idx + 2],
                            data[idx + 3],
                        )
                    };
                    rm.set_pixel_unchecked(x, y, pixel);
                }
            }
        }
        _ => unreachable!(),
    }

    Ok(rm.into())
}

fn sample16(data: &[u8], idx: usize) -> u16 {
    ((data[idx] as u16) << 8) | (data[idx + 1] as u16)
}

/// Write a packed bi-level image as a 1-bit grayscale PNG.
///
/// Grayscale PNG stores 0 as black and 1 as white, the inverse of the
/// packed convention (1 = ink), so every byte is complemented on the way
/// out. Padding bits past the row width are don't-cares in both layouts.
pub fn write_packed_png<W: Write>(packed: &PackedImage, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, packed.width(), packed.height());
    encoder.set_color(ColorType::Grayscale);
    encoder.set_depth(BitDepth::One);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let data: Vec<u8> = packed.data().iter().map(|&b| !b).collect();
    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    Ok(())
}
