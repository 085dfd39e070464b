//! Image format detection
//!
//! Detects image formats by examining magic numbers in the file header.

use crate::{IoError, IoResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Input image formats the decoder dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
}

/// Magic numbers for image format detection
mod magic {
    /// PNG: 89 50 4E 47 0D 0A 1A 0A
    pub const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    /// JPEG: FF D8 FF
    pub const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF];

    /// GIF87a
    pub const GIF87A: &[u8] = b"GIF87a";

    /// GIF89a
    pub const GIF89A: &[u8] = b"GIF89a";
}

/// Detect image format from a file path
pub fn detect_format<P: AsRef<Path>>(path: P) -> IoResult<ImageFormat> {
    let mut file = File::open(path).map_err(IoError::Io)?;
    let mut header = [0u8; 8];
    let bytes_read = file.read(&mut header).map_err(IoError::Io)?;
    detect_format_from_bytes(&header[..bytes_read])
}

/// Detect image format from bytes
pub fn detect_format_from_bytes(data: &[u8]) -> IoResult<ImageFormat> {
    if data.len() < 3 {
        return Err(IoError::InvalidData(
            "not enough data to detect format".to_string(),
        ));
    }

    // Check PNG (needs 8 bytes)
    if data.len() >= 8 && data.starts_with(magic::PNG) {
        return Ok(ImageFormat::Png);
    }

    // Check JPEG
    if data.starts_with(magic::JPEG) {
        return Ok(ImageFormat::Jpeg);
    }

    // Check GIF
    if data.len() >= 6 && (data.starts_with(magic::GIF87A) || data.starts_with(magic::GIF89A)) {
        return Ok(ImageFormat::Gif);
    }

    Err(IoError::UnsupportedFormat(
        "unknown image format".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_png() {
        let data = [
            0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x00,
        ];
        assert_eq!(detect_format_from_bytes(&data).unwrap(), ImageFormat::Png);
    }

    #[test]
    fn test_detect_jpeg() {
        let data = [
            0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46, 0x00, 0x01,
        ];
        assert_eq!(detect_format_from_bytes(&data).unwrap(), ImageFormat::Jpeg);
    }

    #[test]
    fn test_detect_gif() {
        let data = b"GIF89a\x00\x00\x00\x00\x00\x00";
        assert_eq!(detect_format_from_bytes(data).unwrap(), ImageFormat::Gif);
        let data = b"GIF87a\x00\x00\x00\x00\x00\x00";
        assert_eq!(detect_format_from_bytes(data).unwrap(), ImageFormat::Gif);
    }

    #[test]
    fn test_detect_unknown() {
        let data = b"UNKNOWN_FORMAT";
        assert!(detect_format_from_bytes(data).is_err());
    }

    #[test]
    fn test_detect_truncated() {
        assert!(detect_format_from_bytes(&[0xFF, 0xD8]).is_err());
        // A PNG header cut short must not match
        assert!(detect_format_from_bytes(&[0x89, 0x50, 0x4E, 0x47]).is_err());
    }
}
