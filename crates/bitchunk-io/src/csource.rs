//! C source output
//!
//! Emits a packed bi-level image as C definitions ready to paste into
//! firmware: width, height, byte count, and the data bytes as binary
//! literals, one raster row per line.

use crate::IoResult;
use bitchunk_core::PackedImage;
use std::io::Write;

/// Write a packed image as C source.
///
/// Produces four definitions named after the image number, e.g. for
/// `number` 1:
///
/// ```c
/// byte image1Width = 5;
/// byte image1Height = 2;
/// int image1Bytes = 2;
///
/// byte image1Data[] = {
///     0b10101000,
///     0b01010000,
/// };
/// ```
pub fn write_c_array<W: Write>(mut writer: W, number: u32, packed: &PackedImage) -> IoResult<()> {
    writeln!(writer, "byte image{}Width = {};", number, packed.width())?;
    writeln!(writer, "byte image{}Height = {};", number, packed.height())?;
    writeln!(writer, "int image{}Bytes = {};", number, packed.total_bytes())?;
    writeln!(writer)?;
    writeln!(writer, "byte image{}Data[] = {{", number)?;
    for y in 0..packed.height() {
        let literals: Vec<String> = packed
            .row(y)
            .iter()
            .map(|b| format!("0b{:08b}", b))
            .collect();
        writeln!(writer, "    {},", literals.join(", "))?;
    }
    writeln!(writer, "}};")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitchunk_core::{BoundingBox, IntRange, encode, segment};
    use bitchunk_test::raster_from_rows;

    #[test]
    fn test_single_byte_rows() {
        let raster = raster_from_rows(&[
            "###",
            "#.#",
            "###",
        ]);
        let segments = segment(&raster);
        let packed = encode(&raster, &segments[0].bbox).unwrap();

        let mut out = Vec::new();
        write_c_array(&mut out, 1, &packed).unwrap();

        let expected = "\
byte image1Width = 3;
byte image1Height = 3;
int image1Bytes = 3;

byte image1Data[] = {
    0b11100000,
    0b10100000,
    0b11100000,
};
";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_multi_byte_rows_stay_on_one_line() {
        let raster = raster_from_rows(&[
            "#########",
            "........#",
        ]);
        let bbox = BoundingBox::new(IntRange::new_unchecked(0, 1), IntRange::new_unchecked(0, 8));
        let packed = encode(&raster, &bbox).unwrap();

        let mut out = Vec::new();
        write_c_array(&mut out, 42, &packed).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("byte image42Width = 9;"));
        assert!(text.contains("int image42Bytes = 4;"));
        assert!(text.contains("    0b11111111, 0b10000000,\n"));
        assert!(text.contains("    0b00000000, 0b10000000,\n"));
    }
}
