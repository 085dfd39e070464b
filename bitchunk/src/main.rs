//! Command-line entry point.
//!
//! Reads one image, segments it, and writes `N.png` and `N.c` into the
//! current directory for each extracted region, numbered from 1.

use std::env;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::process::ExitCode;

use bitchunk_core::{encode, segment};
use bitchunk_io::{IoResult, read_image, write_c_array, write_packed_png};

const HELP: &str = "\
Usage: bitchunk <image>

Splits a black/white image into disjoint glyph regions and writes, for
each region N (numbered from 1 in scan order):

  N.png   the region as a 1-bit PNG
  N.c     C definitions: byte imageNWidth, byte imageNHeight,
          int imageNBytes, and byte imageNData[] holding the region
          packed MSB-first, one bit per pixel, rows padded to a byte

Input may be PNG, JPEG, or GIF; the format is detected from the file
contents, not the extension. Pixels that are transparent or brighter
than mid-gray count as background, everything else as ink.

Options:
  -h, --help    print this help
";

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    match args.as_slice() {
        [arg] if arg == "-h" || arg == "--help" => {
            print!("{}", HELP);
            ExitCode::SUCCESS
        }
        [path] => match run(Path::new(path)) {
            Ok(count) => {
                println!("{} images extracted.", count);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("bitchunk: {}", e);
                ExitCode::FAILURE
            }
        },
        _ => {
            eprint!("{}", HELP);
            ExitCode::FAILURE
        }
    }
}

fn run(path: &Path) -> IoResult<u32> {
    let raster = read_image(path)?;
    log::info!(
        "loaded {}x{} image from {}",
        raster.width(),
        raster.height(),
        path.display()
    );

    let segments = segment(&raster);
    for seg in &segments {
        let packed = encode(&raster, &seg.bbox)?;

        let png_name = format!("{}.png", seg.number);
        write_packed_png(&packed, BufWriter::new(File::create(&png_name)?))?;

        let c_name = format!("{}.c", seg.number);
        write_c_array(BufWriter::new(File::create(&c_name)?), seg.number, &packed)?;

        log::info!(
            "wrote {} and {} ({}x{}, {} bytes)",
            png_name,
            c_name,
            packed.width(),
            packed.height(),
            packed.total_bytes()
        );
    }
    Ok(segments.len() as u32)
}
