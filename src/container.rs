//! Image container I/O: pixel buffers to and from JPEG/PNG bytes, writers and
//! files.

use std::{
    fs::File,
    io::{BufWriter, Cursor, Write},
    path::Path,
};

use image::{
    codecs::{jpeg::JpegEncoder, png::PngEncoder},
    ExtendedColorType, ImageEncoder, ImageReader, RgbImage,
};

use crate::common::QRResult;

pub const DEFAULT_JPEG_QUALITY: u8 = 90;

// Output format
//------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Lossy, quality 1..=100.
    Jpeg(u8),
    Png,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Jpeg(DEFAULT_JPEG_QUALITY)
    }
}

// Save
//------------------------------------------------------------------------------

pub fn write_to<W: Write>(img: &RgbImage, fmt: OutputFormat, w: W) -> QRResult<()> {
    let (width, height) = img.dimensions();
    match fmt {
        OutputFormat::Jpeg(q) => JpegEncoder::new_with_quality(w, q.clamp(1, 100)).write_image(
            img.as_raw(),
            width,
            height,
            ExtendedColorType::Rgb8,
        )?,
        OutputFormat::Png => {
            PngEncoder::new(w).write_image(img.as_raw(), width, height, ExtendedColorType::Rgb8)?
        }
    }
    Ok(())
}

pub fn save(img: &RgbImage, fmt: OutputFormat) -> QRResult<Vec<u8>> {
    let mut buf = Vec::new();
    write_to(img, fmt, &mut buf)?;
    Ok(buf)
}

/// Writes `img` to `path`, creating or truncating the file.
pub fn save_file<P: AsRef<Path>>(img: &RgbImage, fmt: OutputFormat, path: P) -> QRResult<()> {
    let mut w = BufWriter::new(File::create(path)?);
    write_to(img, fmt, &mut w)?;
    w.flush()?;
    Ok(())
}

// Load
//------------------------------------------------------------------------------

/// Decodes any supported container, detected from its content, to RGB.
pub fn load(bytes: &[u8]) -> QRResult<RgbImage> {
    let img = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?.decode()?;
    Ok(img.to_rgb8())
}

pub fn load_file<P: AsRef<Path>>(path: P) -> QRResult<RgbImage> {
    let img = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    Ok(img.to_rgb8())
}
