mod luminance;

pub use luminance::luminance;

use std::path::Path;

use encoding_rs::{Encoding, UTF_8};
use image::RgbImage;

use crate::{
    codec::{QrCodec, SymbolCodec},
    common::{decode_text, QRResult},
    container,
};

// Reader
//------------------------------------------------------------------------------

/// Reads QR symbols from images. Holds no state; every call is independent.
pub struct QRReader;

impl QRReader {
    /// Decodes the symbol in `img` as UTF-8 text.
    pub fn read(img: &RgbImage) -> QRResult<String> {
        Self::read_with(&QrCodec, img, UTF_8)
    }

    pub fn read_with(
        codec: &dyn SymbolCodec,
        img: &RgbImage,
        enc: &'static Encoding,
    ) -> QRResult<String> {
        println!("Reading QR...");

        println!("Extracting luminance...");
        let luma = luminance(img);

        println!("Locating & decoding symbol...");
        let payload = codec.decode(&luma)?;

        println!("Decoding {} text...", enc.name());
        Ok(decode_text(&payload, enc)?)
    }

    /// Decodes an encoded image (JPEG, PNG, ...) held in memory.
    pub fn read_bytes(bytes: &[u8]) -> QRResult<String> {
        let img = container::load(bytes)?;
        Self::read(&img)
    }

    pub fn read_file<P: AsRef<Path>>(path: P) -> QRResult<String> {
        let img = container::load_file(path)?;
        Self::read(&img)
    }
}
