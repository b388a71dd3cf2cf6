use image::GrayImage;
use qrcode::{bits::Bits, types::QrError, Color, EcLevel, QrCode, Version};
use rqrr::{DeQRError, PreparedImage};

use super::SymbolCodec;
use crate::common::{DecodeError, ECLevel, ModuleMatrix, QRError, QRResult};

pub const MAX_VERSION: i16 = 40;

// QR codec
//------------------------------------------------------------------------------

/// QR Model 2 codec: `qrcode` builds the symbol, `rqrr` reads it back.
///
/// Payloads go into a single byte-mode segment, so the bytes produced by the
/// character set layer come back out of the decoder unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct QrCodec;

impl SymbolCodec for QrCodec {
    fn encode(&self, data: &[u8], ecl: ECLevel) -> QRResult<ModuleMatrix> {
        let code = Self::fit(data, ecl)?;
        let modules = code.to_colors().into_iter().map(|c| c == Color::Dark).collect();
        ModuleMatrix::new(code.width(), modules)
    }

    fn decode(&self, luma: &GrayImage) -> Result<Vec<u8>, DecodeError> {
        let (w, h) = luma.dimensions();
        if w == 0 || h == 0 {
            return Err(DecodeError::SymbolNotFound);
        }

        let mut img = PreparedImage::prepare_from_greyscale(w as usize, h as usize, |x, y| {
            luma.get_pixel(x as u32, y as u32)[0]
        });
        let grids = img.detect_grids();

        let mut first_err = None;
        for g in grids {
            let mut payload = Vec::new();
            match g.decode_to(&mut payload) {
                Ok(_) => return Ok(payload),
                Err(e) => {
                    first_err.get_or_insert(classify(e));
                }
            }
        }
        Err(first_err.unwrap_or(DecodeError::SymbolNotFound))
    }
}

impl QrCodec {
    // Smallest version whose data capacity at `ecl` holds the byte segment
    fn fit(data: &[u8], ecl: ECLevel) -> QRResult<QrCode> {
        let ec = EcLevel::from(ecl);
        for v in 1..=MAX_VERSION {
            let mut bits = Bits::new(Version::Normal(v));
            match push_segment(&mut bits, data, ec) {
                Ok(()) => {
                    return QrCode::with_bits(bits, ec)
                        .map_err(|e| QRError::Encoder(format!("{e:?}")))
                }
                Err(QrError::DataTooLong) => continue,
                Err(e) => return Err(QRError::Encoder(format!("{e:?}"))),
            }
        }
        Err(QRError::EncodingCapacityExceeded(ecl))
    }
}

fn push_segment(bits: &mut Bits, data: &[u8], ec: EcLevel) -> Result<(), QrError> {
    bits.push_byte_data(data)?;
    bits.push_terminator(ec)
}

fn classify(err: DeQRError) -> DecodeError {
    let msg = format!("{err:?}");
    match err {
        DeQRError::FormatEcc | DeQRError::InvalidVersion => DecodeError::FormatInvalid(msg),
        _ => DecodeError::DataCorrupted(msg),
    }
}
