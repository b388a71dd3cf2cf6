//! Symbol encoder/decoder seam.
//!
//! Everything above this module works on [`ModuleMatrix`] and luminance
//! grids, so the QR implementation behind [`SymbolCodec`] can be replaced
//! without touching rendering or logo compositing.

mod qr;

pub use qr::QrCodec;

use image::GrayImage;

use crate::common::{DecodeError, ECLevel, ModuleMatrix, QRResult};

pub trait SymbolCodec: Send + Sync {
    /// Encodes `data` into the smallest symbol that holds it at `ecl`.
    ///
    /// Fails with [`QRError::EncodingCapacityExceeded`](crate::QRError) when no
    /// supported version is large enough.
    fn encode(&self, data: &[u8], ecl: ECLevel) -> QRResult<ModuleMatrix>;

    /// Locates a symbol in `luma` and returns its raw payload.
    fn decode(&self, luma: &GrayImage) -> Result<Vec<u8>, DecodeError>;
}
