use thiserror::Error;

use super::metadata::ECLevel;

// Error
//------------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum QRError {
    // Encoding
    #[error("Empty data")]
    EmptyData,
    #[error("Data too long for any symbol version at ec level {0}")]
    EncodingCapacityExceeded(ECLevel),
    #[error("Text contains characters that cannot be represented in {0}")]
    UnmappableText(&'static str),
    #[error("Invalid module matrix")]
    InvalidMatrix,
    #[error("Quiet zone of {0} modules does not fit a canvas")]
    MarginTooLarge(u32),
    #[error("Canvas of {0}x{1} pixels is too large")]
    CanvasTooLarge(u32, u32),
    #[error("Symbol encoder failure: {0}")]
    Encoder(String),

    // Decoding
    #[error("Decode failed: {0}")]
    Decode(#[from] DecodeError),

    // Collaborators
    #[error(transparent)]
    Image(#[from] image::ImageError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl QRError {
    /// Returns the decode failure, if this error is one.
    pub fn as_decode(&self) -> Option<&DecodeError> {
        match self {
            Self::Decode(e) => Some(e),
            _ => None,
        }
    }
}

pub type QRResult<T> = Result<T, QRError>;

// Decode error
//------------------------------------------------------------------------------

/// Reasons a symbol could not be read. Decoding is best-effort, so callers
/// should expect these for heavily damaged, overlaid or photographed images.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Symbol not found")]
    SymbolNotFound,
    #[error("Invalid format info: {0}")]
    FormatInvalid(String),
    #[error("Too many errors to correct successfully: {0}")]
    DataCorrupted(String),
    #[error("Decoded data is not valid {0}")]
    InvalidText(&'static str),
}

impl DecodeError {
    /// True when a symbol was located but could not be read.
    pub fn symbol_present(&self) -> bool {
        !matches!(self, Self::SymbolNotFound)
    }
}
