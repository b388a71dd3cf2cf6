use encoding_rs::Encoding;

use super::error::{DecodeError, QRError, QRResult};

// Character set
//------------------------------------------------------------------------------

// UTF-16 variants and "replacement" only decode; both directions use the
// encoding that `encoding_rs` actually writes.

/// Encodes text to the byte payload stored in the symbol.
pub fn encode_text(text: &str, enc: &'static Encoding) -> QRResult<Vec<u8>> {
    let enc = enc.output_encoding();
    let (bytes, _, unmappable) = enc.encode(text);
    if unmappable {
        return Err(QRError::UnmappableText(enc.name()));
    }
    Ok(bytes.into_owned())
}

/// Decodes a symbol payload back to text. Malformed input fails instead of
/// being patched with replacement characters.
pub fn decode_text(bytes: &[u8], enc: &'static Encoding) -> Result<String, DecodeError> {
    let enc = enc.output_encoding();
    enc.decode_without_bom_handling_and_without_replacement(bytes)
        .map(|s| s.into_owned())
        .ok_or(DecodeError::InvalidText(enc.name()))
}

/// Looks up an encoding by WHATWG label, e.g. "utf8", "shift_jis", "gbk".
pub fn encoding_for_label(label: &str) -> Option<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
}
