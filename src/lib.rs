//! # qrmark
//!
//! Generate QR code images, optionally with a logo composited over the center,
//! and read them back.
//!
//! ## Features
//!
//! - **Fixed pipeline**: 400x400 pixels, 2-module quiet zone, error correction
//!   level H, UTF-8 text, JPEG output
//! - **Logo overlay**: logos are shrunk to at most 20% of the symbol on each axis,
//!   centered, and framed with a rounded border so the symbol stays readable
//! - **Character sets**: any encoding `encoding_rs` can write, e.g. Shift_JIS or GBK
//! - **Pluggable codec**: the QR encoder/decoder sits behind [`SymbolCodec`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Plain symbol, then the same symbol with a logo on top
//! qrmark::create_qr_file("qr.jpg", "中文")?;
//! qrmark::create_qr_with_logo("qr_logo.jpg", "logo.png", "中文")?;
//!
//! let text = qrmark::read_qr("qr_logo.jpg")?;
//! assert_eq!(text, "中文");
//! # Ok(())
//! # }
//! ```
//!
//! ### Full Configuration
//!
//! ```rust
//! use qrmark::{ECLevel, OutputFormat, QRBuilder, QRReader};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let img = QRBuilder::new("Hello, World!")
//!     .ec_level(ECLevel::M)         // Defaults to H
//!     .size(300, 300)               // Target canvas, grown if the symbol needs more
//!     .margin(4)                    // Quiet zone in modules
//!     .encoding(encoding_rs::UTF_8) // Text encoding
//!     .format(OutputFormat::Png)    // Used by write_to / save
//!     .build()?;
//!
//! assert_eq!(QRReader::read(&img)?, "Hello, World!");
//! # Ok(())
//! # }
//! ```
//!
//! ## Decode failures
//!
//! Reading is best-effort. A [`DecodeError`] tells apart a missing symbol from
//! one that was found but could not be read; expect the latter for some share
//! of logo-overlaid or photographed images.

pub mod builder;
pub mod codec;
pub(crate) mod common;
pub mod container;
pub mod overlay;
pub mod reader;

pub use builder::{QRBuilder, RenderConfig};
pub use codec::{QrCodec, SymbolCodec};
pub use common::{
    decode_text, encode_text, encoding_for_label, DecodeError, ECLevel, ModuleMatrix, QRError,
    QRResult,
};
pub use container::OutputFormat;
pub use overlay::{LogoOverlay, OverlayGeometry};
pub use reader::QRReader;

use std::{
    io::Write,
    path::{Path, PathBuf},
};

// Pipeline
//------------------------------------------------------------------------------

/// Writes a 400x400 JPEG symbol for `content` into `w` and hands `w` back.
pub fn create_qr<W: Write>(mut w: W, content: &str) -> QRResult<W> {
    QRBuilder::new(content).write_to(&mut w)?;
    Ok(w)
}

/// Saves a 400x400 JPEG symbol for `content` at `path`.
pub fn create_qr_file<P: AsRef<Path>>(path: P, content: &str) -> QRResult<PathBuf> {
    QRBuilder::new(content).save(path)
}

/// Saves a symbol for `content` at `path`, then overlays the logo at
/// `logo_path` onto it in place.
pub fn create_qr_with_logo<P: AsRef<Path>, L: AsRef<Path>>(
    path: P,
    logo_path: L,
    content: &str,
) -> QRResult<PathBuf> {
    let path = create_qr_file(path, content)?;
    add_logo(&path, &path, logo_path)
}

/// Reads the QR image at `qr_path`, composites the logo at `logo_path` onto it
/// and saves the result as JPEG at `out_path`, which may equal `qr_path`.
///
/// The symbol must have been encoded at level H to stay readable.
pub fn add_logo<O: AsRef<Path>, Q: AsRef<Path>, L: AsRef<Path>>(
    out_path: O,
    qr_path: Q,
    logo_path: L,
) -> QRResult<PathBuf> {
    println!("Adding logo to {}...", qr_path.as_ref().display());
    let logo = container::load_file(logo_path)?;
    let qr = container::load_file(qr_path)?;

    let img = LogoOverlay::new().apply(&qr, &logo);
    container::save_file(&img, OutputFormat::default(), &out_path)?;
    Ok(out_path.as_ref().to_path_buf())
}

/// Decodes the QR image at `path` as UTF-8 text.
pub fn read_qr<P: AsRef<Path>>(path: P) -> QRResult<String> {
    QRReader::read_file(path)
}
