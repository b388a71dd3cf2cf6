mod render;

pub use render::render;

use std::{
    io::Write,
    path::{Path, PathBuf},
};

use encoding_rs::{Encoding, UTF_8};
use image::{Rgb, RgbImage};

use crate::{
    codec::{QrCodec, SymbolCodec},
    common::{encode_text, ECLevel, ModuleMatrix, QRError, QRResult},
    container::{self, OutputFormat},
    overlay::LogoOverlay,
};

pub const DEFAULT_SIZE: u32 = 400;
pub const DEFAULT_MARGIN: u32 = 2;

// Render config
//------------------------------------------------------------------------------

/// Canvas and text settings for one symbol image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Target canvas width in pixels, grown if the symbol needs more.
    pub width: u32,
    pub height: u32,
    /// Quiet zone, in modules, on every side.
    pub margin: u32,
    pub encoding: &'static Encoding,
    pub dark: Rgb<u8>,
    pub light: Rgb<u8>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            margin: DEFAULT_MARGIN,
            encoding: UTF_8,
            dark: Rgb([0, 0, 0]),
            light: Rgb([255, 255, 255]),
        }
    }
}

// Builder
//------------------------------------------------------------------------------

pub struct QRBuilder<'a> {
    data: &'a str,
    ecl: ECLevel,
    config: RenderConfig,
    format: OutputFormat,
    overlay: LogoOverlay,
    codec: &'a dyn SymbolCodec,
}

impl<'a> QRBuilder<'a> {
    /// Starts a symbol for `data` with the default pipeline: level H, 400x400,
    /// 2-module margin, UTF-8, JPEG output.
    pub fn new(data: &'a str) -> Self {
        Self {
            data,
            ecl: ECLevel::H,
            config: RenderConfig::default(),
            format: OutputFormat::default(),
            overlay: LogoOverlay::default(),
            codec: &QrCodec,
        }
    }

    pub fn data(&mut self, data: &'a str) -> &mut Self {
        self.data = data;
        self
    }

    /// Level used by plain builds. Logo builds always use H.
    pub fn ec_level(&mut self, ecl: ECLevel) -> &mut Self {
        self.ecl = ecl;
        self
    }

    pub fn size(&mut self, width: u32, height: u32) -> &mut Self {
        self.config.width = width;
        self.config.height = height;
        self
    }

    pub fn margin(&mut self, margin: u32) -> &mut Self {
        self.config.margin = margin;
        self
    }

    pub fn encoding(&mut self, enc: &'static Encoding) -> &mut Self {
        self.config.encoding = enc;
        self
    }

    pub fn colors(&mut self, dark: Rgb<u8>, light: Rgb<u8>) -> &mut Self {
        self.config.dark = dark;
        self.config.light = light;
        self
    }

    pub fn config(&mut self, config: RenderConfig) -> &mut Self {
        self.config = config;
        self
    }

    pub fn format(&mut self, format: OutputFormat) -> &mut Self {
        self.format = format;
        self
    }

    pub fn overlay(&mut self, overlay: LogoOverlay) -> &mut Self {
        self.overlay = overlay;
        self
    }

    pub fn codec(&mut self, codec: &'a dyn SymbolCodec) -> &mut Self {
        self.codec = codec;
        self
    }

    pub fn metadata(&self) -> String {
        let c = &self.config;
        format!(
            "{{ Ec level: {}, Size: {}x{}, Margin: {}, Encoding: {}, Format: {:?} }}",
            self.ecl,
            c.width,
            c.height,
            c.margin,
            c.encoding.name(),
            self.format
        )
    }
}


impl QRBuilder<'_> {
    /// Encodes the text into a module matrix at the configured level.
    pub fn matrix(&self) -> QRResult<ModuleMatrix> {
        self.matrix_at(self.ecl)
    }

    fn matrix_at(&self, ecl: ECLevel) -> QRResult<ModuleMatrix> {
        if self.data.is_empty() {
            return Err(QRError::EmptyData);
        }

        println!("\nGenerating QR {}...", self.metadata());
        println!("Encoding {} text...", self.config.encoding.name());
        let payload = encode_text(self.data, self.config.encoding)?;

        println!("Encoding symbol...");
        let m = self.codec.encode(&payload, ecl)?;

        let total = m.width() * m.width();
        let dark = m.count_dark_modules();
        println!(
            "Width: {} modules, Payload: {} bytes, Dark Cells: {}, Balance: {}%",
            m.width(),
            payload.len(),
            dark,
            dark * 100 / total
        );
        Ok(m)
    }

    pub fn build(&self) -> QRResult<RgbImage> {
        let m = self.matrix()?;
        println!("Rendering symbol...");
        render(&m, &self.config)
    }

    /// Builds at level H and composites `logo` over the symbol's center.
    pub fn build_with_logo(&self, logo: &RgbImage) -> QRResult<RgbImage> {
        if self.ecl != ECLevel::H {
            println!("Logo requested, raising ec level from {} to H...", self.ecl);
        }
        let m = self.matrix_at(ECLevel::H)?;

        println!("Rendering symbol...");
        let img = render(&m, &self.config)?;

        println!("Compositing logo...");
        Ok(self.overlay.apply(&img, logo))
    }

    /// Renders and encodes the image into `w` in the configured format.
    pub fn write_to<W: Write>(&self, w: W) -> QRResult<()> {
        let img = self.build()?;
        container::write_to(&img, self.format, w)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> QRResult<PathBuf> {
        let img = self.build()?;
        container::save_file(&img, self.format, &path)?;
        println!("\x1b[1;32mQR saved to {}\x1b[0m", path.as_ref().display());
        Ok(path.as_ref().to_path_buf())
    }

    /// Saves a logo build. The logo is read before anything is written, so
    /// `path` may be the same file as `logo_path`.
    pub fn save_with_logo<P: AsRef<Path>, L: AsRef<Path>>(
        &self,
        path: P,
        logo_path: L,
    ) -> QRResult<PathBuf> {
        let logo = container::load_file(logo_path)?;
        let img = self.build_with_logo(&logo)?;
        container::save_file(&img, self.format, &path)?;
        println!("\x1b[1;32mQR saved to {}\x1b[0m", path.as_ref().display());
        Ok(path.as_ref().to_path_buf())
    }
}
