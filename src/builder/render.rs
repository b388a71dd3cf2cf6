use image::RgbImage;

use super::RenderConfig;
use crate::common::{ModuleMatrix, QRError, QRResult};

// Rasterizer
//------------------------------------------------------------------------------

/// Renders `m` onto a canvas of at least `config.width x config.height` pixels.
///
/// Modules are whole-pixel squares. The module size is the largest integer that
/// fits the matrix plus `config.margin` quiet-zone modules on every side, and
/// the symbol is centered, so any leftover pixels widen the quiet zone.
///
/// Fails if the quiet zone overflows the pixel range or the canvas cannot be
/// addressed in memory.
pub fn render(m: &ModuleMatrix, config: &RenderConfig) -> QRResult<RgbImage> {
    let in_w = u32::try_from(m.width()).map_err(|_| QRError::InvalidMatrix)?;
    let qz_w = config
        .margin
        .checked_mul(2)
        .and_then(|qz| qz.checked_add(in_w))
        .ok_or(QRError::MarginTooLarge(config.margin))?;
    let out_w = config.width.max(qz_w);
    let out_h = config.height.max(qz_w);
    if out_w as u64 * out_h as u64 * 3 > isize::MAX as u64 {
        return Err(QRError::CanvasTooLarge(out_w, out_h));
    }
    let module_sz = (out_w / qz_w).min(out_h / qz_w);

    let left = (out_w - in_w * module_sz) / 2;
    let top = (out_h - in_w * module_sz) / 2;

    let mut canvas = RgbImage::from_pixel(out_w, out_h, config.light);
    for (i, &dark) in m.modules().iter().enumerate() {
        if !dark {
            continue;
        }
        let r = i as u32 / in_w;
        let c = i as u32 % in_w;
        let (x0, y0) = (left + c * module_sz, top + r * module_sz);
        for y in y0..y0 + module_sz {
            for x in x0..x0 + module_sz {
                canvas.put_pixel(x, y, config.dark);
            }
        }
    }
    Ok(canvas)
}

#[cfg(test)]
mod render_tests {
    use image::Rgb;
    use test_case::test_case;

    use super::render;
    use crate::{ModuleMatrix, QRError, RenderConfig};

    const DARK: Rgb<u8> = Rgb([0, 0, 0]);
    const LIGHT: Rgb<u8> = Rgb([255, 255, 255]);

    fn corner_matrix() -> ModuleMatrix {
        ModuleMatrix::from_fn(21, |r, c| r == 0 && c == 0).unwrap()
    }

    #[test]
    fn test_default_geometry() {
        // 21 modules + 2 * 2 margin = 25 -> 16px modules, 32px padding each side
        let img = render(&corner_matrix(), &RenderConfig::default()).unwrap();
        assert_eq!(img.dimensions(), (400, 400));
        assert_eq!(*img.get_pixel(31, 31), LIGHT);
        assert_eq!(*img.get_pixel(32, 32), DARK);
        assert_eq!(*img.get_pixel(47, 47), DARK);
        assert_eq!(*img.get_pixel(48, 32), LIGHT);
        assert_eq!(*img.get_pixel(32, 48), LIGHT);
    }

    #[test_case(0, 294)]
    #[test_case(1, 273)]
    #[test_case(2, 252)]
    #[test_case(5, 210)]
    fn test_margin_module_size(margin: u32, sym_px: u32) {
        let config = RenderConfig { width: 310, height: 310, margin, ..Default::default() };
        let img = render(&ModuleMatrix::from_fn(21, |_, _| true).unwrap(), &config).unwrap();
        assert_eq!(img.dimensions(), (310, 310));

        let dark = img.pixels().filter(|&&p| p == DARK).count() as u32;
        assert_eq!(dark, sym_px * sym_px);
        let left = (310 - sym_px) / 2;
        assert_eq!(*img.get_pixel(left - 1, 155), LIGHT);
        assert_eq!(*img.get_pixel(left, 155), DARK);
    }

    #[test]
    fn test_never_smaller_than_matrix() {
        let config = RenderConfig { width: 10, height: 10, margin: 1, ..Default::default() };
        let img = render(&corner_matrix(), &config).unwrap();
        assert_eq!(img.dimensions(), (23, 23));
        assert_eq!(*img.get_pixel(0, 0), LIGHT);
        assert_eq!(*img.get_pixel(1, 1), DARK);
    }

    #[test]
    fn test_non_square_target_centers() {
        let config = RenderConfig { width: 500, height: 250, ..Default::default() };
        let img = render(&ModuleMatrix::from_fn(21, |_, _| true).unwrap(), &config).unwrap();
        assert_eq!(img.dimensions(), (500, 250));
        // 250 / 25 = 10px modules, 210px symbol
        assert_eq!(*img.get_pixel(144, 125), LIGHT);
        assert_eq!(*img.get_pixel(145, 125), DARK);
        assert_eq!(*img.get_pixel(354, 125), DARK);
        assert_eq!(*img.get_pixel(355, 125), LIGHT);
        assert_eq!(*img.get_pixel(250, 19), LIGHT);
        assert_eq!(*img.get_pixel(250, 20), DARK);
    }

    #[test]
    fn test_custom_colors() {
        let config = RenderConfig {
            dark: Rgb([10, 20, 90]),
            light: Rgb([250, 240, 200]),
            ..Default::default()
        };
        let img = render(&corner_matrix(), &config).unwrap();
        assert_eq!(*img.get_pixel(40, 40), Rgb([10, 20, 90]));
        assert_eq!(*img.get_pixel(0, 0), Rgb([250, 240, 200]));
    }

    #[test_case(u32::MAX; "overflowing margin")]
    #[test_case(u32::MAX / 2 - 5; "margin just past the limit")]
    fn test_absurd_margin(margin: u32) {
        let config = RenderConfig { margin, ..Default::default() };
        let err = render(&corner_matrix(), &config).unwrap_err();
        assert!(matches!(err, QRError::MarginTooLarge(m) if m == margin));
    }

    #[test]
    fn test_unaddressable_canvas() {
        let config = RenderConfig { width: u32::MAX, height: u32::MAX, ..Default::default() };
        let err = render(&corner_matrix(), &config).unwrap_err();
        assert!(matches!(err, QRError::CanvasTooLarge(u32::MAX, u32::MAX)));
    }
}
