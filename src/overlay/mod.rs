//! Logo compositing.
//!
//! A logo hides every module it covers. Readers recover them through error
//! correction, so the logo is kept to a fifth of the symbol on each axis and
//! the symbol must be encoded at [`ECLevel::H`](crate::ECLevel::H).

mod border;

pub use border::{draw_rounded_border, CORNER_RADIUS_RATIO};

use image::{
    imageops::{self, FilterType},
    Rgb, RgbImage,
};

/// Largest logo side as a fraction of the symbol side, `NUM / DEN`.
pub const MAX_LOGO_NUM: u32 = 2;
pub const MAX_LOGO_DEN: u32 = 10;

pub const DEFAULT_STROKE: u32 = 2;

// Geometry
//------------------------------------------------------------------------------

/// Placement of a logo inside a symbol image, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayGeometry {
    pub width: u32,
    pub height: u32,
    pub x: u32,
    pub y: u32,
}

impl OverlayGeometry {
    /// Fits a `logo`-sized image into the center of a `symbol`-sized image.
    ///
    /// Logos above the bound are shrunk uniformly until the binding axis meets
    /// it. Smaller logos keep their size. Returns `None` if the symbol is too
    /// small to hold any logo.
    pub fn compute(symbol: (u32, u32), logo: (u32, u32)) -> Option<Self> {
        let (sw, sh) = symbol;
        let (lw, lh) = logo;
        let max_w = sw * MAX_LOGO_NUM / MAX_LOGO_DEN;
        let max_h = sh * MAX_LOGO_NUM / MAX_LOGO_DEN;
        if max_w == 0 || max_h == 0 || lw == 0 || lh == 0 {
            return None;
        }

        let (width, height) = if lw <= max_w && lh <= max_h {
            (lw, lh)
        } else if lw as u64 * max_h as u64 >= lh as u64 * max_w as u64 {
            let h = lh as u64 * max_w as u64 / lw as u64;
            (max_w, (h as u32).max(1))
        } else {
            let w = lw as u64 * max_h as u64 / lh as u64;
            ((w as u32).max(1), max_h)
        };

        Some(Self { width, height, x: (sw - width) / 2, y: (sh - height) / 2 })
    }
}

// Compositor
//------------------------------------------------------------------------------

/// Places a logo over the center of a rendered symbol and frames it with a
/// rounded border.
#[derive(Debug, Clone, Copy)]
pub struct LogoOverlay {
    stroke: u32,
    border_color: Rgb<u8>,
    filter: FilterType,
}

impl Default for LogoOverlay {
    fn default() -> Self {
        Self { stroke: DEFAULT_STROKE, border_color: Rgb([255, 255, 255]), filter: FilterType::Triangle }
    }
}

impl LogoOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Border width in pixels. Zero disables the border.
    pub fn stroke(&mut self, stroke: u32) -> &mut Self {
        self.stroke = stroke;
        self
    }

    pub fn border_color(&mut self, color: Rgb<u8>) -> &mut Self {
        self.border_color = color;
        self
    }

    pub fn filter(&mut self, filter: FilterType) -> &mut Self {
        self.filter = filter;
        self
    }

    /// Returns a copy of `symbol` with `logo` composited at its center.
    ///
    /// The logo overwrites the symbol opaquely. Oversized logos are shrunk, never
    /// rejected. Both inputs are left untouched.
    pub fn apply(&self, symbol: &RgbImage, logo: &RgbImage) -> RgbImage {
        let mut out = symbol.clone();
        let Some(g) = OverlayGeometry::compute(symbol.dimensions(), logo.dimensions()) else {
            println!("Symbol too small for a logo, skipping overlay...");
            return out;
        };

        println!("Placing {}x{} logo at ({}, {})...", g.width, g.height, g.x, g.y);
        if logo.dimensions() == (g.width, g.height) {
            imageops::replace(&mut out, logo, g.x as i64, g.y as i64);
        } else {
            let resized = imageops::resize(logo, g.width, g.height, self.filter);
            imageops::replace(&mut out, &resized, g.x as i64, g.y as i64);
        }

        draw_rounded_border(&mut out, &g, self.stroke, self.border_color);
        out
    }
}

#[cfg(test)]
mod overlay_tests {
    use image::{Rgb, RgbImage};
    use test_case::test_case;

    use super::{LogoOverlay, OverlayGeometry};

    const RED: Rgb<u8> = Rgb([255, 0, 0]);
    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

    #[test_case((400, 400), (50, 50), (50, 50); "small logo keeps size")]
    #[test_case((400, 400), (80, 80), (80, 80); "logo at bound")]
    #[test_case((400, 400), (400, 400), (80, 80); "square downscale")]
    #[test_case((400, 400), (300, 40), (80, 10); "wide logo")]
    #[test_case((400, 400), (40, 300), (10, 80); "tall logo")]
    #[test_case((400, 400), (100, 60), (80, 48); "one axis over bound")]
    #[test_case((500, 250), (200, 200), (50, 50); "non square symbol")]
    #[test_case((400, 400), (5000, 1), (80, 1); "degenerate strip")]
    fn test_geometry_size(symbol: (u32, u32), logo: (u32, u32), exp: (u32, u32)) {
        let g = OverlayGeometry::compute(symbol, logo).unwrap();
        assert_eq!((g.width, g.height), exp);
        assert!(g.width * 10 <= symbol.0 * 2 && g.height * 10 <= symbol.1 * 2);
    }

    #[test_case((400, 400), (80, 80))]
    #[test_case((401, 399), (33, 17))]
    #[test_case((348, 348), (1000, 999))]
    #[test_case((25, 25), (3, 3))]
    fn test_geometry_centered(symbol: (u32, u32), logo: (u32, u32)) {
        let g = OverlayGeometry::compute(symbol, logo).unwrap();
        let cx = 2 * g.x + g.width;
        let cy = 2 * g.y + g.height;
        assert!(cx.abs_diff(symbol.0) <= 2, "x center off: {g:?}");
        assert!(cy.abs_diff(symbol.1) <= 2, "y center off: {g:?}");
    }

    #[test]
    fn test_geometry_default_pipeline() {
        let g = OverlayGeometry::compute((400, 400), (120, 120)).unwrap();
        assert_eq!(g, OverlayGeometry { width: 80, height: 80, x: 160, y: 160 });
    }

    #[test]
    fn test_geometry_too_small() {
        assert_eq!(OverlayGeometry::compute((4, 4), (2, 2)), None);
        assert_eq!(OverlayGeometry::compute((400, 400), (0, 10)), None);
    }

    #[test]
    fn test_apply_overwrites_center_only() {
        let symbol = RgbImage::from_pixel(400, 400, BLACK);
        let logo = RgbImage::from_pixel(80, 80, RED);
        let out = LogoOverlay::new().apply(&symbol, &logo);

        assert_eq!(out.dimensions(), (400, 400));
        assert_eq!(*out.get_pixel(200, 200), RED);
        // Border on the logo's inside edge
        assert_eq!(*out.get_pixel(200, 160), WHITE);
        assert_eq!(*out.get_pixel(200, 161), WHITE);
        assert_eq!(*out.get_pixel(200, 162), RED);
        for (x, y, p) in out.enumerate_pixels() {
            if !((160..240).contains(&x) && (160..240).contains(&y)) {
                assert_eq!(*p, BLACK, "Pixel ({x}, {y}) outside logo changed");
            }
        }
        // Input untouched
        assert!(symbol.pixels().all(|&p| p == BLACK));
    }

    #[test]
    fn test_apply_clamps_oversized() {
        let symbol = RgbImage::from_pixel(400, 400, BLACK);
        let logo = RgbImage::from_pixel(1000, 500, RED);
        let out = LogoOverlay::new().apply(&symbol, &logo);

        let red: Vec<(u32, u32)> =
            out.enumerate_pixels().filter(|(_, _, &p)| p == RED).map(|(x, y, _)| (x, y)).collect();
        assert!(!red.is_empty());
        assert!(red.iter().all(|&(x, y)| (160..240).contains(&x) && (180..220).contains(&y)));
    }

    #[test]
    fn test_apply_without_border() {
        let symbol = RgbImage::from_pixel(100, 100, BLACK);
        let logo = RgbImage::from_pixel(20, 20, RED);
        let out = LogoOverlay::new().stroke(0).apply(&symbol, &logo);
        assert_eq!(out.pixels().filter(|&&p| p == RED).count(), 400);
    }

    #[test]
    fn test_apply_border_color() {
        let symbol = RgbImage::from_pixel(100, 100, BLACK);
        let logo = RgbImage::from_pixel(20, 20, RED);
        let blue = Rgb([0, 0, 255]);
        let out = LogoOverlay::new().border_color(blue).apply(&symbol, &logo);
        assert_eq!(*out.get_pixel(50, 40), blue);
    }

    #[test]
    fn test_apply_tiny_symbol_is_noop() {
        let symbol = RgbImage::from_pixel(4, 4, BLACK);
        let logo = RgbImage::from_pixel(10, 10, RED);
        assert_eq!(LogoOverlay::new().apply(&symbol, &logo), symbol);
    }
}
