use image::{Rgb, RgbImage};
use imageproc::{drawing::draw_filled_rect_mut, rect::Rect};

use super::OverlayGeometry;

// Rounded border
//------------------------------------------------------------------------------

/// Corner radius relative to the shorter side of the framed region.
pub const CORNER_RADIUS_RATIO: f32 = 0.15;

/// Strokes a rounded rectangle along the inside edge of `g`.
///
/// Pixels never leave the region, so the symbol outside the overlay stays
/// intact and the damaged area remains one contiguous rectangle.
pub fn draw_rounded_border(img: &mut RgbImage, g: &OverlayGeometry, stroke: u32, color: Rgb<u8>) {
    let short = g.width.min(g.height);
    if short == 0 || stroke == 0 {
        return;
    }
    let stroke = stroke.min(short.div_ceil(2));
    let r = ((short as f32 * CORNER_RADIUS_RATIO).round() as u32).min(short / 2);

    // Straight edges between the corner arcs
    let (x, y, w, h) = (g.x, g.y, g.width, g.height);
    if w > 2 * r {
        let len = w - 2 * r;
        draw_strip(img, x + r, y, len, stroke, color);
        draw_strip(img, x + r, y + h - stroke, len, stroke, color);
    }
    if h > 2 * r {
        let len = h - 2 * r;
        draw_strip(img, x, y + r, stroke, len, color);
        draw_strip(img, x + w - stroke, y + r, stroke, len, color);
    }
    if r == 0 {
        return;
    }

    // Quarter arcs, each inside an r x r box with the arc center at the
    // box corner facing the region's center
    let corners = [
        (x, y, x + r, y + r),
        (x + w - r, y, x + w - r, y + r),
        (x, y + h - r, x + r, y + h - r),
        (x + w - r, y + h - r, x + w - r, y + h - r),
    ];
    let (outer, inner) = (r as f32, r as f32 - stroke as f32);
    for (bx, by, cx, cy) in corners {
        for py in by..by + r {
            for px in bx..bx + r {
                let dx = px as f32 + 0.5 - cx as f32;
                let dy = py as f32 + 0.5 - cy as f32;
                let d = (dx * dx + dy * dy).sqrt();
                if d <= outer && d >= inner {
                    img.put_pixel(px, py, color);
                }
            }
        }
    }
}

fn draw_strip(img: &mut RgbImage, x: u32, y: u32, w: u32, h: u32, color: Rgb<u8>) {
    if w == 0 || h == 0 {
        return;
    }
    draw_filled_rect_mut(img, Rect::at(x as i32, y as i32).of_size(w, h), color);
}
