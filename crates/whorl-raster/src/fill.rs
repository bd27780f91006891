//! Scanline polygon fill.

use whorl_engine::coords::Vec2;
use whorl_engine::paint::Color24;

use crate::bitmap::Bitmap;

/// Fills `points` into the bitmap with source-over blending.
///
/// Even-odd rule against pixel centers; convex ring polygons never have more
/// than one span per row, but the rule holds for any simple polygon.
pub(crate) fn fill_polygon(bitmap: &mut Bitmap, points: &[Vec2], color: Color24, alpha: f32) {
    if points.len() < 3 {
        return;
    }
    let alpha = alpha.clamp(0.0, 1.0);
    if alpha == 0.0 {
        return;
    }

    let size = bitmap.size();
    let src = [color.r() as f32, color.g() as f32, color.b() as f32];
    let mut crossings: Vec<f32> = Vec::new();

    for y in 0..size {
        let yc = y as f32 + 0.5;

        crossings.clear();
        for i in 0..points.len() {
            let a = points[i];
            let b = points[(i + 1) % points.len()];
            // Half-open vertical span so shared vertices count once.
            if (a.y <= yc) != (b.y <= yc) {
                let t = (yc - a.y) / (b.y - a.y);
                crossings.push(a.x + t * (b.x - a.x));
            }
        }
        crossings.sort_by(f32::total_cmp);

        for span in crossings.chunks_exact(2) {
            let x0 = span[0].max(0.0);
            let x1 = span[1].min(size as f32);
            // Pixels whose center falls inside [x0, x1).
            let mut x = x0.floor() as u32;
            while x < size && (x as f32 + 0.5) < x1 {
                if (x as f32 + 0.5) >= x0 {
                    let dst = bitmap.pixel(x, y);
                    bitmap.set_pixel(x, y, over(src, alpha, dst));
                }
                x += 1;
            }
        }
    }
}

/// Source-over for straight-alpha pixels.
fn over(src: [f32; 3], sa: f32, dst: [u8; 4]) -> [u8; 4] {
    let da = dst[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return [0, 0, 0, 0];
    }

    let mut out = [0u8; 4];
    for c in 0..3 {
        let dc = dst[c] as f32;
        let v = (src[c] * sa + dc * da * (1.0 - sa)) / out_a;
        out[c] = v.round().clamp(0.0, 255.0) as u8;
    }
    out[3] = (out_a * 255.0).round() as u8;
    out
}
