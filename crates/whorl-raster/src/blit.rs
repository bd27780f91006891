//! Rotated sprite compositing.

use whorl_engine::coords::Vec2;
use whorl_engine::render::BlendMode;

use crate::bitmap::Bitmap;

/// Composites `bitmap` into the frame, rotated about its own center and
/// positioned with that center at `position`.
///
/// Nearest-neighbor sampling: each destination pixel inside the rotated
/// bounds is inverse-mapped into texture space. The frame stays opaque.
pub(crate) fn blit_rotated(
    frame: &mut [u8],
    frame_w: u32,
    frame_h: u32,
    bitmap: &Bitmap,
    position: Vec2,
    rotation: f32,
    blend: BlendMode,
) {
    let size = bitmap.size();
    if size == 0 {
        return;
    }
    let half = size as f32 / 2.0;

    // Conservative destination bounds: the rotated square fits in a circle of
    // radius half·√2.
    let reach = half * std::f32::consts::SQRT_2 + 1.0;
    let x_min = ((position.x - reach).floor().max(0.0)) as u32;
    let y_min = ((position.y - reach).floor().max(0.0)) as u32;
    let x_max = ((position.x + reach).ceil() as u32).min(frame_w);
    let y_max = ((position.y + reach).ceil() as u32).min(frame_h);

    let (sin, cos) = rotation.sin_cos();

    for y in y_min..y_max {
        for x in x_min..x_max {
            let dx = x as f32 + 0.5 - position.x;
            let dy = y as f32 + 0.5 - position.y;

            // Inverse rotation back into texture space.
            let sx = cos * dx + sin * dy + half;
            let sy = -sin * dx + cos * dy + half;
            if sx < 0.0 || sy < 0.0 {
                continue;
            }
            let (tx, ty) = (sx as u32, sy as u32);
            if tx >= size || ty >= size {
                continue;
            }

            let src = bitmap.pixel(tx, ty);
            if src[3] == 0 {
                continue;
            }

            let i = ((y * frame_w + x) * 4) as usize;
            let dst = &mut frame[i..i + 4];
            let sa = src[3] as f32 / 255.0;

            match blend {
                BlendMode::Normal => {
                    for c in 0..3 {
                        let v = src[c] as f32 * sa + dst[c] as f32 * (1.0 - sa);
                        dst[c] = v.round().clamp(0.0, 255.0) as u8;
                    }
                }
                BlendMode::Add => {
                    for c in 0..3 {
                        let v = dst[c] as f32 + src[c] as f32 * sa;
                        dst[c] = v.min(255.0) as u8;
                    }
                }
            }
            dst[3] = 255;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use whorl_engine::paint::Color24;

    use super::*;
    use crate::fill::fill_polygon;

    fn left_half_texture(color: Color24) -> Bitmap {
        let mut bmp = Bitmap::new(8);
        let pts = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 0.0),
            Vec2::new(4.0, 8.0),
            Vec2::new(0.0, 8.0),
        ];
        fill_polygon(&mut bmp, &pts, color, 1.0);
        bmp
    }

    fn black_frame(w: u32, h: u32) -> Vec<u8> {
        let mut f = vec![0u8; (w * h * 4) as usize];
        for px in f.chunks_exact_mut(4) {
            px[3] = 255;
        }
        f
    }

    fn px(frame: &[u8], w: u32, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * w + x) * 4) as usize;
        [frame[i], frame[i + 1], frame[i + 2], frame[i + 3]]
    }

    #[test]
    fn unrotated_blit_lands_left_of_the_pivot() {
        let tex = left_half_texture(Color24(0x00FF00));
        let mut frame = black_frame(16, 16);
        blit_rotated(&mut frame, 16, 16, &tex, Vec2::new(8.0, 8.0), 0.0, BlendMode::Normal);

        assert_eq!(px(&frame, 16, 5, 8), [0, 255, 0, 255]);
        assert_eq!(px(&frame, 16, 10, 8), [0, 0, 0, 255]);
    }

    #[test]
    fn half_turn_mirrors_the_texture_about_the_pivot() {
        let tex = left_half_texture(Color24(0x00FF00));
        let mut frame = black_frame(16, 16);
        blit_rotated(&mut frame, 16, 16, &tex, Vec2::new(8.0, 8.0), PI, BlendMode::Normal);

        assert_eq!(px(&frame, 16, 10, 8), [0, 255, 0, 255]);
        assert_eq!(px(&frame, 16, 5, 8), [0, 0, 0, 255]);
    }

    #[test]
    fn additive_blend_saturates_at_white() {
        let tex = left_half_texture(Color24(0xC0C0C0));
        let mut frame = black_frame(16, 16);
        for _ in 0..2 {
            blit_rotated(&mut frame, 16, 16, &tex, Vec2::new(8.0, 8.0), 0.0, BlendMode::Add);
        }

        // 0xC0 + 0xC0 clamps to 255 on every summed channel.
        assert_eq!(px(&frame, 16, 5, 8), [255, 255, 255, 255]);
    }

    #[test]
    fn blit_clips_at_frame_edges_without_panicking() {
        let tex = left_half_texture(Color24(0xFF0000));
        let mut frame = black_frame(8, 8);
        blit_rotated(&mut frame, 8, 8, &tex, Vec2::new(0.0, 0.0), 0.3, BlendMode::Normal);
        blit_rotated(&mut frame, 8, 8, &tex, Vec2::new(8.0, 8.0), -1.2, BlendMode::Add);
    }

    #[test]
    fn transparent_texels_leave_the_frame_untouched() {
        let tex = Bitmap::new(8);
        let mut frame = black_frame(8, 8);
        let before = frame.clone();
        blit_rotated(&mut frame, 8, 8, &tex, Vec2::new(4.0, 4.0), 0.7, BlendMode::Normal);
        assert_eq!(frame, before);
    }
}
