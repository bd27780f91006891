use crate::config::Config;
use crate::coords::{Rect, Vec2};
use crate::geometry::regular_polygon;
use crate::paint::{Color24, ColorScale};
use crate::render::{FillList, Renderer};

use super::Shape;

/// Builds all ring shapes for the board.
///
/// `radius_px` is the absolute outer radius, already resolved by
/// [`crate::board::resolve_radius`]. Each shape is baked into its own
/// texture exactly once here; the per-frame path only rotates and
/// composites.
pub fn make_shapes<R, S>(
    config: &Config,
    board: Rect,
    radius_px: f32,
    scale: &S,
    renderer: &mut R,
) -> Vec<Shape<R::Texture>>
where
    R: Renderer,
    S: ColorScale + ?Sized,
{
    let center = board.center();
    let size = (radius_px * 2.0).ceil() as u32;

    let shapes: Vec<_> = (0..config.num_shapes)
        .map(|i| {
            let color = Color24::pack(scale.sample(gradient_pos(i, config.num_shapes)));
            let texture = renderer.rasterize(&ring_fills(config, radius_px, color), size);

            Shape {
                index: i,
                color,
                position: center,
                rotation: 0.0,
                blend: config.blend_mode,
                texture,
            }
        })
        .collect();

    log::debug!(
        "baked {} ring textures ({}x{} px, {} sides)",
        shapes.len(),
        size,
        size,
        config.n_sides
    );

    shapes
}

/// Gradient position for shape `i` of `n`: evenly spread over [0, 1].
///
/// A single shape samples t = 0 rather than dividing by zero.
#[inline]
fn gradient_pos(i: usize, n: usize) -> f32 {
    if n <= 1 {
        0.0
    } else {
        i as f32 / (n - 1) as f32
    }
}

/// Records the two fills that form a ring silhouette.
///
/// The outer polygon is filled with the shape color at the configured alpha;
/// a smaller concentric polygon in the background color at full opacity then
/// erases the middle. Both are centered at (r, r), the pivot of the square
/// texture.
fn ring_fills(config: &Config, radius_px: f32, color: Color24) -> FillList {
    let local_center = Vec2::new(radius_px, radius_px);

    let mut fills = FillList::new();
    fills.push_polygon(
        regular_polygon(config.n_sides, local_center, radius_px),
        color,
        config.shape_alpha,
    );
    fills.push_polygon(
        regular_polygon(config.n_sides, local_center, radius_px * config.hole_percent),
        config.background,
        1.0,
    );
    fills
}
