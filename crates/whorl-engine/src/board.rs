//! Board layout: viewport minus margins, and fractional-to-absolute radius
//! resolution. Both run exactly once before shape construction; shapes never
//! resize afterward.

use crate::coords::{Rect, Viewport};

/// Computes the usable drawing rectangle.
///
/// `margin` is the fraction of each edge excluded on every side, so the board
/// is `(1 − 2m)` of the viewport in each axis.
pub fn board_rect(margin: f32, viewport: Viewport) -> Rect {
    let x_margin = margin * viewport.width;
    let y_margin = margin * viewport.height;
    Rect::new(
        x_margin,
        y_margin,
        viewport.width - x_margin * 2.0,
        viewport.height - y_margin * 2.0,
    )
}

/// Resolves a fractional shape radius against the smaller board dimension.
#[inline]
pub fn resolve_radius(fraction: f32, board: Rect) -> f32 {
    fraction * board.min_side()
}
