//! Ring shapes: the positioned, colored sprite units the timeline animates.

mod factory;

pub use factory::make_shapes;

use crate::coords::Vec2;
use crate::paint::Color24;
use crate::render::{BlendMode, SpriteView};

/// One ring sprite.
///
/// Created once at setup and destroyed at teardown. `rotation` is the only
/// field that changes afterward, and only the timeline writes it. The baked
/// texture is owned here; compositing borrows it through [`Shape::view`].
#[derive(Debug)]
pub struct Shape<T> {
    /// Index in [0, num_shapes); determines color and spin phase.
    pub index: usize,
    /// Packed fill color sampled from the gradient at `index`.
    pub color: Color24,
    /// Pivot position in viewport coordinates (the board center, for all
    /// shapes — they stack at one point and differ only by phase and color).
    pub position: Vec2,
    /// Current rotation about the pivot, radians.
    pub rotation: f32,
    pub blend: BlendMode,
    /// Baked ring texture; rasterized once, never regenerated.
    pub texture: T,
}

impl<T> Shape<T> {
    /// Non-owning sprite view for the compositor.
    #[inline]
    pub fn view(&self) -> SpriteView<'_, T> {
        SpriteView {
            texture: &self.texture,
            position: self.position,
            rotation: self.rotation,
            blend: self.blend,
        }
    }
}
