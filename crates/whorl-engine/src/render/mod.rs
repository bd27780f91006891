//! Renderer capability surface.
//!
//! Responsibilities:
//! - record renderer-agnostic polygon fills ([`FillList`])
//! - define the opaque rasterize/composite contract ([`Renderer`])
//! - define the frame-buffer view handed to capture sinks ([`Frame`])
//!
//! The engine never rasterizes anything itself; it accumulates fills, asks
//! the renderer to bake them into textures once, and per tick asks it to
//! composite non-owning sprite views into a frame.

use crate::coords::{Vec2, Viewport};
use crate::paint::Color24;

/// Sprite compositing mode.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum BlendMode {
    /// Source-over alpha blending.
    #[default]
    Normal,
    /// Additive: channel sums, saturating at white.
    Add,
}

/// A single recorded polygon fill.
#[derive(Debug, Clone, PartialEq)]
pub struct FillCmd {
    pub points: Vec<Vec2>,
    pub color: Color24,
    /// Fill opacity in [0, 1].
    pub alpha: f32,
}

/// Recorded fill stream for one texture bake.
///
/// Fills are drawn in insertion order, later over earlier; this is what lets
/// the hole polygon "erase" the center of the outer fill.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FillList {
    cmds: Vec<FillCmd>,
}

impl FillList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a filled polygon.
    #[inline]
    pub fn push_polygon(&mut self, points: Vec<Vec2>, color: Color24, alpha: f32) {
        self.cmds.push(FillCmd { points, color, alpha });
    }

    /// Fills in insertion order.
    #[inline]
    pub fn cmds(&self) -> &[FillCmd] {
        &self.cmds
    }
}

/// Non-owning view of one sprite for compositing.
///
/// The texture pivot is always the texture center; `position` is where that
/// pivot lands in viewport coordinates.
#[derive(Debug)]
pub struct SpriteView<'a, T> {
    pub texture: &'a T,
    pub position: Vec2,
    /// Rotation about the pivot, radians, clockwise in screen space.
    pub rotation: f32,
    pub blend: BlendMode,
}

/// Borrowed RGBA8 frame buffer produced by compositing.
#[derive(Debug, Copy, Clone)]
pub struct Frame<'a> {
    pub width: u32,
    pub height: u32,
    /// Row-major RGBA, `width * height * 4` bytes.
    pub rgba: &'a [u8],
}

/// Rasterizer/compositor capability consumed by the engine.
///
/// Implementations own every texture's pixel storage via the associated
/// `Texture` type; the engine only holds the returned values. All calls are
/// side-effect-free with respect to engine state.
pub trait Renderer {
    type Texture;

    /// Bakes a recorded fill stream into a `size`×`size` texture.
    ///
    /// Called once per shape at setup; never again per frame.
    fn rasterize(&mut self, fills: &FillList, size: u32) -> Self::Texture;

    /// Composites sprite views back-to-front over `background` and returns
    /// the finished frame.
    fn composite<'a>(
        &'a mut self,
        viewport: Viewport,
        background: Color24,
        sprites: &[SpriteView<'_, Self::Texture>],
    ) -> Frame<'a>;
}
