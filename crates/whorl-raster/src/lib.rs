//! Software implementation of the engine's renderer capability.
//!
//! Responsibilities:
//! - bake recorded polygon fills into square RGBA bitmaps (scanline fill)
//! - composite rotated sprite views into an owned frame buffer
//!
//! Everything runs on the CPU with straight-alpha RGBA8 pixels. The engine
//! treats this crate as an opaque collaborator; a GPU renderer could stand
//! in behind the same trait.

mod bitmap;
mod blit;
mod fill;

pub use bitmap::Bitmap;

use whorl_engine::coords::Viewport;
use whorl_engine::paint::Color24;
use whorl_engine::render::{FillList, Frame, Renderer, SpriteView};

/// CPU rasterizer and compositor.
///
/// Owns the frame buffer; [`Renderer::composite`] hands out borrowed views
/// of it. Textures are returned by value and owned by the caller.
#[derive(Debug, Default)]
pub struct SoftRenderer {
    frame: Vec<u8>,
    width: u32,
    height: u32,
}

impl SoftRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for SoftRenderer {
    type Texture = Bitmap;

    fn rasterize(&mut self, fills: &FillList, size: u32) -> Bitmap {
        let mut bitmap = Bitmap::new(size);
        for cmd in fills.cmds() {
            fill::fill_polygon(&mut bitmap, &cmd.points, cmd.color, cmd.alpha);
        }
        log::trace!("rasterized {} fills into {size}x{size} texture", fills.cmds().len());
        bitmap
    }

    fn composite<'a>(
        &'a mut self,
        viewport: Viewport,
        background: Color24,
        sprites: &[SpriteView<'_, Bitmap>],
    ) -> Frame<'a> {
        self.width = viewport.width as u32;
        self.height = viewport.height as u32;

        // Opaque clear; the frame keeps alpha 255 everywhere.
        self.frame.clear();
        self.frame.extend(
            std::iter::repeat([background.r(), background.g(), background.b(), 255])
                .take((self.width * self.height) as usize)
                .flatten(),
        );

        for sprite in sprites {
            blit::blit_rotated(
                &mut self.frame,
                self.width,
                self.height,
                sprite.texture,
                sprite.position,
                sprite.rotation,
                sprite.blend,
            );
        }

        Frame {
            width: self.width,
            height: self.height,
            rgba: &self.frame,
        }
    }
}
