//! The stage: one explicit context object for the whole pipeline.
//!
//! Replaces the global app/state bundle a retained-mode shell would keep.
//! Construction runs the full setup chain (validate → board layout → shape
//! baking → timeline); per tick the external frame driver calls
//! [`Stage::tick`] with whatever delta-time source it owns. There is no
//! internal loop and no internal cancellation: stopping the driver is how
//! the animation stops.

use thiserror::Error;

use crate::anim::Timeline;
use crate::board::{board_rect, resolve_radius};
use crate::capture::CaptureSink;
use crate::config::{Config, ConfigError};
use crate::coords::{Rect, Viewport};
use crate::paint::LchScale;
use crate::render::{Renderer, SpriteView};
use crate::shape::{Shape, make_shapes};

#[derive(Debug, Error, PartialEq)]
pub enum SetupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("viewport must have positive finite dimensions")]
    InvalidViewport,
}

/// Fully constructed scene plus its animation driver.
///
/// Immutable after construction except for shape rotations, which only the
/// timeline writes during [`Stage::tick`]. Single-threaded by design: the
/// rotation write and the compositing read happen within one tick on one
/// thread, at one consistent animation time.
pub struct Stage<T> {
    config: Config,
    viewport: Viewport,
    board: Rect,
    shapes: Vec<Shape<T>>,
    timeline: Timeline,
}

impl<T> Stage<T> {
    /// Builds the board, bakes every shape through `renderer`, and prepares
    /// the paused timeline.
    pub fn new<R>(config: Config, viewport: Viewport, renderer: &mut R) -> Result<Self, SetupError>
    where
        R: Renderer<Texture = T>,
    {
        config.validate()?;
        if !viewport.is_valid() {
            return Err(SetupError::InvalidViewport);
        }

        let board = board_rect(config.screen_margin, viewport);
        let radius_px = resolve_radius(config.shape_radius, board);
        let scale = LchScale::new(&config.palette);
        let shapes = make_shapes(&config, board, radius_px, &scale, renderer);
        let timeline = Timeline::staggered(shapes.len(), &config);

        log::info!(
            "stage ready: {} shapes, board {:.0}x{:.0}, loop period {:.2}s",
            shapes.len(),
            board.width(),
            board.height(),
            timeline.period()
        );

        Ok(Self {
            config,
            viewport,
            board,
            shapes,
            timeline,
        })
    }

    /// Starts the spin loop. The timeline is constructed paused and nothing
    /// else ever starts it.
    pub fn play(&mut self) {
        self.timeline.play();
    }

    /// Runs one tick: advance the timeline by `dt` seconds, write rotations,
    /// composite, and hand the frame to `sink`.
    ///
    /// Advance-then-render: the captured frame reflects the post-advance
    /// animation time. Sink failures are logged and swallowed; capture never
    /// interrupts rendering.
    pub fn tick<R>(&mut self, dt: f32, renderer: &mut R, sink: &mut dyn CaptureSink)
    where
        R: Renderer<Texture = T>,
    {
        self.timeline.advance(dt);
        self.timeline.apply(&mut self.shapes);

        let views: Vec<SpriteView<'_, T>> = self.shapes.iter().map(Shape::view).collect();
        let frame = renderer.composite(self.viewport, self.config.background, &views);

        if let Err(err) = sink.capture(&frame) {
            log::warn!("frame capture failed (continuing): {err:#}");
        }
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline]
    pub fn board(&self) -> Rect {
        self.board
    }

    #[inline]
    pub fn shapes(&self) -> &[Shape<T>] {
        &self.shapes
    }

    #[inline]
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }
}
