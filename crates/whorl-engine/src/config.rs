use std::time::Duration;

use thiserror::Error;

use crate::anim::Easing;
use crate::paint::Color24;
use crate::render::BlendMode;

/// Immutable parameter bundle for the whole pipeline.
///
/// Built once at startup and validated before any geometry or animation math
/// runs; nothing downstream mutates it. `shape_radius` and `screen_margin`
/// are fractions — the board layout resolves them to absolute pixels exactly
/// once (see [`crate::board`]).
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of ring shapes to generate.
    pub num_shapes: usize,
    /// Polygon side count for both the outer fill and the hole.
    pub n_sides: u32,
    /// Shape radius as a fraction of the smaller board dimension, (0, 1].
    pub shape_radius: f32,
    /// Hole radius as a fraction of the outer radius, (0, 1).
    pub hole_percent: f32,
    /// Duration of one full rotation per shape.
    pub spin_duration: Duration,
    /// Stagger window as a multiple of `spin_duration`, >= 0.
    pub spin_offset: f32,
    pub spin_easing: Easing,
    /// Fraction of each viewport edge excluded from the board, [0, 0.5).
    pub screen_margin: f32,
    /// Gradient stops, first to last; at least two.
    pub palette: Vec<Color24>,
    /// Shape fill opacity, (0, 1].
    pub shape_alpha: f32,
    pub blend_mode: BlendMode,
    pub background: Color24,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            num_shapes: 30,
            n_sides: 3,
            shape_radius: 0.44,
            hole_percent: 0.75,
            spin_duration: Duration::from_millis(4000),
            spin_offset: 0.7,
            spin_easing: Easing::EaseOutQuad,
            screen_margin: 0.03,
            palette: vec![
                Color24(0x0F694D),
                Color24(0x520CC2),
                Color24(0xD8C026),
                Color24(0x14F7E2),
            ],
            shape_alpha: 1.0,
            blend_mode: BlendMode::Add,
            background: Color24::BLACK,
        }
    }
}

/// Rejected configuration. Anything here is a programming error in the host
/// shell, caught before shape construction rather than surfacing as NaN
/// geometry later.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("num_shapes must be at least 1")]
    NoShapes,
    #[error("n_sides must be at least 3, got {0}")]
    TooFewSides(u32),
    #[error("shape_radius must be in (0, 1], got {0}")]
    BadRadius(f32),
    #[error("hole_percent must be in (0, 1), got {0}")]
    BadHolePercent(f32),
    #[error("spin_duration must be positive")]
    ZeroDuration,
    #[error("spin_offset must be finite and >= 0, got {0}")]
    BadSpinOffset(f32),
    #[error("screen_margin must be in [0, 0.5), got {0}")]
    BadMargin(f32),
    #[error("palette needs at least 2 colors, got {0}")]
    PaletteTooSmall(usize),
    #[error("shape_alpha must be in (0, 1], got {0}")]
    BadAlpha(f32),
}

impl Config {
    /// Fail-fast validation of every field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_shapes == 0 {
            return Err(ConfigError::NoShapes);
        }
        if self.n_sides < 3 {
            return Err(ConfigError::TooFewSides(self.n_sides));
        }
        if !(self.shape_radius > 0.0 && self.shape_radius <= 1.0) {
            return Err(ConfigError::BadRadius(self.shape_radius));
        }
        if !(self.hole_percent > 0.0 && self.hole_percent < 1.0) {
            return Err(ConfigError::BadHolePercent(self.hole_percent));
        }
        if self.spin_duration.is_zero() {
            return Err(ConfigError::ZeroDuration);
        }
        if !(self.spin_offset >= 0.0 && self.spin_offset.is_finite()) {
            return Err(ConfigError::BadSpinOffset(self.spin_offset));
        }
        if !(self.screen_margin >= 0.0 && self.screen_margin < 0.5) {
            return Err(ConfigError::BadMargin(self.screen_margin));
        }
        if self.palette.len() < 2 {
            return Err(ConfigError::PaletteTooSmall(self.palette.len()));
        }
        if !(self.shape_alpha > 0.0 && self.shape_alpha <= 1.0) {
            return Err(ConfigError::BadAlpha(self.shape_alpha));
        }
        Ok(())
    }
}
