//! Color types and gradient sampling.
//!
//! Responsibilities:
//! - float RGB triples in the 0..255 channel domain (what color scales emit)
//! - packed 24-bit colors as handed to renderers
//! - the `ColorScale` capability plus the perceptual `LchScale` implementation

mod color;
mod scale;

pub use color::{Color24, Rgb};
pub use scale::{ColorScale, LchScale};
