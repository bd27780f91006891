//! Whorl engine crate.
//!
//! Generates ring-shaped polygon sprites from a parametric configuration,
//! stacks them at the center of a board rectangle, and drives a staggered,
//! perpetually looping rotation across them. The rasterizer, color gradient,
//! and capture sink are consumed as capabilities; see [`render::Renderer`],
//! [`paint::ColorScale`], and [`capture::CaptureSink`].

pub mod anim;
pub mod board;
pub mod capture;
pub mod config;
pub mod coords;
pub mod geometry;
pub mod render;
pub mod shape;
pub mod stage;
pub mod time;

pub mod logging;
pub mod paint;
