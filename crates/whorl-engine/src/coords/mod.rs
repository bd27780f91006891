//! Coordinate primitives.
//!
//! Responsibilities:
//! - 2D vector math for polygon vertices and sprite positions
//! - axis-aligned rectangles for the board region
//! - viewport size as the coordinate basis handed in by the host shell

mod rect;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
