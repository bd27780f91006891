//! Procedural geometry.

mod polygon;

pub use polygon::regular_polygon;
