//! Animation timeline.
//!
//! Responsibilities:
//! - easing curves under their conventional names
//! - the staggered, perpetually looping spin timeline

mod easing;
mod timeline;

pub use easing::Easing;
pub use timeline::{SpinEntry, Timeline};
