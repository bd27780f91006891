//! Frame timing.

mod clock;

pub use clock::{Tick, TickClock};
