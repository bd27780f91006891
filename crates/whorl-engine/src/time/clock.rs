use std::time::{Duration, Instant};

/// One tick's timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct Tick {
    /// Seconds since the previous tick, after clamping.
    pub dt: f32,
    /// Monotonic tick counter.
    pub index: u64,
}

/// Wall-clock tick source for live frame drivers.
///
/// Delta time is clamped: the maximum keeps the timeline from leaping after
/// a stall (debugger, suspended process), the minimum keeps tight loops from
/// producing zero-length ticks.
#[derive(Debug, Clone)]
pub struct TickClock {
    last: Instant,
    index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl TickClock {
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: Instant::now(),
            index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Advances the clock and returns the snapshot for this tick.
    pub fn tick(&mut self) -> Tick {
        let now = Instant::now();
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);
        self.last = now;

        let tick = Tick {
            dt: dt.as_secs_f32(),
            index: self.index,
        };
        self.index = self.index.wrapping_add(1);
        tick
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_count_up_and_stay_within_clamps() {
        let mut clock = TickClock::with_clamps(Duration::from_millis(1), Duration::from_millis(10));
        let a = clock.tick();
        let b = clock.tick();
        assert_eq!(a.index, 0);
        assert_eq!(b.index, 1);
        for t in [a, b] {
            assert!(t.dt >= 0.001 && t.dt <= 0.010);
        }
    }
}
