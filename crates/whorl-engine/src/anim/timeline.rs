use std::f32::consts::TAU;

use crate::config::Config;
use crate::shape::Shape;

use super::Easing;

/// One timeline entry: a full rotation of one shape.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinEntry {
    /// Index of the driven shape.
    pub target: usize,
    /// Rotation endpoint, ±2π. Negative for even targets.
    pub end: f32,
    /// Start delay in seconds from the top of each loop.
    pub offset: f32,
    /// Seconds from offset to the rotation endpoint.
    pub duration: f32,
    pub easing: Easing,
}

/// Shared looping timeline holding one spin entry per shape.
///
/// Invariants:
/// - constructed paused; a single `play()` starts it and nothing stops it
/// - entries are fixed at construction
/// - this is the sole writer of shape rotation (via [`Timeline::apply`])
/// - elapsed time wraps at the loop period, `max(offset + duration)`, so
///   every rotation returns to its phase (mod 2π) each cycle
#[derive(Debug, Clone)]
pub struct Timeline {
    entries: Vec<SpinEntry>,
    period: f32,
    elapsed: f32,
    playing: bool,
}

impl Timeline {
    /// Builds the staggered spin timeline for `num_shapes` shapes.
    ///
    /// Per entry i:
    /// - spin direction alternates by parity, starting negative at i = 0,
    ///   which yields counter-rotating pairs
    /// - pairs (2k, 2k+1) share a start offset; offsets spread linearly
    ///   across a window of `spin_duration * spin_offset`
    ///
    /// With two shapes there is a single pair and the offset spacing
    /// denominator (N/2 − 1) vanishes; that sole pair starts at offset 0,
    /// as does a lone shape. Offsets are always finite.
    pub fn staggered(num_shapes: usize, config: &Config) -> Self {
        let duration = config.spin_duration.as_secs_f32();
        let window = duration * config.spin_offset;
        let pair_spread = num_shapes as f32 / 2.0 - 1.0;

        let entries: Vec<_> = (0..num_shapes)
            .map(|i| {
                let direction = if i % 2 == 0 { -1.0 } else { 1.0 };
                let offset = if pair_spread > 0.0 {
                    (i / 2) as f32 / pair_spread * window
                } else {
                    0.0
                };
                SpinEntry {
                    target: i,
                    end: TAU * direction,
                    offset,
                    duration,
                    easing: config.spin_easing,
                }
            })
            .collect();

        let period = entries
            .iter()
            .map(|e| e.offset + e.duration)
            .fold(duration, f32::max);

        Self {
            entries,
            period,
            elapsed: 0.0,
            playing: false,
        }
    }

    #[inline]
    pub fn entries(&self) -> &[SpinEntry] {
        &self.entries
    }

    /// Loop period in seconds.
    #[inline]
    pub fn period(&self) -> f32 {
        self.period
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Starts the loop. Idempotent.
    pub fn play(&mut self) {
        self.playing = true;
    }

    /// Advances the shared clock by `dt` seconds, wrapping at the period.
    ///
    /// No-op while paused.
    pub fn advance(&mut self, dt: f32) {
        if !self.playing {
            return;
        }
        debug_assert!(dt >= 0.0, "timeline cannot advance backwards");
        self.elapsed = (self.elapsed + dt) % self.period;
    }

    /// Samples one entry at the current clock.
    ///
    /// Rotation holds at 0 before the entry's offset and at `end` after the
    /// entry finishes, until the loop wraps.
    pub fn rotation_of(&self, entry: &SpinEntry) -> f32 {
        let progress = ((self.elapsed - entry.offset) / entry.duration).clamp(0.0, 1.0);
        entry.end * entry.easing.apply(progress)
    }

    /// Writes current rotations into the shapes.
    pub fn apply<T>(&self, shapes: &mut [Shape<T>]) {
        for entry in &self.entries {
            shapes[entry.target].rotation = self.rotation_of(entry);
        }
    }
}
