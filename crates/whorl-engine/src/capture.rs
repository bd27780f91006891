//! Frame capture sink capability.
//!
//! Capture is best-effort: the stage logs sink failures and keeps rendering.
//! When no sink is wanted, [`NoopSink`] stands in.

use crate::render::Frame;

/// Consumer of finished frames.
pub trait CaptureSink {
    /// Receives one rendered frame.
    ///
    /// Errors are reported to the caller for logging only; they never stop
    /// the render loop.
    fn capture(&mut self, frame: &Frame<'_>) -> anyhow::Result<()>;
}

/// Sink that discards every frame.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoopSink;

impl CaptureSink for NoopSink {
    fn capture(&mut self, _frame: &Frame<'_>) -> anyhow::Result<()> {
        Ok(())
    }
}

impl<F> CaptureSink for F
where
    F: FnMut(&Frame<'_>) -> anyhow::Result<()>,
{
    fn capture(&mut self, frame: &Frame<'_>) -> anyhow::Result<()> {
        self(frame)
    }
}
