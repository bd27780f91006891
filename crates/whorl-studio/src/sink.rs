//! PNG capture sink.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use whorl_engine::capture::CaptureSink;
use whorl_engine::render::Frame;

/// Writes each captured frame as a numbered PNG under one directory.
pub struct PngSink {
    dir: PathBuf,
    next_index: u64,
}

impl PngSink {
    /// Creates the output directory if needed.
    pub fn new(dir: PathBuf) -> anyhow::Result<Self> {
        fs::create_dir_all(&dir)
            .with_context(|| format!("creating capture directory {}", dir.display()))?;
        Ok(Self { dir, next_index: 0 })
    }
}

impl CaptureSink for PngSink {
    fn capture(&mut self, frame: &Frame<'_>) -> anyhow::Result<()> {
        let path = self.dir.join(format!("frame_{:05}.png", self.next_index));
        self.next_index += 1;

        let img = image::RgbaImage::from_raw(frame.width, frame.height, frame.rgba.to_vec())
            .context("frame buffer size does not match its dimensions")?;
        img.save(&path)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}
