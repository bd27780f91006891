//! Headless host shell.
//!
//! Owns what the engine deliberately does not: the viewport size, the tick
//! loop, and the capture sink. Frames advance on wall-clock time by default
//! (matching a display-refresh driver); `--fixed-dt` switches to
//! deterministic stepping for reproducible recordings.

mod sink;

use std::path::PathBuf;

use anyhow::{Context, bail};
use whorl_engine::capture::{CaptureSink, NoopSink};
use whorl_engine::config::Config;
use whorl_engine::coords::Viewport;
use whorl_engine::logging::{LoggingConfig, init_logging};
use whorl_engine::stage::Stage;
use whorl_engine::time::TickClock;
use whorl_raster::SoftRenderer;

use sink::PngSink;

struct Options {
    frames: u64,
    width: f32,
    height: f32,
    out_dir: Option<PathBuf>,
    /// Fixed per-frame delta in seconds; wall clock when absent.
    fixed_dt: Option<f32>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            frames: 300,
            width: 960.0,
            height: 540.0,
            out_dir: Some(PathBuf::from("frames")),
            fixed_dt: None,
        }
    }
}

const USAGE: &str = "usage: whorl-studio [--frames N] [--size WxH] [--out DIR] \
                     [--fixed-dt MS] [--no-capture]";

impl Options {
    fn parse(args: impl Iterator<Item = String>) -> anyhow::Result<Self> {
        let mut opts = Self::default();
        let mut args = args;

        while let Some(arg) = args.next() {
            let mut value = |name: &str| {
                args.next()
                    .with_context(|| format!("{name} needs a value\n{USAGE}"))
            };
            match arg.as_str() {
                "--frames" => opts.frames = value("--frames")?.parse()?,
                "--size" => {
                    let v = value("--size")?;
                    let (w, h) = v
                        .split_once('x')
                        .with_context(|| format!("--size wants WxH, got {v}"))?;
                    opts.width = w.parse()?;
                    opts.height = h.parse()?;
                }
                "--out" => opts.out_dir = Some(PathBuf::from(value("--out")?)),
                "--fixed-dt" => {
                    opts.fixed_dt = Some(value("--fixed-dt")?.parse::<f32>()? / 1000.0)
                }
                "--no-capture" => opts.out_dir = None,
                other => bail!("unknown argument {other}\n{USAGE}"),
            }
        }
        Ok(opts)
    }
}

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let opts = Options::parse(std::env::args().skip(1))?;
    let config = Config::default();

    let mut renderer = SoftRenderer::new();
    let mut stage = Stage::new(config, Viewport::new(opts.width, opts.height), &mut renderer)?;

    let mut sink: Box<dyn CaptureSink> = match &opts.out_dir {
        Some(dir) => Box::new(PngSink::new(dir.clone())?),
        None => Box::new(NoopSink),
    };

    stage.play();

    let mut clock = TickClock::new();
    for _ in 0..opts.frames {
        let dt = match opts.fixed_dt {
            Some(dt) => dt,
            None => clock.tick().dt,
        };
        stage.tick(dt, &mut renderer, sink.as_mut());
    }

    log::info!("rendered {} frames", opts.frames);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> anyhow::Result<Options> {
        Options::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn defaults_when_no_arguments() {
        let opts = parse(&[]).unwrap();
        assert_eq!(opts.frames, 300);
        assert_eq!((opts.width, opts.height), (960.0, 540.0));
        assert!(opts.out_dir.is_some());
        assert!(opts.fixed_dt.is_none());
    }

    #[test]
    fn parses_size_and_fixed_dt() {
        let opts = parse(&["--size", "640x480", "--fixed-dt", "16.0", "--frames", "10"]).unwrap();
        assert_eq!((opts.width, opts.height), (640.0, 480.0));
        assert_eq!(opts.fixed_dt, Some(0.016));
        assert_eq!(opts.frames, 10);
    }

    #[test]
    fn no_capture_clears_the_output_directory() {
        let opts = parse(&["--no-capture"]).unwrap();
        assert!(opts.out_dir.is_none());
    }

    #[test]
    fn rejects_unknown_arguments_and_bad_sizes() {
        assert!(parse(&["--bogus"]).is_err());
        assert!(parse(&["--size", "640"]).is_err());
        assert!(parse(&["--frames"]).is_err());
    }
}
