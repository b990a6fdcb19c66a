/// Clock driver — owns the surface and renderer, schedules repaint passes,
/// and emits each frame to the configured output.
use anyhow::{Context, Result};
use std::io::Write;
use tokio::sync::watch;
use tokio::time::{self, Duration, MissedTickBehavior};
use tracing::{debug, info};

use crate::clock::SystemClock;
use crate::config::{ClockConfig, OutputMode};
use crate::render::engine::ClockRenderer;
use crate::render::surface::Surface;

/// Repaint period. Fixed from each previous tick, so long runs drift
/// against true wall-clock time.
const TICK_MS: u64 = 1000;

/// Handle for stopping the repaint loop from another task.
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        let _ = self.tx.send(true);
    }
}

pub struct ClockDriver {
    config: ClockConfig,
    renderer: ClockRenderer,
    surface: Surface,
    cancel_rx: watch::Receiver<bool>,
    passes: u64,
}

impl ClockDriver {
    /// Build the surface and renderer. Any failure here aborts before a
    /// single repaint is scheduled.
    pub fn new(config: ClockConfig) -> Result<(Self, CancelHandle)> {
        let surface = Surface::new(config.width, config.height)
            .context("Cannot obtain drawing surface")?;
        let renderer = ClockRenderer::new(&config.font_path, Box::new(SystemClock))
            .context("Cannot initialize clock renderer")?;
        let (tx, rx) = watch::channel(false);

        Ok((
            Self {
                config,
                renderer,
                surface,
                cancel_rx: rx,
                passes: 0,
            },
            CancelHandle { tx },
        ))
    }

    /// Repaint loop: one immediate pass, then one per second until the
    /// cancel handle fires.
    pub async fn run(&mut self) -> Result<()> {
        let mut interval = time::interval(Duration::from_millis(TICK_MS));
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(
            "Starting clock: {}x{} surface, output: {:?}",
            self.config.width, self.config.height, self.config.output_mode
        );

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    self.renderer.render(&mut self.surface);
                    self.output_pass()?;
                    self.passes += 1;
                }
                res = self.cancel_rx.changed() => {
                    if res.is_err() || *self.cancel_rx.borrow() {
                        break;
                    }
                }
            }
        }

        info!("Clock stopped after {} paint pass(es)", self.passes);
        Ok(())
    }

    fn output_pass(&mut self) -> Result<()> {
        match self.config.output_mode {
            OutputMode::Png => {
                self.surface
                    .save_png(&self.config.output_path)
                    .context("Failed to save PNG output")?;
                debug!(
                    "Saved pass {} to {}",
                    self.passes,
                    self.config.output_path.display()
                );
            }
            OutputMode::Raw => {
                std::io::stdout().write_all(self.surface.data()).ok();
            }
        }
        Ok(())
    }
}
