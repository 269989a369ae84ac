// Copyright (c) 2026 rezky_nightky

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::error::Result;
use crate::grid::Grid;
use crate::rain::Rain;
use crate::terminal::Terminal;

/// About 15 frames per second.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(66);

/// One frame: resize check, simulate, render.
pub fn tick<W: Write>(grid: &mut Grid, rain: &mut Rain, term: &mut Terminal<W>) -> Result<()> {
    let dims = term.dimensions()?;
    if grid.resize_if_changed(dims) {
        debug!(rows = dims.rows, cols = dims.cols, "terminal resized, grid reset");
    }
    rain.step(grid);
    term.draw(grid)?;
    Ok(())
}

pub struct Scheduler {
    interval: Duration,
    frames: u64,
}

impl Scheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            frames: 0,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Ticks until `stop` is raised or a tick fails.
    ///
    /// Ticks never overlap. A tick that overruns the interval pushes the next
    /// one back instead of triggering a catch-up burst.
    pub fn run<W: Write>(
        &mut self,
        grid: &mut Grid,
        rain: &mut Rain,
        term: &mut Terminal<W>,
        stop: &AtomicBool,
    ) -> Result<()> {
        let mut next_frame = Instant::now() + self.interval;

        loop {
            let now = Instant::now();
            if next_frame > now {
                thread::sleep(next_frame - now);
            }

            if stop.load(Ordering::SeqCst) {
                return Ok(());
            }

            tick(grid, rain, term)?;
            self.frames = self.frames.saturating_add(1);

            next_frame += self.interval;
            let now = Instant::now();
            if now > next_frame {
                next_frame = now;
            }
        }
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(FRAME_INTERVAL)
    }
}
