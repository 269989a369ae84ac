// Copyright (c) 2026 rezky_nightky

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, error, info};

#[cfg(unix)]
use signal_hook::consts::{SIGINT, SIGTERM};

use crate::error::Result;
use crate::grid::Grid;
use crate::rain::Rain;
use crate::runtime::Scheduler;
use crate::terminal::{Terminal, FAREWELL};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Starting,
    Running,
    ShuttingDown,
    Terminated,
}

/// Lets exactly one caller put the terminal back. Shared between the session
/// and the panic hook.
#[derive(Debug, Default)]
pub struct RestoreGuard {
    done: AtomicBool,
}

impl RestoreGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` for the first caller only; that caller owns the
    /// restore.
    pub fn claim(&self) -> bool {
        !self.done.swap(true, Ordering::SeqCst)
    }
}

/// Stop request raised from signal context and polled by the frame loop.
///
/// The handlers only store into the flag; all terminal output stays on the
/// main thread.
#[derive(Clone, Debug, Default)]
pub struct StopSignal {
    flag: Arc<AtomicBool>,
}

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// A second signal arriving while the first is still unhandled exits the
    /// process at once, for a loop stuck in a blocked write.
    #[cfg(unix)]
    pub fn register(&self) -> io::Result<()> {
        for sig in [SIGINT, SIGTERM] {
            // Must come first: it only fires once the flag is already set.
            signal_hook::flag::register_conditional_shutdown(sig, 0, Arc::clone(&self.flag))?;
            signal_hook::flag::register(sig, Arc::clone(&self.flag))?;
        }
        Ok(())
    }

    #[cfg(windows)]
    pub fn register(&self) -> io::Result<()> {
        let flag = Arc::clone(&self.flag);
        ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))
            .map_err(|e| io::Error::other(e.to_string()))
    }

    pub fn flag(&self) -> &AtomicBool {
        &self.flag
    }
}

/// Restores the terminal before the default panic report is printed.
pub fn install_panic_hook(guard: Arc<RestoreGuard>) {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        if guard.claim() {
            let _ = Terminal::new().restore(None);
        }
        previous(info);
    }));
}

pub struct Session<W: Write> {
    phase: Phase,
    term: Terminal<W>,
    grid: Grid,
    rain: Rain,
    guard: Arc<RestoreGuard>,
}

impl<W: Write> Session<W> {
    /// Sizes the grid from the terminal, hides the cursor, and clears the
    /// screen. A failed size query leaves the terminal untouched.
    pub fn start(mut term: Terminal<W>, rain: Rain, guard: Arc<RestoreGuard>) -> Result<Self> {
        let dims = term.dimensions()?;
        let mut session = Self {
            phase: Phase::Starting,
            term,
            grid: Grid::new(dims),
            rain,
            guard,
        };

        session.term.hide_cursor();
        session.term.clear_screen();
        session.phase = Phase::Running;
        info!(rows = dims.rows, cols = dims.cols, "rain started");
        Ok(session)
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn run(&mut self, scheduler: &mut Scheduler, stop: &StopSignal) -> Result<()> {
        let res = scheduler.run(&mut self.grid, &mut self.rain, &mut self.term, stop.flag());
        match &res {
            Ok(()) => info!("stop requested, shutting down"),
            Err(e) => error!(error = %e, "frame loop failed"),
        }
        debug!(frames = scheduler.frames(), "frame loop finished");
        res
    }

    /// Shows the cursor, clears the screen, and prints the farewell. Only the
    /// first call, across this session and the panic hook, writes anything.
    pub fn shutdown(&mut self) -> io::Result<bool> {
        if self.phase == Phase::Terminated {
            return Ok(false);
        }
        self.phase = Phase::ShuttingDown;
        let res = if self.guard.claim() {
            self.term.restore(Some(FAREWELL)).map(|()| true)
        } else {
            Ok(false)
        };
        self.phase = Phase::Terminated;
        res
    }
}

impl<W: Write> Drop for Session<W> {
    fn drop(&mut self) {
        let _ = self.shutdown();
    }
}
