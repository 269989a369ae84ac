// Copyright (c) 2026 rezky_nightky

mod charset;
mod error;
mod grid;
mod lifecycle;
mod rain;
mod runtime;
mod terminal;

use std::io::IsTerminal;
use std::sync::Arc;

use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::charset::seeded_rng;
use crate::lifecycle::{install_panic_hook, RestoreGuard, Session, StopSignal};
use crate::rain::Rain;
use crate::runtime::Scheduler;
use crate::terminal::Terminal;

/// Logs go to stderr; stdout belongs to the animation.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

// Command-line arguments are ignored, and every path below exits 0.
fn main() {
    init_logging();

    let guard = Arc::new(RestoreGuard::new());
    install_panic_hook(Arc::clone(&guard));

    let rain = Rain::new(seeded_rng(None));
    let mut session = match Session::start(Terminal::new(), rain, guard) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error initializing terminal: {}", e);
            return;
        }
    };

    let stop = StopSignal::new();
    if let Err(e) = stop.register() {
        warn!(error = %e, "failed to install signal handlers");
    }

    let mut scheduler = Scheduler::default();
    let outcome = session.run(&mut scheduler, &stop);
    let _ = session.shutdown();

    // The diagnostic is the only trace of a failed frame loop.
    match outcome {
        Err(e) if e.is_query_error() => eprintln!("Error resizing terminal: {}", e),
        Err(e) => eprintln!("Error: {}", e),
        Ok(()) => {}
    }
}
