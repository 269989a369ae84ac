// Copyright (c) 2026 rezky_nightky

use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Standard output is not attached to a terminal.
    #[error("failed to query terminal size: stdout is not a terminal")]
    NotATerminal,

    /// The OS refused the window size query.
    #[error("failed to query terminal size: {0}")]
    TerminalQuery(#[source] io::Error),

    /// Writing a frame to the terminal failed.
    #[error("failed to write frame: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// True for the errors raised by a dimension query.
    pub fn is_query_error(&self) -> bool {
        matches!(self, Error::NotATerminal | Error::TerminalQuery(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
