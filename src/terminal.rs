// Copyright (c) 2026 rezky_nightky

use std::fmt;
use std::io::{self, stdout, IsTerminal, Stdout, Write};

use crossterm::{
    cursor,
    style::{Print, ResetColor},
    terminal, Command, ExecutableCommand, QueueableCommand,
};

use crate::error::{Error, Result};
use crate::grid::{Dimensions, Grid, BLANK};

/// Moves the cursor to the top-left cell with the short `CSI H` form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveHome;

impl Command for MoveHome {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        f.write_str("\x1b[H")
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> io::Result<()> {
        Err(io::Error::other("console does not accept ANSI sequences"))
    }
}

/// Bright green foreground used for every visible glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SetAccent;

impl Command for SetAccent {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        f.write_str("\x1b[92m")
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> io::Result<()> {
        Err(io::Error::other("console does not accept ANSI sequences"))
    }
}

pub const FAREWELL: &str = "Exiting...";

/// Reads the window size of the terminal attached to stdout.
pub fn query_dimensions() -> Result<Dimensions> {
    if !stdout().is_terminal() {
        return Err(Error::NotATerminal);
    }
    let (cols, rows) = terminal::size().map_err(Error::TerminalQuery)?;
    Ok(Dimensions::new(rows, cols))
}

pub type SizeQuery = Box<dyn FnMut() -> Result<Dimensions>>;

pub struct Terminal<W: Write> {
    out: W,
    size_query: SizeQuery,
}

impl Terminal<Stdout> {
    pub fn new() -> Self {
        Self::with_size_query(stdout(), Box::new(query_dimensions))
    }
}

impl Default for Terminal<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Terminal<W> {
    pub fn with_size_query(out: W, size_query: SizeQuery) -> Self {
        Self { out, size_query }
    }

    pub fn dimensions(&mut self) -> Result<Dimensions> {
        (self.size_query)()
    }

    pub fn hide_cursor(&mut self) {
        let _ = self.out.execute(cursor::Hide);
    }

    pub fn show_cursor(&mut self) {
        let _ = self.out.execute(cursor::Show);
    }

    pub fn clear_screen(&mut self) {
        let _ = self.out.queue(terminal::Clear(terminal::ClearType::All));
        self.move_cursor_home();
    }

    pub fn move_cursor_home(&mut self) {
        let _ = self.out.execute(MoveHome);
    }

    /// Queues one cell. Visible glyphs are wrapped in the accent color; blanks
    /// go out as a bare space.
    pub fn write_styled_cell(&mut self, ch: char, styled: bool) -> io::Result<()> {
        if styled {
            self.out.queue(SetAccent)?;
            self.out.queue(Print(ch))?;
            self.out.queue(ResetColor)?;
        } else {
            self.out.queue(Print(ch))?;
        }
        Ok(())
    }

    /// Repaints every cell, rows separated by newlines, starting from home.
    pub fn draw(&mut self, grid: &Grid) -> io::Result<()> {
        if grid.is_empty() {
            return Ok(());
        }

        self.out.queue(MoveHome)?;
        let cols = grid.cols() as usize;
        for (i, &ch) in grid.cells().iter().enumerate() {
            if i > 0 && i % cols == 0 {
                self.out.queue(Print('\n'))?;
            }
            if ch == BLANK {
                self.write_styled_cell(' ', false)?;
            } else {
                self.write_styled_cell(ch, true)?;
            }
        }
        self.out.flush()
    }

    /// Shows the cursor, drops any half-written color, clears, and optionally
    /// prints a farewell line.
    pub fn restore(&mut self, farewell: Option<&str>) -> io::Result<()> {
        self.show_cursor();
        self.out.queue(ResetColor)?;
        self.clear_screen();
        if let Some(msg) = farewell {
            self.out.queue(Print(msg))?;
            self.out.queue(Print('\n'))?;
        }
        self.out.flush()
    }

    #[cfg(test)]
    pub fn writer(&self) -> &W {
        &self.out
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn fixed(rows: u16, cols: u16) -> Terminal<Vec<u8>> {
        Terminal::with_size_query(
            Vec::<u8>::new(),
            Box::new(move || Ok(Dimensions::new(rows, cols))),
        )
    }

    pub(crate) fn text(term: &Terminal<Vec<u8>>) -> String {
        String::from_utf8_lossy(term.writer()).into_owned()
    }

    #[test]
    fn draws_rows_without_trailing_newline() {
        let mut term = fixed(2, 3);
        let mut g = Grid::new(Dimensions::new(2, 3));
        g.set(0, 1, 'a');
        g.set(1, 2, 'Z');
        term.draw(&g).unwrap();
        assert_eq!(text(&term), "\x1b[H \x1b[92ma\x1b[0m \n  \x1b[92mZ\x1b[0m");
    }

    #[test]
    fn blank_frame_has_no_color_codes() {
        let mut term = fixed(2, 2);
        term.draw(&Grid::new(Dimensions::new(2, 2))).unwrap();
        assert_eq!(text(&term), "\x1b[H  \n  ");
    }

    #[test]
    fn empty_grid_writes_nothing() {
        let mut term = fixed(0, 0);
        term.draw(&Grid::new(Dimensions::new(0, 5))).unwrap();
        assert!(term.writer().is_empty());
    }

    #[test]
    fn cursor_and_clear_sequences() {
        let mut term = fixed(1, 1);
        term.hide_cursor();
        term.clear_screen();
        term.move_cursor_home();
        term.show_cursor();
        assert_eq!(text(&term), "\x1b[?25l\x1b[2J\x1b[H\x1b[H\x1b[?25h");
    }

    #[test]
    fn restore_shows_cursor_clears_and_says_goodbye() {
        let mut term = fixed(1, 1);
        term.restore(Some(FAREWELL)).unwrap();
        assert_eq!(text(&term), "\x1b[?25h\x1b[0m\x1b[2J\x1b[HExiting...\n");
    }

    #[test]
    fn restore_after_drawing_still_resets_color() {
        let mut term = fixed(1, 1);
        term.write_styled_cell('k', true).unwrap();
        term.restore(None).unwrap();
        assert_eq!(
            text(&term),
            "\x1b[92mk\x1b[0m\x1b[?25h\x1b[0m\x1b[2J\x1b[H"
        );
    }

    #[test]
    fn size_query_errors_pass_through() {
        let mut term = Terminal::with_size_query(
            Vec::<u8>::new(),
            Box::new(|| Err(Error::NotATerminal)),
        );
        assert!(matches!(term.dimensions(), Err(Error::NotATerminal)));
    }
}
