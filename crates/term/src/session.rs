//! TerminalSession: input-mode configuration and in-place row rewrites.
//!
//! The session is the sole writer of the terminal screen while the monitor
//! runs. It tracks the cursor row itself instead of querying the terminal
//! per event, and leaves the cursor in a consistent position after every
//! write so the terminal stays usable if the process is interrupted.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::Print,
    terminal,
    tty::IsTty,
    QueueableCommand,
};

use crate::types::{CaptureOptions, WatchError};

pub struct TerminalSession<W: Write> {
    out: W,
    buf: Vec<u8>,
    width: u16,
    height: u16,
    cursor_row: u16,
    raw_mode: bool,
    mouse_capture: bool,
}

impl TerminalSession<io::Stdout> {
    /// Bind a session to the process's standard output terminal.
    ///
    /// Fails with [`WatchError::DeviceUnavailable`] when stdout is not a
    /// terminal; the in-place redraw model depends on cursor addressing.
    pub fn from_terminal() -> Result<Self, WatchError> {
        let out = io::stdout();
        if !out.is_tty() {
            return Err(WatchError::DeviceUnavailable);
        }

        let (width, height) = terminal::size().map_err(WatchError::Configuration)?;
        let (_, cursor_row) = cursor::position().map_err(WatchError::Configuration)?;

        Ok(Self {
            out,
            buf: Vec::with_capacity(1024),
            width,
            height,
            cursor_row,
            raw_mode: false,
            mouse_capture: false,
        })
    }
}

impl<W: Write> TerminalSession<W> {
    /// Build a session over an arbitrary writer with known screen geometry.
    ///
    /// No mode configuration happens here; this is the entry point for
    /// driving the renderer against an in-memory buffer.
    pub fn with_screen(out: W, width: u16, height: u16, cursor_row: u16) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(1024),
            width,
            height,
            cursor_row,
            raw_mode: false,
            mouse_capture: false,
        }
    }

    /// Apply the input-mode configuration.
    ///
    /// After this call the input stream yields structured event records and
    /// is no longer consumable as line-buffered text. Mouse capture always
    /// negotiates full-range (SGR) coordinates; `report_extended_coordinates`
    /// cannot downgrade the encoding, only document the intent.
    pub fn enter(&mut self, options: CaptureOptions) -> Result<(), WatchError> {
        terminal::enable_raw_mode().map_err(WatchError::Configuration)?;
        self.raw_mode = true;

        if options.report_mouse {
            self.buf.clear();
            self.buf
                .queue(EnableMouseCapture)
                .map_err(WatchError::Configuration)?;
            self.flush_buf().map_err(WatchError::Configuration)?;
            self.mouse_capture = true;
        }
        Ok(())
    }

    /// Restore the terminal to its inherited state.
    pub fn exit(&mut self) -> Result<()> {
        if self.mouse_capture {
            self.buf.clear();
            self.buf.queue(DisableMouseCapture)?;
            self.flush_buf()?;
            self.mouse_capture = false;
        }
        if self.raw_mode {
            terminal::disable_raw_mode()?;
            self.raw_mode = false;
        }
        Ok(())
    }

    /// Write one line at the current cursor row and advance.
    pub fn print_line(&mut self, text: &str) -> Result<()> {
        self.buf.clear();
        self.buf.queue(cursor::MoveToColumn(0))?;
        self.buf.queue(Print(text))?;
        self.buf.queue(Print("\r\n"))?;
        self.flush_buf()?;
        self.cursor_row = (self.cursor_row + 1).min(self.height.saturating_sub(1));
        Ok(())
    }

    /// Blank and rewrite the status row.
    ///
    /// The target is the row above the current cursor row, clamped at row 0.
    /// The full row width is overwritten with blanks before the line is
    /// written, so a shorter line never shows remnants of a longer one. The
    /// trailing line break leaves the cursor exactly one row below the
    /// target, which makes repeated rewrites land on the same row.
    pub fn rewrite_status(&mut self, line: &str) -> Result<()> {
        let target = self.cursor_row.saturating_sub(1);
        let blank = " ".repeat(self.width as usize);

        self.buf.clear();
        self.buf.queue(cursor::MoveTo(0, target))?;
        self.buf.queue(Print(blank))?;
        self.buf.queue(cursor::MoveTo(0, target))?;
        self.buf.queue(Print(line))?;
        self.buf.queue(Print("\r\n"))?;
        self.flush_buf()?;

        self.cursor_row = (target + 1).min(self.height.saturating_sub(1));
        Ok(())
    }

    pub fn cursor_row(&self) -> u16 {
        self.cursor_row
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// Borrow the underlying writer (inspection of emitted bytes).
    pub fn writer(&self) -> &W {
        &self.out
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}
