//! Terminal mouse monitor (default binary).
//!
//! Captures raw console input (mouse movement, button presses, key presses)
//! and mirrors it as a single status line rewritten in place, without
//! scrolling. Runs until the exit key or an interrupt.

use std::io::{self, Write};
use std::process;

use anyhow::Result;
use crossterm::event::DisableMouseCapture;
use crossterm::{execute, terminal};

use mouse_watch::input::TerminalEventSource;
use mouse_watch::term::{Monitor, TerminalSession};
use mouse_watch::types::CaptureOptions;

fn main() -> Result<()> {
    let options = CaptureOptions::default();

    let mut source = TerminalEventSource::open()?;
    let mut session = TerminalSession::from_terminal()?;
    session.enter(options)?;

    install_interrupt_handler()?;

    session.print_line("Mouse event capture started. Press q or Ctrl+C to exit.")?;

    let result = Monitor::new(options).run(&mut source, &mut session);

    // Always try to restore terminal state.
    let _ = session.exit();
    result
}

/// Final-notice-and-exit path for an external interrupt signal.
///
/// The handler runs on its own thread and must not touch the blocked event
/// read: it prints the notice, restores the terminal best-effort, and
/// terminates the process outright. The race with the main thread over the
/// last output line is accepted.
fn install_interrupt_handler() -> Result<()> {
    ctrlc::set_handler(|| {
        let mut out = io::stdout();
        let _ = out.write_all(b"\r\nExiting...\r\n");
        let _ = out.flush();
        let _ = execute!(io::stdout(), DisableMouseCapture);
        let _ = terminal::disable_raw_mode();
        process::exit(0);
    })?;
    Ok(())
}
