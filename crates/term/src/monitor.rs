//! The blocking read → decode → render event loop.

use std::io::Write;

use anyhow::Result;

use crate::input::should_quit;
use crate::session::TerminalSession;
use crate::status::format_status;
use crate::types::{CaptureOptions, EventSource, InputRecord};

/// Loop state after handling one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Running,
    Terminating,
}

/// Drives the session from an event source, one record at a time.
///
/// Records are handled strictly in arrival order with no batching or
/// coalescing: a rapid burst of movement records triggers one full
/// clear-and-rewrite each.
pub struct Monitor {
    options: CaptureOptions,
}

impl Monitor {
    pub fn new(options: CaptureOptions) -> Self {
        Self { options }
    }

    /// Handle one decoded record.
    ///
    /// Mouse records render (or silently don't, when classification yields
    /// nothing); a key-down matching the exit mapping terminates; everything
    /// else is consumed with no observable effect.
    pub fn step<W: Write>(
        &self,
        session: &mut TerminalSession<W>,
        record: InputRecord,
    ) -> Result<Step> {
        match record {
            InputRecord::Mouse(event) => {
                if let Some(line) = format_status(&event) {
                    session.rewrite_status(&line)?;
                }
                Ok(Step::Running)
            }
            InputRecord::Key(key) if should_quit(&key, self.options.allow_processed_keys) => {
                Ok(Step::Terminating)
            }
            _ => Ok(Step::Running),
        }
    }

    /// Block on the source until an exit key or a fatal read failure.
    ///
    /// The read is the only suspension point; rendering never blocks. On
    /// termination a final notice is printed and the loop returns success;
    /// a read failure propagates as the error it is.
    pub fn run<S, W>(&self, source: &mut S, session: &mut TerminalSession<W>) -> Result<()>
    where
        S: EventSource,
        W: Write,
    {
        loop {
            let record = source.read_next_event()?;
            if self.step(session, record)? == Step::Terminating {
                session.print_line("Exiting...")?;
                return Ok(());
            }
        }
    }
}
