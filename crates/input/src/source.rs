//! Terminal-backed blocking event source.

use std::io;

use crossterm::event;
use crossterm::tty::IsTty;

use crate::decode::decode_event;
use crate::types::{EventSource, InputRecord, WatchError};

/// Event source bound to the process's inherited standard input terminal.
///
/// This is the monitor's single blocking point: [`EventSource::read_next_event`]
/// suspends the calling thread until the terminal delivers a record.
pub struct TerminalEventSource {
    _private: (),
}

impl TerminalEventSource {
    /// Bind to the standard input stream.
    ///
    /// Fails with [`WatchError::DeviceUnavailable`] when stdin is redirected
    /// away from a terminal; no structured event would ever arrive, so
    /// callers treat this as fatal.
    pub fn open() -> Result<Self, WatchError> {
        if !io::stdin().is_tty() {
            return Err(WatchError::DeviceUnavailable);
        }
        Ok(Self { _private: () })
    }
}

impl EventSource for TerminalEventSource {
    fn read_next_event(&mut self) -> Result<InputRecord, WatchError> {
        let event = event::read().map_err(WatchError::Read)?;
        Ok(decode_event(event))
    }
}
