//! Core types module - shared event model and error taxonomy.
//!
//! This crate defines the fundamental types used throughout the application.
//! The event model is plain data with no terminal dependencies, so the
//! decoder, the renderer and test doubles can all share it.
//!
//! # Bitmask conventions
//!
//! Mouse records carry two bitmasks, kept verbatim from the console event
//! that produced them:
//!
//! | Field | Meaning |
//! |-------|---------|
//! | `buttons` | bit per currently pressed button (`BUTTON_*`) |
//! | `flags` | kind of transition; `0` is plain movement or a press |
//!
//! Only the primary and secondary button bits are individually classified
//! by the status line; other bits are preserved untouched for callers that
//! want to inspect them.
//!
//! # Examples
//!
//! ```
//! use mouse_watch_types::{InputRecord, MouseEvent, BUTTON_PRIMARY};
//!
//! let record = InputRecord::Mouse(MouseEvent {
//!     x: 10,
//!     y: 5,
//!     buttons: BUTTON_PRIMARY,
//!     flags: 0,
//! });
//! assert!(matches!(record, InputRecord::Mouse(_)));
//! ```

use std::io;

use thiserror::Error;

/// Primary (left) mouse button bit in [`MouseEvent::buttons`].
pub const BUTTON_PRIMARY: u32 = 0x0001;

/// Secondary (right) mouse button bit in [`MouseEvent::buttons`].
pub const BUTTON_SECONDARY: u32 = 0x0002;

/// Middle mouse button bit. Preserved in the mask but never classified on
/// its own by the status line.
pub const BUTTON_MIDDLE: u32 = 0x0004;

/// [`MouseEvent::flags`] bit for a button release transition.
pub const FLAG_RELEASE: u32 = 0x0001;

/// [`MouseEvent::flags`] bit for a vertical wheel tick.
pub const FLAG_WHEEL: u32 = 0x0004;

/// [`MouseEvent::flags`] bit for a horizontal wheel tick.
pub const FLAG_HWHEEL: u32 = 0x0008;

/// One decoded unit from the terminal's input event queue.
///
/// Records are produced one at a time by an [`EventSource`], consumed by the
/// event loop, and discarded after rendering. Event kinds the monitor has no
/// use for (resize, focus, paste) decode to [`InputRecord::Ignored`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputRecord {
    Mouse(MouseEvent),
    Key(KeyEvent),
    Ignored,
}

/// A mouse movement or button transition, in character-cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    pub x: i16,
    pub y: i16,
    /// Button-state bitmask (`BUTTON_*` bits).
    pub buttons: u32,
    /// Event-flags bitmask (`FLAG_*` bits); `0` is plain movement or a press.
    pub flags: u32,
}

/// A key transition.
///
/// `key` is the portable stand-in for a virtual scan code; [`Key::Char`]
/// carries the character payload when there is one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// `true` for press/repeat, `false` for release.
    pub down: bool,
    pub key: Key,
    /// Control modifier held during the transition.
    pub ctrl: bool,
}

/// Portable key identity, reduced to what the monitor can act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Esc,
    Enter,
    Other,
}

/// Terminal input-mode configuration applied once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureOptions {
    /// Report mouse movement and button transitions as input records.
    pub report_mouse: bool,
    /// Request full-range (SGR) coordinates instead of the legacy encoding.
    pub report_extended_coordinates: bool,
    /// Treat Ctrl+C as an interrupt rather than an ordinary key record.
    pub allow_processed_keys: bool,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            report_mouse: true,
            report_extended_coordinates: true,
            allow_processed_keys: true,
        }
    }
}

/// Fatal failures of the monitor. There is no retry policy: a missing
/// terminal or rejected mode change is not transient in an interactive
/// session, and a failed read means the input stream is gone.
#[derive(Debug, Error)]
pub enum WatchError {
    #[error("standard input is not attached to a terminal")]
    DeviceUnavailable,
    #[error("terminal refused input-mode configuration")]
    Configuration(#[source] io::Error),
    #[error("failed to read terminal input")]
    Read(#[source] io::Error),
}

/// Capability seam for the blocking event read.
///
/// The terminal-backed implementation lives in the input crate; tests drive
/// the event loop with a scripted implementation instead.
pub trait EventSource {
    /// Block until the next input record is available and return exactly one.
    fn read_next_event(&mut self) -> Result<InputRecord, WatchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_bits_follow_console_conventions() {
        // Bit layout matches the classic console button-state encoding.
        assert_eq!(BUTTON_PRIMARY, 0x0001);
        assert_eq!(BUTTON_SECONDARY, 0x0002);
        assert_eq!(BUTTON_MIDDLE, 0x0004);
        assert_eq!(BUTTON_PRIMARY & BUTTON_SECONDARY, 0);
    }

    #[test]
    fn default_options_enable_full_reporting() {
        let options = CaptureOptions::default();
        assert!(options.report_mouse);
        assert!(options.report_extended_coordinates);
        assert!(options.allow_processed_keys);
    }

    #[test]
    fn watch_error_messages_name_the_failing_stage() {
        let err = WatchError::DeviceUnavailable;
        assert!(err.to_string().contains("terminal"));

        let err = WatchError::Read(io::Error::new(io::ErrorKind::Other, "gone"));
        assert!(err.to_string().contains("read"));
    }
}
