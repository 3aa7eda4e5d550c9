//! Terminal input module.
//!
//! This crate owns the read side of the monitor: binding to the terminal's
//! input stream, blocking for one raw event at a time, and decoding raw
//! crossterm events into the plain [`types::InputRecord`] model. It is
//! independent of any rendering concern so the event loop can be driven by
//! a scripted source in tests.

pub mod decode;
pub mod map;
pub mod source;

pub use mouse_watch_types as types;

pub use decode::decode_event;
pub use map::should_quit;
pub use source::TerminalEventSource;
