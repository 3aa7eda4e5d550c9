//! Terminal session and status-line rendering.
//!
//! This crate owns the write side of the monitor and the loop that ties the
//! two sides together. Rendering is deliberately tiny: one screen row is
//! blanked and rewritten per event, so steady-state operation never scrolls
//! the terminal.
//!
//! Goals:
//! - Keep classification/formatting pure and testable
//! - Route every terminal write through one queued-command buffer
//! - Let tests drive the loop with a scripted source and an in-memory writer

pub mod monitor;
pub mod session;
pub mod status;

pub use mouse_watch_input as input;
pub use mouse_watch_types as types;

pub use monitor::{Monitor, Step};
pub use session::TerminalSession;
pub use status::format_status;
