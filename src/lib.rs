//! Terminal mouse monitor (workspace facade crate).
//!
//! This package keeps the public `mouse_watch::{types,input,term}` API in one
//! place while the implementation lives in dedicated crates under `crates/`.

pub use mouse_watch_input as input;
pub use mouse_watch_term as term;
pub use mouse_watch_types as types;
