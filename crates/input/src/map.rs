//! Exit-key mapping for decoded key records.

use crate::types::{Key, KeyEvent};

/// Check if a key record should terminate the monitor.
///
/// Only down transitions are actionable. `allow_processed_keys` mirrors the
/// processed-input console mode: when set, Ctrl+C acts as an interrupt key;
/// when clear it is delivered like any other key and does nothing.
pub fn should_quit(key: &KeyEvent, allow_processed_keys: bool) -> bool {
    if !key.down {
        return false;
    }

    match key.key {
        Key::Char('q') | Key::Char('Q') | Key::Esc => true,
        Key::Char('c') | Key::Char('C') if key.ctrl => allow_processed_keys,
        _ => false,
    }
}
