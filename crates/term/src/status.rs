//! Status-line classification and formatting.

use crate::types::{MouseEvent, BUTTON_PRIMARY, BUTTON_SECONDARY};

/// Format the status line for one mouse record.
///
/// Pure classification over the two bitmasks:
/// - primary bit alone → `Left button pressed at (X, Y)`
/// - secondary bit alone → `Right button pressed at (X, Y)`
/// - zero flags with neither named button bit → `Mouse moved to (X, Y)`
/// - everything else → `None`
///
/// Chorded buttons and release transitions intentionally render nothing;
/// presses of unnamed buttons (zero flags, bits 0/1 clear) fall through to
/// the movement line.
pub fn format_status(event: &MouseEvent) -> Option<String> {
    if event.buttons == BUTTON_PRIMARY {
        Some(format!("Left button pressed at ({}, {})", event.x, event.y))
    } else if event.buttons == BUTTON_SECONDARY {
        Some(format!("Right button pressed at ({}, {})", event.x, event.y))
    } else if event.flags == 0 && event.buttons & (BUTTON_PRIMARY | BUTTON_SECONDARY) == 0 {
        Some(format!("Mouse moved to ({}, {})", event.x, event.y))
    } else {
        None
    }
}
