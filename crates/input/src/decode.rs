//! Classification of raw terminal events into input records.

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};

use crate::types::{
    InputRecord, Key, KeyEvent, MouseEvent, BUTTON_MIDDLE, BUTTON_PRIMARY, BUTTON_SECONDARY,
    FLAG_HWHEEL, FLAG_RELEASE, FLAG_WHEEL,
};

/// Decode one raw terminal event.
///
/// Total over every event kind: anything that is neither a mouse nor a key
/// event (resize, focus changes, pastes) decodes to [`InputRecord::Ignored`].
/// Position and bitmasks are taken verbatim; no clamping or coalescing
/// happens here.
pub fn decode_event(event: Event) -> InputRecord {
    match event {
        Event::Mouse(mouse) => InputRecord::Mouse(decode_mouse(mouse)),
        Event::Key(key) => InputRecord::Key(decode_key(key)),
        _ => InputRecord::Ignored,
    }
}

fn decode_mouse(mouse: crossterm::event::MouseEvent) -> MouseEvent {
    // Presses and drags report the held button with zero flags; a flags
    // value of zero therefore means "plain movement or press". Releases and
    // wheel ticks carry a transition flag instead of a button bit.
    let (buttons, flags) = match mouse.kind {
        MouseEventKind::Down(button) | MouseEventKind::Drag(button) => (button_bit(button), 0),
        MouseEventKind::Up(_) => (0, FLAG_RELEASE),
        MouseEventKind::Moved => (0, 0),
        MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => (0, FLAG_WHEEL),
        MouseEventKind::ScrollLeft | MouseEventKind::ScrollRight => (0, FLAG_HWHEEL),
    };

    MouseEvent {
        x: mouse.column as i16,
        y: mouse.row as i16,
        buttons,
        flags,
    }
}

fn button_bit(button: MouseButton) -> u32 {
    match button {
        MouseButton::Left => BUTTON_PRIMARY,
        MouseButton::Right => BUTTON_SECONDARY,
        MouseButton::Middle => BUTTON_MIDDLE,
    }
}

fn decode_key(key: crossterm::event::KeyEvent) -> KeyEvent {
    KeyEvent {
        down: key.kind != KeyEventKind::Release,
        key: match key.code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Esc => Key::Esc,
            KeyCode::Enter => Key::Enter,
            _ => Key::Other,
        },
        ctrl: key.modifiers.contains(KeyModifiers::CONTROL),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(crossterm::event::MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn left_press_sets_primary_bit_with_zero_flags() {
        let record = decode_event(mouse(MouseEventKind::Down(MouseButton::Left), 10, 5));
        assert_eq!(
            record,
            InputRecord::Mouse(MouseEvent {
                x: 10,
                y: 5,
                buttons: BUTTON_PRIMARY,
                flags: 0,
            })
        );
    }

    #[test]
    fn right_press_sets_secondary_bit() {
        let record = decode_event(mouse(MouseEventKind::Down(MouseButton::Right), 0, 0));
        assert_eq!(
            record,
            InputRecord::Mouse(MouseEvent {
                x: 0,
                y: 0,
                buttons: BUTTON_SECONDARY,
                flags: 0,
            })
        );
    }

    #[test]
    fn plain_movement_is_all_zero_masks() {
        let record = decode_event(mouse(MouseEventKind::Moved, 3, 3));
        assert_eq!(
            record,
            InputRecord::Mouse(MouseEvent {
                x: 3,
                y: 3,
                buttons: 0,
                flags: 0,
            })
        );
    }

    #[test]
    fn release_carries_transition_flag_not_button_bit() {
        let record = decode_event(mouse(MouseEventKind::Up(MouseButton::Left), 7, 2));
        match record {
            InputRecord::Mouse(ev) => {
                assert_eq!(ev.buttons, 0);
                assert_eq!(ev.flags, FLAG_RELEASE);
            }
            other => panic!("expected mouse record, got {other:?}"),
        }
    }

    #[test]
    fn drag_keeps_the_held_button_bit() {
        let record = decode_event(mouse(MouseEventKind::Drag(MouseButton::Left), 4, 4));
        assert_eq!(
            record,
            InputRecord::Mouse(MouseEvent {
                x: 4,
                y: 4,
                buttons: BUTTON_PRIMARY,
                flags: 0,
            })
        );
    }

    #[test]
    fn wheel_ticks_map_to_wheel_flags() {
        for kind in [MouseEventKind::ScrollUp, MouseEventKind::ScrollDown] {
            match decode_event(mouse(kind, 1, 1)) {
                InputRecord::Mouse(ev) => assert_eq!(ev.flags, FLAG_WHEEL),
                other => panic!("expected mouse record, got {other:?}"),
            }
        }
        match decode_event(mouse(MouseEventKind::ScrollLeft, 1, 1)) {
            InputRecord::Mouse(ev) => assert_eq!(ev.flags, FLAG_HWHEEL),
            other => panic!("expected mouse record, got {other:?}"),
        }
    }

    #[test]
    fn key_press_and_release_map_to_down_transitions() {
        let press = decode_event(Event::Key(crossterm::event::KeyEvent::from(KeyCode::Char(
            'q',
        ))));
        assert_eq!(
            press,
            InputRecord::Key(KeyEvent {
                down: true,
                key: Key::Char('q'),
                ctrl: false,
            })
        );

        let release = decode_event(Event::Key(crossterm::event::KeyEvent::new_with_kind(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        )));
        assert_eq!(
            release,
            InputRecord::Key(KeyEvent {
                down: false,
                key: Key::Char('q'),
                ctrl: false,
            })
        );
    }

    #[test]
    fn ctrl_modifier_is_preserved() {
        let record = decode_event(Event::Key(crossterm::event::KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert_eq!(
            record,
            InputRecord::Key(KeyEvent {
                down: true,
                key: Key::Char('c'),
                ctrl: true,
            })
        );
    }

    #[test]
    fn resize_and_focus_events_are_ignorable() {
        assert_eq!(decode_event(Event::Resize(80, 24)), InputRecord::Ignored);
        assert_eq!(decode_event(Event::FocusGained), InputRecord::Ignored);
        assert_eq!(decode_event(Event::FocusLost), InputRecord::Ignored);
    }
}
