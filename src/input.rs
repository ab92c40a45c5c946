use macroquad::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputEvent {
    Quit,
    KeyDown(KeyCode),
    PointerDown { button: MouseButton, pos: Vec2 },
}

/// Drains this frame's input into events. Needs `prevent_quit()` to have
/// been called so a window close shows up as `Quit` instead of exiting.
pub fn poll_events() -> Vec<InputEvent> {
    let pos = pointer();
    let buttons = [MouseButton::Left, MouseButton::Right, MouseButton::Middle];
    let presses: Vec<(MouseButton, Vec2)> = buttons
        .into_iter()
        .filter(|b| is_mouse_button_pressed(*b))
        .map(|b| (b, pos))
        .collect();
    frame_events(is_quit_requested(), get_keys_pressed(), presses)
}

/// Orders one frame's input: quit, then pointer presses, then keys sorted by
/// code. Clicks go first so a key pressed alongside Retry steers the new round.
pub fn frame_events(
    quit: bool,
    keys: impl IntoIterator<Item = KeyCode>,
    presses: impl IntoIterator<Item = (MouseButton, Vec2)>,
) -> Vec<InputEvent> {
    let mut events = Vec::new();
    if quit {
        events.push(InputEvent::Quit);
    }
    events.extend(presses.into_iter().map(|(button, pos)| InputEvent::PointerDown { button, pos }));

    // macroquad hands keys back unordered; keep frames reproducible.
    let mut keys: Vec<KeyCode> = keys.into_iter().collect();
    keys.sort_by_key(|k| *k as u32);
    events.extend(keys.into_iter().map(InputEvent::KeyDown));
    events
}

pub fn pointer() -> Vec2 {
    let (x, y) = mouse_position();
    vec2(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_then_clicks_then_keys() {
        let events = frame_events(true, [KeyCode::W], [(MouseButton::Left, vec2(3.0, 4.0))]);
        assert_eq!(
            events,
            vec![
                InputEvent::Quit,
                InputEvent::PointerDown { button: MouseButton::Left, pos: vec2(3.0, 4.0) },
                InputEvent::KeyDown(KeyCode::W),
            ]
        );
    }

    #[test]
    fn keys_come_out_in_a_fixed_order() {
        let none: [(MouseButton, Vec2); 0] = [];
        let a = frame_events(false, [KeyCode::W, KeyCode::Up], none);
        let b = frame_events(false, [KeyCode::Up, KeyCode::W], none);
        assert_eq!(a, b);
        assert_eq!(a.len(), 2);
    }
}
