//! Keyboard capture for one rendered frame.

use gridfall_app::app_loop::FrameInput;
use macroquad::prelude::{KeyCode, get_char_pressed, is_key_pressed};

const ACTION_KEYS: [KeyCode; 8] = [
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::Space,
    KeyCode::Enter,
    KeyCode::Escape,
    KeyCode::Backspace,
];

pub fn capture_frame_input() -> FrameInput {
    let mut input = FrameInput::default();
    for key in ACTION_KEYS {
        if is_key_pressed(key) {
            input.keys_pressed.push(key);
        }
    }
    while let Some(ch) = get_char_pressed() {
        input.typed.push(ch);
    }
    input
}
