use log::{debug, error};
use macroquad::prelude::*;

use crate::application::{GameState, PatternSource};
use crate::ui::{Button, Control, board_area_width, screen_to_cell};

/// Apply one panel control to the session
pub fn apply_control(state: GameState, control: Control, source: &mut PatternSource) -> GameState {
    match control {
        Control::Step => state.step(),
        Control::PlayPause => state.toggle_running(),
        Control::Clear => state.clear(),
        Control::Random => state.randomize(),
        Control::LoadPattern => load_next_pattern(state, source),
    }
}

fn load_next_pattern(mut state: GameState, source: &mut PatternSource) -> GameState {
    match source.next_pattern() {
        Ok(pattern) => {
            state.load_preset(&pattern);
        }
        Err(err) => error!("could not load pattern: {err:#}"),
    }
    state
}

/// Toggle the cell under a left click on the board
pub fn handle_cell_click(state: &mut GameState, mouse_pos: (f32, f32)) {
    if !is_mouse_button_pressed(MouseButton::Left) || mouse_pos.0 >= board_area_width() {
        return;
    }

    let (x, y) = screen_to_cell(mouse_pos.0, mouse_pos.1);
    // Clicks on the window edge can round off the board
    if let Err(err) = state.toggle_cell(x, y) {
        debug!("ignored click: {err}");
    }
}

/// Process keyboard shortcuts functionally
pub fn process_keyboard_input(state: GameState, source: &mut PatternSource) -> GameState {
    const KEYS: [(KeyCode, Control); 5] = [
        (KeyCode::N, Control::Step),
        (KeyCode::Space, Control::PlayPause),
        (KeyCode::C, Control::Clear),
        (KeyCode::R, Control::Random),
        (KeyCode::L, Control::LoadPattern),
    ];

    KEYS.iter().fold(state, |s, &(key, control)| {
        if is_key_pressed(key) {
            apply_control(s, control, source)
        } else {
            s
        }
    })
}

/// Process button clicks functionally
pub fn process_button_clicks(
    state: GameState,
    buttons: &[(Control, Button)],
    source: &mut PatternSource,
    mouse_pos: (f32, f32),
) -> GameState {
    buttons.iter().fold(state, |s, (control, button)| {
        if button.is_clicked(mouse_pos) {
            apply_control(s, *control, source)
        } else {
            s
        }
    })
}
