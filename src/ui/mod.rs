mod button;

pub use button::Button;

use macroquad::prelude::screen_width;

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const BUTTON_GAP: f32 = 10.0;
pub const CELL_SIZE: f32 = 20.0;

/// Controls offered by the side panel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Step,
    PlayPause,
    Clear,
    Random,
    LoadPattern,
}

impl Control {
    pub const ALL: [Control; 5] = [
        Control::Step,
        Control::PlayPause,
        Control::Clear,
        Control::Random,
        Control::LoadPattern,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Control::Step => "Step",
            Control::PlayPause => "Play/Pause",
            Control::Clear => "Clear",
            Control::Random => "Random",
            Control::LoadPattern => "Load Pattern",
        }
    }
}

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the board area
pub fn board_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Map a screen position to the board cell under it.
/// May be off the board; the grid rejects such coordinates.
pub fn screen_to_cell(screen_x: f32, screen_y: f32) -> (i32, i32) {
    (
        (screen_x / CELL_SIZE).floor() as i32,
        (screen_y / CELL_SIZE).floor() as i32,
    )
}

/// Create one button per control, stacked at the top of the panel
pub fn create_buttons() -> Vec<(Control, Button)> {
    let px = panel_x();
    Control::ALL
        .iter()
        .enumerate()
        .map(|(idx, &control)| {
            let y = BUTTON_GAP + idx as f32 * (BUTTON_HEIGHT + BUTTON_GAP);
            let button = Button::new(
                px + BUTTON_GAP,
                y,
                PANEL_WIDTH - 2.0 * BUTTON_GAP,
                BUTTON_HEIGHT,
                control.label(),
            );
            (control, button)
        })
        .collect()
}
