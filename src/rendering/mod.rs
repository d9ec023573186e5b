use macroquad::prelude::*;

use crate::application::GameState;
use crate::domain::Grid;
use crate::ui::{Button, CELL_SIZE, Control, PANEL_WIDTH, panel_x};

const ALIVE_COLOR: Color = Color::new(0.0, 1.0, 0.59, 1.0);
const DEAD_COLOR: Color = Color::new(0.06, 0.06, 0.06, 1.0);
const GRID_LINE_COLOR: Color = Color::new(0.16, 0.16, 0.16, 1.0);
const PANEL_COLOR: Color = Color::new(0.12, 0.12, 0.12, 1.0);

/// Draw every cell of the board, one square per cell
pub fn draw_grid(grid: &Grid) {
    grid.for_each_cell(|x, y, cell| {
        let screen_x = x as f32 * CELL_SIZE;
        let screen_y = y as f32 * CELL_SIZE;
        let fill = if cell.is_alive() { ALIVE_COLOR } else { DEAD_COLOR };

        draw_rectangle(screen_x, screen_y, CELL_SIZE, CELL_SIZE, fill);
        draw_rectangle_lines(screen_x, screen_y, CELL_SIZE, CELL_SIZE, 1.0, GRID_LINE_COLOR);
    });
}

/// Draw the control panel with buttons and session info
pub fn draw_controls(
    state: &GameState,
    buttons: &[(Control, Button)],
    pattern_label: &str,
    mouse_pos: (f32, f32),
) {
    let px = panel_x();
    draw_rectangle(px, 0.0, PANEL_WIDTH, screen_height(), PANEL_COLOR);

    buttons.iter().for_each(|(control, button)| {
        let active = *control == Control::PlayPause && state.is_running();
        button.draw(mouse_pos, active);
    });

    let (status, status_color) = if state.is_running() {
        ("Running", GREEN)
    } else {
        ("Paused", ORANGE)
    };

    let generation = state.generation.to_string();
    let population = state.grid.population().to_string();
    let labels: [(&str, f32, Color); 12] = [
        ("Generation:", 16.0, WHITE),
        (generation.as_str(), 20.0, ALIVE_COLOR),
        ("Population:", 16.0, WHITE),
        (population.as_str(), 16.0, LIGHTGRAY),
        ("Status:", 16.0, WHITE),
        (status, 16.0, status_color),
        ("Next pattern:", 14.0, WHITE),
        (pattern_label, 14.0, LIGHTGRAY),
        ("Click: toggle cell", 12.0, GRAY),
        ("N step  Space play", 12.0, GRAY),
        ("C clear  R random", 12.0, GRAY),
        ("L load pattern", 12.0, GRAY),
    ];

    let first_line = 300.0;
    labels.iter().enumerate().for_each(|(idx, (text, size, color))| {
        draw_text(text, px + 10.0, first_line + idx as f32 * 22.0, *size, *color);
    });
}
