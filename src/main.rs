use std::path::PathBuf;
use std::time::Duration;

use log::{error, info};
use macroquad::prelude::*;

use bounded_life::{
    GameState, PatternSource,
    config::{GRID_HEIGHT, GRID_WIDTH},
    input, rendering,
    ui::{self, CELL_SIZE, PANEL_WIDTH},
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: (GRID_WIDTH as f32 * CELL_SIZE + PANEL_WIDTH) as i32,
        window_height: (GRID_HEIGHT as f32 * CELL_SIZE) as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    // Optional plain-text pattern file; without one, "Load" cycles the presets
    let mut source = PatternSource::new(std::env::args_os().nth(1).map(PathBuf::from));

    let mut state = match GameState::new(GRID_WIDTH, GRID_HEIGHT) {
        Ok(state) => state,
        Err(err) => {
            error!("could not create board: {err}");
            return;
        }
    };
    info!("{GRID_WIDTH}x{GRID_HEIGHT} board ready");

    loop {
        let mouse_pos = mouse_position();
        let buttons = ui::create_buttons();

        state = input::process_button_clicks(state, &buttons, &mut source, mouse_pos);
        input::handle_cell_click(&mut state, mouse_pos);
        state = input::process_keyboard_input(state, &mut source);

        state = state.tick(Duration::from_secs_f32(get_frame_time()));

        clear_background(BLACK);
        rendering::draw_grid(&state.grid);
        rendering::draw_controls(&state, &buttons, &source.describe_next(), mouse_pos);

        next_frame().await;
    }
}
