use macroquad::prelude::*;

const IDLE_COLOR: Color = Color::new(0.27, 0.51, 0.71, 1.0);
const HOVER_COLOR: Color = Color::new(0.39, 0.58, 0.93, 1.0);
const ACTIVE_COLOR: Color = Color::new(0.0, 0.6, 0.35, 1.0);
const FONT_SIZE: u16 = 20;

/// Panel button: a labelled rectangle that reports clicks
#[derive(Clone, Debug)]
pub struct Button {
    rect: Rect,
    label: String,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, label: impl Into<String>) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            label: label.into(),
        }
    }

    /// Check if the pointer is over the button
    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        self.rect.contains(vec2(mouse_pos.0, mouse_pos.1))
    }

    /// Draw the button; `active` marks a latched control such as a running auto-play
    pub fn draw(&self, mouse_pos: (f32, f32), active: bool) {
        let fill = match (active, self.is_hovered(mouse_pos)) {
            (true, _) => ACTIVE_COLOR,
            (false, true) => HOVER_COLOR,
            (false, false) => IDLE_COLOR,
        };
        let Rect { x, y, w, h } = self.rect;

        draw_rectangle(x, y, w, h, fill);
        draw_rectangle_lines(x, y, w, h, 2.0, WHITE);

        let text = measure_text(&self.label, None, FONT_SIZE, 1.0);
        draw_text(
            &self.label,
            x + (w - text.width) / 2.0,
            y + (h + text.height) / 2.0,
            FONT_SIZE as f32,
            WHITE,
        );
    }

    /// Check if the button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}
