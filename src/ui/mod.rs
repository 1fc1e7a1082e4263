mod button;
mod dropdown;

pub use button::Button;
pub use dropdown::Dropdown;

use macroquad::prelude::{Color, screen_height, screen_width};

use crate::input::ControlAction;

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the grid area
pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Largest square cell that fits the whole board in the grid area
pub fn cell_size(grid_size: usize) -> f32 {
    grid_area_width().min(grid_area_height()) / grid_size.max(1) as f32
}

/// Create the control buttons; the run button shows what a click will do
pub fn create_buttons(running: bool) -> Vec<Button> {
    let px = panel_x();
    let run = if running {
        Button::new(px, 150.0, PANEL_WIDTH, BUTTON_HEIGHT, "Stop", ControlAction::ToggleRun)
            .with_colors(Color::from_rgba(180, 50, 50, 255), Color::from_rgba(220, 80, 80, 255))
    } else {
        Button::new(px, 150.0, PANEL_WIDTH, BUTTON_HEIGHT, "Run", ControlAction::ToggleRun)
            .with_colors(Color::from_rgba(40, 140, 60, 255), Color::from_rgba(60, 180, 90, 255))
    };
    vec![
        run,
        Button::new(px, 200.0, PANEL_WIDTH, BUTTON_HEIGHT, "Next", ControlAction::Next),
        Button::new(px, 250.0, PANEL_WIDTH, BUTTON_HEIGHT, "Reset", ControlAction::Reset),
        Button::new(px, 300.0, PANEL_WIDTH, BUTTON_HEIGHT, "Randomize", ControlAction::Randomize),
        Button::new(px, 350.0, PANEL_WIDTH / 2.0 - 5.0, BUTTON_HEIGHT, "Faster", ControlAction::Faster),
        Button::new(
            px + PANEL_WIDTH / 2.0 + 5.0,
            350.0,
            PANEL_WIDTH / 2.0 - 5.0,
            BUTTON_HEIGHT,
            "Slower",
            ControlAction::Slower,
        ),
    ]
}
