use macroquad::prelude::*;

use crate::application::Simulator;
use crate::domain::LifeError;
use crate::ui::{Button, grid_area_width};

/// What a click or drag on the board does
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Brush {
    #[default]
    Paint,
    Toggle,
    Erase,
    Stamp,
}

impl Brush {
    /// Menu order
    pub fn all() -> [Brush; 4] {
        [Brush::Paint, Brush::Toggle, Brush::Erase, Brush::Stamp]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Brush::Paint => "Paint",
            Brush::Toggle => "Toggle",
            Brush::Erase => "Erase",
            Brush::Stamp => "Stamp",
        }
    }
}

/// Operator commands bound to buttons and keys
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlAction {
    ToggleRun,
    Next,
    Reset,
    Randomize,
    Faster,
    Slower,
}

/// Route a control command to the simulator
pub fn apply_action(sim: &mut Simulator, action: ControlAction) {
    match action {
        ControlAction::ToggleRun => sim.toggle_running(),
        ControlAction::Next => sim.step(),
        ControlAction::Reset => sim.reset(),
        ControlAction::Randomize => sim.randomize(),
        ControlAction::Faster => {
            sim.set_speed(sim.speed().faster().millis());
        }
        ControlAction::Slower => {
            sim.set_speed(sim.speed().slower().millis());
        }
    }
}

/// Map a screen position to a board cell, `None` when off the board.
/// The board is drawn from the window's top-left corner.
pub fn screen_to_cell(x: f32, y: f32, cell_size: f32, grid_size: usize) -> Option<(usize, usize)> {
    if x < 0.0 || y < 0.0 || cell_size <= 0.0 {
        return None;
    }
    let row = (y / cell_size) as usize;
    let col = (x / cell_size) as usize;
    (row < grid_size && col < grid_size).then_some((row, col))
}

/// Turns pointer strokes into coordinate edits.
///
/// A held button applies the brush once per cell entered, so dragging a
/// toggle brush across a cell flips it exactly once.
#[derive(Debug, Default)]
pub struct Painter {
    pub brush: Brush,
    /// Library name of the pattern the stamp brush places
    pub pattern: &'static str,
    last_cell: Option<(usize, usize)>,
}

impl Painter {
    pub fn new(pattern: &'static str) -> Self {
        Self {
            brush: Brush::default(),
            pattern,
            last_cell: None,
        }
    }

    /// Choose the stamp pattern and switch to the stamp brush
    pub fn select_pattern(&mut self, pattern: &'static str) {
        self.pattern = pattern;
        self.brush = Brush::Stamp;
    }

    /// Feed one frame of pointer state: the cell under the cursor and whether
    /// the primary button is held. Returns true if the grid was edited.
    pub fn stroke(
        &mut self,
        sim: &mut Simulator,
        cell: Option<(usize, usize)>,
        held: bool,
    ) -> Result<bool, LifeError> {
        if !held {
            self.last_cell = None;
            return Ok(false);
        }
        let Some((row, col)) = cell else {
            return Ok(false);
        };
        if self.last_cell == Some((row, col)) {
            return Ok(false);
        }
        self.last_cell = Some((row, col));

        match self.brush {
            Brush::Paint => sim.set(row, col, true)?,
            Brush::Toggle => sim.toggle(row, col)?,
            Brush::Erase => sim.set(row, col, false)?,
            Brush::Stamp => sim.stamp_named(self.pattern, row, col)?,
        }
        Ok(true)
    }
}

/// Apply the brush for the cell under the mouse
pub fn handle_mouse_paint(
    sim: &mut Simulator,
    painter: &mut Painter,
    mouse_pos: (f32, f32),
    cell_size: f32,
) {
    let cell = (mouse_pos.0 < grid_area_width())
        .then(|| screen_to_cell(mouse_pos.0, mouse_pos.1, cell_size, sim.grid().size()))
        .flatten();
    let held = is_mouse_button_down(MouseButton::Left);
    // Rejections are already logged by the simulator; a stamp hanging off the
    // board is a normal outcome of clicking near the edge.
    let _ = painter.stroke(sim, cell, held);
}

/// Keyboard shortcuts: Space run/stop, N next, C reset, R randomize,
/// Up/Down speed, 1-4 brush
pub fn process_keyboard_input(sim: &mut Simulator, painter: &mut Painter) {
    let actions = [
        (KeyCode::Space, ControlAction::ToggleRun),
        (KeyCode::N, ControlAction::Next),
        (KeyCode::C, ControlAction::Reset),
        (KeyCode::R, ControlAction::Randomize),
        (KeyCode::Up, ControlAction::Faster),
        (KeyCode::Down, ControlAction::Slower),
    ];
    actions
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .for_each(|(_, action)| apply_action(sim, *action));

    let brushes = [KeyCode::Key1, KeyCode::Key2, KeyCode::Key3, KeyCode::Key4];
    if let Some(idx) = brushes.iter().position(|key| is_key_pressed(*key)) {
        painter.brush = Brush::all()[idx];
    }
}

/// Run the action of every button clicked this frame
pub fn process_button_clicks(sim: &mut Simulator, buttons: &[Button], mouse_pos: (f32, f32)) {
    buttons
        .iter()
        .filter(|btn| btn.is_clicked(mouse_pos))
        .for_each(|btn| apply_action(sim, btn.action()));
}
