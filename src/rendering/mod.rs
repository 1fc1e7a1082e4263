use macroquad::prelude::*;

use crate::application::Simulator;
use crate::domain::{Grid, Pattern};
use crate::input::Painter;
use crate::ui::{Button, Dropdown, PANEL_WIDTH, panel_x};

const ALIVE_COLOR: Color = Color::new(0.0, 1.0, 0.59, 1.0);
const DEAD_COLOR: Color = Color::new(0.06, 0.06, 0.06, 1.0);
const GRID_LINE_COLOR: Color = Color::new(0.16, 0.16, 0.16, 1.0);

/// Draw every cell of the board from the top-left corner
pub fn draw_grid(grid: &Grid, cell_size: f32) {
    let draw_lines = cell_size >= 4.0;
    for (row, col, cell) in grid.iter_cells() {
        let x = col as f32 * cell_size;
        let y = row as f32 * cell_size;
        let color = if cell.is_alive() { ALIVE_COLOR } else { DEAD_COLOR };
        draw_rectangle(x, y, cell_size, cell_size, color);
        if draw_lines {
            draw_rectangle_lines(x, y, cell_size, cell_size, 1.0, GRID_LINE_COLOR);
        }
    }
}

/// Ghost of the stamp pattern anchored at the hovered cell.
/// Yellow outline when it fits, red when the stamp would be rejected.
pub fn draw_pattern_preview(pattern: &Pattern, anchor: (usize, usize), grid_size: usize, cell_size: f32) {
    let (row, col) = anchor;
    let fits = row + pattern.height() <= grid_size && col + pattern.width() <= grid_size;

    for &(dr, dc) in pattern.cells {
        let (r, c) = (row + dr, col + dc);
        if r < grid_size && c < grid_size {
            draw_rectangle(
                c as f32 * cell_size,
                r as f32 * cell_size,
                cell_size,
                cell_size,
                Color::from_rgba(0, 255, 150, 120),
            );
        }
    }

    let outline = if fits {
        Color::from_rgba(255, 255, 0, 180)
    } else {
        Color::from_rgba(255, 60, 60, 200)
    };
    draw_rectangle_lines(
        col as f32 * cell_size,
        row as f32 * cell_size,
        pattern.width() as f32 * cell_size,
        pattern.height() as f32 * cell_size,
        2.0,
        outline,
    );
}

/// Draw the side panel: buttons, status lines, then dropdowns on top
pub fn draw_controls(
    sim: &Simulator,
    painter: &Painter,
    buttons: &[Button],
    dropdowns: &[&Dropdown],
    mouse_pos: (f32, f32),
) {
    let px = panel_x();
    draw_rectangle(px, 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 30, 255));

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let grid = sim.grid();
    let status_color = if sim.is_running() {
        Color::from_rgba(0, 255, 0, 255)
    } else {
        Color::from_rgba(255, 165, 0, 255)
    };
    let lines = [
        (format!("Status: {}", if sim.is_running() { "Running" } else { "Paused" }), status_color),
        (format!("Generation: {}", sim.generation()), WHITE),
        (format!("Population: {}", grid.population()), WHITE),
        (format!("Grid: {0}x{0}", grid.size()), GRAY),
        (format!("Interval: {} ms", sim.speed().millis()), GRAY),
        (format!("Brush: {}", painter.brush.name()), GRAY),
        (format!("Stamp: {}", painter.pattern), GRAY),
    ];
    for (i, (text, color)) in lines.iter().enumerate() {
        draw_text(text, px + 5.0, 420.0 + i as f32 * 20.0, 16.0, *color);
    }

    let help = ["Space: Run/Stop", "N: Next  C: Reset", "R: Randomize", "Up/Down: Speed", "1-4: Brush"];
    for (i, text) in help.iter().enumerate() {
        draw_text(text, px + 5.0, 580.0 + i as f32 * 14.0, 12.0, GRAY);
    }

    // Closed dropdowns first so an open list draws over its neighbours
    let (open, closed): (Vec<&Dropdown>, Vec<&Dropdown>) =
        dropdowns.iter().copied().partition(|d| d.is_open());
    closed.iter().chain(open.iter()).for_each(|d| d.draw(mouse_pos));
}
