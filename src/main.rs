use std::time::Duration;

use macroquad::prelude::*;

use conway_life::{
    LifeConfig, Simulator,
    input::{self, Brush, Painter},
    rendering,
    ui::{self, Dropdown},
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: 900,
        window_height: 720,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Developer-friendly default logging (info+) unless RUST_LOG overrides
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();

    let config = match LifeConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{e}; falling back to defaults");
            LifeConfig::default()
        }
    };
    let mut sim = match Simulator::from_config(&config) {
        Ok(sim) => sim,
        Err(e) => {
            log::error!("cannot start simulator: {e}");
            return;
        }
    };

    // Classic opening position: a glider in the top-left corner
    if let Err(e) = sim.stamp_named("Glider", 0, 0) {
        log::warn!("initial glider not placed: {e}");
    }

    let pattern_names: Vec<&'static str> = sim.library().names().collect();
    let mut painter = Painter::new(pattern_names[0]);

    let px = ui::panel_x();
    let mut brush_dropdown = Dropdown::new(
        px,
        40.0,
        ui::PANEL_WIDTH,
        "Brush",
        Brush::all().iter().map(Brush::name).collect(),
    );
    let mut pattern_dropdown = Dropdown::new(px, 100.0, ui::PANEL_WIDTH, "Pattern", pattern_names);

    loop {
        let mouse_pos = mouse_position();
        let px = ui::panel_x();
        brush_dropdown.set_position(px, 40.0);
        pattern_dropdown.set_position(px, 100.0);
        let buttons = ui::create_buttons(sim.is_running());
        let cell_size = ui::cell_size(sim.grid().size());

        // Only one list open at a time; an open list swallows the click
        let over_menu = brush_dropdown.contains(mouse_pos) || pattern_dropdown.contains(mouse_pos);
        if brush_dropdown.update(mouse_pos) {
            painter.brush = Brush::all()[brush_dropdown.selected()];
        }
        if brush_dropdown.is_open() {
            pattern_dropdown.close();
        }
        if pattern_dropdown.update(mouse_pos) {
            painter.select_pattern(pattern_dropdown.selected_item());
        }
        if pattern_dropdown.is_open() {
            brush_dropdown.close();
        }

        if !over_menu {
            input::process_button_clicks(&mut sim, &buttons, mouse_pos);
            input::handle_mouse_paint(&mut sim, &mut painter, mouse_pos, cell_size);
        }
        input::process_keyboard_input(&mut sim, &mut painter);
        brush_dropdown.set_selected(Brush::all().iter().position(|b| *b == painter.brush).unwrap_or(0));

        sim.advance(Duration::from_secs_f32(get_frame_time()));

        clear_background(BLACK);
        rendering::draw_grid(sim.grid(), cell_size);
        if painter.brush == Brush::Stamp && mouse_pos.0 < ui::grid_area_width() {
            let size = sim.grid().size();
            if let (Some(anchor), Ok(pattern)) = (
                input::screen_to_cell(mouse_pos.0, mouse_pos.1, cell_size, size),
                sim.library().get(painter.pattern),
            ) {
                rendering::draw_pattern_preview(pattern, anchor, size, cell_size);
            }
        }
        rendering::draw_controls(&sim, &painter, &buttons, &[&brush_dropdown, &pattern_dropdown], mouse_pos);

        next_frame().await;
    }
}
