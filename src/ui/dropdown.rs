use macroquad::prelude::*;

const ITEM_HEIGHT: f32 = 30.0;
const FONT_SIZE: f32 = 16.0;

/// Single-choice list that opens below its header
#[derive(Clone)]
pub struct Dropdown {
    x: f32,
    y: f32,
    width: f32,
    items: Vec<&'static str>,
    selected: usize,
    is_open: bool,
    label: &'static str,
}

impl Dropdown {
    pub fn new(x: f32, y: f32, width: f32, label: &'static str, items: Vec<&'static str>) -> Self {
        Self {
            x,
            y,
            width,
            items,
            selected: 0,
            is_open: false,
            label,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> &'static str {
        self.items[self.selected]
    }

    /// Reflect a selection made elsewhere (keyboard shortcut)
    pub fn set_selected(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected = index;
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Whether (x, y) lies over the header or, while open, the list
    pub fn contains(&self, mouse_pos: (f32, f32)) -> bool {
        let rows = if self.is_open { self.items.len() + 1 } else { 1 };
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + rows as f32 * ITEM_HEIGHT
    }

    /// Row under the cursor: 0 is the header, 1.. are items
    fn row_at(&self, mouse_pos: (f32, f32)) -> Option<usize> {
        self.contains(mouse_pos)
            .then(|| ((mouse_pos.1 - self.y) / ITEM_HEIGHT) as usize)
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        draw_text(self.label, self.x, self.y - 5.0, 14.0, GRAY);

        let hovered = self.row_at(mouse_pos);
        let header_color = if hovered == Some(0) {
            Color::from_rgba(100, 149, 237, 255)
        } else {
            Color::from_rgba(70, 130, 180, 255)
        };
        draw_rectangle(self.x, self.y, self.width, ITEM_HEIGHT, header_color);
        draw_rectangle_lines(self.x, self.y, self.width, ITEM_HEIGHT, 2.0, WHITE);
        draw_text(self.selected_item(), self.x + 5.0, self.y + 21.0, FONT_SIZE, WHITE);
        draw_text("v", self.x + self.width - 16.0, self.y + 21.0, FONT_SIZE, WHITE);

        if !self.is_open {
            return;
        }

        for (i, item) in self.items.iter().enumerate() {
            let item_y = self.y + (i + 1) as f32 * ITEM_HEIGHT;
            let color = if hovered == Some(i + 1) {
                Color::from_rgba(100, 149, 237, 255)
            } else if i == self.selected {
                Color::from_rgba(50, 100, 150, 255)
            } else {
                Color::from_rgba(45, 45, 45, 255)
            };
            draw_rectangle(self.x, item_y, self.width, ITEM_HEIGHT, color);
            draw_rectangle_lines(
                self.x,
                item_y,
                self.width,
                ITEM_HEIGHT,
                1.0,
                Color::from_rgba(80, 80, 80, 255),
            );
            draw_text(item, self.x + 5.0, item_y + 21.0, FONT_SIZE, WHITE);
        }
    }

    /// Handle clicks; returns true when a different item was picked
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> bool {
        if !is_mouse_button_pressed(MouseButton::Left) {
            return false;
        }
        match self.row_at(mouse_pos) {
            Some(0) => {
                self.is_open = !self.is_open;
                false
            }
            Some(row) if self.is_open => {
                self.is_open = false;
                let changed = self.selected != row - 1;
                self.selected = row - 1;
                changed
            }
            _ => {
                self.is_open = false;
                false
            }
        }
    }
}
