use super::LifeError;

/// A named stamp: live-cell offsets as (row, col) from the top-left anchor
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        cells: &'static [(usize, usize)],
    ) -> Self {
        Self { name, description, cells }
    }

    /// Rows spanned by the pattern's bounding box
    pub fn height(&self) -> usize {
        self.cells.iter().map(|&(r, _)| r + 1).max().unwrap_or(0)
    }

    /// Columns spanned by the pattern's bounding box
    pub fn width(&self) -> usize {
        self.cells.iter().map(|&(_, c)| c + 1).max().unwrap_or(0)
    }

    /// Number of live cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves diagonally
    pub const fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            &[
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ],
        )
    }

    /// Small exploder - settles into a still life
    pub const fn small_exploder() -> Pattern {
        Pattern::new(
            "SmallExploder",
            "Grows then freezes into a still life",
            &[
                (0, 1),
                (1, 0), (1, 1), (1, 2),
                (2, 0), (2, 2),
                (3, 1),
            ],
        )
    }

    /// Exploder - open 5x5 frame
    pub const fn big_exploder() -> Pattern {
        Pattern::new(
            "BigExploder",
            "5x5 exploder",
            &[
                (0, 0), (0, 2), (0, 4),
                (1, 0), (1, 4),
                (2, 0), (2, 4),
                (3, 0), (3, 4),
                (4, 0), (4, 2), (4, 4),
            ],
        )
    }

    /// Ten cells in a row - becomes a pentadecathlon
    pub const fn ten_cell_row() -> Pattern {
        Pattern::new(
            "TenCellRow",
            "Evolves into a pentadecathlon (period 15)",
            &[
                (0, 0), (0, 1), (0, 2), (0, 3), (0, 4),
                (0, 5), (0, 6), (0, 7), (0, 8), (0, 9),
            ],
        )
    }

    /// Lightweight Spaceship (LWSS)
    pub const fn lightweight_spaceship() -> Pattern {
        Pattern::new(
            "LightSpaceShip",
            "Lightweight spaceship (period 4)",
            &[
                (0, 1), (0, 2), (0, 3), (0, 4),
                (1, 0), (1, 4),
                (2, 4),
                (3, 0), (3, 3),
            ],
        )
    }

    /// Tumbler - period 14 oscillator
    pub const fn tumbler() -> Pattern {
        Pattern::new(
            "Tumbler",
            "Oscillator (period 14)",
            &[
                (0, 1), (0, 2), (0, 4), (0, 5),
                (1, 1), (1, 2), (1, 4), (1, 5),
                (2, 2), (2, 4),
                (3, 0), (3, 2), (3, 4), (3, 6),
                (4, 0), (4, 2), (4, 4), (4, 6),
                (5, 0), (5, 1), (5, 5), (5, 6),
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            small_exploder(),
            big_exploder(),
            ten_cell_row(),
            lightweight_spaceship(),
            tumbler(),
        ]
    }
}

/// Read-only name lookup over the preset patterns
#[derive(Clone, Debug)]
pub struct PatternLibrary {
    patterns: Vec<Pattern>,
}

impl PatternLibrary {
    pub fn new() -> Self {
        Self {
            patterns: presets::all_patterns(),
        }
    }

    pub fn get(&self, name: &str) -> Result<&Pattern, LifeError> {
        self.patterns
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| LifeError::UnknownPattern(name.to_owned()))
    }

    /// Pattern names in menu order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.patterns.iter().map(|p| p.name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for PatternLibrary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_presets_in_menu_order() {
        let library = PatternLibrary::new();
        let names: Vec<_> = library.names().collect();
        assert_eq!(
            names,
            ["Glider", "SmallExploder", "BigExploder", "TenCellRow", "LightSpaceShip", "Tumbler"]
        );
    }

    #[test]
    fn test_lookup_by_name() {
        let library = PatternLibrary::new();
        let glider = library.get("Glider").unwrap();
        assert_eq!(glider.len(), 5);
        assert_eq!((glider.height(), glider.width()), (3, 3));
    }

    #[test]
    fn test_unknown_pattern() {
        let library = PatternLibrary::new();
        assert_eq!(
            library.get("Gosper Glider Gun"),
            Err(LifeError::UnknownPattern("Gosper Glider Gun".to_owned()))
        );
    }

    #[test]
    fn test_bounding_boxes() {
        assert_eq!(presets::ten_cell_row().width(), 10);
        assert_eq!(presets::ten_cell_row().height(), 1);
        assert_eq!((presets::tumbler().height(), presets::tumbler().width()), (6, 7));
        assert_eq!(presets::tumbler().len(), 22);
        assert_eq!((presets::big_exploder().height(), presets::big_exploder().width()), (5, 5));
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = PatternLibrary::new().names().collect();
        let count = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), count);
    }
}
