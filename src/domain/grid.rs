use std::fmt;

use rand::Rng;

use super::{Cell, LifeError, Pattern};

/// Row-major cells of a `size`-wide matrix paired with their (row, col)
fn positioned(cells: &[Cell], size: usize) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
    cells
        .iter()
        .enumerate()
        .map(move |(idx, &cell)| (idx / size, idx % size, cell))
}

fn count_alive(cells: &[Cell]) -> usize {
    cells.iter().filter(|cell| cell.is_alive()).count()
}

/// Immutable copy of a grid's cells.
///
/// The transition engine reads the previous generation exclusively through a
/// snapshot and writes the next one into a fresh snapshot, which then replaces
/// the grid's contents in one move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    size: usize,
    cells: Box<[Cell]>,
}

impl Snapshot {
    pub(crate) fn from_cells(size: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self {
            size,
            cells: cells.into_boxed_slice(),
        }
    }

    /// Side length of the square matrix
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Cell at (row, col), `None` outside the matrix
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.size && col < self.size).then(|| self.cells[row * self.size + col])
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(Cell::is_alive)
    }

    /// Count live neighbors among the in-bounds cells around (row, col).
    /// Cells past an edge count as dead; the board never wraps.
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        (-1isize..=1)
            .flat_map(|dr| (-1isize..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .filter_map(|(dr, dc)| {
                let r = row.checked_add_signed(dr)?;
                let c = col.checked_add_signed(dc)?;
                self.get(r, c)
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Iterate over all cells in row-major order with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        positioned(&self.cells, self.size)
    }

    /// Positions of every live cell, row-major
    pub fn alive_cells(&self) -> Vec<(usize, usize)> {
        self.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(row, col, _)| (row, col))
            .collect()
    }

    pub fn population(&self) -> usize {
        count_alive(&self.cells)
    }
}

/// Fixed-size square board of cells addressed by (row, col).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new `size x size` grid with all cells dead
    pub fn new(size: usize) -> Result<Self, LifeError> {
        if size == 0 {
            return Err(LifeError::EmptyGrid);
        }
        Ok(Self {
            size,
            cells: vec![Cell::Dead; size * size],
        })
    }

    /// Side length of the grid
    pub const fn size(&self) -> usize {
        self.size
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, LifeError> {
        if row < self.size && col < self.size {
            Ok(row * self.size + col)
        } else {
            Err(LifeError::OutOfBounds {
                row,
                col,
                size: self.size,
            })
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Cell, LifeError> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    pub fn is_alive(&self, row: usize, col: usize) -> Result<bool, LifeError> {
        self.get(row, col).map(Cell::is_alive)
    }

    /// Write a cell unconditionally
    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<(), LifeError> {
        let idx = self.index(row, col)?;
        self.cells[idx] = Cell::from(alive);
        Ok(())
    }

    /// Flip a cell and return its new state
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<Cell, LifeError> {
        let idx = self.index(row, col)?;
        self.cells[idx] = self.cells[idx].toggle();
        Ok(self.cells[idx])
    }

    /// Overlay a pattern's live cells with its top-left corner at the anchor.
    ///
    /// Every target coordinate is validated before anything is written, so a
    /// pattern that would hang off the board leaves the grid untouched.
    pub fn stamp(&mut self, pattern: &Pattern, row: usize, col: usize) -> Result<(), LifeError> {
        let targets = pattern
            .cells
            .iter()
            .map(|&(dr, dc)| self.index(row.saturating_add(dr), col.saturating_add(dc)))
            .collect::<Result<Vec<_>, _>>()?;
        for idx in targets {
            self.cells[idx] = Cell::Alive;
        }
        Ok(())
    }

    /// Kill every cell
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Give every cell an independent 50% chance of being alive
    pub fn randomize(&mut self) {
        self.randomize_with(&mut rand::rng());
    }

    /// Randomize from a caller-supplied source, for reproducible boards
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from(rng.random_bool(0.5)));
    }

    /// Immutable copy of the current cells
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_cells(self.size, self.cells.clone())
    }

    /// Swap in a whole generation at once
    pub(crate) fn replace(&mut self, next: Snapshot) {
        debug_assert_eq!(next.size, self.size);
        self.cells = next.cells.into_vec();
    }

    pub fn population(&self) -> usize {
        count_alive(&self.cells)
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        positioned(&self.cells, self.size)
    }
}

/// Text dump of the board, `[*]` for live cells and `[ ]` for dead ones.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            for cell in row {
                f.write_str(if cell.is_alive() { "[*]" } else { "[ ]" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(5).unwrap();
        assert_eq!(grid.size(), 5);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_zero_size_rejected() {
        assert_eq!(Grid::new(0), Err(LifeError::EmptyGrid));
    }

    #[test]
    fn test_set_and_toggle() {
        let mut grid = Grid::new(4).unwrap();
        grid.set(1, 2, true).unwrap();
        assert!(grid.is_alive(1, 2).unwrap());
        grid.set(1, 2, true).unwrap();
        assert!(grid.is_alive(1, 2).unwrap());

        assert_eq!(grid.toggle(1, 2).unwrap(), Cell::Dead);
        assert_eq!(grid.toggle(3, 3).unwrap(), Cell::Alive);
        assert_eq!(grid.population(), 1);
    }

    #[test]
    fn test_out_of_bounds_edits_rejected() {
        let mut grid = Grid::new(3).unwrap();
        let err = grid.set(3, 0, true).unwrap_err();
        assert_eq!(err, LifeError::OutOfBounds { row: 3, col: 0, size: 3 });
        assert!(grid.toggle(0, 7).is_err());
        assert!(grid.get(5, 5).is_err());
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_stamp_places_offsets_relative_to_anchor() {
        let mut grid = Grid::new(10).unwrap();
        let glider = presets::glider();
        grid.stamp(&glider, 2, 3).unwrap();
        assert_eq!(
            grid.snapshot().alive_cells(),
            vec![(2, 4), (3, 5), (4, 3), (4, 4), (4, 5)]
        );
    }

    #[test]
    fn test_stamp_off_the_edge_leaves_grid_untouched() {
        let mut grid = Grid::new(10).unwrap();
        grid.set(0, 0, true).unwrap();
        let before = grid.clone();

        let err = grid.stamp(&presets::ten_cell_row(), 5, 5).unwrap_err();
        assert_eq!(err, LifeError::OutOfBounds { row: 5, col: 10, size: 10 });
        assert_eq!(grid, before);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut grid = Grid::new(6).unwrap();
        grid.stamp(&presets::glider(), 0, 0).unwrap();
        grid.reset();
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_randomize_is_reproducible_with_seed() {
        let mut a = Grid::new(16).unwrap();
        let mut b = Grid::new(16).unwrap();
        a.randomize_with(&mut StdRng::seed_from_u64(7));
        b.randomize_with(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);

        // 256 fair coin flips landing all on one side would be astronomically unlikely
        assert!(a.population() > 0 && a.population() < 256);
    }

    #[test]
    fn test_snapshot_is_detached_from_grid() {
        let mut grid = Grid::new(3).unwrap();
        let snap = grid.snapshot();
        grid.set(1, 1, true).unwrap();
        assert!(!snap.is_alive(1, 1));
        assert!(grid.is_alive(1, 1).unwrap());
    }

    #[test]
    fn test_corner_has_three_neighbors_at_most() {
        let mut grid = Grid::new(4).unwrap();
        for r in 0..4 {
            for c in 0..4 {
                grid.set(r, c, true).unwrap();
            }
        }
        let snap = grid.snapshot();
        assert_eq!(snap.count_live_neighbors(0, 0), 3);
        assert_eq!(snap.count_live_neighbors(3, 3), 3);
        assert_eq!(snap.count_live_neighbors(0, 2), 5);
        assert_eq!(snap.count_live_neighbors(1, 1), 8);
    }

    #[test]
    fn test_snapshot_matches_grid_views() {
        let mut grid = Grid::new(5).unwrap();
        grid.stamp(&presets::glider(), 1, 1).unwrap();
        let snap = grid.snapshot();
        assert_eq!(snap.population(), grid.population());
        assert!(snap.iter_cells().eq(grid.iter_cells()));
        assert_eq!(grid.iter_cells().nth(7), Some((1, 2, Cell::Alive)));
    }

    #[test]
    fn test_display_dump() {
        let mut grid = Grid::new(2).unwrap();
        grid.set(0, 1, true).unwrap();
        assert_eq!(grid.to_string(), "[ ][*]\n[ ][ ]\n");
    }
}
