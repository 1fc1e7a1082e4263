//! Generation-to-generation transition under the B3/S23 rule.
//!
//! The next generation is computed purely from a snapshot of the current one
//! and handed back as a new snapshot; the grid is never written while the
//! neighbor counts are being taken.

use super::{Grid, Snapshot};

/// Computes the next generation of a bounded (non-wrapping) grid.
#[derive(Clone, Copy, Debug, Default)]
pub struct TransitionEngine;

impl TransitionEngine {
    /// Next generation for the grid's current contents
    pub fn next(&self, grid: &Grid) -> Snapshot {
        self.evolve(&grid.snapshot())
    }

    /// Next generation from an already-taken snapshot
    pub fn evolve(&self, previous: &Snapshot) -> Snapshot {
        let size = previous.size();
        let cells = previous
            .iter_cells()
            .map(|(row, col, cell)| cell.evolve(previous.count_live_neighbors(row, col)))
            .collect::<Vec<_>>();
        Snapshot::from_cells(size, cells)
    }
}
