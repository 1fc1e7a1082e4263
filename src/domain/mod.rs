mod cell;
mod error;
mod grid;
mod patterns;
mod transition;

pub use cell::Cell;
pub use error::LifeError;
pub use grid::{Grid, Snapshot};
pub use patterns::{Pattern, PatternLibrary, presets};
pub use transition::TransitionEngine;
