// Domain layer - Core business logic
pub mod domain;

// Application layer - Simulation control, timing and configuration
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, LifeError, Pattern, PatternLibrary, Snapshot, TransitionEngine, presets};
pub use application::{GridEvent, LifeConfig, SimState, Simulator, Speed};
