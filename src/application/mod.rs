mod config;
mod simulator;
mod timer;

pub use config::{DEFAULT_GRID_SIZE, LifeConfig};
pub use simulator::{GridEvent, Listener, SimState, Simulator};
pub use timer::{
    DEFAULT_INTERVAL_MS, INTERVAL_STEP_MS, MAX_INTERVAL_MS, MIN_INTERVAL_MS, Speed, Timer,
};
