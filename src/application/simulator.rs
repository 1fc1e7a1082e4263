use std::fmt;
use std::time::Duration;

use rand::{SeedableRng, rngs::StdRng};

use crate::domain::{Grid, LifeError, Pattern, PatternLibrary, TransitionEngine};

use super::config::LifeConfig;
use super::timer::{Speed, Timer};

/// Whether the repeating timer is armed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimState {
    Paused,
    Running,
}

/// What changed on the grid; delivered to listeners after the change is applied
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridEvent {
    CellSet { row: usize, col: usize, alive: bool },
    CellToggled { row: usize, col: usize, alive: bool },
    Stamped { pattern: &'static str, row: usize, col: usize },
    Randomized,
    Reset,
    Advanced { generation: u64 },
}

/// Change-notification callback
pub type Listener = Box<dyn FnMut(&GridEvent, &Grid)>;

/// Simulator owns a grid and drives it forward, either one step at a time or
/// on a repeating timer fed by the caller's frame clock.
pub struct Simulator {
    grid: Grid,
    engine: TransitionEngine,
    library: PatternLibrary,
    speed: Speed,
    /// The one repeating timer; `Some` exactly while running
    timer: Option<Timer>,
    generation: u64,
    rng: StdRng,
    listeners: Vec<Listener>,
}

impl Simulator {
    /// Paused simulator over `grid` at the default speed
    pub fn new(grid: Grid) -> Self {
        Self::with_rng(grid, StdRng::from_os_rng())
    }

    /// Paused simulator whose `randomize` draws from `rng`
    pub fn with_rng(grid: Grid, rng: StdRng) -> Self {
        Self {
            grid,
            engine: TransitionEngine,
            library: PatternLibrary::new(),
            speed: Speed::default(),
            timer: None,
            generation: 0,
            rng,
            listeners: Vec::new(),
        }
    }

    /// Build grid and simulator from startup settings
    pub fn from_config(config: &LifeConfig) -> Result<Self, LifeError> {
        let grid = Grid::new(config.grid_size)?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut sim = Self::with_rng(grid, rng);
        sim.speed = config.speed();
        log::info!(
            "simulator ready: {0}x{0} grid, {1} ms interval",
            config.grid_size,
            sim.speed.millis()
        );
        Ok(sim)
    }

    /// Register a change listener; listeners run in registration order
    pub fn subscribe(&mut self, listener: impl FnMut(&GridEvent, &Grid) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn notify(&mut self, event: GridEvent) {
        for listener in &mut self.listeners {
            listener(&event, &self.grid);
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn library(&self) -> &PatternLibrary {
        &self.library
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn state(&self) -> SimState {
        if self.timer.is_some() {
            SimState::Running
        } else {
            SimState::Paused
        }
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Time until the next automatic tick, `None` while paused
    pub fn time_to_next_tick(&self) -> Option<Duration> {
        self.timer.as_ref().map(Timer::remaining)
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<(), LifeError> {
        self.grid.set(row, col, alive).inspect_err(|e| log::warn!("set rejected: {e}"))?;
        self.notify(GridEvent::CellSet { row, col, alive });
        Ok(())
    }

    pub fn toggle(&mut self, row: usize, col: usize) -> Result<(), LifeError> {
        let cell = self.grid.toggle(row, col).inspect_err(|e| log::warn!("toggle rejected: {e}"))?;
        self.notify(GridEvent::CellToggled { row, col, alive: cell.is_alive() });
        Ok(())
    }

    /// Stamp a pattern; nothing is written if any cell would land off the grid
    pub fn stamp(&mut self, pattern: &Pattern, row: usize, col: usize) -> Result<(), LifeError> {
        self.grid
            .stamp(pattern, row, col)
            .inspect_err(|e| log::warn!("stamp of {} rejected: {e}", pattern.name))?;
        log::debug!("stamped {} at ({row}, {col})", pattern.name);
        self.notify(GridEvent::Stamped { pattern: pattern.name, row, col });
        Ok(())
    }

    /// Stamp a library pattern by name
    pub fn stamp_named(&mut self, name: &str, row: usize, col: usize) -> Result<(), LifeError> {
        let pattern = self
            .library
            .get(name)
            .inspect_err(|e| log::warn!("stamp rejected: {e}"))?
            .clone();
        self.stamp(&pattern, row, col)
    }

    pub fn randomize(&mut self) {
        self.grid.randomize_with(&mut self.rng);
        self.generation = 0;
        log::info!("grid randomized: {} live cells", self.grid.population());
        self.notify(GridEvent::Randomized);
    }

    pub fn reset(&mut self) {
        self.grid.reset();
        self.generation = 0;
        log::info!("grid reset");
        self.notify(GridEvent::Reset);
    }

    /// Paused -> Running; no effect if already running
    pub fn start(&mut self) {
        if self.timer.is_none() {
            self.timer = Some(Timer::new(self.speed));
            log::info!("simulation started at {} ms", self.speed.millis());
        }
    }

    /// Running -> Paused; idempotent
    pub fn stop(&mut self) {
        if self.timer.take().is_some() {
            log::info!("simulation stopped at generation {}", self.generation);
        }
    }

    pub fn toggle_running(&mut self) {
        if self.is_running() {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Advance exactly one generation without touching the run state
    pub fn step(&mut self) {
        let next = self.engine.next(&self.grid);
        self.grid.replace(next);
        self.generation += 1;
        log::debug!("generation {}", self.generation);
        self.notify(GridEvent::Advanced { generation: self.generation });
    }

    /// Change the tick period, clamped to the accepted range.
    /// A running timer is swapped for one armed at the new period.
    pub fn set_speed(&mut self, interval_ms: u64) -> Speed {
        let speed = Speed::from_millis(interval_ms);
        if speed.millis() != interval_ms {
            log::debug!("interval {interval_ms} ms clamped to {} ms", speed.millis());
        }
        if speed == self.speed {
            return speed;
        }
        self.speed = speed;
        if let Some(timer) = self.timer.as_mut() {
            *timer = Timer::new(speed);
        }
        log::info!("interval set to {} ms", speed.millis());
        speed
    }

    /// Feed elapsed frame time to the timer; returns true if a tick ran.
    /// The tick (step plus notification) completes before the timer re-arms.
    pub fn advance(&mut self, delta: Duration) -> bool {
        let fired = self.timer.as_mut().is_some_and(|timer| timer.advance(delta));
        if fired {
            self.step();
        }
        fired
    }
}

impl fmt::Debug for Simulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simulator")
            .field("size", &self.grid.size())
            .field("state", &self.state())
            .field("speed", &self.speed)
            .field("generation", &self.generation)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn simulator(size: usize) -> Simulator {
        Simulator::with_rng(Grid::new(size).unwrap(), StdRng::seed_from_u64(1))
    }

    fn recorder(sim: &mut Simulator) -> Rc<RefCell<Vec<GridEvent>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        sim.subscribe(move |event, _| sink.borrow_mut().push(event.clone()));
        events
    }

    #[test]
    fn test_starts_paused() {
        let sim = simulator(5);
        assert_eq!(sim.state(), SimState::Paused);
        assert_eq!(sim.speed().millis(), 1000);
        assert_eq!(sim.generation(), 0);
        assert_eq!(sim.time_to_next_tick(), None);
    }

    #[test]
    fn test_start_stop_transitions() {
        let mut sim = simulator(5);
        sim.start();
        assert_eq!(sim.state(), SimState::Running);
        sim.start();
        assert_eq!(sim.time_to_next_tick(), Some(Duration::from_millis(1000)));
        sim.stop();
        assert_eq!(sim.state(), SimState::Paused);
        sim.stop();
        assert_eq!(sim.state(), SimState::Paused);
        sim.toggle_running();
        assert!(sim.is_running());
        sim.toggle_running();
        assert!(!sim.is_running());
    }

    #[test]
    fn test_edits_notify_listeners() {
        let mut sim = simulator(6);
        let events = recorder(&mut sim);

        sim.set(1, 1, true).unwrap();
        sim.toggle(1, 1).unwrap();
        sim.stamp_named("Glider", 0, 0).unwrap();
        sim.reset();
        sim.randomize();

        assert_eq!(
            *events.borrow(),
            vec![
                GridEvent::CellSet { row: 1, col: 1, alive: true },
                GridEvent::CellToggled { row: 1, col: 1, alive: false },
                GridEvent::Stamped { pattern: "Glider", row: 0, col: 0 },
                GridEvent::Reset,
                GridEvent::Randomized,
            ]
        );
    }

    #[test]
    fn test_rejected_edits_do_not_notify() {
        let mut sim = simulator(4);
        let events = recorder(&mut sim);

        assert!(sim.set(4, 0, true).is_err());
        assert!(sim.toggle(0, 4).is_err());
        assert!(sim.stamp(&presets::tumbler(), 0, 0).is_err());
        assert_eq!(
            sim.stamp_named("Pulsar", 0, 0),
            Err(LifeError::UnknownPattern("Pulsar".to_owned()))
        );
        assert!(events.borrow().is_empty());
        assert_eq!(sim.grid().population(), 0);
    }

    #[test]
    fn test_listener_sees_updated_grid() {
        let mut sim = simulator(4);
        let seen = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&seen);
        sim.subscribe(move |_, grid| *sink.borrow_mut() = Some(grid.population()));
        sim.set(2, 2, true).unwrap();
        assert_eq!(*seen.borrow(), Some(1));
    }

    #[test]
    fn test_step_keeps_run_state() {
        let mut sim = simulator(6);
        let events = recorder(&mut sim);
        sim.step();
        assert_eq!(sim.state(), SimState::Paused);
        sim.start();
        sim.step();
        assert_eq!(sim.state(), SimState::Running);
        assert_eq!(sim.generation(), 2);
        assert_eq!(
            events.borrow().last(),
            Some(&GridEvent::Advanced { generation: 2 })
        );
    }

    #[test]
    fn test_advance_does_nothing_while_paused() {
        let mut sim = simulator(6);
        assert!(!sim.advance(Duration::from_secs(10)));
        assert_eq!(sim.generation(), 0);
    }

    #[test]
    fn test_advance_ticks_on_period() {
        let mut sim = simulator(6);
        sim.set_speed(200);
        sim.start();
        assert!(!sim.advance(Duration::from_millis(150)));
        assert!(sim.advance(Duration::from_millis(50)));
        assert_eq!(sim.generation(), 1);
        assert_eq!(sim.time_to_next_tick(), Some(Duration::from_millis(200)));
    }

    #[test]
    fn test_set_speed_clamps() {
        let mut sim = simulator(3);
        assert_eq!(sim.set_speed(10).millis(), 100);
        assert_eq!(sim.set_speed(5000).millis(), 2000);
        assert_eq!(sim.set_speed(700).millis(), 700);
        assert_eq!(sim.speed().millis(), 700);
        assert_eq!(sim.state(), SimState::Paused);
    }

    #[test]
    fn test_set_speed_while_running_rearms_timer() {
        let mut sim = simulator(6);
        sim.start();
        assert!(!sim.advance(Duration::from_millis(900)));
        sim.set_speed(300);
        assert!(sim.is_running());
        assert_eq!(sim.time_to_next_tick(), Some(Duration::from_millis(300)));
        assert!(!sim.advance(Duration::from_millis(299)));
        assert!(sim.advance(Duration::from_millis(1)));
    }

    #[test]
    fn test_unchanged_speed_keeps_timer_running() {
        let mut sim = simulator(6);
        sim.set_speed(100);
        sim.start();
        assert!(!sim.advance(Duration::from_millis(60)));
        // already at the floor: a faster request clamps to the same period
        sim.set_speed(50);
        sim.set_speed(100);
        assert_eq!(sim.time_to_next_tick(), Some(Duration::from_millis(40)));
        assert!(sim.advance(Duration::from_millis(40)));
    }

    #[test]
    fn test_reset_and_randomize_restart_generation() {
        let mut sim = simulator(6);
        sim.step();
        sim.step();
        sim.reset();
        assert_eq!(sim.generation(), 0);
        sim.step();
        sim.randomize();
        assert_eq!(sim.generation(), 0);
    }

    #[test]
    fn test_seeded_randomize_is_reproducible() {
        let config = LifeConfig { grid_size: 12, interval_ms: 500, seed: Some(99) };
        let mut a = Simulator::from_config(&config).unwrap();
        let mut b = Simulator::from_config(&config).unwrap();
        a.randomize();
        b.randomize();
        assert_eq!(a.grid(), b.grid());
        assert_eq!(a.speed().millis(), 500);
    }

    #[test]
    fn test_from_config_rejects_empty_grid() {
        let config = LifeConfig { grid_size: 0, ..LifeConfig::default() };
        assert_eq!(Simulator::from_config(&config).unwrap_err(), LifeError::EmptyGrid);
    }
}
