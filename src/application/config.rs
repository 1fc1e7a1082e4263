use crate::domain::LifeError;

use super::timer::{DEFAULT_INTERVAL_MS, Speed};

/// Default board side length
pub const DEFAULT_GRID_SIZE: usize = 30;

/// Startup settings for a simulation session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LifeConfig {
    pub grid_size: usize,
    pub interval_ms: u64,
    /// Seed for `randomize`; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            interval_ms: DEFAULT_INTERVAL_MS,
            seed: None,
        }
    }
}

impl LifeConfig {
    /// Defaults overridden by `LIFE_GRID_SIZE`, `LIFE_INTERVAL_MS` and `LIFE_SEED`.
    /// Grid size must be positive, the interval is clamped, any u64 seeds.
    pub fn from_env() -> Result<Self, LifeError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env` with a custom variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, LifeError> {
        let mut config = Self::default();

        if let Some(raw) = lookup("LIFE_GRID_SIZE") {
            config.grid_size = raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|size| *size > 0)
                .ok_or(LifeError::InvalidConfig("LIFE_GRID_SIZE must be a positive integer"))?;
        }
        if let Some(raw) = lookup("LIFE_INTERVAL_MS") {
            let millis = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| LifeError::InvalidConfig("LIFE_INTERVAL_MS must be an integer"))?;
            config.interval_ms = Speed::from_millis(millis).millis();
        }
        if let Some(raw) = lookup("LIFE_SEED") {
            let seed = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| LifeError::InvalidConfig("LIFE_SEED must be an unsigned integer"))?;
            config.seed = Some(seed);
        }

        Ok(config)
    }

    pub fn speed(&self) -> Speed {
        Speed::from_millis(self.interval_ms)
    }
}
