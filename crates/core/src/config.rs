//! Session configuration.
//!
//! Dimensions, palette and speeds travel in one immutable [`SessionConfig`]
//! handed to [`Session::new`](crate::Session::new).

use crate::error::ConfigError;
use crate::types::{
    JewelColor, BASE_FALL_MS, DEFAULT_COLUMNS, DEFAULT_ROWS, DEFAULT_SEED, SOFT_DROP_FALL_MS,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Visible rows
    pub rows: usize,
    pub columns: usize,
    /// Colors a spawned faller draws from
    pub palette: Vec<JewelColor>,
    /// Gravity interval at normal speed
    pub fall_interval_ms: u32,
    /// Gravity interval while soft drop is held
    pub soft_drop_interval_ms: u32,
    pub seed: u32,
}

impl SessionConfig {
    /// Default palette and speeds with the given dimensions
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_palette(mut self, palette: &[JewelColor]) -> Self {
        self.palette = palette.to_vec();
        self
    }

    pub fn with_intervals(mut self, fall_interval_ms: u32, soft_drop_interval_ms: u32) -> Self {
        self.fall_interval_ms = fall_interval_ms;
        self.soft_drop_interval_ms = soft_drop_interval_ms;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::NoRows);
        }
        if self.columns == 0 {
            return Err(ConfigError::NoColumns);
        }
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if self.fall_interval_ms == 0 || self.soft_drop_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval {
                normal_ms: self.fall_interval_ms,
                soft_drop_ms: self.soft_drop_interval_ms,
            });
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            palette: JewelColor::ALL.to_vec(),
            fall_interval_ms: BASE_FALL_MS,
            soft_drop_interval_ms: SOFT_DROP_FALL_MS,
            seed: DEFAULT_SEED,
        }
    }
}
