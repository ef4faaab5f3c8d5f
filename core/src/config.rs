use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::PlasmaError;
use crate::grid::is_valid_size;

pub const DEFAULT_SIZE: usize = 513;
pub const DEFAULT_INITIAL_RANGE: i32 = 196;

// Largest magnitude accepted for the initial range and for range bounds.
// Keeps 4 * (|corner| + 2 * range) well inside i32 during subdivision.
pub const MAX_MAGNITUDE: i32 = 1 << 24;

// Inclusive integer range, used for corner seeding and output clamping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: i32,
    pub max: i32,
}

impl ValueRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    fn check(&self, name: &'static str) -> Result<(), PlasmaError> {
        let too_wide = self.min < -MAX_MAGNITUDE || self.max > MAX_MAGNITUDE;
        if self.min > self.max || too_wide {
            return Err(PlasmaError::InvalidRange {
                name,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

// Full 8-bit grayscale range
impl Default for ValueRange {
    fn default() -> Self {
        Self::new(0, 255)
    }
}

// Generation parameters, loadable from TOML:
//
// size = 513
// initial_range = 196
// seed = 42
// [corner_range]
// min = 0
// max = 255
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlasmaConfig {
    // must be 2^k + 1
    pub size: usize,
    // displacement bound for the top-level pass, halved every level
    pub initial_range: i32,
    pub corner_range: ValueRange,
    pub output_range: ValueRange,
    // None = ambient thread RNG
    pub seed: Option<u64>,
}

impl Default for PlasmaConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            initial_range: DEFAULT_INITIAL_RANGE,
            corner_range: ValueRange::default(),
            output_range: ValueRange::default(),
            seed: None,
        }
    }
}

impl PlasmaConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, PlasmaError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, PlasmaError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> Result<(), PlasmaError> {
        if !is_valid_size(self.size) {
            return Err(PlasmaError::InvalidSize { size: self.size });
        }
        if !(0..=MAX_MAGNITUDE).contains(&self.initial_range) {
            return Err(PlasmaError::InvalidConfig(format!(
                "initial_range must be within 0..={MAX_MAGNITUDE}, got {}",
                self.initial_range
            )));
        }
        self.corner_range.check("corner")?;
        self.output_range.check("output")?;
        Ok(())
    }
}
