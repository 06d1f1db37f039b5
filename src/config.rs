//! Game configuration
//!
//! Board size, hint budget and long-press tuning for one game session.

use crate::letters::LetterSource;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_ROWS: usize = 10;
pub const DEFAULT_COLS: usize = 7;
pub const DEFAULT_HINTS: u32 = 3;
pub const DEFAULT_LONG_PRESS: Duration = Duration::from_millis(750);
/// Maximum pointer travel (in layout units) that still counts as a press
pub const DEFAULT_PRESS_SLOP: f64 = 10.0;

/// Configuration for a game session
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub hints: u32,
    pub long_press: Duration,
    pub press_slop: f64,
    /// Seed text for a reproducible board (e.g. a date for a daily puzzle)
    pub seed: Option<String>,
}

/// Error type for invalid configurations
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    ZeroSize { rows: usize, cols: usize },
    ZeroLongPress,
    InvalidSlop(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSize { rows, cols } => {
                write!(f, "Grid must be at least 1x1, got {rows}x{cols}")
            }
            Self::ZeroLongPress => write!(f, "Long-press duration must be positive"),
            Self::InvalidSlop(slop) => {
                write!(f, "Press slop must be a non-negative number, got {slop}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            hints: DEFAULT_HINTS,
            long_press: DEFAULT_LONG_PRESS,
            press_slop: DEFAULT_PRESS_SLOP,
            seed: None,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub const fn with_size(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    #[must_use]
    pub const fn with_hints(mut self, hints: u32) -> Self {
        self.hints = hints;
        self
    }

    #[must_use]
    pub const fn with_long_press(mut self, long_press: Duration) -> Self {
        self.long_press = long_press;
        self
    }

    #[must_use]
    pub const fn with_press_slop(mut self, press_slop: f64) -> Self {
        self.press_slop = press_slop;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    /// Check that the configuration describes a playable game
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an empty board, a zero long-press duration,
    /// or a negative / non-finite press slop.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::ZeroSize {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.long_press.is_zero() {
            return Err(ConfigError::ZeroLongPress);
        }
        if !self.press_slop.is_finite() || self.press_slop < 0.0 {
            return Err(ConfigError::InvalidSlop(self.press_slop));
        }
        Ok(())
    }

    /// Letter source for this game: seeded when a seed is set, random otherwise
    #[must_use]
    pub fn letter_source(&self) -> LetterSource {
        self.seed
            .as_deref()
            .map_or_else(LetterSource::from_entropy, LetterSource::from_seed_str)
    }
}
