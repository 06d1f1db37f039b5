//! Word finding and computer play
//!
//! This module finds every playable word on a board and contains the
//! strategies used to auto-play games.

mod autoplay;
mod finder;
pub mod strategy;

pub use autoplay::{GameSummary, autoplay};
pub use finder::{Candidate, MIN_WORD_LEN, find_words};
pub use strategy::{HighestScore, LongestWord, RandomPick, Strategy, StrategyType};
