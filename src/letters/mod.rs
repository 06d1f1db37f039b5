//! Letter generation
//!
//! Fills the board with letters drawn from a fixed frequency table.

mod source;

pub use source::{LetterSource, seed_from_str};
