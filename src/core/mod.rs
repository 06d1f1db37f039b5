//! Core domain types for Word Popper
//!
//! Letters, tiles and the score model. Everything here is pure and
//! dependency-free; the grid and session build on top of it.

mod letter;
mod score;
mod tile;

pub use letter::{Letter, LetterError, WILD_SYMBOL, spell};
pub use score::{score_tiles, score_word};
pub use tile::{Tile, TileId, TileState, is_adjacent};
