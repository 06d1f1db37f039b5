//! The tile grid
//!
//! Owns tile placement in a 2D board, adjacency lookups, removal with
//! gravity and column collapse, and single-level snapshots.

mod board;
mod events;

pub use board::{EMPTY_SYMBOL, Grid, GridSnapshot};
pub use events::TileEvent;

use std::fmt;

/// Error type for malformed grid layouts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    Empty,
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    BadSymbol {
        row: usize,
        col: usize,
        symbol: char,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Grid layout must have at least one row and one column"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "Grid row {row} has {found} cells, expected {expected}"
            ),
            Self::BadSymbol { row, col, symbol } => {
                write!(f, "Unsupported symbol '{symbol}' at ({row}, {col})")
            }
        }
    }
}

impl std::error::Error for GridError {}
