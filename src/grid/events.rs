//! Renderer notifications
//!
//! The grid never draws anything. Every visible change is queued as a
//! `TileEvent`; the renderer drains the queue after each input event and
//! updates its own representation.

use crate::core::{Letter, TileId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileEvent {
    /// A new tile was created in a cell
    Placed {
        id: TileId,
        row: usize,
        col: usize,
        letter: Letter,
    },
    /// A tile now occupies a different cell (gravity or column collapse)
    Moved { id: TileId, row: usize, col: usize },
    Selected(TileId),
    Unselected(TileId),
    /// A tile left the grid from the given cell
    Popped { id: TileId, row: usize, col: usize },
    /// A tile became a wildcard
    Wild(TileId),
    /// An emptied column was removed and columns to its right shifted left
    ColumnCollapsed { col: usize },
    /// The whole grid was replaced by a snapshot; redraw everything
    Restored,
}
