//! The in-progress selection path

use crate::core::TileId;
use crate::grid::Grid;

/// Ordered, duplicate-free path of selected tiles
///
/// Every tile after the first is within Chebyshev distance 1 of the tile
/// selected just before it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    tiles: Vec<TileId>,
}

impl Selection {
    #[must_use]
    pub const fn new() -> Self {
        Self { tiles: Vec::new() }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: TileId) -> bool {
        self.tiles.contains(&id)
    }

    #[must_use]
    pub fn first(&self) -> Option<TileId> {
        self.tiles.first().copied()
    }

    #[must_use]
    pub fn last(&self) -> Option<TileId> {
        self.tiles.last().copied()
    }

    /// Selected tiles in selection order
    #[must_use]
    pub fn tiles(&self) -> &[TileId] {
        &self.tiles
    }

    /// Append `id` if it is new and adjacent to the last tile
    ///
    /// Returns `false`, leaving the selection untouched, for a duplicate or a
    /// non-adjacent tile.
    ///
    /// # Panics
    /// Panics if `id` (or the last selected tile) is not a live tile of `grid`.
    pub fn try_extend(&mut self, id: TileId, grid: &Grid) -> bool {
        if self.contains(id) {
            return false;
        }
        let candidate = grid.tile(id);
        if let Some(last) = self.last()
            && !grid.tile(last).is_adjacent(candidate)
        {
            return false;
        }
        self.tiles.push(id);
        true
    }

    /// Empty the selection, returning what it held
    pub fn take(&mut self) -> Vec<TileId> {
        std::mem::take(&mut self.tiles)
    }
}
