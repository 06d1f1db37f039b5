//! Letter tiles
//!
//! A tile is a single letter cell. It has no behavior beyond identity and
//! attribute updates; the grid owns every tile and keeps its stored position
//! in sync with the cell it occupies.

use super::Letter;
use std::fmt;

/// Stable identifier of a tile within one grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub(crate) usize);

impl TileId {
    /// Index of the tile in its grid's arena
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Visual state of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileState {
    #[default]
    Normal,
    Selected,
    Popped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    id: TileId,
    row: usize,
    col: usize,
    letter: Letter,
    score: u32,
    state: TileState,
}

impl Tile {
    pub(crate) const fn new(id: TileId, letter: Letter, row: usize, col: usize) -> Self {
        Self {
            id,
            row,
            col,
            letter,
            score: letter.score(),
            state: TileState::Normal,
        }
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> TileId {
        self.id
    }

    #[inline]
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    #[inline]
    #[must_use]
    pub const fn col(&self) -> usize {
        self.col
    }

    /// `(row, col)` of the cell this tile occupies
    #[inline]
    #[must_use]
    pub const fn position(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    #[inline]
    #[must_use]
    pub const fn letter(&self) -> Letter {
        self.letter
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> TileState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn is_live(&self) -> bool {
        !matches!(self.state, TileState::Popped)
    }

    /// Is `other` within Chebyshev distance 1 of this tile?
    #[must_use]
    pub const fn is_adjacent(&self, other: &Self) -> bool {
        is_adjacent(self.position(), other.position())
    }

    pub(crate) const fn set_position(&mut self, row: usize, col: usize) {
        self.row = row;
        self.col = col;
    }

    pub(crate) const fn set_state(&mut self, state: TileState) {
        self.state = state;
    }

    /// Turn this tile into a wildcard (letter and score)
    pub(crate) const fn make_wild(&mut self) {
        self.letter = Letter::Wild;
        self.score = Letter::Wild.score();
    }
}

/// Chebyshev adjacency: row and column each differ by at most one
///
/// # Examples
/// ```
/// use word_popper::core::is_adjacent;
///
/// assert!(is_adjacent((1, 1), (2, 2)));
/// assert!(is_adjacent((1, 1), (0, 1)));
/// assert!(!is_adjacent((1, 1), (3, 1)));
/// ```
#[must_use]
pub const fn is_adjacent(a: (usize, usize), b: (usize, usize)) -> bool {
    a.0.abs_diff(b.0) <= 1 && a.1.abs_diff(b.1) <= 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tile_takes_letter_score() {
        let tile = Tile::new(TileId(0), Letter::Plain('q'), 2, 3);
        assert_eq!(tile.score(), 10);
        assert_eq!(tile.position(), (2, 3));
        assert_eq!(tile.state(), TileState::Normal);
        assert!(tile.is_live());
    }

    #[test]
    fn make_wild_resets_score() {
        let mut tile = Tile::new(TileId(4), Letter::Plain('z'), 0, 0);
        tile.make_wild();
        assert_eq!(tile.letter(), Letter::Wild);
        assert_eq!(tile.score(), 0);
    }

    #[test]
    fn adjacency_is_chebyshev() {
        let center = Tile::new(TileId(0), Letter::Plain('a'), 5, 5);
        for (row, col) in [(4, 4), (4, 5), (4, 6), (5, 4), (5, 6), (6, 4), (6, 5), (6, 6)] {
            let other = Tile::new(TileId(1), Letter::Plain('b'), row, col);
            assert!(center.is_adjacent(&other), "({row},{col}) should be adjacent");
        }
        let far = Tile::new(TileId(2), Letter::Plain('c'), 7, 5);
        assert!(!center.is_adjacent(&far));
        let far_col = Tile::new(TileId(3), Letter::Plain('d'), 5, 3);
        assert!(!center.is_adjacent(&far_col));
    }

    #[test]
    fn popped_tile_is_not_live() {
        let mut tile = Tile::new(TileId(0), Letter::Plain('a'), 0, 0);
        tile.set_state(TileState::Popped);
        assert!(!tile.is_live());
    }
}
