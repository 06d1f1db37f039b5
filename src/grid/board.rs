//! Tile placement, gravity and column collapse

use super::{GridError, TileEvent};
use crate::core::{Letter, Tile, TileId, TileState};
use crate::letters::LetterSource;
use std::fmt;

/// Symbol for an empty cell in text layouts
pub const EMPTY_SYMBOL: char = '.';

/// A `rows × cols` board of letter tiles
///
/// Tiles live in an arena indexed by [`TileId`]; each cell holds the id of
/// the live tile occupying it. Popped tiles stay in the arena (state
/// `Popped`, no cell) so renderers can still look them up.
///
/// Invariants:
/// - no two live tiles occupy the same cell
/// - every live tile's stored position matches the cell holding its id
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Option<TileId>>,
    tiles: Vec<Tile>,
    events: Vec<TileEvent>,
}

/// Saved grid state for single-level undo
#[derive(Debug, Clone)]
pub struct GridSnapshot {
    cells: Vec<Option<TileId>>,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Create a full grid, drawing letters top-to-bottom, left-to-right
    ///
    /// # Examples
    /// ```
    /// use word_popper::grid::Grid;
    /// use word_popper::letters::LetterSource;
    ///
    /// let grid = Grid::new(10, 7, &mut LetterSource::from_seed(1));
    /// assert_eq!(grid.live_count(), 70);
    /// ```
    #[must_use]
    pub fn new(rows: usize, cols: usize, source: &mut LetterSource) -> Self {
        let mut grid = Self::empty(rows, cols);
        for row in 0..rows {
            for col in 0..cols {
                grid.place(source.next_letter(), row, col);
            }
        }
        grid
    }

    /// Build a grid from text rows: letters, `*` for a wildcard, `.` for empty
    ///
    /// Tiles are placed exactly as given; no gravity is applied.
    ///
    /// # Errors
    /// Returns `GridError` if the layout is empty, ragged, or contains an
    /// unsupported symbol.
    ///
    /// # Examples
    /// ```
    /// use word_popper::grid::Grid;
    ///
    /// let grid = Grid::from_layout(&["c.", "at"]).unwrap();
    /// assert_eq!(grid.live_count(), 3);
    /// assert!(grid.tile_at(0, 1).is_none());
    /// ```
    pub fn from_layout(layout: &[&str]) -> Result<Self, GridError> {
        let cols = layout.first().map_or(0, |row| row.chars().count());
        if layout.is_empty() || cols == 0 {
            return Err(GridError::Empty);
        }

        let mut grid = Self::empty(layout.len(), cols);
        for (row, text) in layout.iter().enumerate() {
            let found = text.chars().count();
            if found != cols {
                return Err(GridError::Ragged {
                    row,
                    expected: cols,
                    found,
                });
            }
            for (col, symbol) in text.chars().enumerate() {
                if symbol == EMPTY_SYMBOL {
                    continue;
                }
                let letter = Letter::from_char(symbol)
                    .map_err(|_| GridError::BadSymbol { row, col, symbol })?;
                grid.place(letter, row, col);
            }
        }
        Ok(grid)
    }

    fn empty(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
            tiles: Vec::with_capacity(rows * cols),
            events: Vec::new(),
        }
    }

    fn place(&mut self, letter: Letter, row: usize, col: usize) {
        let id = TileId(self.tiles.len());
        self.tiles.push(Tile::new(id, letter, row, col));
        let idx = self.index(row, col);
        self.cells[idx] = Some(id);
        self.events.push(TileEvent::Placed {
            id,
            row,
            col,
            letter,
        });
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) is outside the {}x{} grid",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    /// The live tile at `(row, col)`, if any (out-of-range cells are empty)
    #[must_use]
    pub fn tile_at(&self, row: usize, col: usize) -> Option<&Tile> {
        self.id_at(row, col).map(|id| &self.tiles[id.0])
    }

    /// Id of the live tile at `(row, col)`, if any
    #[must_use]
    pub fn id_at(&self, row: usize, col: usize) -> Option<TileId> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells[row * self.cols + col]
    }

    /// Look up any tile ever placed in this grid, live or popped
    #[must_use]
    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.0)
    }

    /// Look up a live tile
    ///
    /// # Panics
    /// Panics if the grid does not track `id` as a live tile.
    #[must_use]
    pub fn tile(&self, id: TileId) -> &Tile {
        let tile = self
            .tiles
            .get(id.0)
            .unwrap_or_else(|| panic!("tile {id} does not belong to this grid"));
        assert!(tile.is_live(), "tile {id} has already been popped");
        assert_eq!(
            self.cells[self.index(tile.row(), tile.col())],
            Some(id),
            "tile {id} is out of sync with cell ({}, {})",
            tile.row(),
            tile.col()
        );
        tile
    }

    /// Move a live tile to an empty cell, keeping its stored position in sync
    ///
    /// # Panics
    /// Panics if `id` is not a live tile of this grid, if the destination is
    /// outside the grid, or if the destination is occupied.
    pub fn move_tile(&mut self, id: TileId, new_row: usize, new_col: usize) {
        let (row, col) = self.tile(id).position();
        if (row, col) == (new_row, new_col) {
            return;
        }
        let from = self.index(row, col);
        let to = self.index(new_row, new_col);
        assert!(
            self.cells[to].is_none(),
            "cannot move tile {id} onto occupied cell ({new_row}, {new_col})"
        );

        self.cells[from] = None;
        self.cells[to] = Some(id);
        self.tiles[id.0].set_position(new_row, new_col);
        self.events.push(TileEvent::Moved {
            id,
            row: new_row,
            col: new_col,
        });
    }

    /// Pop a tile and let the tiles above it fall
    ///
    /// The whole column is compacted toward the bottom row, preserving the
    /// order of the remaining tiles; empty cells along the way do not stop
    /// the scan. Returns how many tiles moved.
    ///
    /// # Panics
    /// Panics if `id` is not a live tile of this grid.
    pub fn remove_tile(&mut self, id: TileId) -> usize {
        let (row, col) = self.tile(id).position();
        let idx = self.index(row, col);
        self.cells[idx] = None;
        self.tiles[id.0].set_state(TileState::Popped);
        self.events.push(TileEvent::Popped { id, row, col });

        self.apply_gravity(col)
    }

    fn apply_gravity(&mut self, col: usize) -> usize {
        let mut shifted = 0;
        let mut target = self.rows;
        for row in (0..self.rows).rev() {
            if let Some(id) = self.id_at(row, col) {
                target -= 1;
                if target != row {
                    self.move_tile(id, target, col);
                    shifted += 1;
                }
            }
        }
        shifted
    }

    /// Pop a batch of tiles, in order, collapsing any column they empty
    ///
    /// Each removal applies gravity immediately. When a tile removed from the
    /// bottom row caused no gravity shift and its column is now empty, the
    /// columns to its right slide one position left. Because gravity keeps
    /// every column compact, the last tile removed from a column always sits
    /// on the bottom row with nothing above it, so a cleared column collapses
    /// whatever order the batch is in. Returns the number of collapsed columns.
    ///
    /// # Panics
    /// Panics if any id is not a live tile of this grid.
    pub fn remove_tiles(&mut self, ids: &[TileId]) -> usize {
        let mut collapsed = 0;
        for &id in ids {
            let (row, col) = self.tile(id).position();
            let shifted = self.remove_tile(id);
            if row + 1 == self.rows && shifted == 0 && self.column_is_empty(col) {
                self.collapse_column(col);
                collapsed += 1;
            }
        }
        collapsed
    }

    fn collapse_column(&mut self, col: usize) {
        for c in col + 1..self.cols {
            for row in 0..self.rows {
                if let Some(id) = self.id_at(row, c) {
                    self.move_tile(id, row, c - 1);
                }
            }
        }
        self.events.push(TileEvent::ColumnCollapsed { col });
    }

    /// Turn a tile into a wildcard in place
    ///
    /// # Panics
    /// Panics if `id` is not a live tile of this grid.
    pub fn make_wild(&mut self, id: TileId) {
        let _ = self.tile(id);
        self.tiles[id.0].make_wild();
        self.events.push(TileEvent::Wild(id));
    }

    pub(crate) fn set_selected(&mut self, id: TileId, selected: bool) {
        let _ = self.tile(id);
        if selected {
            self.tiles[id.0].set_state(TileState::Selected);
            self.events.push(TileEvent::Selected(id));
        } else {
            self.tiles[id.0].set_state(TileState::Normal);
            self.events.push(TileEvent::Unselected(id));
        }
    }

    #[must_use]
    pub fn column_is_empty(&self, col: usize) -> bool {
        (0..self.rows).all(|row| self.id_at(row, col).is_none())
    }

    /// Live tiles in row-major order
    pub fn live_tiles(&self) -> impl Iterator<Item = &Tile> {
        self.cells.iter().flatten().map(|id| &self.tiles[id.0])
    }

    #[must_use]
    pub fn live_count(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live_count() == 0
    }

    /// Save the current tile placement
    #[must_use]
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            cells: self.cells.clone(),
            tiles: self.tiles.clone(),
        }
    }

    /// Return to a saved placement
    ///
    /// # Panics
    /// Panics if the snapshot was taken from a grid of another size.
    pub fn restore(&mut self, snapshot: GridSnapshot) {
        assert_eq!(
            snapshot.cells.len(),
            self.cells.len(),
            "snapshot does not fit this grid"
        );
        self.cells = snapshot.cells;
        self.tiles = snapshot.tiles;
        self.events.push(TileEvent::Restored);
    }

    /// Take all queued renderer events
    pub fn drain_events(&mut self) -> Vec<TileEvent> {
        std::mem::take(&mut self.events)
    }

    /// Lowercase text rows in layout format (`*` wildcard, `.` empty)
    #[must_use]
    pub fn layout(&self) -> Vec<String> {
        (0..self.rows)
            .map(|row| {
                (0..self.cols)
                    .map(|col| {
                        self.tile_at(row, col)
                            .map_or(EMPTY_SYMBOL, |t| t.letter().symbol())
                    })
                    .collect()
            })
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.layout() {
            writeln!(f, "{}", line.to_uppercase())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(layout: &[&str]) -> Grid {
        Grid::from_layout(layout).unwrap()
    }

    fn id(grid: &Grid, row: usize, col: usize) -> TileId {
        grid.id_at(row, col).unwrap()
    }

    /// No column may have an empty cell below an occupied one
    fn assert_compact(grid: &Grid) {
        for col in 0..grid.cols() {
            let mut seen_tile = false;
            for row in 0..grid.rows() {
                match grid.tile_at(row, col) {
                    Some(_) => seen_tile = true,
                    None => assert!(!seen_tile, "gap at ({row}, {col}) below a tile"),
                }
            }
        }
    }

    fn assert_positions_in_sync(grid: &Grid) {
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                if let Some(tile) = grid.tile_at(row, col) {
                    assert_eq!(tile.position(), (row, col));
                }
            }
        }
    }

    #[test]
    fn new_fills_every_cell_in_reading_order() {
        let grid = Grid::new(4, 3, &mut LetterSource::from_seed(5));
        let expected: Vec<Letter> = LetterSource::from_seed(5).take(12).collect();
        let actual: Vec<Letter> = grid.live_tiles().map(Tile::letter).collect();
        assert_eq!(actual, expected);
        assert_eq!(grid.tile_at(0, 1).unwrap().id().index(), 1);
        assert_eq!(grid.tile_at(1, 0).unwrap().id().index(), 3);
    }

    #[test]
    fn layout_errors() {
        assert_eq!(Grid::from_layout(&[]).unwrap_err(), GridError::Empty);
        assert_eq!(
            Grid::from_layout(&["ab", "c"]).unwrap_err(),
            GridError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            }
        );
        assert_eq!(
            Grid::from_layout(&["a3"]).unwrap_err(),
            GridError::BadSymbol {
                row: 0,
                col: 1,
                symbol: '3'
            }
        );
    }

    #[test]
    fn layout_round_trips_through_text() {
        let g = grid(&["ab*", "c.d"]);
        assert_eq!(g.layout(), vec!["ab*", "c.d"]);
        assert_eq!(format!("{g}"), "AB*\nC.D\n");
    }

    #[test]
    fn tile_at_out_of_range_is_none() {
        let g = grid(&["ab"]);
        assert!(g.tile_at(0, 5).is_none());
        assert!(g.tile_at(3, 0).is_none());
    }

    #[test]
    fn move_tile_updates_cell_and_tile() {
        let mut g = grid(&["a.", ".."]);
        let a = id(&g, 0, 0);
        g.move_tile(a, 1, 1);
        assert!(g.tile_at(0, 0).is_none());
        assert_eq!(g.tile(a).position(), (1, 1));
        assert_eq!(g.id_at(1, 1), Some(a));
    }

    #[test]
    #[should_panic(expected = "occupied")]
    fn move_onto_occupied_cell_panics() {
        let mut g = grid(&["ab"]);
        let a = id(&g, 0, 0);
        g.move_tile(a, 0, 1);
    }

    #[test]
    #[should_panic(expected = "popped")]
    fn operating_on_popped_tile_panics() {
        let mut g = grid(&["a", "b"]);
        let b = id(&g, 1, 0);
        g.remove_tile(b);
        g.remove_tile(b);
    }

    #[test]
    #[should_panic(expected = "does not belong")]
    fn foreign_tile_panics() {
        let mut g = grid(&["a"]);
        g.make_wild(TileId(9));
    }

    #[test]
    fn gravity_drops_tiles_above() {
        let mut g = grid(&["a", "b", "c", "d"]);
        let c = id(&g, 2, 0);
        let shifted = g.remove_tile(c);
        assert_eq!(shifted, 2);
        assert_eq!(g.layout(), vec![".", "a", "b", "d"]);
        assert_compact(&g);
        assert_positions_in_sync(&g);
    }

    #[test]
    fn gravity_does_not_stop_at_gaps() {
        // floating tile above a gap still lands
        let mut g = grid(&["x", ".", "y", "z"]);
        let y = id(&g, 2, 0);
        g.remove_tile(y);
        assert_eq!(g.layout(), vec![".", ".", "x", "z"]);
        assert_compact(&g);
    }

    #[test]
    fn removing_top_tile_moves_nothing() {
        let mut g = grid(&["a", "b"]);
        let a = id(&g, 0, 0);
        assert_eq!(g.remove_tile(a), 0);
        assert_eq!(g.layout(), vec![".", "b"]);
    }

    #[test]
    fn popped_tile_stays_in_arena() {
        let mut g = grid(&["a"]);
        let a = id(&g, 0, 0);
        g.remove_tile(a);
        assert_eq!(g.get(a).unwrap().state(), TileState::Popped);
        assert!(g.is_empty());
    }

    #[test]
    fn batch_removal_in_one_column_leaves_no_gap() {
        let mut g = grid(&["ab", "cd", "ef", "gh"]);
        let ids = [id(&g, 1, 0), id(&g, 2, 0)];
        g.remove_tiles(&ids);
        assert_eq!(g.layout(), vec![".b", ".d", "af", "gh"]);
        assert_compact(&g);
        assert_positions_in_sync(&g);
    }

    #[test]
    fn clearing_a_column_bottom_up_collapses_it() {
        let mut g = grid(&["cxy", "axy", "txy"]);
        let ids = [id(&g, 2, 0), id(&g, 1, 0), id(&g, 0, 0)];
        let collapsed = g.remove_tiles(&ids);
        assert_eq!(collapsed, 1);
        assert_eq!(g.layout(), vec!["xy.", "xy.", "xy."]);
        assert_positions_in_sync(&g);
    }

    #[test]
    fn clearing_a_column_top_down_collapses_it() {
        let mut g = grid(&["cxy", "axy", "txy"]);
        let ids = [id(&g, 0, 0), id(&g, 1, 0), id(&g, 2, 0)];
        assert_eq!(g.remove_tiles(&ids), 1);
        assert_eq!(g.layout(), vec!["xy.", "xy.", "xy."]);
    }

    #[test]
    fn clearing_last_column_has_nothing_to_shift() {
        let mut g = grid(&["xc", "xa", "xt"]);
        let ids = [id(&g, 2, 1), id(&g, 1, 1), id(&g, 0, 1)];
        assert_eq!(g.remove_tiles(&ids), 1);
        assert_eq!(g.layout(), vec!["x.", "x.", "x."]);
    }

    #[test]
    fn partial_column_removal_does_not_collapse() {
        let mut g = grid(&["ax", "bx"]);
        let b = id(&g, 1, 0);
        assert_eq!(g.remove_tiles(&[b]), 0);
        assert_eq!(g.layout(), vec![".x", "ax"]);
    }

    #[test]
    fn collapse_moves_ragged_columns() {
        let mut g = grid(&["..c", ".bd", "aef"]);
        let a = id(&g, 2, 0);
        assert_eq!(g.remove_tiles(&[a]), 1);
        assert_eq!(g.layout(), vec![".c.", "bd.", "ef."]);
        assert_compact(&g);
        assert_positions_in_sync(&g);
    }

    #[test]
    fn make_wild_changes_letter_and_score() {
        let mut g = grid(&["q"]);
        let q = id(&g, 0, 0);
        g.make_wild(q);
        assert_eq!(g.tile(q).letter(), Letter::Wild);
        assert_eq!(g.tile(q).score(), 0);
    }

    #[test]
    fn snapshot_restores_placement() {
        let mut g = grid(&["ab", "cd"]);
        let snap = g.snapshot();
        let c = id(&g, 1, 0);
        g.remove_tiles(&[c]);
        g.make_wild(id(&g, 0, 1));
        g.restore(snap);
        assert_eq!(g.layout(), vec!["ab", "cd"]);
        assert_eq!(g.tile(c).state(), TileState::Normal);
    }

    #[test]
    fn events_describe_changes() {
        let mut g = grid(&["a", "b"]);
        assert_eq!(g.drain_events().len(), 2);
        let a = id(&g, 0, 0);
        let b = id(&g, 1, 0);
        g.remove_tile(b);
        assert_eq!(
            g.drain_events(),
            vec![
                TileEvent::Popped {
                    id: b,
                    row: 1,
                    col: 0
                },
                TileEvent::Moved {
                    id: a,
                    row: 1,
                    col: 0
                },
            ]
        );
        assert!(g.drain_events().is_empty());
    }

    #[test]
    fn random_removals_keep_invariants() {
        let mut g = Grid::new(6, 5, &mut LetterSource::from_seed(11));
        let mut picker = LetterSource::from_seed(12);
        while !g.is_empty() {
            let live: Vec<TileId> = g.live_tiles().map(Tile::id).collect();
            // use letter draws as a cheap deterministic index stream
            let pick = picker.next_letter().symbol() as usize % live.len();
            g.remove_tiles(&[live[pick]]);
            assert_compact(&g);
            assert_positions_in_sync(&g);
            // occupied columns stay packed to the left
            let first_empty = (0..g.cols()).find(|&c| g.column_is_empty(c));
            if let Some(c) = first_empty {
                assert!((c..g.cols()).all(|c| g.column_is_empty(c)));
            }
        }
    }
}
