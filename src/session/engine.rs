//! One game in progress
//!
//! [`Session`] ties a [`Grid`] to a [`Lexicon`] and drives it from discrete
//! input: pointer events, a clock for long-press detection, and direct calls
//! for line-oriented front ends. All transitions are synchronous; a commit
//! resolves fully before the next selection can start.

use super::{Point, PressTimer, Selection, TileGeometry};
use crate::config::{ConfigError, GameConfig};
use crate::core::{Letter, Tile, TileId, score_tiles, spell};
use crate::grid::{Grid, GridSnapshot, TileEvent};
use crate::lexicon::Lexicon;
use log::{debug, info, trace, warn};
use std::time::{Duration, Instant};

/// Whether a pointer gesture is in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Selecting,
}

/// A successfully committed word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundWord {
    /// Lexicon word the selection resolved to
    pub word: String,
    /// Letters as selected, with `*` for wildcards
    pub letters: String,
    /// Popped tiles in selection order
    pub tiles: Vec<TileId>,
    pub score: u32,
}

#[derive(Debug, Clone)]
struct UndoPoint {
    grid: GridSnapshot,
    hints: u32,
}

/// Game session state machine
#[derive(Debug, Clone)]
pub struct Session<'a> {
    lexicon: &'a Lexicon,
    grid: Grid,
    geometry: TileGeometry,
    selection: Selection,
    state: SessionState,
    press: PressTimer,
    long_press: Duration,
    press_slop: f64,
    hints: u32,
    score: u32,
    found: Vec<FoundWord>,
    log: Vec<String>,
    undo: Option<UndoPoint>,
}

impl<'a> Session<'a> {
    /// Start a game with a freshly drawn board
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration is invalid.
    ///
    /// # Examples
    /// ```
    /// use word_popper::config::GameConfig;
    /// use word_popper::lexicon::Lexicon;
    /// use word_popper::session::Session;
    ///
    /// let lexicon = Lexicon::embedded();
    /// let config = GameConfig::default().with_seed("2026-10-19");
    /// let session = Session::new(&config, &lexicon).unwrap();
    /// assert_eq!(session.grid().live_count(), 70);
    /// assert_eq!(session.hints(), 3);
    /// ```
    pub fn new(config: &GameConfig, lexicon: &'a Lexicon) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = Grid::new(config.rows, config.cols, &mut config.letter_source());
        info!(
            "New {}x{} game (seed: {})",
            config.rows,
            config.cols,
            config.seed.as_deref().unwrap_or("random")
        );
        Self::with_grid(grid, config, lexicon)
    }

    /// Start a game on a prepared board; the board size in `config` is ignored
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the hint or long-press settings are invalid.
    pub fn with_grid(
        grid: Grid,
        config: &GameConfig,
        lexicon: &'a Lexicon,
    ) -> Result<Self, ConfigError> {
        config
            .clone()
            .with_size(grid.rows(), grid.cols())
            .validate()?;
        Ok(Self {
            lexicon,
            grid,
            geometry: TileGeometry::default(),
            selection: Selection::new(),
            state: SessionState::Idle,
            press: PressTimer::new(),
            long_press: config.long_press,
            press_slop: config.press_slop,
            hints: config.hints,
            score: 0,
            found: Vec::new(),
            log: Vec::new(),
            undo: None,
        })
    }

    /// Use a different screen layout for pointer hit-testing
    #[must_use]
    pub const fn with_geometry(mut self, geometry: TileGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub const fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    #[must_use]
    pub const fn geometry(&self) -> &TileGeometry {
        &self.geometry
    }

    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Wildcard conversions left
    #[must_use]
    pub const fn hints(&self) -> u32 {
        self.hints
    }

    /// Running total score
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Words committed so far, oldest first
    #[must_use]
    pub fn found(&self) -> &[FoundWord] {
        &self.found
    }

    /// Human-readable event log, oldest first
    #[must_use]
    pub fn log(&self) -> &[String] {
        &self.log
    }

    #[must_use]
    pub const fn can_undo(&self) -> bool {
        self.undo.is_some()
    }

    /// When a pending long-press will fire, if one is armed
    #[must_use]
    pub fn press_deadline(&self) -> Option<Instant> {
        self.press.deadline()
    }

    /// The game ends once every tile has been popped
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.grid.is_empty()
    }

    /// Take all queued renderer events
    pub fn drain_events(&mut self) -> Vec<TileEvent> {
        self.grid.drain_events()
    }

    /// Add `id` to the selection
    ///
    /// Duplicates and tiles not adjacent to the last selected tile are
    /// silently rejected. Returns whether the tile was added.
    ///
    /// # Panics
    /// Panics if `id` is not a live tile of this session's grid.
    pub fn select(&mut self, id: TileId) -> bool {
        if !self.selection.try_extend(id, &self.grid) {
            trace!("Rejected tile {id}");
            return false;
        }
        self.grid.set_selected(id, true);
        self.state = SessionState::Selecting;
        true
    }

    /// Letters of the selected tiles in selection order
    #[must_use]
    pub fn selected_letters(&self) -> Vec<Letter> {
        self.selection
            .tiles()
            .iter()
            .map(|&id| self.grid.tile(id).letter())
            .collect()
    }

    /// The selection spelled out, wildcards as `*`
    #[must_use]
    pub fn current_word(&self) -> String {
        spell(&self.selected_letters())
    }

    /// Uppercase preview of the live selection, blank when idle
    #[must_use]
    pub fn word_preview(&self) -> String {
        self.current_word().to_uppercase()
    }

    /// Resolve the selection against the lexicon and pop it if it is a word
    ///
    /// The selection is always cleared afterwards. Scoring uses the tiles as
    /// selected, so wildcards contribute nothing even though they stand in
    /// for a letter.
    pub fn commit(&mut self) -> Option<FoundWord> {
        let letters = self.selected_letters();
        let found = self
            .lexicon
            .resolve(&letters)
            .map(str::to_owned)
            .map(|word| {
                let tiles = self.selection.take();
                let score = score_tiles(tiles.iter().map(|&id| self.grid.tile(id)));
                let collapsed = self.grid.remove_tiles(&tiles);
                debug!(
                    "Popped {} tiles for {word}, {collapsed} columns collapsed",
                    tiles.len()
                );
                FoundWord {
                    word,
                    letters: spell(&letters),
                    tiles,
                    score,
                }
            });

        if let Some(found) = &found {
            self.score += found.score;
            self.log
                .push(format!("Found {} ({})", found.word.to_uppercase(), found.score));
            self.found.push(found.clone());
            self.undo = None;
        } else if !letters.is_empty() {
            trace!("{} is not a word", spell(&letters));
        }
        self.cancel();
        found
    }

    /// Drop the selection without scoring
    pub fn cancel(&mut self) {
        for id in self.selection.take() {
            if self.grid.get(id).is_some_and(Tile::is_live) {
                self.grid.set_selected(id, false);
            }
        }
        self.state = SessionState::Idle;
        self.press.cancel();
    }

    /// Select each tile of `path` in order and commit
    ///
    /// Returns `None`, with the selection cleared, if any step is rejected
    /// or the path is not a word.
    pub fn play_path(&mut self, path: &[TileId]) -> Option<FoundWord> {
        self.cancel();
        for &id in path {
            if !self.grid.get(id).is_some_and(Tile::is_live) || !self.select(id) {
                self.cancel();
                return None;
            }
        }
        self.commit()
    }

    /// Spend a hint turning `id` into a wildcard
    ///
    /// Ends any selection in progress. Refused (returning `false`) when the
    /// hint budget is exhausted or the tile is already wild. The previous
    /// board and hint count are kept for [`Session::undo`].
    ///
    /// # Panics
    /// Panics if `id` is not a live tile of this session's grid.
    pub fn make_wild(&mut self, id: TileId) -> bool {
        let letter = self.grid.tile(id).letter();
        if self.hints == 0 {
            warn!("No hints left, {letter} stays as it is");
            return false;
        }
        if letter.is_wild() {
            return false;
        }

        self.cancel();
        self.undo = Some(UndoPoint {
            grid: self.grid.snapshot(),
            hints: self.hints,
        });
        self.hints -= 1;
        self.grid.make_wild(id);
        self.log
            .push(format!("Turned {letter} wild ({} hints left)", self.hints));
        debug!("Tile {id} is now wild");
        true
    }

    /// Revert the most recent wildcard conversion
    ///
    /// Only one level is kept, and a committed word discards it.
    pub fn undo(&mut self) -> bool {
        let Some(point) = self.undo.take() else {
            return false;
        };
        self.cancel();
        self.grid.restore(point.grid);
        self.hints = point.hints;
        self.log
            .push(format!("Undid wildcard ({} hints left)", self.hints));
        true
    }

    /// Pointer pressed on `id` at `point`: start a new selection and time the press
    pub fn pointer_down(&mut self, id: TileId, point: Point, now: Instant) {
        self.cancel();
        if self.select(id) {
            self.press.arm(id, point, now, self.long_press);
        }
    }

    /// Pointer pressed at a screen position; returns whether it hit a tile
    pub fn pointer_down_at(&mut self, point: Point, now: Instant) -> bool {
        let hit = self
            .geometry
            .cell_at(point)
            .and_then(|(row, col)| self.grid.id_at(row, col));
        match hit {
            Some(id) => {
                self.pointer_down(id, point, now);
                true
            }
            None => false,
        }
    }

    /// Pointer dragged to `point`: extend the selection with a tile close to it
    pub fn pointer_move(&mut self, point: Point, now: Instant) {
        self.tick(now);
        if self.state != SessionState::Selecting {
            return;
        }
        self.press.moved(point, self.press_slop);
        if let Some((row, col)) = self.geometry.close_cell_at(point)
            && let Some(id) = self.grid.id_at(row, col)
        {
            self.select(id);
        }
    }

    /// Pointer released: commit the gesture
    pub fn pointer_up(&mut self, now: Instant) -> Option<FoundWord> {
        self.tick(now);
        self.press.cancel();
        if self.state == SessionState::Selecting {
            self.commit()
        } else {
            None
        }
    }

    /// Advance the clock; fires a due long-press
    ///
    /// The press converts its tile only while that tile is still the whole
    /// selection. Returns whether a tile was turned wild.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(id) = self.press.poll(now) else {
            return false;
        };
        if self.state != SessionState::Selecting || self.selection.tiles() != [id] {
            return false;
        }
        self.cancel();
        self.make_wild(id)
    }
}
